use super::Entity;
use super::values::{format_date_time, parse_bool, parse_date_time, text};
use crate::domain::validation::{FieldKey, FieldValues, InputKind, Pattern, Rule};
use crate::domain::value_objects::{EntityKind, NumericId};
use crate::shared::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub id: NumericId,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestDraft {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecommendationRequestField {
    RequesterEmail,
    ProfessorEmail,
    Explanation,
    DateRequested,
    DateNeeded,
    Done,
}

const REQUESTER_EMAIL_RULES: &[Rule] = &[
    Rule::required("requesterEmail is required."),
    Rule::pattern(
        Pattern::Email,
        "requesterEmail must be in the format <username>@<domain>.<com>",
    ),
];
const PROFESSOR_EMAIL_RULES: &[Rule] = &[
    Rule::required("professorEmail is required."),
    Rule::pattern(
        Pattern::Email,
        "professorEmail must be in the format <username>@<domain>.<com>",
    ),
];
const EXPLANATION_RULES: &[Rule] = &[Rule::required("Explanation is required")];
const DATE_REQUESTED_RULES: &[Rule] = &[
    Rule::required("Local date time in ISO format required."),
    Rule::pattern(
        Pattern::IsoDateTime,
        "dateRequested must be in ISO format, e.g. 2024-10-31T12:37",
    ),
];
const DATE_NEEDED_RULES: &[Rule] = &[
    Rule::required("Local date time in ISO format required."),
    Rule::pattern(
        Pattern::IsoDateTime,
        "dateNeeded must be in ISO format, e.g. 2024-11-07T12:37",
    ),
];

impl FieldKey for RecommendationRequestField {
    const ALL: &'static [Self] = &[
        RecommendationRequestField::RequesterEmail,
        RecommendationRequestField::ProfessorEmail,
        RecommendationRequestField::Explanation,
        RecommendationRequestField::DateRequested,
        RecommendationRequestField::DateNeeded,
        RecommendationRequestField::Done,
    ];

    fn name(self) -> &'static str {
        match self {
            RecommendationRequestField::RequesterEmail => "requesterEmail",
            RecommendationRequestField::ProfessorEmail => "professorEmail",
            RecommendationRequestField::Explanation => "explanation",
            RecommendationRequestField::DateRequested => "dateRequested",
            RecommendationRequestField::DateNeeded => "dateNeeded",
            RecommendationRequestField::Done => "done",
        }
    }

    fn label(self) -> &'static str {
        match self {
            RecommendationRequestField::RequesterEmail => "Requester Email",
            RecommendationRequestField::ProfessorEmail => "Professor Email",
            RecommendationRequestField::Explanation => "Explanation",
            RecommendationRequestField::DateRequested => "Date Requested (iso format)",
            RecommendationRequestField::DateNeeded => "Date Needed (iso format)",
            RecommendationRequestField::Done => "Done",
        }
    }

    fn input(self) -> InputKind {
        match self {
            RecommendationRequestField::DateRequested | RecommendationRequestField::DateNeeded => {
                InputKind::DateTimeLocal
            }
            RecommendationRequestField::Done => InputKind::Checkbox,
            _ => InputKind::Text,
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            RecommendationRequestField::RequesterEmail => REQUESTER_EMAIL_RULES,
            RecommendationRequestField::ProfessorEmail => PROFESSOR_EMAIL_RULES,
            RecommendationRequestField::Explanation => EXPLANATION_RULES,
            RecommendationRequestField::DateRequested => DATE_REQUESTED_RULES,
            RecommendationRequestField::DateNeeded => DATE_NEEDED_RULES,
            RecommendationRequestField::Done => &[],
        }
    }
}

impl Entity for RecommendationRequest {
    type Key = NumericId;
    type Field = RecommendationRequestField;
    type Draft = RecommendationRequestDraft;
    type Changes = RecommendationRequestDraft;

    const KIND: EntityKind = EntityKind::RecommendationRequest;

    fn key(&self) -> NumericId {
        self.id
    }

    fn field_value(&self, field: RecommendationRequestField) -> String {
        match field {
            RecommendationRequestField::RequesterEmail => self.requester_email.clone(),
            RecommendationRequestField::ProfessorEmail => self.professor_email.clone(),
            RecommendationRequestField::Explanation => self.explanation.clone(),
            RecommendationRequestField::DateRequested => format_date_time(&self.date_requested),
            RecommendationRequestField::DateNeeded => format_date_time(&self.date_needed),
            RecommendationRequestField::Done => self.done.to_string(),
        }
    }

    fn draft_from(
        values: &FieldValues<RecommendationRequestField>,
    ) -> Result<RecommendationRequestDraft> {
        use RecommendationRequestField as F;
        Ok(RecommendationRequestDraft {
            requester_email: text(values.get(F::RequesterEmail)),
            professor_email: text(values.get(F::ProfessorEmail)),
            explanation: text(values.get(F::Explanation)),
            date_requested: parse_date_time(F::DateRequested.name(), values.get(F::DateRequested))?,
            date_needed: parse_date_time(F::DateNeeded.name(), values.get(F::DateNeeded))?,
            done: parse_bool(F::Done.name(), values.get(F::Done))?,
        })
    }

    fn changes_from(
        values: &FieldValues<RecommendationRequestField>,
    ) -> Result<RecommendationRequestDraft> {
        Self::draft_from(values)
    }

    fn summary(&self) -> String {
        format!(
            "id: {} requester: {} professor: {}",
            self.id, self.requester_email, self.professor_email
        )
    }
}
