use super::Entity;
use super::values::{format_date_time, parse_bool, parse_date_time, text};
use crate::domain::validation::{FieldKey, FieldValues, InputKind, Pattern, Rule, SelectOption};
use crate::domain::value_objects::{EntityKind, NumericId};
use crate::shared::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    pub id: NumericId,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestDraft {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HelpRequestField {
    RequestTime,
    RequesterEmail,
    TeamId,
    TableOrBreakoutRoom,
    Explanation,
    Solved,
}

const SOLVED_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "true",
        label: "Solved",
    },
    SelectOption {
        value: "false",
        label: "Not Solved",
    },
];

const REQUEST_TIME_RULES: &[Rule] = &[
    Rule::required("Request time is required."),
    Rule::pattern(
        Pattern::IsoDateTime,
        "Request time must be in ISO format, e.g. 2024-11-04T12:45.",
    ),
];
const REQUESTER_EMAIL_RULES: &[Rule] = &[
    Rule::required("Requester email is required."),
    Rule::pattern(
        Pattern::Email,
        "Requester email must be in email format <email header>@<domain>.",
    ),
];
const TEAM_ID_RULES: &[Rule] = &[Rule::required("Team ID is required.")];
const TABLE_OR_BREAKOUT_ROOM_RULES: &[Rule] =
    &[Rule::required("Table or breakout room number is required.")];
const EXPLANATION_RULES: &[Rule] = &[Rule::required("Explanation of request is required.")];

impl FieldKey for HelpRequestField {
    const ALL: &'static [Self] = &[
        HelpRequestField::RequestTime,
        HelpRequestField::RequesterEmail,
        HelpRequestField::TeamId,
        HelpRequestField::TableOrBreakoutRoom,
        HelpRequestField::Explanation,
        HelpRequestField::Solved,
    ];

    fn name(self) -> &'static str {
        match self {
            HelpRequestField::RequestTime => "requestTime",
            HelpRequestField::RequesterEmail => "requesterEmail",
            HelpRequestField::TeamId => "teamId",
            HelpRequestField::TableOrBreakoutRoom => "tableOrBreakoutRoom",
            HelpRequestField::Explanation => "explanation",
            HelpRequestField::Solved => "solved",
        }
    }

    fn label(self) -> &'static str {
        match self {
            HelpRequestField::RequestTime => "Request Time (iso format)",
            HelpRequestField::RequesterEmail => "Requester Email",
            HelpRequestField::TeamId => "Team ID",
            HelpRequestField::TableOrBreakoutRoom => "Table or Breakout Room Number",
            HelpRequestField::Explanation => "Explanation",
            HelpRequestField::Solved => "Handled",
        }
    }

    fn input(self) -> InputKind {
        match self {
            HelpRequestField::RequestTime => InputKind::DateTimeLocal,
            HelpRequestField::Solved => InputKind::Select {
                options: SOLVED_OPTIONS,
                default: "false",
            },
            _ => InputKind::Text,
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            HelpRequestField::RequestTime => REQUEST_TIME_RULES,
            HelpRequestField::RequesterEmail => REQUESTER_EMAIL_RULES,
            HelpRequestField::TeamId => TEAM_ID_RULES,
            HelpRequestField::TableOrBreakoutRoom => TABLE_OR_BREAKOUT_ROOM_RULES,
            HelpRequestField::Explanation => EXPLANATION_RULES,
            HelpRequestField::Solved => &[],
        }
    }
}

impl Entity for HelpRequest {
    type Key = NumericId;
    type Field = HelpRequestField;
    type Draft = HelpRequestDraft;
    type Changes = HelpRequestDraft;

    const KIND: EntityKind = EntityKind::HelpRequest;

    fn key(&self) -> NumericId {
        self.id
    }

    fn field_value(&self, field: HelpRequestField) -> String {
        match field {
            HelpRequestField::RequestTime => format_date_time(&self.request_time),
            HelpRequestField::RequesterEmail => self.requester_email.clone(),
            HelpRequestField::TeamId => self.team_id.clone(),
            HelpRequestField::TableOrBreakoutRoom => self.table_or_breakout_room.clone(),
            HelpRequestField::Explanation => self.explanation.clone(),
            HelpRequestField::Solved => self.solved.to_string(),
        }
    }

    fn draft_from(values: &FieldValues<HelpRequestField>) -> Result<HelpRequestDraft> {
        use HelpRequestField as F;
        Ok(HelpRequestDraft {
            requester_email: text(values.get(F::RequesterEmail)),
            team_id: text(values.get(F::TeamId)),
            table_or_breakout_room: text(values.get(F::TableOrBreakoutRoom)),
            request_time: parse_date_time(F::RequestTime.name(), values.get(F::RequestTime))?,
            explanation: text(values.get(F::Explanation)),
            solved: parse_bool(F::Solved.name(), values.get(F::Solved))?,
        })
    }

    fn changes_from(values: &FieldValues<HelpRequestField>) -> Result<HelpRequestDraft> {
        Self::draft_from(values)
    }

    fn summary(&self) -> String {
        format!("id: {} requesterEmail: {}", self.id, self.requester_email)
    }
}
