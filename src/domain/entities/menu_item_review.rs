use super::Entity;
use super::values::{format_date_time, parse_date_time, parse_int, text};
use crate::domain::validation::{FieldKey, FieldValues, InputKind, Pattern, Rule};
use crate::domain::value_objects::{EntityKind, NumericId};
use crate::shared::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 食堂メニュー項目へのレビュー。`item_id` は参照先を検証しない不透明な値。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    pub id: NumericId,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewDraft {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuItemReviewField {
    ItemId,
    ReviewerEmail,
    Stars,
    DateReviewed,
    Comments,
}

const ITEM_ID_RULES: &[Rule] = &[
    Rule::required("Item ID is required"),
    Rule::pattern(
        Pattern::PositiveInteger,
        "Item ID must be an integer, e.g. 1 for item #1",
    ),
];
const REVIEWER_EMAIL_RULES: &[Rule] = &[
    Rule::required("Reviewer email is required"),
    Rule::pattern(Pattern::Email, "Must input valid reviewer email"),
];
const STARS_RULES: &[Rule] = &[
    Rule::required("Stars is required"),
    Rule::pattern(Pattern::StarRating, "Must give a rating between 0 and 5 stars"),
];
const DATE_REVIEWED_RULES: &[Rule] = &[
    Rule::required("DateReviewed is required"),
    Rule::pattern(
        Pattern::IsoDateTime,
        "DateReviewed must be in ISO format, e.g. 2022-01-02T12:00",
    ),
];
const COMMENTS_RULES: &[Rule] = &[Rule::required("Comments is required")];

impl FieldKey for MenuItemReviewField {
    const ALL: &'static [Self] = &[
        MenuItemReviewField::ItemId,
        MenuItemReviewField::ReviewerEmail,
        MenuItemReviewField::Stars,
        MenuItemReviewField::DateReviewed,
        MenuItemReviewField::Comments,
    ];

    fn name(self) -> &'static str {
        match self {
            MenuItemReviewField::ItemId => "itemId",
            MenuItemReviewField::ReviewerEmail => "reviewerEmail",
            MenuItemReviewField::Stars => "stars",
            MenuItemReviewField::DateReviewed => "dateReviewed",
            MenuItemReviewField::Comments => "comments",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuItemReviewField::ItemId => "Item ID",
            MenuItemReviewField::ReviewerEmail => "Reviewer Email",
            MenuItemReviewField::Stars => "Stars",
            MenuItemReviewField::DateReviewed => "Date (iso format)",
            MenuItemReviewField::Comments => "Comments",
        }
    }

    fn input(self) -> InputKind {
        match self {
            MenuItemReviewField::DateReviewed => InputKind::DateTimeLocal,
            _ => InputKind::Text,
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            MenuItemReviewField::ItemId => ITEM_ID_RULES,
            MenuItemReviewField::ReviewerEmail => REVIEWER_EMAIL_RULES,
            MenuItemReviewField::Stars => STARS_RULES,
            MenuItemReviewField::DateReviewed => DATE_REVIEWED_RULES,
            MenuItemReviewField::Comments => COMMENTS_RULES,
        }
    }
}

impl Entity for MenuItemReview {
    type Key = NumericId;
    type Field = MenuItemReviewField;
    type Draft = MenuItemReviewDraft;
    type Changes = MenuItemReviewDraft;

    const KIND: EntityKind = EntityKind::MenuItemReview;

    fn key(&self) -> NumericId {
        self.id
    }

    fn field_value(&self, field: MenuItemReviewField) -> String {
        match field {
            MenuItemReviewField::ItemId => self.item_id.to_string(),
            MenuItemReviewField::ReviewerEmail => self.reviewer_email.clone(),
            MenuItemReviewField::Stars => self.stars.to_string(),
            MenuItemReviewField::DateReviewed => format_date_time(&self.date_reviewed),
            MenuItemReviewField::Comments => self.comments.clone(),
        }
    }

    fn draft_from(values: &FieldValues<MenuItemReviewField>) -> Result<MenuItemReviewDraft> {
        use MenuItemReviewField as F;
        Ok(MenuItemReviewDraft {
            item_id: parse_int(F::ItemId.name(), values.get(F::ItemId))?,
            reviewer_email: text(values.get(F::ReviewerEmail)),
            stars: parse_int(F::Stars.name(), values.get(F::Stars))?,
            date_reviewed: parse_date_time(F::DateReviewed.name(), values.get(F::DateReviewed))?,
            comments: text(values.get(F::Comments)),
        })
    }

    fn changes_from(values: &FieldValues<MenuItemReviewField>) -> Result<MenuItemReviewDraft> {
        Self::draft_from(values)
    }

    fn summary(&self) -> String {
        format!(
            "id: {} itemId: {} reviewerEmail: {}",
            self.id, self.item_id, self.reviewer_email
        )
    }
}
