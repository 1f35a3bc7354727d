use super::Entity;
use super::values::{parse_bool, text};
use crate::domain::validation::{FieldKey, FieldValues, InputKind, Rule};
use crate::domain::value_objects::{EntityKind, OrgCode};
use crate::shared::{AppError, Result};
use serde::{Deserialize, Serialize};

/// 学内組織。識別子は数値IDではなく業務キー `orgCode`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub org_code: OrgCode,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDraft {
    pub org_code: OrgCode,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// 更新ボディ。`orgCode` はクエリパラメータでのみ送る。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationChanges {
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrganizationField {
    OrgCode,
    OrgTranslationShort,
    OrgTranslation,
    Inactive,
}

const MAX_LENGTH: &str = "Max length 30 characters";

const ORG_CODE_RULES: &[Rule] = &[
    Rule::required("orgCode is required."),
    Rule::max_length(30, MAX_LENGTH),
];
const ORG_TRANSLATION_SHORT_RULES: &[Rule] = &[
    Rule::required("orgTranslationShort is required."),
    Rule::max_length(30, MAX_LENGTH),
];
const ORG_TRANSLATION_RULES: &[Rule] = &[
    Rule::required("orgTranslation is required."),
    Rule::max_length(30, MAX_LENGTH),
];

impl FieldKey for OrganizationField {
    const ALL: &'static [Self] = &[
        OrganizationField::OrgCode,
        OrganizationField::OrgTranslationShort,
        OrganizationField::OrgTranslation,
        OrganizationField::Inactive,
    ];

    fn name(self) -> &'static str {
        match self {
            OrganizationField::OrgCode => "orgCode",
            OrganizationField::OrgTranslationShort => "orgTranslationShort",
            OrganizationField::OrgTranslation => "orgTranslation",
            OrganizationField::Inactive => "inactive",
        }
    }

    fn label(self) -> &'static str {
        self.name()
    }

    fn input(self) -> InputKind {
        match self {
            OrganizationField::Inactive => InputKind::Checkbox,
            _ => InputKind::Text,
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            OrganizationField::OrgCode => ORG_CODE_RULES,
            OrganizationField::OrgTranslationShort => ORG_TRANSLATION_SHORT_RULES,
            OrganizationField::OrgTranslation => ORG_TRANSLATION_RULES,
            OrganizationField::Inactive => &[],
        }
    }
}

impl Entity for Organization {
    type Key = OrgCode;
    type Field = OrganizationField;
    type Draft = OrganizationDraft;
    type Changes = OrganizationChanges;

    const KIND: EntityKind = EntityKind::Organization;
    const KEY_FIELD: Option<OrganizationField> = Some(OrganizationField::OrgCode);

    fn key(&self) -> OrgCode {
        self.org_code.clone()
    }

    fn field_value(&self, field: OrganizationField) -> String {
        match field {
            OrganizationField::OrgCode => self.org_code.to_string(),
            OrganizationField::OrgTranslationShort => self.org_translation_short.clone(),
            OrganizationField::OrgTranslation => self.org_translation.clone(),
            OrganizationField::Inactive => self.inactive.to_string(),
        }
    }

    fn draft_from(values: &FieldValues<OrganizationField>) -> Result<OrganizationDraft> {
        let changes = Self::changes_from(values)?;
        let org_code =
            OrgCode::new(text(values.get(OrganizationField::OrgCode))).map_err(AppError::InvalidInput)?;
        Ok(OrganizationDraft {
            org_code,
            org_translation_short: changes.org_translation_short,
            org_translation: changes.org_translation,
            inactive: changes.inactive,
        })
    }

    fn changes_from(values: &FieldValues<OrganizationField>) -> Result<OrganizationChanges> {
        use OrganizationField as F;
        Ok(OrganizationChanges {
            org_translation_short: text(values.get(F::OrgTranslationShort)),
            org_translation: text(values.get(F::OrgTranslation)),
            inactive: parse_bool(F::Inactive.name(), values.get(F::Inactive))?,
        })
    }

    fn summary(&self) -> String {
        format!("orgCode: {}", self.org_code)
    }
}
