use super::Entity;
use super::values::text;
use crate::domain::validation::{FieldKey, FieldValues, Rule};
use crate::domain::value_objects::{EntityKind, NumericId};
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// 食堂（dining commons）のメニュー項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: NumericId,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDraft {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuItemField {
    DiningCommonsCode,
    Name,
    Station,
}

const MAX_LENGTH: &str = "Max length 30 characters";

const DINING_COMMONS_CODE_RULES: &[Rule] = &[
    Rule::required("DiningCommonsCode is required."),
    Rule::max_length(30, MAX_LENGTH),
];
const NAME_RULES: &[Rule] = &[
    Rule::required("Name is required."),
    Rule::max_length(30, MAX_LENGTH),
];
const STATION_RULES: &[Rule] = &[
    Rule::required("Station is required."),
    Rule::max_length(30, MAX_LENGTH),
];

impl FieldKey for MenuItemField {
    const ALL: &'static [Self] = &[
        MenuItemField::DiningCommonsCode,
        MenuItemField::Name,
        MenuItemField::Station,
    ];

    fn name(self) -> &'static str {
        match self {
            MenuItemField::DiningCommonsCode => "diningCommonsCode",
            MenuItemField::Name => "name",
            MenuItemField::Station => "station",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuItemField::DiningCommonsCode => "DiningCommonsCode",
            MenuItemField::Name => "Name",
            MenuItemField::Station => "Station",
        }
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            MenuItemField::DiningCommonsCode => DINING_COMMONS_CODE_RULES,
            MenuItemField::Name => NAME_RULES,
            MenuItemField::Station => STATION_RULES,
        }
    }
}

impl Entity for MenuItem {
    type Key = NumericId;
    type Field = MenuItemField;
    type Draft = MenuItemDraft;
    type Changes = MenuItemDraft;

    const KIND: EntityKind = EntityKind::MenuItem;

    fn key(&self) -> NumericId {
        self.id
    }

    fn field_value(&self, field: MenuItemField) -> String {
        match field {
            MenuItemField::DiningCommonsCode => self.dining_commons_code.clone(),
            MenuItemField::Name => self.name.clone(),
            MenuItemField::Station => self.station.clone(),
        }
    }

    fn draft_from(values: &FieldValues<MenuItemField>) -> Result<MenuItemDraft> {
        Ok(MenuItemDraft {
            dining_commons_code: text(values.get(MenuItemField::DiningCommonsCode)),
            name: text(values.get(MenuItemField::Name)),
            station: text(values.get(MenuItemField::Station)),
        })
    }

    fn changes_from(values: &FieldValues<MenuItemField>) -> Result<MenuItemDraft> {
        Self::draft_from(values)
    }

    fn summary(&self) -> String {
        format!("id: {} name: {}", self.id, self.name)
    }
}
