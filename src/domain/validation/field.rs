use super::Rule;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// `<select>` の選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// 入力コントロールの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    DateTimeLocal,
    Checkbox,
    Select {
        options: &'static [SelectOption],
        default: &'static str,
    },
}

impl InputKind {
    /// 新規作成時の初期値（真偽値系は定義済みの選択肢から始まる）
    pub fn default_value(&self) -> &'static str {
        match self {
            InputKind::Checkbox => "false",
            InputKind::Select { default, .. } => *default,
            InputKind::Text | InputKind::DateTimeLocal => "",
        }
    }
}

/// エンティティごとのフィールド列挙子が実装するトレイト
///
/// `ALL` の順序がフォーム上の表示順になる。
pub trait FieldKey: Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// ワイヤ上のフィールド名（camelCase）
    fn name(self) -> &'static str;

    fn label(self) -> &'static str;

    fn input(self) -> InputKind {
        InputKind::Text
    }

    fn rules(self) -> &'static [Rule];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// フォーム上の入力値（入力されたままの文字列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues<F: FieldKey> {
    values: BTreeMap<F, String>,
}

impl<F: FieldKey> FieldValues<F> {
    /// 各フィールドを既定値で埋めた値集合
    pub fn defaults() -> Self {
        let values = F::ALL
            .iter()
            .map(|field| (*field, field.input().default_value().to_string()))
            .collect();
        Self { values }
    }

    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn with(mut self, field: F, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl<F: FieldKey> Default for FieldValues<F> {
    fn default() -> Self {
        Self::defaults()
    }
}
