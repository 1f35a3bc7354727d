use super::rule::is_blank;
use super::{FieldKey, FieldValues, Rule, RuleKind};
use std::collections::BTreeMap;

/// 1 フィールドで違反したルールとメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    violations: Vec<(RuleKind, &'static str)>,
    value_empty: bool,
}

impl FieldError {
    pub fn violations(&self) -> &[(RuleKind, &'static str)] {
        &self.violations
    }

    pub fn has(&self, kind: RuleKind) -> bool {
        self.violations.iter().any(|(k, _)| *k == kind)
    }

    /// 表示用メッセージ。値が空なら「必須」、そうでなければ形式違反のメッセージ。
    pub fn message(&self) -> &'static str {
        let required = self
            .violations
            .iter()
            .find(|(kind, _)| *kind == RuleKind::Required);
        match required {
            Some((_, message)) if self.value_empty => *message,
            _ => self
                .violations
                .iter()
                .find(|(kind, _)| *kind != RuleKind::Required)
                .or(required)
                .map(|(_, message)| *message)
                .unwrap_or(""),
        }
    }
}

/// フィールド名 → エラーの対応
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: FieldKey> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: FieldKey> ValidationErrors<F> {
    pub fn empty() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: F) -> Option<&'static str> {
        self.errors.get(&field).map(FieldError::message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub(crate) fn replace(&mut self, field: F, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

impl<F: FieldKey> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// 有効なフィールド集合に対する検証ルール一式
#[derive(Debug, Clone)]
pub struct RuleSet<F: FieldKey> {
    fields: Vec<F>,
}

impl<F: FieldKey> RuleSet<F> {
    pub fn all() -> Self {
        Self {
            fields: F::ALL.to_vec(),
        }
    }

    pub fn excluding(excluded: Option<F>) -> Self {
        Self {
            fields: F::ALL
                .iter()
                .copied()
                .filter(|field| Some(*field) != excluded)
                .collect(),
        }
    }

    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// 1 フィールドの全ルールを評価する
    pub fn check_field(&self, field: F, value: &str) -> Option<FieldError> {
        if !self.contains(field) {
            return None;
        }
        evaluate_rules(field.rules(), value)
    }

    /// 全フィールドの全ルールを評価する。途中で打ち切らない。
    pub fn evaluate(&self, values: &FieldValues<F>) -> ValidationErrors<F> {
        let mut errors = ValidationErrors::empty();
        for field in &self.fields {
            errors.replace(*field, evaluate_rules(field.rules(), values.get(*field)));
        }
        errors
    }

    pub fn check(&self, values: &FieldValues<F>) -> Result<(), ValidationErrors<F>> {
        let errors = self.evaluate(values);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn evaluate_rules(rules: &[Rule], value: &str) -> Option<FieldError> {
    let violations: Vec<_> = rules
        .iter()
        .filter(|rule| !rule.is_satisfied_by(value))
        .map(|rule| (rule.kind(), rule.message()))
        .collect();
    if violations.is_empty() {
        None
    } else {
        Some(FieldError {
            violations,
            value_empty: is_blank(value),
        })
    }
}
