use super::Pattern;
use serde::{Deserialize, Serialize};

/// 違反したルールの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    Pattern,
    MaxLength,
}

/// フィールド単位の検証ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required {
        message: &'static str,
    },
    Pattern {
        pattern: Pattern,
        message: &'static str,
    },
    MaxLength {
        max: usize,
        message: &'static str,
    },
}

impl Rule {
    pub const fn required(message: &'static str) -> Self {
        Rule::Required { message }
    }

    pub const fn pattern(pattern: Pattern, message: &'static str) -> Self {
        Rule::Pattern { pattern, message }
    }

    pub const fn max_length(max: usize, message: &'static str) -> Self {
        Rule::MaxLength { max, message }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required { .. } => RuleKind::Required,
            Rule::Pattern { .. } => RuleKind::Pattern,
            Rule::MaxLength { .. } => RuleKind::MaxLength,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::Pattern { message, .. }
            | Rule::MaxLength { message, .. } => *message,
        }
    }

    /// 値がルールを満たすか。
    /// 空値は Required 以外のルールを常に満たす（空かどうかの判定は Required の責務）。
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        match self {
            Rule::Required { .. } => !is_blank(value),
            Rule::Pattern { pattern, .. } => is_blank(value) || pattern.is_match(value),
            Rule::MaxLength { max, .. } => value.chars().count() <= *max,
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
