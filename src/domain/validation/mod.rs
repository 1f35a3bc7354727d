//! フォーム入力の宣言的バリデーション
//!
//! フィールドごとに `Required` / `Pattern` / `MaxLength` のルールを宣言し、
//! 送信前に全フィールドを評価してフィールド名 → メッセージの対応を返す。

pub mod field;
pub mod pattern;
pub mod rule;
pub mod rule_set;

pub use field::{FieldKey, FieldValues, InputKind, SelectOption};
pub use pattern::{Pattern, parse_iso_date_time};
pub use rule::{Rule, RuleKind};
pub use rule_set::{FieldError, RuleSet, ValidationErrors};
