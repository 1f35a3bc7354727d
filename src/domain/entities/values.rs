//! フォーム文字列 ⇔ 型付きフィールド値の変換

use crate::domain::validation::parse_iso_date_time;
use crate::shared::{AppError, Result};
use chrono::NaiveDateTime;

pub fn parse_date_time(field: &str, raw: &str) -> Result<NaiveDateTime> {
    parse_iso_date_time(raw).ok_or_else(|| {
        AppError::InvalidInput(format!("{field} is not an ISO date time: {}", raw.trim()))
    })
}

pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}

pub fn parse_bool(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" | "" => Ok(false),
        other => Err(AppError::InvalidInput(format!(
            "{field} must be true or false: {other}"
        ))),
    }
}

pub fn parse_int<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::InvalidInput(format!("{field} must be an integer: {raw}")))
}

pub fn text(raw: &str) -> String {
    raw.trim().to_string()
}
