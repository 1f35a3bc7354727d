use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern must compile")
});

// 秒・小数秒は省略可（datetime-local の入力値は分までのことがある）
static ISO_DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d{4}-[01]\d-[0-3]\dT[0-2]\d:[0-5]\d(:[0-5]\d(\.\d+)?)?$")
        .expect("iso datetime pattern must compile")
});

static POSITIVE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d*$").expect("integer pattern must compile"));

static STAR_RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-5]$").expect("star rating pattern must compile"));

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// ISO 日時として解釈できれば返す（区切りの `t` も受け付ける）
pub fn parse_iso_date_time(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().to_ascii_uppercase();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
}

/// 入力値の形式パターン（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Email,
    IsoDateTime,
    PositiveInteger,
    /// 0〜5 の整数
    StarRating,
}

impl Pattern {
    /// 形が合い、かつ型付きの値に変換できるか
    pub fn is_match(self, value: &str) -> bool {
        if !self.regex().is_match(value) {
            return false;
        }
        match self {
            Pattern::IsoDateTime => parse_iso_date_time(value).is_some(),
            Pattern::PositiveInteger => value.parse::<i64>().is_ok(),
            Pattern::Email | Pattern::StarRating => true,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Pattern::Email => &EMAIL,
            Pattern::IsoDateTime => &ISO_DATE_TIME,
            Pattern::PositiveInteger => &POSITIVE_INTEGER,
            Pattern::StarRating => &STAR_RATING,
        }
    }
}
