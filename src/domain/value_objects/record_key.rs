use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// バックエンドが採番・保持するレコード識別子
///
/// クライアントは識別子を生成しない。取得したレコードから読み取るか、
/// ルートパラメータとして受け取った文字列を `parse` するだけ。
pub trait RecordKey:
    Clone + fmt::Debug + fmt::Display + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    fn parse(raw: &str) -> Result<Self, String>;
}

/// 自動採番の数値ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericId(i64);

impl NumericId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NumericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl RecordKey for NumericId {
    fn parse(raw: &str) -> Result<Self, String> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| format!("Invalid numeric id: {raw}"))
    }
}

/// 組織の業務キー（orgCode）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgCode(String);

impl OrgCode {
    /// 前後の空白を除いて保持する（作成フォームの入力と同じ正規化）
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err("orgCode cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordKey for OrgCode {
    fn parse(raw: &str) -> Result<Self, String> {
        Self::new(raw)
    }
}
