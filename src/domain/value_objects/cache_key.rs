use super::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// レスポンスキャッシュのキー（リソースパス + クエリ）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// 一覧取得 `/api/<resource>/all`
    pub fn list(kind: EntityKind) -> Self {
        Self(kind.list_path())
    }

    /// 単一取得 `/api/<resource>?<param>=<key>`
    pub fn record(kind: EntityKind, key: &str) -> Self {
        Self(format!("{}?{}={}", kind.api_base(), kind.key_param(), key))
    }

    pub fn current_user() -> Self {
        Self("/api/currentUser".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
