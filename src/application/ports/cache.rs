use crate::domain::value_objects::CacheKey;
use async_trait::async_trait;
use serde_json::Value;

/// リソースパスをキーとするレスポンスキャッシュのポート
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// 有効期限内のエントリを取得
    async fn get(&self, key: &CacheKey) -> Option<Value>;

    async fn put(&self, key: CacheKey, value: Value);

    /// キーを無効化し、エントリが存在したかを返す
    async fn invalidate(&self, key: &CacheKey) -> bool;
}
