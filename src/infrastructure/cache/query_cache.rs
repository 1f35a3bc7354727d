use crate::application::ports::ResponseCache;
use crate::domain::value_objects::CacheKey;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Clone)]
struct CacheEntry {
    data: Value,
    expires_at: Instant,
}

/// レスポンスのメモリキャッシュ
#[derive(Clone)]
pub struct QueryCache {
    cache: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    default_ttl: Duration,
}

impl QueryCache {
    /// 新しいキャッシュを作成
    pub fn new(default_ttl_seconds: u64) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// 指定したTTLで保存する。書き込みのたびに期限切れのエントリを削除する
    async fn insert_with_ttl(&self, key: CacheKey, value: Value, ttl: Duration) {
        let now = Instant::now();
        let entry = CacheEntry {
            data: value,
            expires_at: now + ttl,
        };

        let mut cache = self.cache.write().await;
        let before = cache.len();
        cache.retain(|_, entry| entry.expires_at > now);
        let pruned = before - cache.len();
        if pruned > 0 {
            debug!(pruned, "expired cache entries pruned");
        }
        cache.insert(key, entry);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl ResponseCache for QueryCache {
    async fn get(&self, key: &CacheKey) -> Option<Value> {
        let cache = self.cache.read().await;

        if let Some(entry) = cache.get(key) {
            if entry.expires_at > Instant::now() {
                return Some(entry.data.clone());
            }
        }

        None
    }

    async fn put(&self, key: CacheKey, value: Value) {
        self.insert_with_ttl(key, value, self.default_ttl).await;
    }

    async fn invalidate(&self, key: &CacheKey) -> bool {
        let mut cache = self.cache.write().await;
        let removed = cache.remove(key).is_some();
        debug!(key = %key, removed, "cache entry invalidated");
        removed
    }
}
