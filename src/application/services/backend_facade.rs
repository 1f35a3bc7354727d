use super::mutation::{EntityApi, Mutation};
use crate::application::ports::{Backend, BackendRequest, ResponseCache};
use crate::domain::entities::Entity;
use crate::domain::value_objects::CacheKey;
use crate::shared::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// バックエンドへの唯一の出入口
///
/// 参照系はキャッシュキー付きのクエリ、変更系は無効化キーを伴うミューテーションとして扱う。
/// ミューテーション成功時に、宣言されたキーのキャッシュを破棄する。
pub struct BackendFacade {
    backend: Arc<dyn Backend>,
    cache: Arc<dyn ResponseCache>,
}

impl BackendFacade {
    pub fn new(backend: Arc<dyn Backend>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { backend, cache }
    }

    /// キャッシュにあればそれを返し、なければ取得してキャッシュする
    pub async fn query(&self, key: CacheKey, request: BackendRequest) -> Result<Value> {
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(key = %key, "query served from cache");
            return Ok(cached);
        }

        tracing::debug!(request = %request, "query");
        let value = self.backend.send(request).await?;
        self.cache.put(key, value.clone()).await;
        Ok(value)
    }

    pub async fn query_as<T: DeserializeOwned>(
        &self,
        key: CacheKey,
        request: BackendRequest,
    ) -> Result<T> {
        let value = self.query(key, request).await?;
        serde_json::from_value(value).map_err(|e| AppError::DeserializationError(e.to_string()))
    }

    /// 変更系リクエストを送信する。失敗時はキャッシュに触れない。
    pub async fn mutate(&self, mutation: &Mutation) -> Result<Value> {
        tracing::info!(request = %mutation.request(), "mutation");
        let value = self.backend.send(mutation.request().clone()).await?;

        for key in mutation.invalidates() {
            self.cache.invalidate(key).await;
        }
        Ok(value)
    }

    pub async fn fetch_all<E: Entity>(&self) -> Result<Vec<E>> {
        let value = self
            .query(EntityApi::<E>::list_key(), EntityApi::<E>::list_request())
            .await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|e| AppError::DeserializationError(e.to_string()))
    }

    pub async fn fetch_one<E: Entity>(&self, key: &E::Key) -> Result<E> {
        let value = self
            .query(EntityApi::<E>::record_key(key), EntityApi::<E>::record_request(key))
            .await?;
        if value.is_null() {
            return Err(AppError::NotFound(format!("{} {}", E::KIND, key)));
        }
        serde_json::from_value(value).map_err(|e| AppError::DeserializationError(e.to_string()))
    }

    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.cache.invalidate(key).await
    }
}
