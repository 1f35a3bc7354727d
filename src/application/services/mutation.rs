use crate::application::ports::BackendRequest;
use crate::domain::entities::Entity;
use crate::domain::value_objects::CacheKey;
use crate::shared::{AppError, Result};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// 変更系リクエスト（コマンド）と、成功時に無効化するキャッシュキーの組
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    request: BackendRequest,
    invalidates: Vec<CacheKey>,
}

impl Mutation {
    pub fn new(request: BackendRequest) -> Self {
        Self {
            request,
            invalidates: Vec::new(),
        }
    }

    pub fn invalidating(mut self, key: CacheKey) -> Self {
        if !self.invalidates.contains(&key) {
            self.invalidates.push(key);
        }
        self
    }

    pub fn request(&self) -> &BackendRequest {
        &self.request
    }

    pub fn invalidates(&self) -> &[CacheKey] {
        &self.invalidates
    }
}

/// エンティティ種別ごとのリクエスト/キャッシュキー組み立て
pub struct EntityApi<E>(PhantomData<E>);

impl<E: Entity> EntityApi<E> {
    pub fn list_key() -> CacheKey {
        CacheKey::list(E::KIND)
    }

    pub fn list_request() -> BackendRequest {
        BackendRequest::get(E::KIND.list_path())
    }

    pub fn record_key(key: &E::Key) -> CacheKey {
        CacheKey::record(E::KIND, &key.to_string())
    }

    pub fn record_request(key: &E::Key) -> BackendRequest {
        BackendRequest::get(E::KIND.api_base()).with_param(E::KIND.key_param(), key.to_string())
    }

    /// POST `/api/<resource>/post`（フィールドはクエリパラメータ）
    pub fn create(draft: &E::Draft) -> Result<Mutation> {
        let request = BackendRequest::post(E::KIND.create_path()).with_params(query_params(draft)?);
        Ok(Mutation::new(request).invalidating(Self::list_key()))
    }

    /// PUT `/api/<resource>?<key>=`（識別子はクエリ、可変フィールドは JSON ボディ）
    pub fn update(key: &E::Key, changes: &E::Changes) -> Result<Mutation> {
        let body = serde_json::to_value(changes)
            .map_err(|e| AppError::SerializationError(e.to_string()))?;
        let request = BackendRequest::put(E::KIND.api_base())
            .with_param(E::KIND.key_param(), key.to_string())
            .with_body(body);
        Ok(Mutation::new(request)
            .invalidating(Self::record_key(key))
            .invalidating(Self::list_key()))
    }

    /// DELETE `/api/<resource>?<key>=`
    pub fn delete(key: &E::Key) -> Mutation {
        let request = BackendRequest::delete(E::KIND.api_base())
            .with_param(E::KIND.key_param(), key.to_string());
        Mutation::new(request)
            .invalidating(Self::record_key(key))
            .invalidating(Self::list_key())
    }
}

/// フラットな構造体をクエリパラメータ列に変換する
pub fn query_params<T: Serialize + ?Sized>(value: &T) -> Result<Vec<(String, String)>> {
    let value =
        serde_json::to_value(value).map_err(|e| AppError::SerializationError(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(AppError::SerializationError(
            "query parameters must serialize to an object".to_string(),
        ));
    };

    map.into_iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Bool(_) | Value::Number(_) => value.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(AppError::SerializationError(format!(
                        "query parameter {name} is not a scalar"
                    )));
                }
            };
            Ok((name, value))
        })
        .collect()
}
