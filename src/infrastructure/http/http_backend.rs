use crate::application::ports::{Backend, BackendRequest, HttpMethod};
use crate::shared::config::BackendConfig;
use crate::shared::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// reqwest による REST バックエンド実装
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ConfigurationError(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn build(&self, request: &BackendRequest) -> Result<reqwest::Request> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(method(request.method), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder
            .build()
            .map_err(|e| AppError::InvalidInput(format!("{request}: {e}")))
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn status_error(status: StatusCode, body: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized(body),
        StatusCode::NOT_FOUND => AppError::NotFound(body),
        _ => AppError::Backend {
            status: status.as_u16(),
            body,
        },
    }
}

/// 空ボディは null、JSON でなければ文字列として扱う
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn send(&self, request: BackendRequest) -> Result<Value> {
        let http_request = self.build(&request)?;
        let response = self.client.execute(http_request).await.map_err(|e| {
            tracing::warn!(request = %request, error = %e, "backend unreachable");
            AppError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(request = %request, status = status.as_u16(), "backend rejected request");
            return Err(status_error(status, text));
        }
        Ok(parse_body(text))
    }
}
