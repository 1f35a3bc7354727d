use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_secs: 30,
            },
            cache: CacheConfig {
                ttl_secs: 300, // 5 minutes
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // 既定値
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("CRUD_CONSOLE_BACKEND_URL") {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                cfg.backend.base_url = trimmed.trim_end_matches('/').to_string();
            }
        }
        if let Some(value) = std::env::var("CRUD_CONSOLE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| parse_u64(&v))
        {
            cfg.backend.timeout_secs = value.max(1);
        }
        if let Some(value) = std::env::var("CRUD_CONSOLE_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| parse_u64(&v))
        {
            cfg.cache.ttl_secs = value;
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.backend.base_url.starts_with("http://")
            || self.backend.base_url.starts_with("https://"))
        {
            return Err(format!(
                "Backend base_url must start with http:// or https:// (got {})",
                self.backend.base_url
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err("Backend timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
