use async_trait::async_trait;
use crud_console_lib::application::ports::{Backend, BackendRequest, HttpMethod};
use crud_console_lib::shared::{AppError, Result};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

/// メソッド + パスごとに応答を積んでおくインメモリのバックエンド。
/// 応答が複数あれば順に消費し、最後の一つは繰り返し返す。
#[derive(Default)]
pub struct FakeBackend {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Result<Value>>>>,
    requests: Mutex<Vec<BackendRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn respond(&self, method: HttpMethod, path: &str, body: Value) {
        self.push(method, path, Ok(body)).await;
    }

    pub async fn fail(&self, method: HttpMethod, path: &str, status: u16) {
        let error = AppError::Backend {
            status,
            body: format!("{status} from fake backend"),
        };
        self.push(method, path, Err(error)).await;
    }

    async fn push(&self, method: HttpMethod, path: &str, response: Result<Value>) {
        self.routes
            .lock()
            .await
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    pub async fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn requests_to(&self, method: HttpMethod, path: &str) -> Vec<BackendRequest> {
        self.requests
            .lock()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }
}

fn replay(response: &Result<Value>) -> Result<Value> {
    match response {
        Ok(value) => Ok(value.clone()),
        Err(AppError::Backend { status, body }) => Err(AppError::Backend {
            status: *status,
            body: body.clone(),
        }),
        Err(other) => Err(AppError::Internal(other.to_string())),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn send(&self, request: BackendRequest) -> Result<Value> {
        self.requests.lock().await.push(request.clone());

        let mut routes = self.routes.lock().await;
        let Some(queue) = routes.get_mut(&(request.method, request.path.clone())) else {
            return Err(AppError::NotFound(request.to_string()));
        };
        if queue.len() > 1 {
            if let Some(response) = queue.pop_front() {
                return response;
            }
        }
        queue
            .front()
            .map(replay)
            .unwrap_or_else(|| Err(AppError::NotFound(request.to_string())))
    }
}
