use super::BackendFacade;
use crate::application::ports::BackendRequest;
use crate::domain::value_objects::{CacheKey, CurrentUser};
use crate::shared::Result;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    user: Option<UserPayload>,
    #[serde(default)]
    roles: Vec<RolePayload>,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RolePayload {
    authority: String,
}

impl From<CurrentUserResponse> for CurrentUser {
    fn from(response: CurrentUserResponse) -> Self {
        match response.user {
            Some(user) => CurrentUser {
                logged_in: true,
                email: user.email,
                roles: response.roles.into_iter().map(|r| r.authority).collect(),
            },
            None => CurrentUser::anonymous(),
        }
    }
}

/// `/api/currentUser` からログインユーザーとロールを解決する
pub struct CurrentUserService {
    facade: Arc<BackendFacade>,
}

impl CurrentUserService {
    pub fn new(facade: Arc<BackendFacade>) -> Self {
        Self { facade }
    }

    pub async fn fetch(&self) -> Result<CurrentUser> {
        let response: CurrentUserResponse = self
            .facade
            .query_as(CacheKey::current_user(), BackendRequest::get("/api/currentUser"))
            .await?;
        Ok(response.into())
    }

    /// 取得に失敗した場合は未ログインとして扱う
    pub async fn current_user(&self) -> CurrentUser {
        match self.fetch().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, code = e.code(), "failed to resolve current user");
                CurrentUser::anonymous()
            }
        }
    }
}
