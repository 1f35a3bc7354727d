use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_USER: &str = "ROLE_USER";

/// 現在のユーザーとロール
///
/// グローバル状態ではなく、テーブルやページの生成時に明示的に渡すコンテキスト値。
/// ロールは UI 上の操作の表示可否にのみ使い、認可はバックエンドが行う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub logged_in: bool,
    pub email: Option<String>,
    pub roles: BTreeSet<String>,
}

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_roles<I, S>(email: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            logged_in: true,
            email: Some(email.into()),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.logged_in && self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}
