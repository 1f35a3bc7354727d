use std::fmt;

/// 画面遷移の指示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    To(String),
    /// 履歴を一つ戻る
    Back,
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigation::To(route) => f.write_str(route),
            Navigation::Back => f.write_str("<back>"),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, to: Navigation);
}
