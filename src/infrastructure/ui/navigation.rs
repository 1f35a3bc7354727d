use crate::application::ports::{Navigation, Navigator};
use std::sync::Mutex;

/// ルート履歴を保持するナビゲータ
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![initial_route.into()]),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, to: Navigation) {
        let mut history = self.lock();
        match to {
            Navigation::To(route) => {
                tracing::debug!(route = %route, "navigate");
                history.push(route);
            }
            Navigation::Back => {
                // 先頭ルートより前には戻らない
                if history.len() > 1 {
                    history.pop();
                }
            }
        }
    }
}
