use crate::application::ports::Notifier;
use std::sync::Mutex;

/// トースト通知を記録するノーティファイア
#[derive(Debug, Default)]
pub struct ToastLog {
    messages: Mutex<Vec<String>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Notifier for ToastLog {
    fn notify(&self, message: &str) {
        tracing::info!(toast = message);
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        messages.push(message.to_string());
    }
}
