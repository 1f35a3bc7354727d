#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use crud_console_lib::ConsoleState;
use crud_console_lib::shared::AppConfig;
use mocks::FakeBackend;
use std::sync::Arc;

/// フェイクバックエンドで組み立てたコンソール状態
pub fn console(backend: &Arc<FakeBackend>) -> ConsoleState {
    ConsoleState::with_backend(AppConfig::default(), backend.clone())
}
