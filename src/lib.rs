//! CRUD 管理コンソール
//!
//! REST バックエンド上のエンティティ（ヘルプリクエスト、メニューレビュー、推薦依頼、
//! 組織、食堂メニュー項目）を一覧・作成・編集・削除するための描画非依存ライブラリ。

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use shared::{AppConfig, AppError, Result};
pub use state::ConsoleState;
