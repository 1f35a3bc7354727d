//! エンティティごとの一覧・作成・編集ページ
//!
//! ページはフォーム/表とバックエンドファサードを結び付け、成功時の通知と遷移を担う。
//! ネットワークエラーはログに出すだけで、画面上のエラー表示は行わない。

pub mod create_page;
pub mod edit_page;
pub mod index_page;

pub use create_page::{CreatePage, CreateState};
pub use edit_page::{EditPage, EditState};
pub use index_page::{IndexPage, IndexState, RenderedIndexPage, RenderedLink};

use crate::domain::entities::Entity;
use crate::presentation::form::RenderedForm;
use crate::shared::AppError;
use serde_json::Value;

pub const UPDATE_LABEL: &str = "Update";

/// 作成/更新ページの送信結果
#[derive(Debug)]
pub enum SubmitResult<E> {
    /// バックエンドが受理した。レスポンスがレコードとして読めた場合はそれを持つ。
    Saved(Option<E>),
    /// 検証エラーで送信されなかった
    Invalid,
    /// 送信中または送信済みのため無視した
    Ignored,
    Failed(AppError),
}

impl<E> SubmitResult<E> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitResult::Saved(_))
    }
}

/// 作成/編集ページの描画結果
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFormPage {
    pub title: String,
    /// 編集ページではレコード取得まで `None`
    pub form: Option<RenderedForm>,
    pub submit_enabled: bool,
}

fn decode_record<E: Entity>(response: Value) -> Option<E> {
    match serde_json::from_value(response) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(entity = %E::KIND, error = %e, "mutation response is not a record");
            None
        }
    }
}
