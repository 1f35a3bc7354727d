pub mod column;
mod entity_columns;

pub use column::{CHECK, CROSS, Column, TableEntity, check_mark};

use crate::application::ports::{Navigation, Navigator, Notifier};
use crate::application::services::{BackendFacade, EntityApi};
use crate::domain::entities::Entity;
use crate::domain::value_objects::CurrentUser;
use crate::presentation::form::RenderedButton;
use crate::shared::{AppError, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

pub const EDIT: &str = "Edit";
pub const DELETE: &str = "Delete";

/// レコード一覧の表。管理者ロールのときだけ Edit / Delete 列を末尾に追加する。
pub struct EntityTable<E: TableEntity> {
    records: Vec<E>,
    current_user: CurrentUser,
    test_id_prefix: String,
    facade: Arc<BackendFacade>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl<E: TableEntity> EntityTable<E> {
    pub fn new(
        records: Vec<E>,
        current_user: CurrentUser,
        facade: Arc<BackendFacade>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            records,
            current_user,
            test_id_prefix: E::KIND.table_test_id(),
            facade,
            navigator,
            notifier,
        }
    }

    pub fn with_test_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.test_id_prefix = prefix.into();
        self
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn shows_actions(&self) -> bool {
        self.current_user.is_admin()
    }

    pub fn render(&self) -> RenderedTable {
        let prefix = &self.test_id_prefix;
        let columns = E::columns();

        let mut headers: Vec<RenderedHeader> = columns
            .iter()
            .map(|column| RenderedHeader {
                text: column.header.to_string(),
                test_id: format!("{prefix}-header-{}", column.accessor),
            })
            .collect();
        if self.shows_actions() {
            for label in [EDIT, DELETE] {
                headers.push(RenderedHeader {
                    text: label.to_string(),
                    test_id: format!("{prefix}-header-{label}"),
                });
            }
        }

        let rows = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let cells = columns
                    .iter()
                    .map(|column| RenderedCell {
                        text: column.cell(record),
                        test_id: format!("{prefix}-cell-row-{index}-col-{}", column.accessor),
                    })
                    .collect();
                let actions = if self.shows_actions() {
                    [EDIT, DELETE]
                        .into_iter()
                        .map(|label| RenderedButton {
                            label: label.to_string(),
                            test_id: format!("{prefix}-cell-row-{index}-col-{label}-button"),
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                RenderedRow { cells, actions }
            })
            .collect();

        RenderedTable {
            test_id: prefix.clone(),
            headers,
            rows,
        }
    }

    fn action_target(&self, row: usize) -> Result<&E> {
        if !self.shows_actions() {
            return Err(AppError::Unauthorized(
                "row actions require ROLE_ADMIN".to_string(),
            ));
        }
        self.records
            .get(row)
            .ok_or_else(|| AppError::InvalidInput(format!("no row at index {row}")))
    }

    /// 行の編集ページへ遷移する
    pub fn click_edit(&self, row: usize) -> Result<()> {
        let record = self.action_target(row)?;
        let route = E::KIND.edit_route(&record.key().to_string());
        self.navigator.navigate(Navigation::To(route));
        Ok(())
    }

    /// 行の削除をバックエンドへ依頼する。行は楽観的に取り除かず、
    /// 一覧キャッシュの無効化によって次回の描画に反映される。
    pub async fn click_delete(&self, row: usize) -> Result<()> {
        let record = self.action_target(row)?;
        let key = record.key();
        let mutation = EntityApi::<E>::delete(&key);

        match self.facade.mutate(&mutation).await {
            Ok(response) => {
                let message = delete_message::<E>(&response, &key.to_string());
                self.notifier.notify(&message);
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    entity = %E::KIND,
                    key = %key,
                    error = %e,
                    code = e.code(),
                    "delete failed"
                );
                Err(e)
            }
        }
    }
}

/// 削除成功時のトースト文言。バックエンドの `message` を優先する。
fn delete_message<E: Entity>(response: &Value, key: &str) -> String {
    let message = match response {
        Value::Object(map) => map.get("message").and_then(Value::as_str).map(str::to_string),
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        _ => None,
    };
    message.unwrap_or_else(|| format!("{} with {} {} deleted", E::KIND, E::KIND.key_param(), key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
    pub text: String,
    pub test_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCell {
    pub text: String,
    pub test_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub cells: Vec<RenderedCell>,
    pub actions: Vec<RenderedButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub test_id: String,
    pub headers: Vec<RenderedHeader>,
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn header_texts(&self) -> Vec<&str> {
        self.headers.iter().map(|h| h.text.as_str()).collect()
    }

    pub fn cell(&self, test_id: &str) -> Option<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.test_id == test_id)
            .map(|cell| cell.text.as_str())
    }

    pub fn button(&self, test_id: &str) -> Option<&RenderedButton> {
        self.rows
            .iter()
            .flat_map(|row| row.actions.iter())
            .find(|button| button.test_id == test_id)
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.rows.first().map_or(self.headers.len(), |row| row.cells.len());
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .take(columns)
            .map(|h| h.text.chars().count())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let header_line: Vec<String> = self
            .headers
            .iter()
            .take(columns)
            .zip(&widths)
            .map(|(h, w)| format!("{:<w$}", h.text, w = *w))
            .collect();
        writeln!(f, "{}", header_line.join(" | ").trim_end())?;
        for row in &self.rows {
            let line: Vec<String> = row
                .cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<w$}", c.text, w = *w))
                .collect();
            writeln!(f, "{}", line.join(" | ").trim_end())?;
        }
        write!(f, "({} rows)", self.rows.len())
    }
}
