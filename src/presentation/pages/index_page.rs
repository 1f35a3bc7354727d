use crate::application::ports::{Navigation, Navigator, Notifier};
use crate::application::services::BackendFacade;
use crate::domain::value_objects::CurrentUser;
use crate::presentation::table::{EntityTable, RenderedTable, TableEntity};
use crate::shared::{AppError, Result};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Loading,
    Loaded,
    Empty,
    /// 取得失敗。空の表として描画する。
    FetchFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIndexPage {
    pub title: String,
    pub create_link: Option<RenderedLink>,
    pub table: RenderedTable,
}

/// 一覧ページ
pub struct IndexPage<E: TableEntity> {
    facade: Arc<BackendFacade>,
    current_user: CurrentUser,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: IndexState,
    records: Vec<E>,
}

impl<E: TableEntity> IndexPage<E> {
    pub fn new(
        facade: Arc<BackendFacade>,
        current_user: CurrentUser,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            facade,
            current_user,
            navigator,
            notifier,
            state: IndexState::Loading,
            records: Vec::new(),
        }
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn title(&self) -> &'static str {
        E::KIND.plural_title()
    }

    /// 一覧を取得する。失敗時は空の一覧にフォールバックする。
    pub async fn load(&mut self) -> IndexState {
        match self.facade.fetch_all::<E>().await {
            Ok(records) => {
                self.state = if records.is_empty() {
                    IndexState::Empty
                } else {
                    IndexState::Loaded
                };
                tracing::info!(entity = %E::KIND, count = records.len(), "index loaded");
                self.records = records;
            }
            Err(e) => {
                tracing::error!(entity = %E::KIND, error = %e, code = e.code(), "index fetch failed");
                self.records.clear();
                self.state = IndexState::FetchFailed;
            }
        }
        self.state
    }

    pub fn table(&self) -> EntityTable<E> {
        EntityTable::new(
            self.records.clone(),
            self.current_user.clone(),
            Arc::clone(&self.facade),
            Arc::clone(&self.navigator),
            Arc::clone(&self.notifier),
        )
    }

    /// 行を削除し、無効化された一覧を取り直す
    pub async fn delete_row(&mut self, row: usize) -> Result<()> {
        self.table().click_delete(row).await?;
        self.load().await;
        Ok(())
    }

    pub fn click_create(&self) -> Result<()> {
        if !self.current_user.is_admin() {
            return Err(AppError::Unauthorized(
                "creating records requires ROLE_ADMIN".to_string(),
            ));
        }
        self.navigator
            .navigate(Navigation::To(E::KIND.create_route()));
        Ok(())
    }

    pub fn render(&self) -> RenderedIndexPage {
        let create_link = self.current_user.is_admin().then(|| RenderedLink {
            label: format!("Create {}", E::KIND),
            href: E::KIND.create_route(),
        });
        RenderedIndexPage {
            title: self.title().to_string(),
            create_link,
            table: self.table().render(),
        }
    }
}
