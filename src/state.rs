use crate::application::ports::{Backend, Navigator, Notifier};
use crate::application::services::{BackendFacade, CurrentUserService};
use crate::domain::entities::Entity;
use crate::domain::value_objects::CurrentUser;
use crate::infrastructure::cache::QueryCache;
use crate::infrastructure::http::HttpBackend;
use crate::infrastructure::ui::{HistoryNavigator, ToastLog};
use crate::presentation::pages::{CreatePage, EditPage, IndexPage};
use crate::presentation::table::TableEntity;
use crate::shared::{AppConfig, Result};
use std::sync::Arc;

/// コンソール全体の状態を管理する構造体
#[derive(Clone)]
pub struct ConsoleState {
    pub config: AppConfig,
    pub facade: Arc<BackendFacade>,
    pub current_user_service: Arc<CurrentUserService>,
    pub navigator: Arc<HistoryNavigator>,
    pub notifier: Arc<ToastLog>,
}

impl ConsoleState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;
        let backend = HttpBackend::new(&config.backend)?;
        tracing::info!(backend = backend.base_url(), "backend configured");
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// 任意のバックエンド実装で組み立てる
    pub fn with_backend(config: AppConfig, backend: Arc<dyn Backend>) -> Self {
        let cache = Arc::new(QueryCache::new(config.cache.ttl_secs));
        let facade = Arc::new(BackendFacade::new(backend, cache));
        let current_user_service = Arc::new(CurrentUserService::new(Arc::clone(&facade)));

        Self {
            config,
            facade,
            current_user_service,
            navigator: Arc::new(HistoryNavigator::new("/")),
            notifier: Arc::new(ToastLog::new()),
        }
    }

    pub async fn current_user(&self) -> CurrentUser {
        self.current_user_service.current_user().await
    }

    fn navigator(&self) -> Arc<dyn Navigator> {
        self.navigator.clone()
    }

    fn notifier(&self) -> Arc<dyn Notifier> {
        self.notifier.clone()
    }

    pub fn index_page<E: TableEntity>(&self, current_user: CurrentUser) -> IndexPage<E> {
        IndexPage::new(
            Arc::clone(&self.facade),
            current_user,
            self.navigator(),
            self.notifier(),
        )
    }

    pub fn create_page<E: Entity>(&self) -> CreatePage<E> {
        CreatePage::new(Arc::clone(&self.facade), self.navigator(), self.notifier())
    }

    pub fn edit_page<E: Entity>(&self, route_param: &str) -> Result<EditPage<E>> {
        EditPage::from_route_param(
            route_param,
            Arc::clone(&self.facade),
            self.navigator(),
            self.notifier(),
        )
    }
}
