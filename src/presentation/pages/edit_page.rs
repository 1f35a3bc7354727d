use super::{RenderedFormPage, SubmitResult, UPDATE_LABEL, decode_record};
use crate::application::ports::{Navigation, Navigator, Notifier};
use crate::application::services::{BackendFacade, EntityApi};
use crate::domain::entities::Entity;
use crate::domain::value_objects::RecordKey;
use crate::presentation::form::{EntityForm, FormSubmission, SubmitAction};
use crate::shared::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// 更新の応答待ちは Populated のまま。`submit(&mut self)` の排他借用が二重送信を防ぐ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// レコード取得待ち。取得に失敗した場合もここに留まる。
    Loading,
    Populated,
    Submitted,
}

struct UpdateAction<E> {
    facade: Arc<BackendFacade>,
    _entity: PhantomData<fn() -> E>,
}

#[async_trait]
impl<E: Entity> SubmitAction<E> for UpdateAction<E> {
    type Output = Value;

    async fn submit(&self, submission: FormSubmission<E>) -> Result<Value> {
        let key = submission
            .key
            .clone()
            .ok_or_else(|| AppError::Internal("update requires a record key".to_string()))?;
        let mutation = EntityApi::<E>::update(&key, &submission.changes()?)?;
        self.facade.mutate(&mutation).await
    }
}

/// 編集ページ
pub struct EditPage<E: Entity> {
    key: E::Key,
    facade: Arc<BackendFacade>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    record: Option<E>,
    form: Option<EntityForm<E>>,
    state: EditState,
}

impl<E: Entity> EditPage<E> {
    pub fn new(
        key: E::Key,
        facade: Arc<BackendFacade>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            key,
            facade,
            navigator,
            notifier,
            record: None,
            form: None,
            state: EditState::Loading,
        }
    }

    /// ルートパラメータ（`<route>/edit/<key>`）から生成する
    pub fn from_route_param(
        raw: &str,
        facade: Arc<BackendFacade>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let key = E::Key::parse(raw).map_err(AppError::InvalidInput)?;
        Ok(Self::new(key, facade, navigator, notifier))
    }

    pub fn key(&self) -> &E::Key {
        &self.key
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn title(&self) -> String {
        format!("Edit {}", E::KIND)
    }

    pub fn record(&self) -> Option<&E> {
        self.record.as_ref()
    }

    pub fn form(&self) -> Option<&EntityForm<E>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EntityForm<E>> {
        self.form.as_mut()
    }

    /// レコードを取得してフォームを埋める。失敗時は再試行せず Loading のまま。
    pub async fn load(&mut self) -> EditState {
        if self.state != EditState::Loading {
            return self.state;
        }
        match self.facade.fetch_one::<E>(&self.key).await {
            Ok(record) => {
                self.form = Some(
                    EntityForm::edit(&record, Arc::clone(&self.navigator))
                        .with_submit_label(UPDATE_LABEL),
                );
                self.record = Some(record);
                self.state = EditState::Populated;
                tracing::info!(entity = %E::KIND, key = %self.key, "edit form populated");
            }
            Err(e) => {
                tracing::error!(
                    entity = %E::KIND,
                    key = %self.key,
                    error = %e,
                    code = e.code(),
                    "record fetch failed"
                );
            }
        }
        self.state
    }

    pub async fn submit(&mut self) -> SubmitResult<E> {
        if self.state != EditState::Populated {
            tracing::debug!(entity = %E::KIND, state = ?self.state, "ignored update submission");
            return SubmitResult::Ignored;
        }
        let Some(form) = self.form.as_mut() else {
            return SubmitResult::Ignored;
        };

        let action = UpdateAction::<E> {
            facade: Arc::clone(&self.facade),
            _entity: PhantomData,
        };

        match form.submit_with(&action).await {
            Ok(Some(response)) => {
                let saved = decode_record::<E>(response);
                let summary = saved
                    .as_ref()
                    .or(self.record.as_ref())
                    .map(|record| record.summary())
                    .unwrap_or_else(|| self.key.to_string());
                self.notifier
                    .notify(&format!("{} Updated - {}", E::KIND, summary));
                self.state = EditState::Submitted;
                tracing::info!(entity = %E::KIND, key = %self.key, "record updated");
                self.navigator
                    .navigate(Navigation::To(E::KIND.route_base().to_string()));
                SubmitResult::Saved(saved)
            }
            Ok(None) => SubmitResult::Invalid,
            Err(e) => {
                tracing::error!(
                    entity = %E::KIND,
                    key = %self.key,
                    error = %e,
                    code = e.code(),
                    "update failed"
                );
                SubmitResult::Failed(e)
            }
        }
    }

    pub fn render(&self) -> RenderedFormPage {
        let form = match self.state {
            EditState::Populated => self.form.as_ref().map(EntityForm::render),
            EditState::Loading | EditState::Submitted => None,
        };
        RenderedFormPage {
            title: self.title(),
            form,
            submit_enabled: self.state == EditState::Populated,
        }
    }
}
