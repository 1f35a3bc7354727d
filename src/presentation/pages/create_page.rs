use super::{RenderedFormPage, SubmitResult, decode_record};
use crate::application::ports::{Navigation, Navigator, Notifier};
use crate::application::services::{BackendFacade, EntityApi};
use crate::domain::entities::Entity;
use crate::presentation::form::{EntityForm, FormSubmission, SubmitAction};
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// 応答待ちの間は `submit(&mut self)` が排他借用を保持するため、
/// 同じページから二重に送信されることはない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateState {
    Editing,
    Submitted,
}

struct CreateAction<E> {
    facade: Arc<BackendFacade>,
    _entity: PhantomData<fn() -> E>,
}

#[async_trait]
impl<E: Entity> SubmitAction<E> for CreateAction<E> {
    type Output = Value;

    async fn submit(&self, submission: FormSubmission<E>) -> Result<Value> {
        let mutation = EntityApi::<E>::create(&submission.draft()?)?;
        self.facade.mutate(&mutation).await
    }
}

/// 作成ページ
pub struct CreatePage<E: Entity> {
    facade: Arc<BackendFacade>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    form: EntityForm<E>,
    state: CreateState,
}

impl<E: Entity> CreatePage<E> {
    pub fn new(
        facade: Arc<BackendFacade>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            form: EntityForm::create(Arc::clone(&navigator)),
            facade,
            navigator,
            notifier,
            state: CreateState::Editing,
        }
    }

    pub fn state(&self) -> CreateState {
        self.state
    }

    pub fn title(&self) -> String {
        format!("Create New {}", E::KIND)
    }

    pub fn form(&self) -> &EntityForm<E> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EntityForm<E> {
        &mut self.form
    }

    pub async fn submit(&mut self) -> SubmitResult<E> {
        if self.state != CreateState::Editing {
            tracing::debug!(entity = %E::KIND, state = ?self.state, "ignored create submission");
            return SubmitResult::Ignored;
        }

        let action = CreateAction::<E> {
            facade: Arc::clone(&self.facade),
            _entity: PhantomData,
        };

        match self.form.submit_with(&action).await {
            Ok(Some(response)) => {
                let record = decode_record::<E>(response);
                let message = match &record {
                    Some(record) => format!("New {} Created - {}", E::KIND, record.summary()),
                    None => format!("New {} Created", E::KIND),
                };
                self.notifier.notify(&message);
                self.state = CreateState::Submitted;
                tracing::info!(entity = %E::KIND, "record created");
                self.navigator
                    .navigate(Navigation::To(E::KIND.route_base().to_string()));
                SubmitResult::Saved(record)
            }
            Ok(None) => SubmitResult::Invalid,
            Err(e) => {
                tracing::error!(entity = %E::KIND, error = %e, code = e.code(), "create failed");
                SubmitResult::Failed(e)
            }
        }
    }

    pub fn render(&self) -> RenderedFormPage {
        RenderedFormPage {
            title: self.title(),
            form: (self.state != CreateState::Submitted).then(|| self.form.render()),
            submit_enabled: self.state == CreateState::Editing,
        }
    }
}
