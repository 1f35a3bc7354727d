use crate::application::ports::{Navigation, Navigator};
use crate::domain::entities::Entity;
use crate::domain::validation::{FieldKey, FieldValues, InputKind, RuleSet, ValidationErrors};
use crate::shared::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_SUBMIT_LABEL: &str = "Create";

/// マウント時に決まるフォームのモード。以後は切り替わらない。
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<K> {
    Create,
    Edit(K),
}

/// 検証を通過したフォーム値
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission<E: Entity> {
    /// 編集モードのときのみ識別子を持つ
    pub key: Option<E::Key>,
    pub values: FieldValues<E::Field>,
}

impl<E: Entity> FormSubmission<E> {
    pub fn draft(&self) -> Result<E::Draft> {
        E::draft_from(&self.values)
    }

    pub fn changes(&self) -> Result<E::Changes> {
        E::changes_from(&self.values)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<E: Entity> {
    Accepted(FormSubmission<E>),
    Blocked(ValidationErrors<E::Field>),
}

/// 呼び出し側が渡す送信処理
#[async_trait]
pub trait SubmitAction<E: Entity>: Send + Sync {
    type Output: Send;

    async fn submit(&self, submission: FormSubmission<E>) -> Result<Self::Output>;
}

/// 1 レコード分の編集フォーム
pub struct EntityForm<E: Entity> {
    mode: FormMode<E::Key>,
    rules: RuleSet<E::Field>,
    values: FieldValues<E::Field>,
    errors: ValidationErrors<E::Field>,
    attempted: bool,
    submit_label: String,
    navigator: Arc<dyn Navigator>,
}

impl<E: Entity> EntityForm<E> {
    /// 作成モード。識別子は表示せず、各フィールドは既定値から始まる。
    pub fn create(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            mode: FormMode::Create,
            rules: RuleSet::all(),
            values: FieldValues::defaults(),
            errors: ValidationErrors::empty(),
            attempted: false,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            navigator,
        }
    }

    /// 編集モード。既存レコードの値で埋め、識別子は変更不可。
    pub fn edit(record: &E, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            mode: FormMode::Edit(record.key()),
            rules: RuleSet::excluding(E::KEY_FIELD),
            values: record.field_values(),
            errors: ValidationErrors::empty(),
            attempted: false,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            navigator,
        }
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn mode(&self) -> &FormMode<E::Key> {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn values(&self) -> &FieldValues<E::Field> {
        &self.values
    }

    pub fn value(&self, field: E::Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors<E::Field> {
        &self.errors
    }

    pub fn error_message(&self, field: E::Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    fn is_locked(&self, field: E::Field) -> bool {
        self.is_edit() && E::KEY_FIELD == Some(field)
    }

    /// 入力値を更新する。一度送信を試みた後は、そのフィールドを再検証する。
    pub fn set_value(&mut self, field: E::Field, value: impl Into<String>) {
        if self.is_locked(field) {
            tracing::debug!(field = field.name(), "ignored edit of identifier field");
            return;
        }
        let value = value.into();
        if self.attempted {
            self.errors
                .replace(field, self.rules.check_field(field, &value));
        }
        self.values.set(field, value);
    }

    /// 検証なしで一つ前の画面に戻る
    pub fn cancel(&self) {
        self.navigator.navigate(Navigation::Back);
    }

    /// 全フィールドを検証し、通過すれば送信値を返す
    pub fn submit(&mut self) -> SubmitOutcome<E> {
        self.attempted = true;
        self.errors = self.rules.evaluate(&self.values);
        if !self.errors.is_empty() {
            tracing::debug!(
                entity = %E::KIND,
                failing = self.errors.len(),
                "form submission blocked"
            );
            return SubmitOutcome::Blocked(self.errors.clone());
        }

        let key = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(key) => Some(key.clone()),
        };
        SubmitOutcome::Accepted(FormSubmission {
            key,
            values: self.values.clone(),
        })
    }

    /// 検証を通過した場合に限り、送信処理をちょうど一度呼び出す
    pub async fn submit_with<A>(&mut self, action: &A) -> Result<Option<A::Output>>
    where
        A: SubmitAction<E>,
    {
        match self.submit() {
            SubmitOutcome::Accepted(submission) => action.submit(submission).await.map(Some),
            SubmitOutcome::Blocked(_) => Ok(None),
        }
    }

    pub fn render(&self) -> RenderedForm {
        let prefix = E::KIND.form_test_id();
        let mut fields = Vec::with_capacity(<E::Field as FieldKey>::ALL.len() + 1);

        if let FormMode::Edit(key) = &self.mode
            && E::KEY_FIELD.is_none()
        {
            fields.push(RenderedField {
                name: "id",
                label: "Id",
                test_id: format!("{prefix}-id"),
                input: InputKind::Text,
                value: key.to_string(),
                disabled: true,
                error: None,
            });
        }

        for field in <E::Field as FieldKey>::ALL {
            fields.push(RenderedField {
                name: field.name(),
                label: field.label(),
                test_id: format!("{prefix}-{}", field.name()),
                input: field.input(),
                value: self.values.get(*field).to_string(),
                disabled: self.is_locked(*field),
                error: self.errors.message(*field),
            });
        }

        RenderedForm {
            submit: RenderedButton {
                label: self.submit_label.clone(),
                test_id: format!("{prefix}-submit"),
            },
            cancel: RenderedButton {
                label: "Cancel".to_string(),
                test_id: format!("{prefix}-cancel"),
            },
            test_id: prefix,
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedField {
    pub name: &'static str,
    pub label: &'static str,
    pub test_id: String,
    pub input: InputKind,
    pub value: String,
    pub disabled: bool,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    pub label: String,
    pub test_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedForm {
    pub test_id: String,
    pub fields: Vec<RenderedField>,
    pub submit: RenderedButton,
    pub cancel: RenderedButton,
}

impl RenderedForm {
    pub fn field(&self, name: &str) -> Option<&RenderedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.fields.iter().filter_map(|field| field.error).collect()
    }
}

impl fmt::Display for RenderedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            write!(f, "{}: {}", field.label, field.value)?;
            if field.disabled {
                f.write_str(" (read-only)")?;
            }
            writeln!(f)?;
            if let Some(error) = field.error {
                writeln!(f, "  ! {error}")?;
            }
        }
        write!(f, "[{}] [{}]", self.submit.label, self.cancel.label)
    }
}
