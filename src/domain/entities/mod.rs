pub mod help_request;
pub mod menu_item;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod values;

pub use help_request::{HelpRequest, HelpRequestDraft, HelpRequestField};
pub use menu_item::{MenuItem, MenuItemDraft, MenuItemField};
pub use menu_item_review::{MenuItemReview, MenuItemReviewDraft, MenuItemReviewField};
pub use organization::{Organization, OrganizationChanges, OrganizationDraft, OrganizationField};
pub use recommendation_request::{
    RecommendationRequest, RecommendationRequestDraft, RecommendationRequestField,
};

use crate::domain::validation::{FieldKey, FieldValues};
use crate::domain::value_objects::{EntityKind, RecordKey};
use crate::shared::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 管理対象エンティティ（サーバーが正とするフラットなレコード）
///
/// - `Key`: バックエンドが割り当てる識別子
/// - `Field`: 編集可能フィールドの列挙（コンパイル時に固定）
/// - `Draft`: 作成リクエストのクエリパラメータ
/// - `Changes`: 更新リクエストのボディ（可変フィールドのみ）
pub trait Entity:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Key: RecordKey;
    type Field: FieldKey;
    type Draft: Serialize + fmt::Debug + Send + Sync;
    type Changes: Serialize + fmt::Debug + Send + Sync;

    const KIND: EntityKind;

    /// 作成時にユーザーが入力する業務キー。編集時は無効化された識別子として表示される。
    const KEY_FIELD: Option<Self::Field> = None;

    fn key(&self) -> Self::Key;

    /// フォームの初期値として表示する文字列
    fn field_value(&self, field: Self::Field) -> String;

    fn draft_from(values: &FieldValues<Self::Field>) -> Result<Self::Draft>;

    fn changes_from(values: &FieldValues<Self::Field>) -> Result<Self::Changes>;

    /// 通知メッセージ用の短い要約
    fn summary(&self) -> String;

    fn field_values(&self) -> FieldValues<Self::Field> {
        let mut values = FieldValues::defaults();
        for field in <Self::Field as FieldKey>::ALL {
            values.set(*field, self.field_value(*field));
        }
        values
    }
}
