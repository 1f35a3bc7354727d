pub mod cache_key;
pub mod current_user;
pub mod entity_kind;
pub mod record_key;

pub use cache_key::CacheKey;
pub use current_user::{CurrentUser, ROLE_ADMIN, ROLE_USER};
pub use entity_kind::EntityKind;
pub use record_key::{NumericId, OrgCode, RecordKey};
