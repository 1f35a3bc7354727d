pub mod backend;
pub mod cache;
pub mod navigator;
pub mod notifier;

pub use backend::{Backend, BackendRequest, HttpMethod};
pub use cache::ResponseCache;
pub use navigator::{Navigation, Navigator};
pub use notifier::Notifier;
