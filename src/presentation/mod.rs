pub mod form;
pub mod pages;
pub mod table;

pub use form::{EntityForm, FormMode, FormSubmission, RenderedForm, SubmitAction, SubmitOutcome};
pub use pages::{CreatePage, EditPage, IndexPage, SubmitResult};
pub use table::{EntityTable, RenderedTable, TableEntity};
