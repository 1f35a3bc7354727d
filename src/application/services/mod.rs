pub mod backend_facade;
pub mod current_user_service;
pub mod mutation;

pub use backend_facade::BackendFacade;
pub use current_user_service::CurrentUserService;
pub use mutation::{EntityApi, Mutation};
