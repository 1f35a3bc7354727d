pub mod entities;
pub mod validation;
pub mod value_objects;
