pub mod list;
pub mod models;

pub use list::{list_models, list_operations};
pub use models::{ModelsConfig, generate_models};
