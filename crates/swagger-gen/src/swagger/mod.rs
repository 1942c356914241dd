pub mod document;
pub mod schema;

pub use document::SwaggerDocument;
pub use schema::Schema;
