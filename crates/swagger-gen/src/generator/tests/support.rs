use serde_json::{Value, json};

use crate::swagger::{Schema, SwaggerDocument};

pub(super) fn schema(value: Value) -> Schema {
  serde_json::from_value(value).unwrap()
}

pub(super) fn document_with_definitions(definitions: Value) -> SwaggerDocument {
  serde_json::from_value(json!({
    "swagger": "2.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "definitions": definitions
  }))
  .unwrap()
}

pub(super) fn document(value: Value) -> SwaggerDocument {
  serde_json::from_value(value).unwrap()
}

pub(super) fn empty_document() -> SwaggerDocument {
  document_with_definitions(json!({}))
}
