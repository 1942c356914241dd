use serde_json::json;

use super::support::{document, document_with_definitions, schema};
use crate::{
  generator::{
    errors::RefError,
    refs::{RefResolver, reference_name},
  },
  swagger::Schema,
};

#[test]
fn test_reference_names() {
  let cases = [
    ("#/definitions/Pet", "Pet"),
    ("#/definitions/a~1b", "a/b"),
    ("#/definitions/tilde~0name", "tilde~name"),
    ("#/definitions/Page%C2%ABPet%C2%BB", "Page«Pet»"),
    ("Pet", "Pet"),
  ];
  for (input, expected) in cases {
    assert_eq!(reference_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_type_of_reference() {
  let document = document_with_definitions(json!({}));
  let refs = RefResolver::new(&document);

  let info = refs.type_of("#/definitions/Order");
  assert_eq!(info.rendered_type, "Order");
  assert_eq!(info.imports, ["Order"]);
}

#[test]
fn test_inline_schema_resolves_to_itself() {
  let document = document_with_definitions(json!({}));
  let refs = RefResolver::new(&document);
  let node = schema(json!({ "type": "string" }));

  assert_eq!(refs.resolve_schema(&node), Ok(&node));
}

#[test]
fn test_follows_reference_chains() {
  let document = document_with_definitions(json!({
    "Alias": { "$ref": "#/definitions/Pet" },
    "Pet": { "type": "object", "properties": { "name": { "type": "string" } } }
  }));
  let refs = RefResolver::new(&document);

  let alias = Schema::reference("#/definitions/Alias");
  let resolved = refs.resolve_schema(&alias).unwrap();
  assert!(resolved.is_object());
  assert_eq!(resolved.declared_properties().count(), 1);
}

#[test]
fn test_parameter_and_response_pointers() {
  let document = document(json!({
    "parameters": {
      "PetBody": { "name": "body", "in": "body", "schema": { "type": "string" } }
    },
    "responses": {
      "NotFound": { "description": "missing", "schema": { "type": "integer" } }
    }
  }));
  let refs = RefResolver::new(&document);

  assert!(refs.lookup("#/parameters/PetBody").unwrap().is_type("string"));
  assert!(refs.lookup("#/responses/NotFound").unwrap().is_integer());
}

#[test]
fn test_reference_errors() {
  let document = document_with_definitions(json!({}));
  let refs = RefResolver::new(&document);

  assert_eq!(
    refs.lookup("#/definitions/Missing"),
    Err(RefError::Dangling("#/definitions/Missing".to_string()))
  );
  assert_eq!(
    refs.lookup("other.json#/definitions/Pet"),
    Err(RefError::External("other.json#/definitions/Pet".to_string()))
  );
  assert_eq!(
    refs.lookup("#/info/title"),
    Err(RefError::Unsupported("#/info/title".to_string()))
  );
}

#[test]
fn test_cyclic_chain_is_reported() {
  let document = document_with_definitions(json!({
    "A": { "$ref": "#/definitions/B" },
    "B": { "$ref": "#/definitions/A" }
  }));
  let refs = RefResolver::new(&document);

  let start = Schema::reference("#/definitions/A");
  let error = refs.resolve_schema(&start).unwrap_err();
  assert_eq!(
    error,
    RefError::CyclicSchemaReference(vec![
      "#/definitions/A".to_string(),
      "#/definitions/B".to_string(),
      "#/definitions/A".to_string(),
    ])
  );
  assert_eq!(
    error.to_string(),
    "cyclic schema reference: #/definitions/A -> #/definitions/B -> #/definitions/A"
  );
}
