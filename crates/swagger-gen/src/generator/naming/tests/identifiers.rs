use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  capitalize_first, ensure_unique, sanitize, to_camel_identifier, to_symbol_name,
};

#[test]
fn test_sanitize() {
  let cases = [
    ("hello world", "hello_world"),
    ("__foo--bar__", "foo_bar"),
    ("café", "cafe"),
    ("", ""),
    ("!!!", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(sanitize(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_symbol_names() {
  let cases = [
    ("available", "AVAILABLE"),
    ("in-progress", "IN_PROGRESS"),
    ("sold out", "SOLD_OUT"),
    ("camelCase", "CAMEL_CASE"),
    ("1st", "_1ST"),
    ("", "EMPTY"),
    ("   ", "EMPTY"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_symbol_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_capitalize_first() {
  assert_eq!(capitalize_first("orders"), "Orders");
  assert_eq!(capitalize_first("petStore"), "PetStore");
  assert_eq!(capitalize_first(""), "");
}

#[test]
fn test_camel_identifiers() {
  let cases = [
    ("users", "users"),
    ("v2", "v2"),
    ("pet-store", "petStore"),
    ("user_id", "userId"),
    ("Orders", "orders"),
    ("orders.xml", "ordersXml"),
    ("b.c-d_e", "bCDE"),
    ("user2Id", "user2Id"),
    ("v2beta", "v2Beta"),
    ("HTTPServer", "httpServer"),
    ("list_users_v2", "listUsersV2"),
    ("", ""),
  ];
  for (input, expected) in cases {
    assert_eq!(to_camel_identifier(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_ensure_unique() {
  let used = BTreeSet::from(["getPets".to_string(), "getPets2".to_string()]);
  assert_eq!(ensure_unique("getPets", &used), "getPets3");
  assert_eq!(ensure_unique("postPets", &used), "postPets");
}
