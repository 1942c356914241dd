use serde_json::json;

use crate::generator::{
  enums::EnumExtractor,
  model::{EnumSymbol, EnumValue},
};

fn symbol(name: &str, value: EnumValue) -> EnumSymbol {
  EnumSymbol::new(name, value)
}

#[test]
fn test_string_values() {
  let values = [json!("in-stock"), json!("backOrder"), json!("it's")];
  let symbols = EnumExtractor::from_values(&values);

  assert_eq!(
    symbols,
    [
      symbol("IN_STOCK", EnumValue::String("in-stock".to_string())),
      symbol("BACK_ORDER", EnumValue::String("backOrder".to_string())),
      symbol("IT_S", EnumValue::String("it's".to_string())),
    ]
  );
  assert_eq!(
    EnumExtractor::union_type(&symbols),
    r"'in-stock' | 'backOrder' | 'it\'s'"
  );
}

#[test]
fn test_number_values() {
  let values = [json!(1), json!(-2), json!(1.5)];
  let names: Vec<String> = EnumExtractor::from_values(&values).into_iter().map(|s| s.name).collect();
  assert_eq!(names, ["NUM_1", "NUM_MINUS_2", "NUM_1_5"]);
}

#[test]
fn test_skips_null_and_suffixes_colliding_names() {
  let values = [json!(null), json!("a"), json!("A"), json!(true), json!({ "x": 1 })];
  let symbols = EnumExtractor::from_values(&values);

  let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(names, ["A", "A2", "TRUE"]);
  assert!(!symbols[2].value.is_number());
}

#[test]
fn test_values_sharing_a_symbol_name_are_all_kept() {
  let values = [json!("asc"), json!("ASC"), json!("in-progress"), json!("in_progress"), json!("asc")];
  let symbols = EnumExtractor::from_values(&values);

  let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(names, ["ASC", "ASC2", "IN_PROGRESS", "IN_PROGRESS2"]);
  assert_eq!(
    EnumExtractor::union_type(&symbols),
    "'asc' | 'ASC' | 'in-progress' | 'in_progress'"
  );
}

#[test]
fn test_description_codes() {
  let symbols = EnumExtractor::from_description("Order state:\n 0 = Placed\n 1 - Approved\n 2: Delivered\n 3 — Returned");

  assert_eq!(
    symbols,
    [
      symbol("PLACED", EnumValue::Number("0".to_string())),
      symbol("APPROVED", EnumValue::Number("1".to_string())),
      symbol("DELIVERED", EnumValue::Number("2".to_string())),
      symbol("RETURNED", EnumValue::Number("3".to_string())),
    ]
  );
  assert_eq!(EnumExtractor::allowed_values(&symbols), ["0", "1", "2", "3"]);
}

#[test]
fn test_description_without_codes() {
  assert!(EnumExtractor::from_description("The number of retries").is_empty());
  assert!(EnumExtractor::from_description("Created on 2024-01-01").is_empty());
  assert!(EnumExtractor::from_description("Max 5 - items per page").is_empty());
  assert!(EnumExtractor::from_description("Retries up to 3 - attempts, then fails").is_empty());
}

#[test]
fn test_description_codes_on_one_line() {
  let symbols = EnumExtractor::from_description("Status: 0 = Inactive, 1 = Active; -1 = Deleted");
  let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(names, ["INACTIVE", "ACTIVE", "DELETED"]);
  assert_eq!(EnumExtractor::allowed_values(&symbols), ["0", "1", "-1"]);
}

#[test]
fn test_description_duplicates() {
  let symbols = EnumExtractor::from_description("1 = Open, 2 = Open, 1 = Closed");
  let values: Vec<String> = symbols.iter().map(|s| s.value.literal()).collect();
  let names: Vec<&str> = symbols.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(values, ["1", "2"]);
  assert_eq!(names, ["OPEN", "OPEN2"]);
}
