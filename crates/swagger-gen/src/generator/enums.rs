use std::{
  collections::{BTreeSet, HashSet},
  sync::LazyLock,
};

use itertools::Itertools;
use regex::Regex;
use serde_json::Value;

use super::{
  model::{EnumSymbol, EnumValue},
  naming::identifiers::{ensure_unique, sanitize, to_symbol_name},
};

const NUMBER_PREFIX: &str = "NUM_";
const NEGATIVE_PREFIX: &str = "MINUS_";

/// Listings such as `0 = Inactive, 1 = Active` or `2 - Pending`. A code must open
/// the text or follow a `,`, `;`, `:` or line break.
static DESCRIBED_CODE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?:^|[,;:\n])\s*(-?\d+)\s*(?:=|:|-|–|—)\s*([A-Za-z_]\w*)").unwrap());

/// Extracts enumeration symbols from literal lists and from descriptions.
pub(crate) struct EnumExtractor;

impl EnumExtractor {
  /// Symbols for an explicit `enum` list, in declaration order.
  ///
  /// Nulls, arrays and objects carry no symbol. Booleans are treated as strings.
  pub(crate) fn from_values(values: &[Value]) -> Vec<EnumSymbol> {
    let symbols = values.iter().filter_map(|value| match value {
      Value::String(text) => Some(EnumSymbol::new(to_symbol_name(text), EnumValue::String(text.clone()))),
      Value::Bool(flag) => Some(EnumSymbol::new(
        to_symbol_name(&flag.to_string()),
        EnumValue::String(flag.to_string()),
      )),
      Value::Number(number) => {
        let literal = number.to_string();
        Some(EnumSymbol::new(number_symbol_name(&literal), EnumValue::Number(literal)))
      }
      Value::Null | Value::Array(_) | Value::Object(_) => None,
    });
    dedupe_values(symbols)
  }

  /// Symbols encoded in a description as `<code> = <meaning>` pairs.
  ///
  /// ```text
  /// "Status: 0 = Inactive, 1 = Active" => [INACTIVE = 0, ACTIVE = 1]
  /// ```
  pub(crate) fn from_description(description: &str) -> Vec<EnumSymbol> {
    let symbols = DESCRIBED_CODE_RE.captures_iter(description).filter_map(|captures| {
      let code = captures[1].parse::<i64>().ok()?;
      let name = to_symbol_name(&captures[2]);
      Some(EnumSymbol::new(name, EnumValue::Number(code.to_string())))
    });
    dedupe_values(symbols)
  }

  /// A union of the distinct literal values, e.g. `'a' | 'b'`.
  pub(crate) fn union_type(symbols: &[EnumSymbol]) -> String {
    Self::allowed_values(symbols).join(" | ")
  }

  /// Distinct literal values in symbol order.
  pub(crate) fn allowed_values(symbols: &[EnumSymbol]) -> Vec<String> {
    symbols.iter().map(|symbol| symbol.value.literal()).unique().collect()
  }
}

fn number_symbol_name(literal: &str) -> String {
  match literal.strip_prefix('-') {
    Some(magnitude) => format!("{NUMBER_PREFIX}{NEGATIVE_PREFIX}{}", sanitize(magnitude)),
    None => format!("{NUMBER_PREFIX}{}", sanitize(literal)),
  }
}

/// Keeps the first symbol per value; later symbols whose names collide get a numeric suffix.
fn dedupe_values(symbols: impl Iterator<Item = EnumSymbol>) -> Vec<EnumSymbol> {
  let mut seen_values = HashSet::new();
  let mut used_names = BTreeSet::new();

  symbols
    .filter(|symbol| seen_values.insert(symbol.value.clone()))
    .map(|mut symbol| {
      symbol.name = ensure_unique(&symbol.name, &used_names);
      used_names.insert(symbol.name.clone());
      symbol
    })
    .collect()
}
