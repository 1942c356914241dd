use std::fmt;

use super::{model::ANY_TYPE, naming::identifiers::is_plain_identifier};

/// A runtime validator expression assembled for a model.
///
/// The expression is opaque to resolution; the emission stage pastes it into
/// generated source as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Validator {
  /// Accepts exactly the listed literals.
  OneOf { model: String, values: Vec<String> },
  /// Accepts arrays whose elements pass the element validator.
  ArrayOf { model: String, element: ElementValidator },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ElementValidator {
  Primitive(&'static str),
  Named(String),
  Mixed,
}

impl ElementValidator {
  /// Picks the element validator from an element's base type.
  pub(crate) fn for_base_type(base_type: &str) -> Self {
    match base_type {
      "string" => Self::Primitive("string"),
      "number" => Self::Primitive("number"),
      "boolean" => Self::Primitive("boolean"),
      "" | ANY_TYPE => Self::Mixed,
      named if is_plain_identifier(named) => Self::Named(named.to_string()),
      _ => Self::Mixed,
    }
  }
}

impl fmt::Display for ElementValidator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Primitive(kind) => write!(f, "yup.{kind}()"),
      Self::Named(name) => write!(f, "{name}.schema"),
      Self::Mixed => f.write_str("yup.mixed()"),
    }
  }
}

impl fmt::Display for Validator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OneOf { model, values } => write!(f, "yup.mixed<{model}>().oneOf([{}])", values.join(", ")),
      Self::ArrayOf { model, element } => write!(f, "yup.array<{model}>().of({element})"),
    }
  }
}
