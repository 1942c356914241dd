//! Resolved, language-agnostic descriptions of schema nodes.
//!
//! A [`Model`] is what the emission stage renders: an interface, an enum, a
//! typed array, a primitive alias, or an untyped fallback. Exactly one kind is
//! carried, so the enum/interface/type flags can never be set together.

use serde::Serialize;

pub(crate) const ANY_TYPE: &str = "any";
pub(crate) const INTERFACE_BASE: &str = "interface";

/// Type information produced by the type mapper and by anonymous resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
  pub rendered_type: String,
  pub base_type: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub template: Option<String>,
  pub imports: Vec<String>,
}

impl TypeInfo {
  pub fn new(rendered_type: impl Into<String>, base_type: impl Into<String>) -> Self {
    Self {
      rendered_type: rendered_type.into(),
      base_type: base_type.into(),
      template: None,
      imports: vec![],
    }
  }

  pub fn any() -> Self {
    Self::new(ANY_TYPE, ANY_TYPE)
  }

  #[must_use]
  pub fn with_template(mut self, template: Option<String>) -> Self {
    self.template = template;
    self
  }

  #[must_use]
  pub fn with_imports(mut self, imports: Vec<String>) -> Self {
    self.imports = imports;
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EnumValue {
  String(String),
  Number(String),
}

impl EnumValue {
  /// The value as it appears in a rendered union or allowed-values list.
  pub fn literal(&self) -> String {
    match self {
      Self::String(value) => format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")),
      Self::Number(value) => value.clone(),
    }
  }

  pub fn is_number(&self) -> bool {
    matches!(self, Self::Number(_))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumSymbol {
  pub name: String,
  pub value: EnumValue,
}

impl EnumSymbol {
  pub fn new(name: impl Into<String>, value: EnumValue) -> Self {
    Self {
      name: name.into(),
      value,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, bon::Builder)]
#[serde(rename_all = "camelCase")]
pub struct PropertyModel {
  #[builder(into)]
  pub name: String,
  #[builder(into)]
  #[serde(rename = "type")]
  pub property_type: String,
  #[builder(default)]
  pub required: bool,
  #[builder(default)]
  pub nullable: bool,
  #[builder(default)]
  pub read_only: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ModelKind {
  Enum {
    symbols: Vec<EnumSymbol>,
    rendered_type: String,
    base_type: String,
    validation: String,
  },
  Array {
    rendered_type: String,
    base_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    validation: String,
  },
  Interface {
    properties: Vec<PropertyModel>,
    extends: Vec<String>,
  },
  Primitive {
    rendered_type: String,
    base_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
  },
  Untyped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub imports: Vec<String>,
  #[serde(flatten)]
  pub kind: ModelKind,
}

impl Model {
  pub(crate) fn untyped(name: &str, description: Option<String>) -> Self {
    Self {
      name: name.to_string(),
      description,
      imports: vec![],
      kind: ModelKind::Untyped,
    }
  }

  pub fn is_enum(&self) -> bool {
    matches!(self.kind, ModelKind::Enum { .. })
  }

  pub fn is_interface(&self) -> bool {
    matches!(self.kind, ModelKind::Interface { .. })
  }

  /// Typed arrays and primitive aliases are both plain type models.
  pub fn is_type(&self) -> bool {
    matches!(self.kind, ModelKind::Array { .. } | ModelKind::Primitive { .. })
  }

  pub fn is_untyped(&self) -> bool {
    matches!(self.kind, ModelKind::Untyped)
  }

  pub fn rendered_type(&self) -> &str {
    match &self.kind {
      ModelKind::Enum { rendered_type, .. }
      | ModelKind::Array { rendered_type, .. }
      | ModelKind::Primitive { rendered_type, .. } => rendered_type,
      ModelKind::Interface { .. } => &self.name,
      ModelKind::Untyped => ANY_TYPE,
    }
  }

  pub fn base_type(&self) -> &str {
    match &self.kind {
      ModelKind::Enum { base_type, .. } | ModelKind::Array { base_type, .. } | ModelKind::Primitive { base_type, .. } => {
        base_type
      }
      ModelKind::Interface { .. } => INTERFACE_BASE,
      ModelKind::Untyped => ANY_TYPE,
    }
  }

  pub fn template(&self) -> Option<&str> {
    match &self.kind {
      ModelKind::Array { template, .. } | ModelKind::Primitive { template, .. } => template.as_deref(),
      _ => None,
    }
  }

  pub fn validation_expression(&self) -> Option<&str> {
    match &self.kind {
      ModelKind::Enum { validation, .. } | ModelKind::Array { validation, .. } => Some(validation),
      _ => None,
    }
  }

  pub fn enum_symbols(&self) -> &[EnumSymbol] {
    match &self.kind {
      ModelKind::Enum { symbols, .. } => symbols,
      _ => &[],
    }
  }

  pub fn properties(&self) -> &[PropertyModel] {
    match &self.kind {
      ModelKind::Interface { properties, .. } => properties,
      _ => &[],
    }
  }

  pub fn extends(&self) -> &[String] {
    match &self.kind {
      ModelKind::Interface { extends, .. } => extends,
      _ => &[],
    }
  }
}
