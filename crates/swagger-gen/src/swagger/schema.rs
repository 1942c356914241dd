use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const TYPE_ARRAY: &str = "array";
pub const TYPE_OBJECT: &str = "object";
pub const TYPE_INTEGER: &str = "integer";
pub const TYPE_INT: &str = "int";

/// A single Swagger 2.0 schema object.
///
/// Swagger allows a `$ref` on any schema node, so references are carried as an
/// optional pointer instead of a separate reference variant. Properties keep the
/// order in which the document declares them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
  pub enum_values: Vec<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<Schema>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub properties: Option<IndexMap<String, Schema>>,
  #[serde(default, deserialize_with = "required_names", skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub read_only: bool,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub all_of: Vec<Schema>,
}

impl Schema {
  pub fn reference(ref_path: impl Into<String>) -> Self {
    Self {
      ref_path: Some(ref_path.into()),
      ..Default::default()
    }
  }

  pub fn is_reference(&self) -> bool {
    self.ref_path.is_some()
  }

  pub fn is_type(&self, schema_type: &str) -> bool {
    self.schema_type.as_deref() == Some(schema_type)
  }

  pub fn is_array(&self) -> bool {
    self.is_type(TYPE_ARRAY)
  }

  pub fn is_object(&self) -> bool {
    self.is_type(TYPE_OBJECT)
  }

  /// Accepts the legacy `int` spelling alongside `integer`.
  pub fn is_integer(&self) -> bool {
    self.is_type(TYPE_INTEGER) || self.is_type(TYPE_INT)
  }

  pub fn has_enum_values(&self) -> bool {
    !self.enum_values.is_empty()
  }

  pub fn has_composition(&self) -> bool {
    !self.all_of.is_empty()
  }

  /// Declared properties as ordered `(name, schema)` pairs.
  pub fn declared_properties(&self) -> impl Iterator<Item = (&str, &Schema)> {
    self
      .properties
      .iter()
      .flat_map(IndexMap::iter)
      .map(|(name, schema)| (name.as_str(), schema))
  }

  pub fn is_required(&self, property_name: &str) -> bool {
    self.required.iter().any(|name| name == property_name)
  }

  /// Every `$ref` pointer reachable inside this node, in document order.
  pub fn collect_refs<'a>(&'a self, refs: &mut Vec<&'a str>) {
    if let Some(ref_path) = &self.ref_path {
      refs.push(ref_path);
    }
    if let Some(items) = &self.items {
      items.collect_refs(refs);
    }
    for (_, property) in self.declared_properties() {
      property.collect_refs(refs);
    }
    for parent in &self.all_of {
      parent.collect_refs(refs);
    }
  }
}

/// Some documents put `required: true` on a property schema instead of listing
/// names on the parent. That form carries no names and is read as empty.
fn required_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Required {
    Names(Vec<String>),
    Flag(bool),
  }

  Ok(match Option::<Required>::deserialize(deserializer)? {
    Some(Required::Names(names)) => names,
    Some(Required::Flag(_)) | None => Vec::new(),
  })
}
