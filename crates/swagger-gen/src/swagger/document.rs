use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use super::Schema;

/// A Swagger 2.0 document, reduced to the parts schema and operation
/// resolution read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerDocument {
  #[serde(default = "default_swagger_version")]
  pub swagger: String,
  #[serde(default)]
  pub info: Info,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub base_path: Option<String>,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub definitions: IndexMap<String, Schema>,
  #[serde(default)]
  pub parameters: IndexMap<String, Parameter>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
}

fn default_swagger_version() -> String {
  "2.0".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub get: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub put: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub post: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delete: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub head: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub patch: Option<Operation>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<Parameter>,
}

impl PathItem {
  pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
    match method {
      HttpMethod::Get => self.get.as_ref(),
      HttpMethod::Put => self.put.as_ref(),
      HttpMethod::Post => self.post.as_ref(),
      HttpMethod::Delete => self.delete.as_ref(),
      HttpMethod::Options => self.options.as_ref(),
      HttpMethod::Head => self.head.as_ref(),
      HttpMethod::Patch => self.patch.as_ref(),
    }
  }

  /// Operations in the fixed Swagger method order.
  pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
    HttpMethod::iter().filter_map(|method| self.operation(method).map(|op| (method, op)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub parameters: Vec<Parameter>,
  #[serde(default)]
  pub responses: IndexMap<String, Response>,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub deprecated: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
  #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<Schema>,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub param_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
  #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
  pub ref_path: Option<String>,
  #[serde(default)]
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<Schema>,
}

impl SwaggerDocument {
  /// Every `(path, method, operation)` triple in document order.
  pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
    self
      .paths
      .iter()
      .flat_map(|(path, item)| item.operations().map(move |(method, op)| (path.as_str(), method, op)))
  }
}
