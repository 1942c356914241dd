use std::collections::BTreeSet;

use strum::Display;

use crate::generator::naming::identifiers::{capitalize_first, ensure_unique, to_camel_identifier};

const PARAMS_PREFIX: &str = "By";
const PARAMS_SEPARATOR: &str = "And";

/// How an operation's method name is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OperationNamingPolicy {
  /// Derive the name from the URL template and method. The `operationId` is ignored.
  #[default]
  PathDerived,
  /// Use the camel-cased `operationId` when the operation declares one.
  PreferOperationId,
}

/// Derives a camel-case method identifier from a URL template and HTTP method.
///
/// Literal segments form the name body. When more than one literal segment is
/// present the first is dropped as a shared namespace prefix. Path parameters
/// contribute a `By…And…` suffix in declaration order.
///
/// # Example
///
/// ```text
/// ("/users/{id}/orders", "GET") => "getOrdersById"
/// ("/a/{x}/b/{y}", "put")       => "putBByXAndY"
/// ("/", "GET")                  => "get"
/// ```
pub fn operation_name(url: &str, method: &str, operation_id: Option<&str>, policy: OperationNamingPolicy) -> String {
  if policy == OperationNamingPolicy::PreferOperationId
    && let Some(id) = operation_id.map(to_camel_identifier).filter(|id| !id.is_empty())
  {
    return id;
  }
  path_operation_name(url, method)
}

pub(crate) fn path_operation_name(url: &str, method: &str) -> String {
  let mut groups = Vec::new();
  let mut params = Vec::new();

  for section in url.split('/').filter(|s| !s.is_empty()) {
    if let Some(param) = section.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
      let param = to_camel_identifier(param);
      if !param.is_empty() {
        params.push(param);
      }
    } else {
      let group = to_camel_identifier(section);
      if !group.is_empty() {
        groups.push(group);
      }
    }
  }

  if groups.len() > 1 {
    groups.remove(0);
  }

  let mut name = method.to_lowercase();
  name.extend(groups.iter().map(|group| capitalize_first(group)));
  if !params.is_empty() {
    name.push_str(PARAMS_PREFIX);
    name.push_str(
      &params
        .iter()
        .map(|param| capitalize_first(param))
        .collect::<Vec<_>>()
        .join(PARAMS_SEPARATOR),
    );
  }
  name
}

/// Hands out operation names that are unique within one document.
///
/// A name that is already taken gets the first free numeric suffix.
#[derive(Debug, Default)]
pub struct OperationNameRegistry {
  used: BTreeSet<String>,
}

impl OperationNameRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `candidate` and returns the name actually assigned.
  pub fn assign(&mut self, candidate: &str) -> String {
    let name = ensure_unique(candidate, &self.used);
    self.used.insert(name.clone());
    name
  }
}
