use thiserror::Error;

/// Failures of `$ref` pointer resolution.
///
/// Schema resolution itself never fails; these surface as warnings from the
/// orchestrator and the resolver falls back to the unresolved node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefError {
  #[error("external reference '{0}' cannot be resolved within the document")]
  External(String),
  #[error("reference '{0}' does not point into definitions, parameters or responses")]
  Unsupported(String),
  #[error("reference '{0}' points to nothing")]
  Dangling(String),
  #[error("cyclic schema reference: {}", .0.join(" -> "))]
  CyclicSchemaReference(Vec<String>),
}
