use std::collections::HashSet;

use percent_encoding::percent_decode_str;

use super::{errors::RefError, model::TypeInfo, type_mapper::TypeMapper};
use crate::swagger::{Schema, SwaggerDocument};

const DEFINITIONS_SECTION: &str = "definitions";
const PARAMETERS_SECTION: &str = "parameters";
const RESPONSES_SECTION: &str = "responses";

/// Decodes one JSON pointer segment (`%xx`, then `~1` and `~0`).
fn decode_segment(segment: &str) -> String {
  percent_decode_str(segment)
    .decode_utf8_lossy()
    .replace("~1", "/")
    .replace("~0", "~")
}

fn pointer_segments(ref_path: &str) -> Option<Vec<String>> {
  let pointer = ref_path.strip_prefix('#')?;
  Some(
    pointer
      .split('/')
      .filter(|s| !s.is_empty())
      .map(decode_segment)
      .collect(),
  )
}

/// Extracts the referenced component name from a `$ref` path.
///
/// ```text
/// "#/definitions/Pet"      => "Pet"
/// "#/definitions/a~1b"     => "a/b"
/// "Pet"                    => "Pet"
/// ```
pub(crate) fn reference_name(ref_path: &str) -> String {
  match pointer_segments(ref_path) {
    Some(segments) if segments.len() > 1 => segments.last().cloned().unwrap_or_default(),
    Some(segments) => segments.into_iter().next().unwrap_or_default(),
    None => ref_path.rsplit('/').next().unwrap_or(ref_path).to_string(),
  }
}

/// Resolves `$ref` pointers against a single document.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
  document: &'a SwaggerDocument,
}

impl<'a> RefResolver<'a> {
  pub fn new(document: &'a SwaggerDocument) -> Self {
    Self { document }
  }

  /// The rendered type of a reference, as named by the type mapper.
  pub fn type_of(&self, ref_path: &str) -> TypeInfo {
    TypeMapper::map(&reference_name(ref_path))
  }

  /// Follows exactly one pointer.
  pub fn lookup(&self, ref_path: &str) -> Result<&'a Schema, RefError> {
    let Some(segments) = pointer_segments(ref_path) else {
      return Err(RefError::External(ref_path.to_string()));
    };

    let found = match segments.as_slice() {
      [section, name] if section == DEFINITIONS_SECTION => self.document.definitions.get(name),
      [section, name] if section == PARAMETERS_SECTION => {
        self.document.parameters.get(name).and_then(|p| p.schema.as_ref())
      }
      [section, name] if section == RESPONSES_SECTION => {
        self.document.responses.get(name).and_then(|r| r.schema.as_ref())
      }
      _ => return Err(RefError::Unsupported(ref_path.to_string())),
    };

    found.ok_or_else(|| RefError::Dangling(ref_path.to_string()))
  }

  /// Returns the schema a node stands for, following `$ref` chains.
  ///
  /// Inline nodes resolve to themselves. A chain that revisits a pointer is
  /// reported as [`RefError::CyclicSchemaReference`].
  pub fn resolve_schema<'s>(&self, schema: &'s Schema) -> Result<&'s Schema, RefError>
  where
    'a: 's,
  {
    let mut current = schema;
    let mut visited = HashSet::new();
    let mut chain = Vec::new();

    while let Some(ref_path) = current.ref_path.as_deref() {
      chain.push(ref_path.to_string());
      if !visited.insert(ref_path) {
        return Err(RefError::CyclicSchemaReference(chain));
      }
      current = self.lookup(ref_path)?;
    }

    Ok(current)
  }
}
