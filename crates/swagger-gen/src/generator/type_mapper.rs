use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use super::model::TypeInfo;

const ARRAY_OF_ANY: &str = "any[]";
const COLLECTION_NAMES: [&str; 4] = ["Array", "Collection", "List", "Set"];

/// `Outer[Inner]` (Swagger codegen style) and `Outer«Inner»` (Springfox style).
static GENERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?)(?:\[(.+)\]|«(.+)»)$").unwrap());

/// Maps Swagger type names and referenced definition names onto rendered types.
pub(crate) struct TypeMapper;

impl TypeMapper {
  pub(crate) fn primitive(name: &str) -> Option<&'static str> {
    let mapped = match name {
      "File" | "file" => "File",
      "any" | "object" => "any",
      "array" => ARRAY_OF_ANY,
      "boolean" => "boolean",
      "byte" | "int" | "int32" | "int64" | "integer" | "float" | "double" | "short" | "long" | "number" => "number",
      "char" | "date" | "date-time" | "password" | "string" => "string",
      "void" => "void",
      "null" => "null",
      _ => return None,
    };
    Some(mapped)
  }

  /// Resolves a declared type name or definition name.
  ///
  /// ```text
  /// "integer"          => number
  /// "Pet"              => Pet, imports [Pet]
  /// "List[Pet]"        => Pet[], imports [Pet]
  /// "Page«Pet»"        => Page<Pet>, template Pet, imports [Page, Pet]
  /// ```
  pub(crate) fn map(value: &str) -> TypeInfo {
    let name = value.trim();
    if name.is_empty() {
      return TypeInfo::any();
    }

    if let Some(captures) = GENERIC_RE.captures(name)
      && let Some(inner) = captures.get(2).or_else(|| captures.get(3))
    {
      return Self::map_generic(&captures[1], inner.as_str());
    }

    if let Some(primitive) = Self::primitive(name) {
      return TypeInfo::new(primitive, primitive);
    }

    TypeInfo::new(name, name).with_imports(vec![name.to_string()])
  }

  fn map_generic(outer_name: &str, inner: &str) -> TypeInfo {
    let outer = Self::map(outer_name);
    let arguments = split_arguments(inner).into_iter().map(Self::map).collect::<Vec<_>>();
    let template = arguments.iter().map(|arg| arg.rendered_type.as_str()).join(", ");

    if outer.rendered_type == ARRAY_OF_ANY || COLLECTION_NAMES.contains(&outer_name.trim()) {
      let base_type = arguments.first().map_or_else(String::new, |arg| arg.base_type.clone());
      let imports = arguments.into_iter().flat_map(|arg| arg.imports).unique().collect();
      return TypeInfo::new(format!("{template}[]"), base_type).with_imports(imports);
    }

    let imports = outer
      .imports
      .iter()
      .cloned()
      .chain(arguments.into_iter().flat_map(|arg| arg.imports))
      .unique()
      .collect();

    TypeInfo::new(format!("{}<{template}>", outer.rendered_type), outer.base_type)
      .with_template(Some(template))
      .with_imports(imports)
  }
}

/// Splits generic arguments on top-level commas.
fn split_arguments(inner: &str) -> Vec<&str> {
  let mut arguments = Vec::new();
  let mut depth = 0usize;
  let mut start = 0;

  for (index, ch) in inner.char_indices() {
    match ch {
      '[' | '«' | '<' => depth += 1,
      ']' | '»' | '>' => depth = depth.saturating_sub(1),
      ',' if depth == 0 => {
        arguments.push(inner[start..index].trim());
        start = index + ch.len_utf8();
      }
      _ => {}
    }
  }
  arguments.push(inner[start..].trim());
  arguments.retain(|arg| !arg.is_empty());
  arguments
}
