//! Schema node to [`Model`] resolution.
//!
//! Resolution never fails. Shapes that match none of the known patterns
//! degrade to an untyped model rendered as `any`, so generation always has
//! something to emit.
//!
//! Precedence, first match wins:
//!
//! 1. explicit `enum` literals (string-backed enum)
//! 2. integer type with codes listed in the description (number-backed enum)
//! 3. `array` with `items` (typed array)
//! 4. `object` with `properties` (interface)
//! 5. any other declared `type` (primitive or generic alias)
//! 6. untyped fallback
//!
//! `allOf` composition is not applied.

use itertools::Itertools;

use super::{
  enums::EnumExtractor,
  model::{EnumSymbol, Model, ModelKind, PropertyModel, TypeInfo},
  naming::identifiers::is_plain_identifier,
  refs::RefResolver,
  type_mapper::TypeMapper,
  validation::{ElementValidator, Validator},
};
use crate::{
  swagger::{Schema, SwaggerDocument},
  utils::text::extract_comment,
};

/// Name given to anonymous array item schemas.
pub(crate) const UNKNOWN_ITEM_NAME: &str = "unknown";

const STRING_BASE: &str = "string";
const NUMBER_BASE: &str = "number";

/// Resolves schema nodes of one document into [`Model`]s.
///
/// Holds no mutable state, so one resolver can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct SchemaModelResolver<'a> {
  refs: RefResolver<'a>,
}

impl<'a> SchemaModelResolver<'a> {
  pub fn new(document: &'a SwaggerDocument) -> Self {
    Self {
      refs: RefResolver::new(document),
    }
  }

  pub fn refs(&self) -> &RefResolver<'a> {
    &self.refs
  }

  pub fn resolve(&self, schema: &Schema, name: &str) -> Model {
    let description = extract_comment(schema.description.as_deref());

    if schema.has_enum_values() {
      let symbols = EnumExtractor::from_values(&schema.enum_values);
      if let Some(model) = Self::enum_model(name, description.as_deref(), symbols, STRING_BASE) {
        return model;
      }
    }

    if schema.is_integer()
      && let Some(text) = schema.description.as_deref()
      && let Some(model) =
        Self::enum_model(name, description.as_deref(), EnumExtractor::from_description(text), NUMBER_BASE)
    {
      return model;
    }

    if schema.is_array()
      && let Some(items) = schema.items.as_deref()
    {
      return self.array_model(name, description, items);
    }

    if schema.is_object() && schema.properties.is_some() {
      return self.interface_model(name, description, schema);
    }

    if let Some(schema_type) = schema.schema_type.as_deref() {
      let TypeInfo {
        rendered_type,
        base_type,
        template,
        imports,
      } = TypeMapper::map(schema_type);
      return Model {
        name: name.to_string(),
        description,
        imports,
        kind: ModelKind::Primitive {
          rendered_type,
          base_type,
          template,
        },
      };
    }

    Model::untyped(name, description)
  }

  /// Resolves a nested schema that has no declaration of its own to a type
  /// expression and the imports it needs.
  ///
  /// Interfaces render as inline object literals, e.g. `{ id: number; name?: string }`.
  pub fn resolve_anonymous(&self, schema: &Schema, fallback_name: &str) -> TypeInfo {
    if let Some(ref_path) = schema.ref_path.as_deref() {
      return self.refs.type_of(ref_path);
    }

    let model = self.resolve(schema, fallback_name);
    let rendered_type = match &model.kind {
      ModelKind::Interface { properties, .. } => inline_object(properties),
      _ => model.rendered_type().to_string(),
    };

    TypeInfo::new(rendered_type, model.base_type())
      .with_template(model.template().map(String::from))
      .with_imports(model.imports)
  }

  fn enum_model(name: &str, description: Option<&str>, symbols: Vec<EnumSymbol>, base_type: &str) -> Option<Model> {
    if symbols.is_empty() {
      return None;
    }

    let validation = Validator::OneOf {
      model: name.to_string(),
      values: EnumExtractor::allowed_values(&symbols),
    };

    Some(Model {
      name: name.to_string(),
      description: description.map(String::from),
      imports: vec![],
      kind: ModelKind::Enum {
        rendered_type: EnumExtractor::union_type(&symbols),
        base_type: base_type.to_string(),
        validation: validation.to_string(),
        symbols,
      },
    })
  }

  fn array_model(&self, name: &str, description: Option<String>, items: &Schema) -> Model {
    let (element, base_type, template) = match items.ref_path.as_deref() {
      Some(ref_path) => {
        let element = self.refs.type_of(ref_path);
        let base_type = element.base_type.clone();
        let template = element.template.clone();
        (element, base_type, template)
      }
      None => {
        let item_name = items.title.as_deref().unwrap_or(UNKNOWN_ITEM_NAME);
        let element = self.resolve_anonymous(items, item_name);
        let base_type = element.rendered_type.clone();
        (element, base_type, None)
      }
    };

    let validation = Validator::ArrayOf {
      model: name.to_string(),
      element: ElementValidator::for_base_type(&base_type),
    };

    Model {
      name: name.to_string(),
      description,
      imports: element.imports,
      kind: ModelKind::Array {
        rendered_type: format!("{}[]", element.rendered_type),
        base_type,
        template,
        validation: validation.to_string(),
      },
    }
  }

  fn interface_model(&self, name: &str, description: Option<String>, schema: &Schema) -> Model {
    let mut imports = Vec::new();
    let mut properties = Vec::new();

    for (property_name, property) in schema.declared_properties() {
      let required = schema.is_required(property_name);

      // Referenced members do not consult the target's readOnly or description.
      if let Some(ref_path) = property.ref_path.as_deref() {
        let property_type = self.refs.type_of(ref_path);
        imports.extend(property_type.imports);
        properties.push(
          PropertyModel::builder()
            .name(property_name)
            .property_type(property_type.rendered_type)
            .required(required)
            .build(),
        );
        continue;
      }

      let definition = self.refs.resolve_schema(property).unwrap_or(property);
      let property_type = self.resolve_anonymous(definition, property_name);
      imports.extend(property_type.imports);
      properties.push(
        PropertyModel::builder()
          .name(property_name)
          .property_type(property_type.rendered_type)
          .required(required)
          .read_only(definition.read_only)
          .maybe_description(extract_comment(definition.description.as_deref()))
          .build(),
      );
    }

    Model {
      name: name.to_string(),
      description,
      imports,
      kind: ModelKind::Interface {
        properties,
        extends: vec![],
      },
    }
  }
}

fn inline_object(properties: &[PropertyModel]) -> String {
  if properties.is_empty() {
    return "{}".to_string();
  }

  let members = properties
    .iter()
    .map(|property| {
      let key = if is_plain_identifier(&property.name) {
        property.name.clone()
      } else {
        format!("'{}'", property.name.replace('\'', "\\'"))
      };
      let readonly = if property.read_only { "readonly " } else { "" };
      let optional = if property.required { "" } else { "?" };
      format!("{readonly}{key}{optional}: {}", property.property_type)
    })
    .join("; ");

  format!("{{ {members} }}")
}
