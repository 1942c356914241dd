//! Drives schema and operation resolution over a whole Swagger document.
//!
//! ## Usage
//!
//! ```ignore
//! # fn example(document: swagger_gen::swagger::SwaggerDocument) {
//! let orchestrator = Orchestrator::new(document, OrchestratorConfig::default());
//! let output = orchestrator.run();
//! println!("{} models, {} warnings", output.catalog.models.len(), output.stats.warnings.len());
//! # }
//! ```

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use super::{
  metrics::{GenerationStats, GenerationWarning},
  model::Model,
  naming::operations::{OperationNameRegistry, OperationNamingPolicy, operation_name},
  resolver::SchemaModelResolver,
  schema_graph::SchemaGraph,
};
use crate::swagger::{Schema, SwaggerDocument};

#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
  pub naming: OperationNamingPolicy,
  /// Restricts model resolution to these definition names.
  pub only_models: Option<HashSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedOperation {
  pub name: String,
  pub method: String,
  pub path: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
}

/// Everything resolved from one document, ready for an emission stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelCatalog {
  pub title: String,
  pub version: String,
  pub models: Vec<Model>,
  pub operations: Vec<NamedOperation>,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub catalog: ModelCatalog,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: SwaggerDocument,
  config: OrchestratorConfig,
}

impl Orchestrator {
  pub fn new(document: SwaggerDocument, config: OrchestratorConfig) -> Self {
    Self { document, config }
  }

  pub fn run(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();

    let models = self.resolve_models(&mut stats);
    let operations = self.name_operations(&mut stats);
    stats.record_cycles(SchemaGraph::build(&self.document).cycles());

    GeneratedOutput {
      catalog: ModelCatalog {
        title: self.document.info.title.clone(),
        version: self.document.info.version.clone(),
        models,
        operations,
      },
      stats,
    }
  }

  /// Resolves every selected definition in document order.
  pub fn resolve_models(&self, stats: &mut GenerationStats) -> Vec<Model> {
    let resolver = SchemaModelResolver::new(&self.document);

    let models: Vec<Model> = self
      .document
      .definitions
      .iter()
      .filter(|(name, _)| self.is_selected(name))
      .map(|(name, schema)| {
        stats.record_warnings(Self::audit_schema(&resolver, name, schema));
        let model = resolver.resolve(schema, name);
        if model.is_untyped() {
          stats.record_warning(GenerationWarning::UntypedFallback {
            schema_name: name.clone(),
          });
        }
        model
      })
      .collect();

    stats.record_models(&models);
    models
  }

  /// Names every operation, suffixing names that collide within the document.
  pub fn name_operations(&self, stats: &mut GenerationStats) -> Vec<NamedOperation> {
    let mut registry = OperationNameRegistry::new();

    self
      .document
      .operations()
      .map(|(path, method, operation)| {
        let requested = operation_name(
          path,
          method.as_ref(),
          operation.operation_id.as_deref(),
          self.config.naming,
        );
        let assigned = registry.assign(&requested);
        let renamed = assigned != requested;
        if renamed {
          stats.record_warning(GenerationWarning::OperationRenamed {
            method: method.to_string(),
            path: path.to_string(),
            requested,
            assigned: assigned.clone(),
          });
        }
        stats.record_operation(renamed);

        NamedOperation {
          name: assigned,
          method: method.to_string(),
          path: path.to_string(),
          operation_id: operation.operation_id.clone(),
          summary: operation.summary.clone(),
        }
      })
      .collect()
  }

  fn is_selected(&self, name: &str) -> bool {
    self.config.only_models.as_ref().is_none_or(|only| only.contains(name))
  }

  /// Reports broken references and ignored composition inside one definition.
  fn audit_schema(resolver: &SchemaModelResolver<'_>, name: &str, schema: &Schema) -> Vec<GenerationWarning> {
    let mut warnings = Vec::new();

    if has_composition(schema) {
      warnings.push(GenerationWarning::CompositionIgnored {
        schema_name: name.to_string(),
      });
    }

    let mut refs = Vec::new();
    schema.collect_refs(&mut refs);
    let unique_refs: BTreeSet<&str> = refs.into_iter().collect();

    for ref_path in unique_refs {
      if let Err(error) = resolver.refs().resolve_schema(&Schema::reference(ref_path)) {
        warnings.push(GenerationWarning::ReferenceFailed {
          schema_name: name.to_string(),
          error: error.to_string(),
        });
      }
    }

    warnings
  }
}

fn has_composition(schema: &Schema) -> bool {
  schema.has_composition()
    || schema.items.as_deref().is_some_and(has_composition)
    || schema.declared_properties().any(|(_, property)| has_composition(property))
}
