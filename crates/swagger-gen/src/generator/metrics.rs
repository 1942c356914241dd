use strum::Display;

use crate::generator::model::{Model, ModelKind};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub models_resolved: usize,
  pub interfaces_resolved: usize,
  pub enums_resolved: usize,
  pub arrays_resolved: usize,
  pub primitives_resolved: usize,
  pub untyped_resolved: usize,
  pub operations_named: usize,
  pub operations_renamed: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, model: &Model) {
    self.models_resolved += 1;
    match model.kind {
      ModelKind::Interface { .. } => self.interfaces_resolved += 1,
      ModelKind::Enum { .. } => self.enums_resolved += 1,
      ModelKind::Array { .. } => self.arrays_resolved += 1,
      ModelKind::Primitive { .. } => self.primitives_resolved += 1,
      ModelKind::Untyped => self.untyped_resolved += 1,
    }
  }

  pub fn record_models(&mut self, models: &[Model]) {
    for model in models {
      self.record_model(model);
    }
  }

  pub fn record_operation(&mut self, renamed: bool) {
    self.operations_named += 1;
    if renamed {
      self.operations_renamed += 1;
    }
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema_name}': {error}")]
  ReferenceFailed { schema_name: String, error: String },
  #[strum(to_string = "Schema '{schema_name}': allOf composition is not applied")]
  CompositionIgnored { schema_name: String },
  #[strum(to_string = "Schema '{schema_name}' resolved to an untyped model")]
  UntypedFallback { schema_name: String },
  #[strum(to_string = "Operation '{method} {path}': name '{requested}' already taken, using '{assigned}'")]
  OperationRenamed {
    method: String,
    path: String,
    requested: String,
    assigned: String,
  },
}

impl GenerationWarning {
  /// Broken references are always shown; the rest only in verbose output.
  pub fn is_reference_failure(&self) -> bool {
    matches!(self, Self::ReferenceFailed { .. })
  }
}
