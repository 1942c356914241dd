use std::{collections::HashSet, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    metrics::GenerationStats,
    model::Model,
    naming::operations::OperationNamingPolicy,
    orchestrator::{ModelCatalog, Orchestrator, OrchestratorConfig},
  },
  swagger::SwaggerDocument,
  ui::{Colors, ModelsCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct ModelsConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub naming: OperationNamingPolicy,
  pub only_models: Option<HashSet<String>>,
  pub verbose: bool,
  pub quiet: bool,
}

impl ModelsConfig {
  pub fn from_command(command: ModelsCommand) -> anyhow::Result<Self> {
    let ModelsCommand {
      input,
      output,
      naming,
      only,
      verbose,
      quiet,
    } = command;

    anyhow::ensure!(!(verbose && quiet), "--verbose and --quiet cannot be combined");

    let only_models = only.map(|names| {
      names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
    });

    Ok(Self {
      input,
      output,
      naming: naming.into(),
      only_models,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<SwaggerDocument> {
    SpecLoader::open(&self.input).await?.parse()
  }

  fn create_orchestrator(&self, document: SwaggerDocument) -> Orchestrator {
    Orchestrator::new(
      document,
      OrchestratorConfig {
        naming: self.naming,
        only_models: self.only_models.clone(),
      },
    )
  }

  async fn write_output(&self, catalog: &ModelCatalog) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, json).await?;
    Ok(())
  }
}

struct ModelsLogger<'a> {
  config: &'a ModelsConfig,
  colors: &'a Colors,
}

impl<'a> ModelsLogger<'a> {
  fn new(config: &'a ModelsConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.heading()),
        value.with(self.colors.name())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading Swagger document from: {}", self.config.input.display())
        .with(self.colors.text())
        .to_string(),
    );
  }

  fn log_resolving(&self, document: &SwaggerDocument) {
    self.info(
      &format!("Resolving models for {} {}...", document.info.title, document.info.version)
        .with(self.colors.text())
        .to_string(),
    );
  }

  fn log_models(&self, models: &[Model]) {
    if !self.config.verbose {
      return;
    }
    for model in models {
      let detail = if model.is_interface() {
        match model.extends() {
          [] => format!("{} properties", model.properties().len()),
          parents => format!("{} properties, extends {}", model.properties().len(), parents.join(", ")),
        }
      } else if model.is_enum() {
        let symbols = model.enum_symbols();
        let backing = if symbols.iter().all(|symbol| symbol.value.is_number()) {
          "numeric"
        } else {
          "string"
        };
        format!("{} {backing} values", symbols.len())
      } else if model.is_type() {
        model.rendered_type().to_string()
      } else {
        "untyped".to_string()
      };
      println!(
        "              {} {}",
        model.name.as_str().with(self.colors.name()),
        detail.with(self.colors.muted())
      );
      if let Some(validation) = model.validation_expression() {
        println!("                {}", validation.with(self.colors.muted()));
      }
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models resolved:", stats.models_resolved.to_string());
    self.stat("", format!("{} interfaces", stats.interfaces_resolved));
    self.stat("", format!("{} enums", stats.enums_resolved));
    self.stat("", format!("{} arrays", stats.arrays_resolved));
    self.stat("", format!("{} type aliases", stats.primitives_resolved));
    if stats.untyped_resolved > 0 {
      self.stat("", format!("{} untyped", stats.untyped_resolved));
    }
    self.stat("Operations named:", stats.operations_named.to_string());
    if stats.operations_renamed > 0 {
      self.stat("", format!("{} renamed", stats.operations_renamed));
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.method()),
          cycle.join(" -> ").with(self.colors.muted())
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    for line in self.warning_lines(stats) {
      eprintln!("{line}");
    }
  }

  /// Reference failures always, everything else only when verbose, after a blank separator.
  fn warning_lines(&self, stats: &GenerationStats) -> Vec<String> {
    let shown: Vec<String> = stats
      .warnings
      .iter()
      .filter(|warning| warning.is_reference_failure() || self.config.verbose)
      .map(|warning| {
        format!(
          "{} {}",
          "Warning:".with(self.colors.warning()),
          warning.to_string().with(self.colors.text())
        )
      })
      .collect();
    if shown.is_empty() {
      return shown;
    }

    std::iter::once(String::new()).chain(shown).collect()
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.text())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully resolved model catalog".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_models(config: ModelsConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = ModelsLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_resolving(&document);
  let output = config.create_orchestrator(document).run();
  logger.log_models(&output.catalog.models);
  logger.print_statistics(&output.stats);

  logger.log_writing();
  config.write_output(&output.catalog).await?;

  logger.log_success();
  Ok(())
}
