use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, ThemeMode};
use crate::generator::naming::operations::OperationNamingPolicy;

#[derive(Parser, Debug)]
#[command(name = "swagger-gen")]
#[command(author, version, about = "Swagger 2.0 schema model resolver")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Resolve every definition into a model catalog written as JSON
  Models(ModelsCommand),
}

#[derive(Args, Debug)]
pub struct ModelsCommand {
  /// Path to the Swagger JSON or YAML document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the model catalog will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// How operation names are chosen
  #[arg(long, value_enum, default_value = "path")]
  pub naming: NamingMode,

  /// Resolve only these definitions (comma-separated names)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every operation with its generated method name
  Operations {
    /// Path to the Swagger JSON or YAML document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// How operation names are chosen
    #[arg(long, value_enum, default_value = "path")]
    naming: NamingMode,
  },
  /// List every definition with the model kind it resolves to
  Models {
    /// Path to the Swagger JSON or YAML document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamingMode {
  /// Derive names from the URL and method
  #[default]
  Path,
  /// Prefer the operationId when present
  OperationId,
}

impl From<NamingMode> for OperationNamingPolicy {
  fn from(mode: NamingMode) -> Self {
    match mode {
      NamingMode::Path => Self::PathDerived,
      NamingMode::OperationId => Self::PreferOperationId,
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::{Cli, Commands, ListCommands, NamingMode};
  use crate::generator::naming::operations::OperationNamingPolicy;

  #[test]
  fn test_parse_models_command() {
    let cli = Cli::parse_from([
      "swagger-gen",
      "models",
      "-i",
      "petstore.json",
      "-o",
      "out/models.json",
      "--naming",
      "operation-id",
      "--only",
      "Pet,Tag",
      "-v",
    ]);

    let Commands::Models(command) = cli.command else {
      panic!("expected models command");
    };
    assert_eq!(command.input.to_str(), Some("petstore.json"));
    assert_eq!(command.naming, NamingMode::OperationId);
    assert_eq!(command.only, Some(vec!["Pet".to_string(), "Tag".to_string()]));
    assert!(command.verbose);
    assert!(!command.quiet);
  }

  #[test]
  fn test_parse_list_operations_defaults_to_path_naming() {
    let cli = Cli::parse_from(["swagger-gen", "list", "operations", "-i", "api.yaml"]);

    let Commands::List {
      list_command: ListCommands::Operations { naming, .. },
    } = cli.command
    else {
      panic!("expected list operations command");
    };
    assert_eq!(OperationNamingPolicy::from(naming), OperationNamingPolicy::PathDerived);
  }
}
