#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod swagger;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Operations { input, naming } => {
        ui::commands::list_operations(&input, naming.into(), &colors).await?;
      }
      ListCommands::Models { input } => ui::commands::list_models(&input, &colors).await?,
    },
    Commands::Models(command) => {
      let config = ui::commands::ModelsConfig::from_command(command)?;
      ui::commands::generate_models(config, &colors).await?;
    }
  }

  Ok(())
}
