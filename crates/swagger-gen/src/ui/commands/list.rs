use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    model::{Model, ModelKind},
    naming::operations::OperationNamingPolicy,
    orchestrator::{Orchestrator, OrchestratorConfig},
  },
  ui::{Colors, colors::table_color, term_width},
  utils::{spec::SpecLoader, text::doc_lines},
};

fn new_table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(table_color(colors.heading())));
  }
  table.set_header(row);
  table
}

fn kind_label(model: &Model) -> &'static str {
  match model.kind {
    ModelKind::Enum { .. } => "enum",
    ModelKind::Array { .. } => "array",
    ModelKind::Interface { .. } => "interface",
    ModelKind::Primitive { .. } => "type",
    ModelKind::Untyped => "any",
  }
}

pub async fn list_operations(input: &Path, naming: OperationNamingPolicy, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let config = OrchestratorConfig {
    naming,
    ..Default::default()
  };
  let mut operations = Orchestrator::new(document, config).run().catalog.operations;
  operations.sort_by(|a, b| a.name.cmp(&b.name));

  let mut table = new_table(colors, &["NAME", "METHOD", "PATH"]);
  for operation in operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(operation.name)
        .fg(table_color(colors.name()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(operation.method)
        .fg(table_color(colors.method()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(operation.path).fg(table_color(colors.text())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

pub async fn list_models(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let models = Orchestrator::new(document, OrchestratorConfig::default()).run().catalog.models;

  let mut table = new_table(colors, &["MODEL", "KIND", "TYPE", "DESCRIPTION"]);
  for model in &models {
    let summary = model
      .description
      .as_deref()
      .and_then(|text| doc_lines(text).into_iter().next())
      .unwrap_or_default();

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&model.name)
        .fg(table_color(colors.name()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(kind_label(model)).fg(table_color(colors.method())));
    row.add_cell(Cell::new(model.rendered_type()).fg(table_color(colors.text())));
    row.add_cell(Cell::new(summary).fg(table_color(colors.muted())));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}
