use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use super::refs::reference_name;
use crate::swagger::SwaggerDocument;

const DEFINITION_REF_PREFIX: &str = "#/definitions/";

/// Which definitions reference which, by name.
#[derive(Debug, Clone, Default)]
pub(crate) struct SchemaGraph {
  dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl SchemaGraph {
  pub(crate) fn build(document: &SwaggerDocument) -> Self {
    let dependencies = document
      .definitions
      .iter()
      .map(|(name, schema)| {
        let mut refs = Vec::new();
        schema.collect_refs(&mut refs);
        let targets = refs
          .into_iter()
          .filter(|ref_path| ref_path.starts_with(DEFINITION_REF_PREFIX))
          .map(reference_name)
          .collect();
        (name.clone(), targets)
      })
      .collect();

    Self { dependencies }
  }

  /// Strongly connected groups of definitions, including self references.
  pub(crate) fn cycles(&self) -> Vec<Vec<String>> {
    let mut graph = DiGraphMap::<&str, ()>::new();
    for (node, deps) in &self.dependencies {
      graph.add_node(node.as_str());
      for dep in deps {
        graph.add_edge(node.as_str(), dep.as_str(), ());
      }
    }

    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
      .map(|scc| {
        let mut members: Vec<String> = scc.into_iter().map(String::from).collect();
        members.sort();
        members
      })
      .collect();
    cycles.sort();
    cycles
  }
}
