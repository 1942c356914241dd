pub(crate) mod enums;
pub mod errors;
pub mod metrics;
pub mod model;
pub mod naming;
pub mod orchestrator;
pub mod refs;
pub mod resolver;
pub(crate) mod schema_graph;
pub(crate) mod type_mapper;
pub(crate) mod validation;

#[cfg(test)]
mod tests;
