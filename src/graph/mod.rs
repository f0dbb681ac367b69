pub use adjacency::Graph;
pub use base_graph::BaseGraph;
pub use builder::GraphBuilder;
pub use error::GraphError;
pub use fill_edges::FillEdges;
pub use induced_subgraph::InducedSubgraph;

mod adjacency;
mod base_graph;
mod builder;
mod error;
mod fill_edges;
pub mod generators;
mod induced_subgraph;
