//! # belgraph-export
//!
//! Converts a raw relationship batch from the knowledge graph into one of
//! four interchange formats (integer edge list, SIF/CSV adjacency rows, or
//! verbatim JSON), together with a companion file mapping every opaque node
//! identifier to the dense integer index used in the graph file.
//!
//! ```rust,ignore
//! use belgraph_client::{Client, ConnectConfig, HttpBackend};
//! use belgraph_export::export_graph;
//!
//! let client = Client::new(HttpBackend::new(ConnectConfig::from_env()));
//! match export_graph(&client, "graph.sif", "sif")? {
//!     Some(paths) => println!("wrote {} and {}", paths.graph.display(), paths.mapping.display()),
//!     None => println!("knowledge graph returned no relationships"),
//! }
//! ```

pub mod error;
pub mod exporter;
pub mod format;

pub use error::ExportError;
pub use exporter::{export_graph, ExportOptions, ExportPaths, Exporter};
pub use format::ExportFormat;
