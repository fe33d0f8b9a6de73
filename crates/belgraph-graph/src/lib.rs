//! # belgraph-graph
//!
//! Data model and in-memory edge-set algebra for the belgraph client:
//! - [`model::RelationshipRecord`] — one directed, typed edge from the knowledge graph
//! - [`algebra::GraphValue`]       — immutable edge collection with set-style combinators
//! - [`mapping::NodeMapping`]      — dense integer remapping of opaque node identifiers
//!
//! Everything here is pure in-memory computation. Fetching records from the
//! server lives in `belgraph-client`; file output lives in `belgraph-export`.

pub mod algebra;
pub mod error;
pub mod mapping;
pub mod model;

pub use algebra::{GraphValue, QueryValue};
pub use error::GraphError;
pub use mapping::{EdgeEndpoints, MappedNode, NodeMapping};
pub use model::{EdgeId, RelationshipRecord};
