//! Statistics catalog: summary figures about the knowledge graph.
//!
//! Every call returns plain rows; none of these are graphs.

use serde_json::{Map, Value};

use crate::client::Client;
use crate::error::ClientError;
use crate::transport::QueryBackend;

mod functions {
    pub const PUBLICATION_BY_YEAR: &str = "_bel_statistics_publication_by_year";
    pub const PUBLICATION_BY_STATEMENTS: &str = "_bel_statistics_publication_by_number_of_statements";
    pub const LAST_AUTHOR_BY_PUBLICATIONS: &str = "_bel_statistics_last_author_by_number_of_publications";
    pub const LAST_AUTHOR_BY_STATEMENTS: &str = "_bel_statistics_last_author_by_number_of_statements";
    pub const NODE_NAMESPACE_BY_COUNT: &str = "_bel_statistics_node_namespace_order_by_count";
    pub const NODE_NAMESPACE_BY_NAMESPACE: &str = "_bel_statistics_node_namespace_order_by_namespace";
    pub const EDGES: &str = "_bel_statistics_edges";
    pub const NODES: &str = "_bel_statistics_nodes";
    pub const SUBGRAPHS: &str = "_bel_statistics_subgraph";
    pub const TOTAL_NODES: &str = "bel_statistics_total_bel_nodes";
    pub const TOTAL_EDGES: &str = "bel_statistics_total_stmts";
    pub const TOTAL_PUBLICATIONS: &str = "bel_statistics_total_publications";
}

type Rows = Vec<Map<String, Value>>;

/// Number of publications per year.
pub fn publication_by_year<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::PUBLICATION_BY_YEAR, &[])
}

/// Number of statements per publication.
pub fn publication_by_number_of_statements<B: QueryBackend>(
    client: &Client<B>,
) -> Result<Rows, ClientError> {
    client.records(functions::PUBLICATION_BY_STATEMENTS, &[])
}

/// Number of publications per last author.
pub fn last_author_by_number_of_publications<B: QueryBackend>(
    client: &Client<B>,
) -> Result<Rows, ClientError> {
    client.records(functions::LAST_AUTHOR_BY_PUBLICATIONS, &[])
}

/// Number of statements per last author.
pub fn last_author_by_number_of_statements<B: QueryBackend>(
    client: &Client<B>,
) -> Result<Rows, ClientError> {
    client.records(functions::LAST_AUTHOR_BY_STATEMENTS, &[])
}

/// Node type and namespace frequencies, most frequent first.
pub fn node_namespace_order_by_count<B: QueryBackend>(
    client: &Client<B>,
) -> Result<Rows, ClientError> {
    client.records(functions::NODE_NAMESPACE_BY_COUNT, &[])
}

/// Node type and namespace frequencies, ordered by namespace.
pub fn node_namespace_order_by_namespace<B: QueryBackend>(
    client: &Client<B>,
) -> Result<Rows, ClientError> {
    client.records(functions::NODE_NAMESPACE_BY_NAMESPACE, &[])
}

/// Frequency of each edge type.
pub fn edges<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::EDGES, &[])
}

/// Frequency of each node type.
pub fn nodes<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::NODES, &[])
}

/// Annotated subgraph names and their statement counts.
pub fn subgraphs<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::SUBGRAPHS, &[])
}

/// Total number of nodes generated from curated statements.
pub fn total_bel_nodes<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::TOTAL_NODES, &[])
}

/// Total number of curated edges.
pub fn total_bel_edges<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::TOTAL_EDGES, &[])
}

/// Total number of publications.
pub fn total_publications<B: QueryBackend>(client: &Client<B>) -> Result<Rows, ClientError> {
    client.records(functions::TOTAL_PUBLICATIONS, &[])
}
