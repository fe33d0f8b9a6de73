//! Named query catalog: one thin forwarding call per stored function.
//!
//! Each function builds its positional arguments and hands off to
//! [`Client::graph`] or [`Client::table`]; no result shaping happens here.

use serde_json::{Map, Value};

use belgraph_graph::{GraphValue, QueryValue};

use crate::client::Client;
use crate::error::ClientError;
use crate::transport::QueryBackend;

/// Stored function names exposed by the server.
mod functions {
    pub const BY_ANNOTATION: &str = "_bel_by_annotation";
    pub const BY_AUTHORS: &str = "_bel_by_authors";
    pub const BY_LAST_AUTHOR: &str = "_bel_by_last_author";
    pub const BY_PMID: &str = "_bel_by_pmid";
    pub const BY_SUBGRAPH: &str = "_bel_by_subgraph";
    pub const CAUSAL_CORRELATIVE_BY_GENE: &str = "_bel_causal_correlative_by_gene";
    pub const PATH: &str = "_bel_path";
    pub const BELISH: &str = "_belish";
    pub const ALL_PMIDS: &str = "_all_pmids";
    pub const FIND_CONTRADICTIONS: &str = "find_contradictions";
    pub const DIRECT_SQL: &str = "sql";
}

/// BEL statements annotated with the given namespace and name/term,
/// e.g. namespace `"MeSHAnatomy"` with name `"Lung"`.
pub fn annotation<B: QueryBackend>(
    client: &Client<B>,
    namespace: &str,
    name: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(functions::BY_ANNOTATION, &[namespace.into(), name.into()])
}

/// BEL statements from publications by any of the given authors, optionally
/// filtered by edge class, node class and an excluded namespace.
pub fn authors<B: QueryBackend>(
    client: &Client<B>,
    author_list: &[&str],
    edge_class: &str,
    node_class: &str,
    exclude_namespace: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(
        functions::BY_AUTHORS,
        &[
            author_list.join(",").into(),
            edge_class.into(),
            node_class.into(),
            exclude_namespace.into(),
        ],
    )
}

/// BEL statements from publications whose last author matches, e.g. `"Hong W"`.
pub fn last_author<B: QueryBackend>(
    client: &Client<B>,
    author: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(functions::BY_LAST_AUTHOR, &[author.into()])
}

/// BEL statements extracted from one publication.
pub fn pmid<B: QueryBackend>(client: &Client<B>, pmid: i64) -> Result<GraphValue, ClientError> {
    client.graph(functions::BY_PMID, &[pmid.into()])
}

/// BEL statements whose annotations carry the given subgraph name.
pub fn subgraph<B: QueryBackend>(
    client: &Client<B>,
    subgraph_name: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(functions::BY_SUBGRAPH, &[subgraph_name.into()])
}

/// Causal and correlative statements involving a gene symbol.
pub fn causal_correlative_by_gene<B: QueryBackend>(
    client: &Client<B>,
    gene_symbol: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(functions::CAUSAL_CORRELATIVE_BY_GENE, &[gene_symbol.into()])
}

/// All paths between two node labels, between `min_edges` and `max_edges`
/// hops long. Path search runs server-side; the result is an edge set like
/// any other graph query.
pub fn path<B: QueryBackend>(
    client: &Client<B>,
    source: &str,
    target: &str,
    min_edges: u32,
    max_edges: u32,
) -> Result<GraphValue, ClientError> {
    if min_edges < 1 {
        return Err(ClientError::InvalidArgument(
            "min_edges must be at least 1".to_string(),
        ));
    }
    if min_edges > max_edges {
        return Err(ClientError::InvalidArgument(
            "min_edges must not exceed max_edges".to_string(),
        ));
    }
    let range = format!("{min_edges}-{max_edges}");
    client.graph(functions::PATH, &[source.into(), target.into(), range.into()])
}

/// BEL statements matching a BEL-like pattern where `?` is a wild card,
/// e.g. `p(?) causal p(?)`.
pub fn belish<B: QueryBackend>(
    client: &Client<B>,
    statement: &str,
) -> Result<GraphValue, ClientError> {
    client.graph(functions::BELISH, &[statement.into()])
}

/// All curated PMIDs in the knowledge graph.
pub fn list_pmids<B: QueryBackend>(client: &Client<B>) -> Result<Vec<i64>, ClientError> {
    let records = client.records(functions::ALL_PMIDS, &[])?;
    Ok(records
        .iter()
        .filter_map(|row| row.get("pmid").and_then(Value::as_i64))
        .collect())
}

/// Edges of opposite types between the same pair of nodes.
pub fn find_contradictions<B: QueryBackend>(
    client: &Client<B>,
) -> Result<QueryValue, ClientError> {
    client.table(functions::FIND_CONTRADICTIONS, &[])
}

/// Run a raw SQL query against the knowledge graph.
pub fn sql<B: QueryBackend>(
    client: &Client<B>,
    sql_query: &str,
) -> Result<Vec<Map<String, Value>>, ClientError> {
    client.records(functions::DIRECT_SQL, &[sql_query.into()])
}
