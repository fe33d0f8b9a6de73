//! Typed client over a [`QueryBackend`].

use serde_json::{Map, Value};
use tracing::debug;

use belgraph_graph::model::strip_internal_keys;
use belgraph_graph::{GraphValue, QueryValue, RelationshipRecord};

use crate::error::ClientError;
use crate::transport::{ApiArg, QueryBackend};

/// Client for the remote knowledge graph.
///
/// Generic over the transport so tests can run against
/// [`MockBackend`](crate::transport::MockBackend) instead of a live server.
/// Every method performs at most one blocking round-trip followed by purely
/// local parsing.
pub struct Client<B: QueryBackend> {
    backend: B,
}

impl<B: QueryBackend> Client<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Raw result records with internal bookkeeping keys stripped.
    ///
    /// This is the single ingestion point: the `@`-key filter runs here and
    /// nowhere else.
    pub fn records(
        &self,
        function: &str,
        args: &[ApiArg],
    ) -> Result<Vec<Map<String, Value>>, ClientError> {
        let raw = self.backend.call(function, args)?;
        let mut records = Vec::with_capacity(raw.len());
        for value in raw {
            match value {
                Value::Object(map) => records.push(strip_internal_keys(map)),
                other => {
                    return Err(ClientError::MalformedResponse(format!(
                        "expected object record from '{function}', got {other}"
                    )))
                }
            }
        }
        Ok(records)
    }

    /// Invoke a stored function whose result is a set of relationship records.
    pub fn graph(&self, function: &str, args: &[ApiArg]) -> Result<GraphValue, ClientError> {
        let records = self.records(function, args)?;
        let mut parsed = Vec::with_capacity(records.len());
        for record in records {
            let record: RelationshipRecord = serde_json::from_value(Value::Object(record))
                .map_err(|e| {
                    ClientError::MalformedResponse(format!(
                        "relationship record from '{function}': {e}"
                    ))
                })?;
            parsed.push(record);
        }
        debug!(function = %function, edges = parsed.len(), "graph result fetched");
        Ok(GraphValue::new(parsed))
    }

    /// Invoke a stored function whose result is plain tabular rows.
    pub fn table(&self, function: &str, args: &[ApiArg]) -> Result<QueryValue, ClientError> {
        Ok(QueryValue::Table(self.records(function, args)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockBackend;
    use serde_json::json;

    fn edge(edge_id: i64) -> Value {
        json!({
            "@rid": "#90:0",
            "@class": "increases",
            "edge_id": edge_id,
            "subject_id": "#1:0",
            "object_id": "#2:0",
            "subject_bel": "p(HGNC:CD33)",
            "object_bel": "p(HGNC:TREM2)",
            "relation": "increases",
            "pmid": 30310104,
        })
    }

    #[test]
    fn records_strip_internal_keys_once() {
        let client = Client::new(MockBackend::new().with_result("f", vec![edge(1)]));
        let records = client.records("f", &[]).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].keys().all(|k| !k.starts_with('@')));
        assert!(records[0].contains_key("pmid"));
    }

    #[test]
    fn graph_parses_relationship_records() {
        let client = Client::new(MockBackend::new().with_result("f", vec![edge(1), edge(2)]));
        let graph = client.graph("f", &[]).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.records()[0].subject_label, "p(HGNC:CD33)");
    }

    #[test]
    fn graph_rejects_non_object_records() {
        let client = Client::new(MockBackend::new().with_result("f", vec![json!(42)]));
        let err = client.graph("f", &[]).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn table_result_is_not_a_graph() {
        let client =
            Client::new(MockBackend::new().with_result("f", vec![json!({"pmid": 30310104})]));
        let table = client.table("f", &[]).unwrap();
        assert!(table.as_graph().is_err());
    }
}
