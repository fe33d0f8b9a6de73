//! Edge-set algebra over query results.
//!
//! A query against the knowledge graph returns either a set of relationship
//! records (a graph) or plain tabular rows. [`GraphValue`] treats the former
//! as a mathematical set of edges keyed by [`EdgeId`] and supports boolean
//! composition between two independently fetched result sets. All traversal
//! happens server-side; the client only combines and reformats edge
//! collections it already holds.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::GraphError;
use crate::model::{EdgeId, RelationshipRecord};

// ─────────────────────────────────────────────
// QueryValue
// ─────────────────────────────────────────────

/// Result of a stored-function call.
///
/// Set operations require both operands to be graphs; handing a `Table` to
/// one fails with [`GraphError::TypeMismatch`] rather than coercing.
#[derive(Debug, Clone)]
pub enum QueryValue {
    /// A set of relationship records.
    Graph(GraphValue),
    /// Plain rows (statistics, pmid lists, contradiction reports, …).
    Table(Vec<Map<String, Value>>),
}

impl QueryValue {
    pub fn as_graph(&self) -> Result<&GraphValue, GraphError> {
        match self {
            QueryValue::Graph(graph) => Ok(graph),
            QueryValue::Table(_) => Err(GraphError::TypeMismatch),
        }
    }

    pub fn into_graph(self) -> Result<GraphValue, GraphError> {
        match self {
            QueryValue::Graph(graph) => Ok(graph),
            QueryValue::Table(_) => Err(GraphError::TypeMismatch),
        }
    }
}

impl From<GraphValue> for QueryValue {
    fn from(graph: GraphValue) -> Self {
        QueryValue::Graph(graph)
    }
}

// ─────────────────────────────────────────────
// GraphValue
// ─────────────────────────────────────────────

/// An immutable collection of relationship records keyed by edge id.
///
/// Duplicate records (same `edge_id`) may arrive when two queries overlap;
/// they collapse to one edge for all set semantics. Every operation returns
/// a new value; there is no in-place mutation.
#[derive(Debug, Clone, Default)]
pub struct GraphValue {
    records: Vec<RelationshipRecord>,
}

impl GraphValue {
    pub fn new(records: Vec<RelationshipRecord>) -> Self {
        Self { records }
    }

    /// The underlying records as fetched, duplicates included.
    pub fn records(&self) -> &[RelationshipRecord] {
        &self.records
    }

    /// Set of distinct edge ids present.
    pub fn edge_id_set(&self) -> HashSet<&EdgeId> {
        self.records.iter().map(|r| &r.edge_id).collect()
    }

    /// One record per distinct edge id, first occurrence wins.
    pub fn unique_edges(&self) -> Vec<&RelationshipRecord> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(&r.edge_id))
            .collect()
    }

    /// Number of distinct edges, not the raw record count.
    pub fn len(&self) -> usize {
        self.edge_id_set().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Set-producing operations ───────────────────────

    /// Edges present in either graph. Where both sides carry the same id,
    /// the left-hand record is kept.
    pub fn union(&self, other: &QueryValue) -> Result<GraphValue, GraphError> {
        self.combine(other, |a, b| a || b)
    }

    /// Edges present in both graphs.
    pub fn intersection(&self, other: &QueryValue) -> Result<GraphValue, GraphError> {
        self.combine(other, |a, b| a && b)
    }

    /// Edges present here but not in `other`.
    pub fn difference(&self, other: &QueryValue) -> Result<GraphValue, GraphError> {
        self.combine(other, |a, b| a && !b)
    }

    /// Edges present in exactly one of the two graphs.
    pub fn symmetric_difference(&self, other: &QueryValue) -> Result<GraphValue, GraphError> {
        self.combine(other, |a, b| a != b)
    }

    // ── Boolean comparisons ────────────────────────────

    /// Is every edge here also in `other`?
    pub fn is_subset(&self, other: &QueryValue) -> Result<bool, GraphError> {
        let other = other.as_graph()?;
        Ok(self.edge_id_set().is_subset(&other.edge_id_set()))
    }

    /// Does this graph contain every edge of `other`?
    pub fn is_superset(&self, other: &QueryValue) -> Result<bool, GraphError> {
        let other = other.as_graph()?;
        Ok(self.edge_id_set().is_superset(&other.edge_id_set()))
    }

    /// Edge-id-set equality. Record content is not compared.
    pub fn set_eq(&self, other: &QueryValue) -> Result<bool, GraphError> {
        let other = other.as_graph()?;
        Ok(self.edge_id_set() == other.edge_id_set())
    }

    pub fn set_ne(&self, other: &QueryValue) -> Result<bool, GraphError> {
        Ok(!self.set_eq(other)?)
    }

    /// All set-producing operations share one construction rule: walk the
    /// candidate union of both operands' unique edges and keep the records
    /// whose id the membership predicate selects. The result thereby carries
    /// full record content without a second network round-trip.
    fn combine(
        &self,
        other: &QueryValue,
        keep: fn(bool, bool) -> bool,
    ) -> Result<GraphValue, GraphError> {
        let other = other.as_graph()?;
        let ours = self.edge_id_set();
        let theirs = other.edge_id_set();

        let mut taken: HashSet<EdgeId> = HashSet::new();
        let mut records = Vec::new();
        for record in self.unique_edges().into_iter().chain(other.unique_edges()) {
            let id = &record.edge_id;
            if keep(ours.contains(id), theirs.contains(id)) && taken.insert(id.clone()) {
                records.push(record.clone());
            }
        }
        Ok(GraphValue::new(records))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn rec(edge_id: &str, subject: &str, object: &str) -> RelationshipRecord {
        RelationshipRecord {
            edge_id: edge_id.into(),
            subject_id: subject.to_string(),
            object_id: object.to_string(),
            subject_label: format!("p(HGNC:{subject})"),
            object_label: format!("p(HGNC:{object})"),
            relation: "increases".to_string(),
            attributes: Map::new(),
        }
    }

    fn graph(ids: &[&str]) -> GraphValue {
        GraphValue::new(ids.iter().map(|id| rec(id, "a", "b")).collect())
    }

    #[test]
    fn len_counts_distinct_edges() {
        let g = GraphValue::new(vec![rec("e1", "a", "b"), rec("e1", "a", "b"), rec("e2", "b", "c")]);
        assert_eq!(g.records().len(), 3);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn unique_edges_first_seen_wins() {
        let first = rec("e1", "a", "b");
        let mut shadow = rec("e1", "x", "y");
        shadow.relation = "decreases".into();
        let g = GraphValue::new(vec![first, shadow]);

        let unique = g.unique_edges();
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].subject_id, "a");
    }

    #[test]
    fn worked_example_from_two_batches() {
        let a = graph(&["e1", "e2"]);
        let b = QueryValue::Graph(graph(&["e2", "e3"]));

        assert_eq!(a.union(&b).unwrap().len(), 3);
        assert_eq!(a.intersection(&b).unwrap().len(), 1);
        assert_eq!(a.symmetric_difference(&b).unwrap().len(), 2);
        assert_eq!(a.difference(&b).unwrap().len(), 1);
    }

    #[test]
    fn union_prefers_left_record_on_shared_id() {
        let mut left = rec("e1", "left", "b");
        left.relation = "increases".into();
        let mut right = rec("e1", "right", "b");
        right.relation = "decreases".into();

        let a = GraphValue::new(vec![left]);
        let b = QueryValue::Graph(GraphValue::new(vec![right]));
        let merged = a.union(&b).unwrap();
        assert_eq!(merged.records()[0].subject_id, "left");
    }

    #[test]
    fn difference_with_self_is_empty() {
        let a = graph(&["e1", "e2", "e3"]);
        let d = a.difference(&QueryValue::Graph(a.clone())).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.len(), 0);
    }

    #[test]
    fn operations_do_not_mutate_inputs() {
        let a = graph(&["e1"]);
        let b = QueryValue::Graph(graph(&["e2"]));
        let _ = a.union(&b).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.as_graph().unwrap().len(), 1);
    }

    #[test]
    fn table_operand_is_rejected() {
        let a = graph(&["e1"]);
        let table = QueryValue::Table(Vec::new());

        let err = a.union(&table).unwrap_err();
        assert_eq!(err, GraphError::TypeMismatch);
        assert_eq!(err.to_string(), "second element is not a graph");

        assert!(a.intersection(&table).is_err());
        assert!(a.difference(&table).is_err());
        assert!(a.symmetric_difference(&table).is_err());
        assert!(a.is_subset(&table).is_err());
        assert!(a.is_superset(&table).is_err());
        assert!(a.set_eq(&table).is_err());
        assert!(a.set_ne(&table).is_err());
    }

    #[test]
    fn subset_superset_and_equality() {
        let small = graph(&["e1"]);
        let big = QueryValue::Graph(graph(&["e1", "e2"]));

        assert!(small.is_subset(&big).unwrap());
        assert!(!small.is_superset(&big).unwrap());
        assert!(big.as_graph().unwrap().is_superset(&QueryValue::Graph(small.clone())).unwrap());

        let same = QueryValue::Graph(graph(&["e1"]));
        assert!(small.set_eq(&same).unwrap());
        assert!(!small.set_ne(&same).unwrap());
    }
}
