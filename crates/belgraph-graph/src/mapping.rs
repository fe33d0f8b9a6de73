//! Dense integer remapping of opaque node identifiers.
//!
//! Compact file formats cannot carry record-id strings, so every distinct
//! node identifier in a batch is assigned a zero-based integer index. The
//! assignment is a bijection onto `0..N` and stays stable for the lifetime
//! of one mapping, which lets the graph file and the companion mapping file
//! agree on indices.

use std::collections::HashMap;

use crate::error::GraphError;

// ─────────────────────────────────────────────
// EdgeEndpoints
// ─────────────────────────────────────────────

/// Anything that names the two endpoints of a relationship.
///
/// Implemented by the full [`RelationshipRecord`](crate::model::RelationshipRecord)
/// and by the slim column set the export pipeline fetches.
pub trait EdgeEndpoints {
    fn subject_id(&self) -> &str;
    fn subject_label(&self) -> &str;
    fn object_id(&self) -> &str;
    fn object_label(&self) -> &str;
}

// ─────────────────────────────────────────────
// NodeMapping
// ─────────────────────────────────────────────

/// One mapped node: original identifier plus its display label.
/// The dense index is the node's position in the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedNode {
    pub node_id: String,
    pub label: String,
}

/// Mapping of opaque node identifiers to dense zero-based indices.
///
/// Indices are assigned in first-seen order (subject before object, batch
/// order), so rebuilding from the same batch reproduces the same mapping.
/// Pure data: building one consults nothing but its input records.
#[derive(Debug, Clone, Default)]
pub struct NodeMapping {
    /// Position is the dense index.
    nodes: Vec<MappedNode>,
    /// node_id → dense index.
    index: HashMap<String, usize>,
}

impl NodeMapping {
    /// Build a mapping over every distinct endpoint identifier in `records`.
    /// An empty batch yields an empty mapping; see [`NodeMapping::try_from_records`]
    /// for callers that must have data.
    pub fn from_records<R: EdgeEndpoints>(records: &[R]) -> Self {
        let mut mapping = Self::default();
        for record in records {
            mapping.insert(record.subject_id(), record.subject_label());
            mapping.insert(record.object_id(), record.object_label());
        }
        mapping
    }

    /// Like [`NodeMapping::from_records`] but fails on an empty batch.
    pub fn try_from_records<R: EdgeEndpoints>(records: &[R]) -> Result<Self, GraphError> {
        if records.is_empty() {
            return Err(GraphError::EmptyInput);
        }
        Ok(Self::from_records(records))
    }

    fn insert(&mut self, node_id: &str, label: &str) {
        if !self.index.contains_key(node_id) {
            self.index.insert(node_id.to_string(), self.nodes.len());
            self.nodes.push(MappedNode {
                node_id: node_id.to_string(),
                label: label.to_string(),
            });
        }
    }

    /// Dense index of a node identifier, if it appeared in the batch.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.index.get(node_id).copied()
    }

    /// First-seen display label of a node identifier.
    pub fn label_of(&self, node_id: &str) -> Option<&str> {
        self.index_of(node_id).map(|i| self.nodes[i].label.as_str())
    }

    /// Number of distinct node identifiers mapped.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate `(dense_index, node)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &MappedNode)> {
        self.nodes.iter().enumerate()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Endpoints {
        subject: (&'static str, &'static str),
        object: (&'static str, &'static str),
    }

    impl EdgeEndpoints for Endpoints {
        fn subject_id(&self) -> &str {
            self.subject.0
        }

        fn subject_label(&self) -> &str {
            self.subject.1
        }

        fn object_id(&self) -> &str {
            self.object.0
        }

        fn object_label(&self) -> &str {
            self.object.1
        }
    }

    fn edge(s: (&'static str, &'static str), o: (&'static str, &'static str)) -> Endpoints {
        Endpoints { subject: s, object: o }
    }

    #[test]
    fn indices_are_a_permutation_of_zero_to_n() {
        let records = vec![
            edge(("#1:0", "a"), ("#2:0", "b")),
            edge(("#2:0", "b"), ("#3:0", "c")),
            edge(("#1:0", "a"), ("#3:0", "c")),
        ];
        let mapping = NodeMapping::from_records(&records);

        assert_eq!(mapping.len(), 3);
        let mut indices: Vec<usize> = mapping.iter().map(|(i, _)| i).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2]);

        for (index, node) in mapping.iter() {
            assert_eq!(mapping.index_of(&node.node_id), Some(index));
        }
    }

    #[test]
    fn first_seen_order_and_label() {
        let records = vec![
            edge(("#1:0", "first label"), ("#2:0", "b")),
            edge(("#1:0", "later label"), ("#3:0", "c")),
        ];
        let mapping = NodeMapping::from_records(&records);

        assert_eq!(mapping.index_of("#1:0"), Some(0));
        assert_eq!(mapping.index_of("#2:0"), Some(1));
        assert_eq!(mapping.index_of("#3:0"), Some(2));
        assert_eq!(mapping.label_of("#1:0"), Some("first label"));
    }

    #[test]
    fn rebuilding_from_same_batch_is_stable() {
        let records = vec![
            edge(("#5:0", "x"), ("#6:0", "y")),
            edge(("#7:0", "z"), ("#5:0", "x")),
        ];
        let a = NodeMapping::from_records(&records);
        let b = NodeMapping::from_records(&records);
        for (index, node) in a.iter() {
            assert_eq!(b.index_of(&node.node_id), Some(index));
        }
    }

    #[test]
    fn empty_batch_is_empty_or_an_error_on_demand() {
        let records: Vec<Endpoints> = Vec::new();
        assert!(NodeMapping::from_records(&records).is_empty());
        assert_eq!(
            NodeMapping::try_from_records(&records).unwrap_err(),
            GraphError::EmptyInput
        );
    }

    #[test]
    fn unknown_identifier_has_no_index() {
        let records = vec![edge(("#1:0", "a"), ("#2:0", "b"))];
        let mapping = NodeMapping::from_records(&records);
        assert_eq!(mapping.index_of("#9:9"), None);
        assert_eq!(mapping.label_of("#9:9"), None);
    }
}
