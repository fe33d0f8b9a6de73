use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mapping::EdgeEndpoints;

// ─────────────────────────────────────────────
// EdgeId
// ─────────────────────────────────────────────

/// Opaque unique identifier of a relationship record.
///
/// The server hands these out either as integers or as record-id strings
/// (e.g. `"#123:4"`). Stable across queries against the same backing store:
/// two records with equal ids are the same edge, whichever batch they
/// arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeId {
    Num(i64),
    Text(String),
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeId::Num(n) => write!(f, "{n}"),
            EdgeId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EdgeId {
    fn from(n: i64) -> Self {
        EdgeId::Num(n)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        EdgeId::Text(s.to_string())
    }
}

// ─────────────────────────────────────────────
// RelationshipRecord
// ─────────────────────────────────────────────

/// One directed edge returned by a stored query function.
///
/// The named fields are the columns every graph query carries; everything
/// else the server sends (evidence text, pmid, annotation fields, …) is
/// kept opaquely in `attributes` and never interpreted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub edge_id: EdgeId,

    /// Opaque node identifier of the source endpoint.
    pub subject_id: String,

    /// Opaque node identifier of the target endpoint.
    pub object_id: String,

    /// Human-readable source endpoint (its BEL statement), used for mapping
    /// files only, never for equality.
    #[serde(rename = "subject_bel", default)]
    pub subject_label: String,

    /// Human-readable target endpoint (its BEL statement).
    #[serde(rename = "object_bel", default)]
    pub object_label: String,

    /// Semantic type of the edge, e.g. `"increases"`.
    pub relation: String,

    /// Remaining record columns, carried verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl RelationshipRecord {
    /// Parse a raw server record, stripping internal bookkeeping keys first.
    pub fn from_raw(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(strip_internal_keys(record)))
    }
}

impl EdgeEndpoints for RelationshipRecord {
    fn subject_id(&self) -> &str {
        &self.subject_id
    }

    fn subject_label(&self) -> &str {
        &self.subject_label
    }

    fn object_id(&self) -> &str {
        &self.object_id
    }

    fn object_label(&self) -> &str {
        &self.object_label
    }
}

/// Drop internal `@`-prefixed bookkeeping keys (`@rid`, `@class`, …) from a
/// raw server record. Applied once when a record enters the system; nothing
/// downstream checks key prefixes again.
pub fn strip_internal_keys(record: Map<String, Value>) -> Map<String, Value> {
    record
        .into_iter()
        .filter(|(key, _)| !key.starts_with('@'))
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
