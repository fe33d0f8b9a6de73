//! Export pipeline: fetch a raw relationship batch, remap node identifiers
//! to dense integers, write a graph file plus a mapping file.
//!
//! The pipeline moves through fetch → map → prepare → write. After one
//! write it can be re-entered to rewrite the cached batch in a different
//! format or delimiter without another round-trip. An empty batch is a soft
//! "no data" state: [`Exporter::export`] returns `Ok(None)` and no file is
//! touched.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use belgraph_client::{Client, QueryBackend};
use belgraph_graph::mapping::{EdgeEndpoints, NodeMapping};

use crate::error::ExportError;
use crate::format::ExportFormat;

/// Server-side export functions.
const EXPORT_FULL: &str = "export_full";
const EXPORT_SLIM: &str = "export_slim";

/// Default mapping file name, placed next to the graph file.
const DEFAULT_MAP_FILE: &str = "node_map.tsv";

// ─────────────────────────────────────────────
// Options and result paths
// ─────────────────────────────────────────────

/// Settings for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Graph file destination.
    pub graph_path: PathBuf,

    /// Graph file format.
    pub format: ExportFormat,

    /// Field delimiter for sif/csv adjacency rows. `sif` accepts only tab
    /// or space.
    pub graph_delim: char,

    /// Mapping file destination; `None` puts `node_map.tsv` beside the
    /// graph file.
    pub mapping_path: Option<PathBuf>,

    /// Field delimiter for the mapping file.
    pub map_delim: char,
}

impl ExportOptions {
    pub fn new(graph_path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            graph_path: graph_path.into(),
            format,
            graph_delim: ',',
            mapping_path: None,
            map_delim: '\t',
        }
    }
}

/// Paths written by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub graph: PathBuf,
    pub mapping: PathBuf,
}

// ─────────────────────────────────────────────
// Fetched batch
// ─────────────────────────────────────────────

/// Minimal column set every export record carries. The slim export returns
/// exactly these; the full export includes them among its attributes.
#[derive(Debug, Clone, Deserialize)]
struct SlimRecord {
    #[serde(alias = "out_rid")]
    subject_id: String,

    #[serde(alias = "out_bel", default)]
    subject_label: String,

    #[serde(alias = "in_rid")]
    object_id: String,

    #[serde(alias = "in_bel", default)]
    object_label: String,

    relation: String,
}

impl EdgeEndpoints for SlimRecord {
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

/// Raw batch plus the node mapping built from it. Cached across writes so a
/// format change never refetches.
struct FetchedBatch {
    /// Records as ingested (bookkeeping keys stripped); the JSON output.
    raw: Vec<Map<String, Value>>,
    /// Typed view driving the remapped formats.
    slim: Vec<SlimRecord>,
    /// Dense index per distinct endpoint identifier.
    mapping: NodeMapping,
}

// ─────────────────────────────────────────────
// Exporter
// ─────────────────────────────────────────────

/// Drives one export run against a client.
pub struct Exporter<'a, B: QueryBackend> {
    client: &'a Client<B>,
    options: ExportOptions,
    batch: Option<FetchedBatch>,
}

impl<'a, B: QueryBackend> Exporter<'a, B> {
    pub fn new(client: &'a Client<B>, options: ExportOptions) -> Self {
        Self {
            client,
            options,
            batch: None,
        }
    }

    /// Fetch, map and write in one go. Returns `Ok(None)` when the server
    /// has no relationships to export.
    pub fn export(&mut self) -> Result<Option<ExportPaths>, ExportError> {
        if !self.fetch()? {
            return Ok(None);
        }
        self.write()
    }

    /// One blocking round-trip for the batch, slim or full depending on the
    /// requested format, followed by the node-index mapping over it.
    /// Returns `false`, the terminal "no data" state, on an empty batch.
    pub fn fetch(&mut self) -> Result<bool, ExportError> {
        let function = if self.options.format.wants_full_records() {
            EXPORT_FULL
        } else {
            EXPORT_SLIM
        };
        let raw = self.client.records(function, &[])?;

        let mut slim = Vec::with_capacity(raw.len());
        for record in &raw {
            let parsed: SlimRecord = serde_json::from_value(Value::Object(record.clone()))
                .map_err(|e| ExportError::MalformedRecord(e.to_string()))?;
            slim.push(parsed);
        }
        let mapping = NodeMapping::from_records(&slim);

        if slim.is_empty() || mapping.is_empty() {
            self.batch = None;
            return Ok(false);
        }

        debug!(records = slim.len(), nodes = mapping.len(), function = %function, "export batch fetched");
        self.batch = Some(FetchedBatch { raw, slim, mapping });
        Ok(true)
    }

    /// Rewrite the cached batch, optionally switching format or delimiter.
    /// No round-trip happens; the mapping (and therefore every index in the
    /// output) is the one built at fetch time.
    pub fn rewrite(
        &mut self,
        format: Option<ExportFormat>,
        graph_delim: Option<char>,
    ) -> Result<Option<ExportPaths>, ExportError> {
        if let Some(format) = format {
            self.options.format = format;
        }
        if let Some(delim) = graph_delim {
            self.options.graph_delim = delim;
        }
        self.write()
    }

    /// Point the next write at a different graph file.
    pub fn set_graph_path(&mut self, path: impl Into<PathBuf>) {
        self.options.graph_path = path.into();
    }

    /// Serialize the prepared batch to the graph file and the mapping file.
    /// Validates the delimiter before touching the filesystem; returns
    /// `Ok(None)` when nothing was fetched.
    pub fn write(&self) -> Result<Option<ExportPaths>, ExportError> {
        let Some(batch) = &self.batch else {
            return Ok(None);
        };
        self.options.format.validate_delimiter(self.options.graph_delim)?;

        match self.options.format {
            ExportFormat::EdgeList => self.write_edge_list(batch)?,
            ExportFormat::Sif | ExportFormat::Csv => self.write_adjacency(batch)?,
            ExportFormat::Json => self.write_json(batch)?,
        }
        let mapping = self.write_mapping(batch)?;

        info!(
            graph = %self.options.graph_path.display(),
            mapping = %mapping.display(),
            format = %self.options.format,
            "export written"
        );
        Ok(Some(ExportPaths {
            graph: self.options.graph_path.clone(),
            mapping,
        }))
    }

    // ── Preparation ────────────────────────────────────

    /// `(subject_index, object_index)` per record, batch order.
    fn prepare_edge_list(batch: &FetchedBatch) -> Vec<(usize, usize)> {
        batch
            .slim
            .iter()
            .filter_map(|r| {
                Some((
                    batch.mapping.index_of(&r.subject_id)?,
                    batch.mapping.index_of(&r.object_id)?,
                ))
            })
            .collect()
    }

    /// Two-level grouping `subject_index → relation → [object_index, …]`.
    /// Duplicate records keep their duplicate object indices (multi-edge);
    /// rows come out sorted by subject then relation.
    fn prepare_adjacency(batch: &FetchedBatch) -> BTreeMap<usize, BTreeMap<String, Vec<usize>>> {
        let mut triples: BTreeMap<usize, BTreeMap<String, Vec<usize>>> = BTreeMap::new();
        for record in &batch.slim {
            let (Some(subject), Some(object)) = (
                batch.mapping.index_of(&record.subject_id),
                batch.mapping.index_of(&record.object_id),
            ) else {
                continue;
            };
            triples
                .entry(subject)
                .or_default()
                .entry(record.relation.clone())
                .or_default()
                .push(object);
        }
        triples
    }

    // ── Writers ────────────────────────────────────────

    fn write_edge_list(&self, batch: &FetchedBatch) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(&self.options.graph_path)?);
        for (subject, object) in Self::prepare_edge_list(batch) {
            writeln!(writer, "{subject} {object}")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_adjacency(&self, batch: &FetchedBatch) -> Result<(), ExportError> {
        let delim = self.options.graph_delim;
        let mut writer = BufWriter::new(File::create(&self.options.graph_path)?);
        for (subject, relations) in Self::prepare_adjacency(batch) {
            for (relation, objects) in relations {
                let mut row = format!("{subject}{delim}{relation}");
                for object in objects {
                    row.push(delim);
                    row.push_str(&object.to_string());
                }
                writeln!(writer, "{row}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, batch: &FetchedBatch) -> Result<(), ExportError> {
        let mut writer = BufWriter::new(File::create(&self.options.graph_path)?);
        serde_json::to_writer(&mut writer, &batch.raw)?;
        writer.flush()?;
        Ok(())
    }

    /// The mapping file is written for every format: one row of
    /// `(dense_index, original_identifier, display_label)` per node.
    fn write_mapping(&self, batch: &FetchedBatch) -> Result<PathBuf, ExportError> {
        let path = match &self.options.mapping_path {
            Some(path) => path.clone(),
            None => self
                .options
                .graph_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_MAP_FILE),
        };

        let delim = self.options.map_delim;
        let mut writer = BufWriter::new(File::create(&path)?);
        for (index, node) in batch.mapping.iter() {
            writeln!(writer, "{index}{delim}{}{delim}{}", node.node_id, node.label)?;
        }
        writer.flush()?;
        Ok(path)
    }
}

/// One-shot convenience: parse the format name, fetch and write with
/// default delimiters and the default mapping location.
pub fn export_graph<B: QueryBackend>(
    client: &Client<B>,
    graph_path: impl Into<PathBuf>,
    format_name: &str,
) -> Result<Option<ExportPaths>, ExportError> {
    let options = ExportOptions::new(graph_path, format_name.parse()?);
    Exporter::new(client, options).export()
}
