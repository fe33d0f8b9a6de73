use thiserror::Error;

use belgraph_client::ClientError;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format name is not one of the supported four.
    #[error("output format must be one of 'lst', 'sif', 'csv' or 'json', got '{0}'")]
    UnsupportedFormat(String),

    /// SIF syntax reserves its delimiter, so only tab or space are legal.
    #[error("delimiter for a sif file must be tab or space, got {0:?}")]
    InvalidDelimiter(char),

    /// A record in the batch is missing the columns the export needs.
    #[error("malformed export record: {0}")]
    MalformedRecord(String),

    /// Transport or auth failure, passed through unchanged. No retry.
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
