//! Output formats and their delimiter rules.

use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// Supported graph file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Two-column integer edge list (`lst`).
    EdgeList,
    /// Simple Interaction Format adjacency rows (`sif`); delimiter must be
    /// tab or space because anything else may occur inside a node label.
    Sif,
    /// Adjacency rows with a free-choice delimiter (`csv`).
    Csv,
    /// Verbatim full-attribute records, no index remapping (`json`).
    Json,
}

impl ExportFormat {
    /// Only the JSON output carries every record attribute; the other
    /// formats fetch the minimal column set.
    pub(crate) fn wants_full_records(self) -> bool {
        matches!(self, ExportFormat::Json)
    }

    pub(crate) fn validate_delimiter(self, delim: char) -> Result<(), ExportError> {
        if self == ExportFormat::Sif && delim != '\t' && delim != ' ' {
            return Err(ExportError::InvalidDelimiter(delim));
        }
        Ok(())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "lst" => Ok(ExportFormat::EdgeList),
            "sif" => Ok(ExportFormat::Sif),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::EdgeList => "lst",
            ExportFormat::Sif => "sif",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for name in ["lst", "sif", "csv", "json"] {
            let format: ExportFormat = name.parse().expect("known format");
            assert_eq!(format.to_string(), name);
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = "foo".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref name) if name == "foo"));
    }

    #[test]
    fn sif_accepts_only_tab_or_space() {
        assert!(ExportFormat::Sif.validate_delimiter('\t').is_ok());
        assert!(ExportFormat::Sif.validate_delimiter(' ').is_ok());
        assert!(matches!(
            ExportFormat::Sif.validate_delimiter('^'),
            Err(ExportError::InvalidDelimiter('^'))
        ));
        // Other formats place no restriction.
        assert!(ExportFormat::Csv.validate_delimiter('^').is_ok());
        assert!(ExportFormat::EdgeList.validate_delimiter('^').is_ok());
    }
}
