//! Error types
//!
//! Nothing here is recoverable: the first error aborts the conversion and
//! leaves no output behind.

use std::path::PathBuf;

/// Why a single trace line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("opcode byte {token:?} is not valid hex")]
    InvalidOpcode { token: String },
    #[error("no token starting with {0:?}")]
    MissingMarker(&'static str),
    #[error("expected 4 register tokens after \"A:\", found {found}")]
    TruncatedRegisters { found: usize },
    #[error("cycle count {token:?} is not a decimal number")]
    InvalidCycleCount { token: String },
}

/// Conversion failure
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: LineError,
    },
}

impl TraceError {
    /// 1-based line number of a parse failure
    pub fn line(&self) -> Option<usize> {
        match self {
            TraceError::Line { line, .. } => Some(*line),
            TraceError::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_error_messages() {
        let err = TraceError::Line {
            line: 12,
            source: LineError::MissingMarker("CYC:"),
        };
        assert_eq!(err.to_string(), "line 12: no token starting with \"CYC:\"");
        assert_eq!(err.line(), Some(12));
    }

    #[test]
    fn test_io_error_message() {
        let err = TraceError::Io {
            path: PathBuf::from("missing.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "missing.log: not found");
        assert_eq!(err.line(), None);
    }
}
