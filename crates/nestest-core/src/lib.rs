//! nestest Core - trace log to test vector conversion
//!
//! This crate turns a CPU execution trace in the nestest.log dialect into
//! compact fixed-column test vectors, one line per traced instruction.
//! It is the library half of the converter and carries no CLI dependencies.

#![forbid(unsafe_code)]

/// Whole-trace conversion: parse every line, then write every vector
pub mod convert;
/// Error types for line parsing and file conversion
pub mod error;
/// Per-line trace parser
pub mod parser;
/// Parsed trace record and its vector formatting
pub mod record;

pub use convert::{
    convert_file, parse_trace, render_vectors, write_vectors, ConvertOptions, ConvertSummary,
    DEFAULT_OUTPUT,
};
pub use error::{LineError, TraceError};
pub use parser::{parse_line, LengthMode};
pub use record::{InstructionLength, TraceRecord, VECTOR_MARKER};
