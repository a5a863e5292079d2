//! Trace conversion
//!
//! Conversion runs in two phases. The whole trace is parsed into memory
//! first; vectors are written only once every line has parsed, so a
//! malformed trace never leaves a partial output file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::TraceError;
use crate::parser::{parse_line, LengthMode};
use crate::record::TraceRecord;

/// Output file written when no other path is given
pub const DEFAULT_OUTPUT: &str = "nestest.txt";

/// Conversion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Where the vectors are written, relative to the working directory
    /// unless absolute
    pub output: PathBuf,
    /// Instruction length classification
    pub length_mode: LengthMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            length_mode: LengthMode::default(),
        }
    }
}

/// Result of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of vectors written
    pub records: usize,
    /// File the vectors went to
    pub output: PathBuf,
}

/// Parse a whole trace, stopping at the first bad line
pub fn parse_trace(text: &str, mode: LengthMode) -> Result<Vec<TraceRecord>, TraceError> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let record = parse_line(line, mode).map_err(|source| TraceError::Line {
            line: index + 1,
            source,
        })?;
        log::debug!("line {}: {}", index + 1, record);
        records.push(record);
    }
    Ok(records)
}

/// Write one vector line per record, in order
pub fn write_vectors<W: Write>(records: &[TraceRecord], mut writer: W) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()
}

/// Render vectors into a string
pub fn render_vectors(records: &[TraceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

/// Convert the trace at `input` and write the vectors to `options.output`
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConvertSummary, TraceError> {
    let text = fs::read_to_string(input).map_err(|source| TraceError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let records = parse_trace(&text, options.length_mode)?;
    log::info!("parsed {} trace lines from {}", records.len(), input.display());

    let io_error = |source| TraceError::Io {
        path: options.output.clone(),
        source,
    };
    let file = File::create(&options.output).map_err(io_error)?;
    write_vectors(&records, BufWriter::new(file)).map_err(io_error)?;
    log::info!("wrote {} vectors to {}", records.len(), options.output.display());

    Ok(ConvertSummary {
        records: records.len(),
        output: options.output.clone(),
    })
}
