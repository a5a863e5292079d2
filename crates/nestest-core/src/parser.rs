//! Trace line parser
//!
//! Lines look like this (nestest.log dialect):
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
//! ```
//!
//! Tokens are split on single spaces, so runs of spaces leave empty tokens
//! behind and token positions follow the fixed column layout of the log:
//! token 0 is the PC, token 2 the opcode, tokens 3 and 4 the operand bytes.
//! Register and cycle fields are located by their marker instead of by
//! position, which keeps dialects with extra columns (`PPU:` and friends)
//! working.

use crate::error::LineError;
use crate::record::{InstructionLength, TraceRecord};

/// Maximum number of splits made on a line
pub const MAX_SPLITS: usize = 100;

const OPCODE_TOKEN: usize = 2;
const FIRST_OPERAND_TOKEN: usize = 3;
const SECOND_OPERAND_TOKEN: usize = 4;

const A_MARKER: &str = "A:";
const CYCLE_MARKER: &str = "CYC:";

/// Label length of each register token following the `A:` marker, in order
const REGISTER_PREFIXES: [usize; 5] = [2, 2, 2, 2, 3];

/// How instruction length is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMode {
    /// Output identical to the legacy converter: three-byte instructions
    /// are reported as two bytes long.
    #[default]
    Compatible,
    /// Also checks the second operand byte and reports three-byte
    /// instructions as such.
    Corrected,
}

/// Split a line into tokens on single spaces
pub fn tokenize(line: &str) -> Vec<&str> {
    line.splitn(MAX_SPLITS + 1, ' ').collect()
}

/// Check whether a token reads as a hex integer
///
/// Only the syntax is checked, so tokens of any length pass. Accepted:
/// surrounding whitespace, a `+` or `-` sign, a `0x` prefix, and single
/// `_` separators between digits (one may also follow the prefix).
pub fn is_hex(token: &str) -> bool {
    let token = token.trim();
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let (digits, prefixed) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => (rest, true),
        None => (unsigned, false),
    };
    let digits = match digits.strip_prefix('_') {
        Some(rest) if prefixed => rest,
        _ => digits,
    };
    !digits.is_empty()
        && digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn token_is_hex(tokens: &[&str], index: usize) -> bool {
    tokens.get(index).map_or(false, |t| is_hex(t))
}

/// Drop the first `count` characters of a token
fn strip_label(token: &str, count: usize) -> &str {
    match token.char_indices().nth(count) {
        Some((i, _)) => &token[i..],
        None => "",
    }
}

/// Index of the last token starting with `marker`
fn find_marker(tokens: &[&str], marker: &'static str) -> Result<usize, LineError> {
    tokens
        .iter()
        .rposition(|t| t.starts_with(marker))
        .ok_or(LineError::MissingMarker(marker))
}

fn classify_length(tokens: &[&str], mode: LengthMode) -> InstructionLength {
    if !token_is_hex(tokens, FIRST_OPERAND_TOKEN) {
        return InstructionLength::One;
    }
    match mode {
        LengthMode::Compatible => InstructionLength::Two,
        LengthMode::Corrected if token_is_hex(tokens, SECOND_OPERAND_TOKEN) => {
            InstructionLength::Three
        }
        LengthMode::Corrected => InstructionLength::Two,
    }
}

/// Parse one trace line into a record
pub fn parse_line(line: &str, mode: LengthMode) -> Result<TraceRecord, LineError> {
    let tokens = tokenize(line);

    let opcode = tokens.get(OPCODE_TOKEN).copied().unwrap_or_default();
    if !is_hex(opcode) {
        return Err(LineError::InvalidOpcode {
            token: opcode.to_string(),
        });
    }
    let length = classify_length(&tokens, mode);

    let a_index = find_marker(&tokens, A_MARKER)?;
    let registers = tokens
        .get(a_index..a_index + REGISTER_PREFIXES.len())
        .ok_or(LineError::TruncatedRegisters {
            found: tokens.len() - a_index - 1,
        })?;
    let [a, x, y, p, sp]: [String; 5] =
        std::array::from_fn(|i| strip_label(registers[i], REGISTER_PREFIXES[i]).to_string());

    let cycle_token = tokens[find_marker(&tokens, CYCLE_MARKER)?];
    let cycle_text = strip_label(cycle_token, CYCLE_MARKER.len()).trim();
    let cycles = cycle_text.parse::<u64>().map_err(|_| LineError::InvalidCycleCount {
        token: cycle_text.to_string(),
    })?;

    Ok(TraceRecord {
        program_counter: tokens[0].to_string(),
        length,
        a,
        x,
        y,
        p,
        sp,
        cycles,
    })
}
