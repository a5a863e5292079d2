//! Instruction length classification in both modes
//!
//! The legacy converter never reports three-byte instructions. Compatible
//! mode keeps that output; corrected mode reports the real length.

use nestest_core::{parse_trace, render_vectors, InstructionLength, LengthMode};

const TRACE: &str = "\
C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
C5F5  A2 00     LDX #$00                        A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 30 CYC:10
C72F  EA        NOP                             A:00 X:00 Y:00 P:26 SP:FB PPU:  0,147 CYC:49
";

fn lengths(mode: LengthMode) -> Vec<InstructionLength> {
    parse_trace(TRACE, mode)
        .unwrap()
        .iter()
        .map(|record| record.length)
        .collect()
}

#[test]
fn test_compatible_mode_caps_at_two() {
    assert_eq!(
        lengths(LengthMode::Compatible),
        vec![InstructionLength::Two, InstructionLength::Two, InstructionLength::One]
    );
}

#[test]
fn test_corrected_mode_detects_three() {
    assert_eq!(
        lengths(LengthMode::Corrected),
        vec![InstructionLength::Three, InstructionLength::Two, InstructionLength::One]
    );
}

#[test]
fn test_modes_differ_only_in_length_digit() {
    let compatible = render_vectors(&parse_trace(TRACE, LengthMode::Compatible).unwrap());
    let corrected = render_vectors(&parse_trace(TRACE, LengthMode::Corrected).unwrap());

    assert_eq!(compatible.lines().next(), Some("C000 2 00 00 00 24 FD 0007 42"));
    assert_eq!(corrected.lines().next(), Some("C000 3 00 00 00 24 FD 0007 42"));
    for (a, b) in compatible.lines().zip(corrected.lines()).skip(1) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_default_mode_is_compatible() {
    assert_eq!(LengthMode::default(), LengthMode::Compatible);
}
