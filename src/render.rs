//! Text renderings of a generated sequence.
//!
//! The algorithmic output is the typed instruction list; everything here
//! is serialization for the downstream firmware build, which pastes the
//! quoted form into a C inline-assembly block.

use emulator::instruction::Avr8Instruction;
use std::fmt::Write;

/// Plain assembly, one instruction per line.
pub fn render_asm(sequence: &[Avr8Instruction]) -> String {
    let mut out = String::new();
    for instr in sequence {
        writeln!(out, "{instr}").expect("writing to a String cannot fail");
    }
    out
}

/// The quoted `"... \n\t"` lines expected inside an `asm` block.
pub fn render_inline_c(sequence: &[Avr8Instruction]) -> String {
    let mut out = String::new();
    for instr in sequence {
        writeln!(out, "\"{instr} \\n\\t\"").expect("writing to a String cannot fail");
    }
    out
}
