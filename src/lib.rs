//! Umbrella crate: re-exports the generators and provides the textual
//! renderings consumed by downstream build glue.

pub mod render;

use emulator::instruction::Avr8Instruction;

pub use common::variant::Variant;
pub use mulgen::{mul_sequence_builder, square_sequence_builder, SequenceError};

/// Generate the sequence for the chosen variant.
pub fn sequence_for(
    variant: Variant,
    window: usize,
) -> Result<Vec<Avr8Instruction>, SequenceError> {
    match variant {
        Variant::Multiply => mul_sequence_builder(window),
        Variant::Square => square_sequence_builder(window),
    }
}
