use common::constants::{MAX_WINDOW, MIN_WINDOW};
use thiserror::Error;

/// Generation-time failures. Generation either succeeds completely or
/// fails here before a single instruction is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The requested per-operand register window cannot be kept resident
    /// alongside the accumulator block and pointer registers.
    #[error(
        "register window of {window} limbs per bank is outside the feasible \
         range {MIN_WINDOW}..={MAX_WINDOW} for this register file"
    )]
    RegisterWindowOverflow { window: usize },
}
