//! Generators for straight-line, branch-free AVR instruction sequences
//! computing the full double-width product (or square) of little-endian
//! 8-bit-limb integers, with every operand limb kept register-resident
//! through a sliding register window.

pub mod accumulator;
pub mod diagonal;
pub mod error;
pub mod multiplication;
pub mod sdk;
pub mod squaring;
pub mod window;

pub use error::SequenceError;
pub use multiplication::sequence_builder::mul_sequence_builder;
pub use squaring::sequence_builder::square_sequence_builder;
