use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum_macros::{Display, IntoStaticStr};

pub mod format_imm;
pub mod format_mem;
pub mod format_ptr;
pub mod format_rd;
pub mod format_rr;

/// One of the three 16-bit pointer pairs of the register file.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Ptr {
    #[default]
    X,
    Y,
    Z,
}

impl Ptr {
    /// Register holding the low byte of the pointer (`XL`/`YL`/`ZL`).
    pub fn lo(self) -> u8 {
        match self {
            Ptr::X => 26,
            Ptr::Y => 28,
            Ptr::Z => 30,
        }
    }

    /// Register holding the high byte of the pointer.
    pub fn hi(self) -> u8 {
        self.lo() + 1
    }
}

/// Operand layout of an instruction.
pub trait InstructionFormat: Default + Debug + Copy + PartialEq {}

impl InstructionFormat for format_rr::FormatRr {}
impl InstructionFormat for format_rd::FormatRd {}
impl InstructionFormat for format_imm::FormatImm {}
impl InstructionFormat for format_mem::FormatMem {}
impl InstructionFormat for format_ptr::FormatPtr {}
