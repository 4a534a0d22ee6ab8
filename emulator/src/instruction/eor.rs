use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rr::FormatRr;

declare_avr_instr!(
    name     = EOR,
    mnemonic = "eor",
    format   = FormatRr
);

impl EOR {
    /// Carry is untouched; `eor rd, rd` is the idiomatic register clear.
    fn exec(&self, cpu: &mut Cpu) {
        cpu.r[self.operands.rd as usize] ^= cpu.r[self.operands.rr as usize];
    }
}

impl fmt::Display for EOR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "eor r{}, r{}", self.operands.rd, self.operands.rr)
    }
}
