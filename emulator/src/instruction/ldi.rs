use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_imm::FormatImm;

declare_avr_instr!(
    name     = LDI,
    mnemonic = "ldi",
    format   = FormatImm
);

impl LDI {
    fn exec(&self, cpu: &mut Cpu) {
        cpu.r[self.operands.rd as usize] = self.operands.imm;
    }
}

impl fmt::Display for LDI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ldi r{}, {}", self.operands.rd, self.operands.imm)
    }
}
