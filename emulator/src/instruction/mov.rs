use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rr::FormatRr;

declare_avr_instr!(
    name     = MOV,
    mnemonic = "mov",
    format   = FormatRr
);

impl MOV {
    fn exec(&self, cpu: &mut Cpu) {
        cpu.r[self.operands.rd as usize] = cpu.r[self.operands.rr as usize];
    }
}

impl fmt::Display for MOV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mov r{}, r{}", self.operands.rd, self.operands.rr)
    }
}
