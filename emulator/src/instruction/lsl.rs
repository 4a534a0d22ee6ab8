use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rd::FormatRd;

declare_avr_instr!(
    name     = LSL,
    mnemonic = "lsl",
    format   = FormatRd
);

impl LSL {
    fn exec(&self, cpu: &mut Cpu) {
        let value = cpu.r[self.operands.rd as usize];
        cpu.carry = value & 0x80 != 0;
        cpu.r[self.operands.rd as usize] = value << 1;
    }
}

impl fmt::Display for LSL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lsl r{}", self.operands.rd)
    }
}
