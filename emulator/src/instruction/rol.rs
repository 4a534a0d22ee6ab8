use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rd::FormatRd;

declare_avr_instr!(
    name     = ROL,
    mnemonic = "rol",
    format   = FormatRd
);

impl ROL {
    /// Rotate left through carry: the old carry enters bit 0, bit 7
    /// becomes the new carry.
    fn exec(&self, cpu: &mut Cpu) {
        let value = cpu.r[self.operands.rd as usize];
        let carry_in = cpu.carry as u8;
        cpu.carry = value & 0x80 != 0;
        cpu.r[self.operands.rd as usize] = (value << 1) | carry_in;
    }
}

impl fmt::Display for ROL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rol r{}", self.operands.rd)
    }
}
