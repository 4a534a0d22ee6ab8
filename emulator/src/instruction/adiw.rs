use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_ptr::FormatPtr;

declare_avr_instr!(
    name     = ADIW,
    mnemonic = "adiw",
    format   = FormatPtr
);

impl ADIW {
    fn exec(&self, cpu: &mut Cpu) {
        let (sum, carry) = cpu
            .pointer(self.operands.ptr)
            .overflowing_add(self.operands.imm as u16);
        cpu.set_pointer(self.operands.ptr, sum);
        cpu.carry = carry;
    }
}

impl fmt::Display for ADIW {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adiw r{}, {}", self.operands.ptr.lo(), self.operands.imm)
    }
}
