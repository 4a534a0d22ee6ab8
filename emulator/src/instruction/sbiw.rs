use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_ptr::FormatPtr;

declare_avr_instr!(
    name     = SBIW,
    mnemonic = "sbiw",
    format   = FormatPtr
);

impl SBIW {
    fn exec(&self, cpu: &mut Cpu) {
        let (difference, borrow) = cpu
            .pointer(self.operands.ptr)
            .overflowing_sub(self.operands.imm as u16);
        cpu.set_pointer(self.operands.ptr, difference);
        cpu.carry = borrow;
    }
}

impl fmt::Display for SBIW {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sbiw r{}, {}", self.operands.ptr.lo(), self.operands.imm)
    }
}
