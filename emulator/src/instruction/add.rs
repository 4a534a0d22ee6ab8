use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rr::FormatRr;

declare_avr_instr!(
    name     = ADD,
    mnemonic = "add",
    format   = FormatRr
);

impl ADD {
    fn exec(&self, cpu: &mut Cpu) {
        let (sum, carry) = cpu.r[self.operands.rd as usize]
            .overflowing_add(cpu.r[self.operands.rr as usize]);
        cpu.r[self.operands.rd as usize] = sum;
        cpu.carry = carry;
    }
}

impl fmt::Display for ADD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "add r{}, r{}", self.operands.rd, self.operands.rr)
    }
}
