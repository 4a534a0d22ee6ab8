use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rr::FormatRr;

declare_avr_instr!(
    name     = MUL,
    mnemonic = "mul",
    format   = FormatRr
);

impl MUL {
    /// `r1:r0 = rd * rr`; carry takes bit 15 of the product.
    fn exec(&self, cpu: &mut Cpu) {
        let lhs = cpu.r[self.operands.rd as usize];
        let rhs = cpu.r[self.operands.rr as usize];
        cpu.mul_trace.push((lhs, rhs));
        let product = (lhs as u16) * (rhs as u16);
        cpu.r[common::constants::MUL_LO as usize] = product as u8;
        cpu.r[common::constants::MUL_HI as usize] = (product >> 8) as u8;
        cpu.carry = product & 0x8000 != 0;
    }
}

impl fmt::Display for MUL {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mul r{}, r{}", self.operands.rd, self.operands.rr)
    }
}
