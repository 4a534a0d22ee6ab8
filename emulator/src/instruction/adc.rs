use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_rr::FormatRr;

declare_avr_instr!(
    name     = ADC,
    mnemonic = "adc",
    format   = FormatRr
);

impl ADC {
    fn exec(&self, cpu: &mut Cpu) {
        let sum = cpu.r[self.operands.rd as usize] as u16
            + cpu.r[self.operands.rr as usize] as u16
            + cpu.carry as u16;
        cpu.r[self.operands.rd as usize] = sum as u8;
        cpu.carry = sum > 0xff;
    }
}

impl fmt::Display for ADC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adc r{}, r{}", self.operands.rd, self.operands.rr)
    }
}
