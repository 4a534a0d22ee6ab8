use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_mem::{FormatMem, PointerAdvance};

declare_avr_instr!(
    name     = ST,
    mnemonic = "st",
    format   = FormatMem
);

impl ST {
    fn exec(&self, cpu: &mut Cpu) {
        let address = cpu.pointer(self.operands.ptr);
        let value = cpu.r[self.operands.reg as usize];
        if cpu.sram.store(address, value).is_err() {
            panic!("SRAM store fault at {address:#06x}");
        }
        cpu.store_trace.push((address, value));
        if self.operands.advance == PointerAdvance::PostIncrement {
            cpu.set_pointer(self.operands.ptr, address.wrapping_add(1));
        }
    }
}

impl fmt::Display for ST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands.advance {
            PointerAdvance::PostIncrement => {
                write!(f, "st {}+, r{}", self.operands.ptr, self.operands.reg)
            }
            PointerAdvance::None => write!(f, "st {}, r{}", self.operands.ptr, self.operands.reg),
        }
    }
}
