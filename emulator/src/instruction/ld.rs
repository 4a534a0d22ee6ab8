use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{declare_avr_instr, emulator::cpu::Cpu};

use super::format::format_mem::{FormatMem, PointerAdvance};

declare_avr_instr!(
    name     = LD,
    mnemonic = "ld",
    format   = FormatMem
);

impl LD {
    fn exec(&self, cpu: &mut Cpu) {
        let address = cpu.pointer(self.operands.ptr);
        let value = match cpu.sram.load(address) {
            Ok(value) => value,
            Err(_) => panic!("SRAM load fault at {address:#06x}"),
        };
        cpu.load_trace.push(address);
        cpu.r[self.operands.reg as usize] = value;
        if self.operands.advance == PointerAdvance::PostIncrement {
            cpu.set_pointer(self.operands.ptr, address.wrapping_add(1));
        }
    }
}

impl fmt::Display for LD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operands.advance {
            PointerAdvance::PostIncrement => {
                write!(f, "ld r{}, {}+", self.operands.reg, self.operands.ptr)
            }
            PointerAdvance::None => write!(f, "ld r{}, {}", self.operands.reg, self.operands.ptr),
        }
    }
}
