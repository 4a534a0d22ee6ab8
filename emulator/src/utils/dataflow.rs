//! Static use-before-def verification for generated sequences.
//!
//! Pointer arithmetic in a generated sequence is fully static, so a
//! shadow interpreter can track concrete pointer values while only
//! tracking defined-ness for data registers, the carry flag and SRAM
//! bytes. Any read of a register, flag or byte that no earlier
//! instruction (or the declared entry state) defined is reported as a
//! violation with the offending instruction index.

use std::fmt;

use common::constants::REGISTER_COUNT;

use crate::instruction::format::format_mem::PointerAdvance;
use crate::instruction::format::Ptr;
use crate::instruction::Avr8Instruction;

/// Entry state the surrounding code guarantees before the sequence runs:
/// which pointers hold which addresses, and which SRAM ranges already
/// hold data.
#[derive(Debug, Clone, Default)]
pub struct EntryState {
    pub pointers: Vec<(Ptr, u16)>,
    pub defined_sram: Vec<(u16, usize)>,
    pub sram_capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataflowViolation {
    pub index: usize,
    pub instruction: String,
    pub reason: String,
}

impl fmt::Display for DataflowViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instruction {} (`{}`): {}",
            self.index, self.instruction, self.reason
        )
    }
}

impl std::error::Error for DataflowViolation {}

struct ShadowState {
    reg_defined: [bool; REGISTER_COUNT],
    carry_defined: bool,
    pointers: [Option<u16>; 3],
    sram_defined: Vec<bool>,
}

impl ShadowState {
    fn new(entry: &EntryState) -> Self {
        let mut state = Self {
            reg_defined: [false; REGISTER_COUNT],
            carry_defined: false,
            pointers: [None; 3],
            sram_defined: vec![false; entry.sram_capacity],
        };
        for &(ptr, address) in &entry.pointers {
            state.pointers[ptr as usize] = Some(address);
            state.reg_defined[ptr.lo() as usize] = true;
            state.reg_defined[ptr.hi() as usize] = true;
        }
        for &(base, len) in &entry.defined_sram {
            for offset in 0..len {
                state.sram_defined[base as usize + offset] = true;
            }
        }
        state
    }

    /// Mark a register written; a write into a pointer pair through a
    /// non-pointer instruction makes that pointer untrackable.
    fn define_reg(&mut self, reg: u8) {
        self.reg_defined[reg as usize] = true;
        if reg >= 26 {
            self.pointers[((reg - 26) / 2) as usize] = None;
        }
    }
}

struct Checker<'a> {
    state: ShadowState,
    index: usize,
    instruction: &'a Avr8Instruction,
}

impl Checker<'_> {
    fn violation(&self, reason: String) -> DataflowViolation {
        DataflowViolation {
            index: self.index,
            instruction: self.instruction.to_string(),
            reason,
        }
    }

    fn require_reg(&self, reg: u8) -> Result<(), DataflowViolation> {
        if self.state.reg_defined[reg as usize] {
            Ok(())
        } else {
            Err(self.violation(format!("r{reg} read before any write")))
        }
    }

    fn require_carry(&self) -> Result<(), DataflowViolation> {
        if self.state.carry_defined {
            Ok(())
        } else {
            Err(self.violation("carry flag read before any write".to_string()))
        }
    }

    fn resolve_pointer(&self, ptr: Ptr) -> Result<u16, DataflowViolation> {
        self.state.pointers[ptr as usize]
            .ok_or_else(|| self.violation(format!("pointer {ptr} is not tracking an address")))
    }
}

/// Walk the sequence; return the first violation, if any.
pub fn verify_no_use_before_def(
    sequence: &[Avr8Instruction],
    entry: &EntryState,
) -> Result<(), DataflowViolation> {
    let mut state = ShadowState::new(entry);

    for (index, instruction) in sequence.iter().enumerate() {
        let mut checker = Checker {
            state,
            index,
            instruction,
        };

        match instruction {
            Avr8Instruction::LD(ld) => {
                let ops = &ld.operands;
                let address = checker.resolve_pointer(ops.ptr)?;
                if !checker
                    .state
                    .sram_defined
                    .get(address as usize)
                    .copied()
                    .unwrap_or(false)
                {
                    return Err(
                        checker.violation(format!("load of undefined SRAM byte {address:#06x}"))
                    );
                }
                checker.state.define_reg(ops.reg);
                if ops.advance == PointerAdvance::PostIncrement {
                    checker.state.pointers[ops.ptr as usize] = Some(address.wrapping_add(1));
                }
            }
            Avr8Instruction::ST(st) => {
                let ops = &st.operands;
                checker.require_reg(ops.reg)?;
                let address = checker.resolve_pointer(ops.ptr)?;
                if (address as usize) < checker.state.sram_defined.len() {
                    checker.state.sram_defined[address as usize] = true;
                }
                if ops.advance == PointerAdvance::PostIncrement {
                    checker.state.pointers[ops.ptr as usize] = Some(address.wrapping_add(1));
                }
            }
            Avr8Instruction::MUL(mul) => {
                checker.require_reg(mul.operands.rd)?;
                checker.require_reg(mul.operands.rr)?;
                checker.state.define_reg(common::constants::MUL_LO);
                checker.state.define_reg(common::constants::MUL_HI);
                checker.state.carry_defined = true;
            }
            Avr8Instruction::ADD(add) => {
                checker.require_reg(add.operands.rd)?;
                checker.require_reg(add.operands.rr)?;
                checker.state.carry_defined = true;
            }
            Avr8Instruction::ADC(adc) => {
                checker.require_reg(adc.operands.rd)?;
                checker.require_reg(adc.operands.rr)?;
                checker.require_carry()?;
            }
            Avr8Instruction::LSL(lsl) => {
                checker.require_reg(lsl.operands.rd)?;
                checker.state.carry_defined = true;
            }
            Avr8Instruction::ROL(rol) => {
                checker.require_reg(rol.operands.rd)?;
                checker.require_carry()?;
            }
            Avr8Instruction::LDI(ldi) => {
                checker.state.define_reg(ldi.operands.rd);
            }
            Avr8Instruction::MOV(mov) => {
                checker.require_reg(mov.operands.rr)?;
                checker.state.define_reg(mov.operands.rd);
            }
            Avr8Instruction::EOR(eor) => {
                // `eor rd, rd` is a clear and defines rd outright.
                if eor.operands.rd != eor.operands.rr {
                    checker.require_reg(eor.operands.rd)?;
                    checker.require_reg(eor.operands.rr)?;
                }
                checker.state.define_reg(eor.operands.rd);
            }
            Avr8Instruction::ADIW(adiw) => {
                let ops = &adiw.operands;
                let address = checker.resolve_pointer(ops.ptr)?;
                checker.state.pointers[ops.ptr as usize] =
                    Some(address.wrapping_add(ops.imm as u16));
                checker.state.carry_defined = true;
            }
            Avr8Instruction::SBIW(sbiw) => {
                let ops = &sbiw.operands;
                let address = checker.resolve_pointer(ops.ptr)?;
                checker.state.pointers[ops.ptr as usize] =
                    Some(address.wrapping_sub(ops.imm as u16));
                checker.state.carry_defined = true;
            }
        }

        state = checker.state;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::asm_builder::AsmBuilder;

    fn entry_with_input() -> EntryState {
        EntryState {
            pointers: vec![(Ptr::X, 0x0100), (Ptr::Z, 0x0140)],
            defined_sram: vec![(0x0100, 4)],
            sram_capacity: 0x200,
        }
    }

    #[test]
    fn accepts_well_formed_sequence() {
        let mut asm = AsmBuilder::new();
        asm.ld(2, Ptr::X);
        asm.ld(3, Ptr::X);
        asm.mul(2, 3);
        asm.st(Ptr::Z, 0);
        asm.st(Ptr::Z, 1);
        assert!(verify_no_use_before_def(&asm.finalize(), &entry_with_input()).is_ok());
    }

    #[test]
    fn rejects_register_read_before_write() {
        let mut asm = AsmBuilder::new();
        asm.mul(2, 3);
        let violation =
            verify_no_use_before_def(&asm.finalize(), &entry_with_input()).unwrap_err();
        assert_eq!(violation.index, 0);
        assert!(violation.reason.contains("r2"));
    }

    #[test]
    fn rejects_carry_read_before_write() {
        let mut asm = AsmBuilder::new();
        asm.ld(2, Ptr::X);
        asm.adc(2, 2);
        let violation =
            verify_no_use_before_def(&asm.finalize(), &entry_with_input()).unwrap_err();
        assert!(violation.reason.contains("carry"));
    }

    #[test]
    fn rejects_load_of_unwritten_sram() {
        let mut asm = AsmBuilder::new();
        asm.ld_fixed(0, Ptr::Z);
        let violation =
            verify_no_use_before_def(&asm.finalize(), &entry_with_input()).unwrap_err();
        assert!(violation.reason.contains("SRAM"));
    }

    #[test]
    fn store_defines_the_byte_for_read_back() {
        let mut asm = AsmBuilder::new();
        asm.ld(2, Ptr::X);
        asm.st(Ptr::Z, 2);
        asm.sbiw(Ptr::Z, 1);
        asm.ld_fixed(0, Ptr::Z);
        assert!(verify_no_use_before_def(&asm.finalize(), &entry_with_input()).is_ok());
    }

    #[test]
    fn clobbered_pointer_is_not_trackable() {
        let mut asm = AsmBuilder::new();
        asm.ldi(27, 0); // XH
        asm.ld(2, Ptr::X);
        let violation =
            verify_no_use_before_def(&asm.finalize(), &entry_with_input()).unwrap_err();
        assert!(violation.reason.contains("pointer"));
    }
}
