//! AsmBuilder
//!
//! Owns the growing instruction buffer and provides small helpers so the
//! sequence builders can emit instructions without repeating record
//! construction boiler-plate. This module is purely mechanical; all
//! scheduling decisions stay in the builders.

use common::constants::LDI_MIN_REG;

use crate::instruction::adc::ADC;
use crate::instruction::add::ADD;
use crate::instruction::adiw::ADIW;
use crate::instruction::eor::EOR;
use crate::instruction::format::format_imm::FormatImm;
use crate::instruction::format::format_mem::{FormatMem, PointerAdvance};
use crate::instruction::format::format_ptr::FormatPtr;
use crate::instruction::format::format_rd::FormatRd;
use crate::instruction::format::format_rr::FormatRr;
use crate::instruction::format::Ptr;
use crate::instruction::ld::LD;
use crate::instruction::ldi::LDI;
use crate::instruction::lsl::LSL;
use crate::instruction::mov::MOV;
use crate::instruction::mul::MUL;
use crate::instruction::rol::ROL;
use crate::instruction::sbiw::SBIW;
use crate::instruction::st::ST;
use crate::instruction::{Avr8Instruction, AvrInstruction};

#[derive(Debug, Default)]
pub struct AsmBuilder {
    sequence: Vec<Avr8Instruction>,
}

impl AsmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Return ownership of the underlying buffer.
    pub fn finalize(self) -> Vec<Avr8Instruction> {
        self.sequence
    }

    #[inline]
    fn push<I: AvrInstruction>(&mut self, instr: I) {
        self.sequence.push(instr.into());
    }

    /// Emit any two-register instruction (rd, rr).
    #[inline]
    pub fn emit_rr<Op: AvrInstruction<Format = FormatRr>>(&mut self, rd: u8, rr: u8) {
        self.push(Op::from_operands(FormatRr { rd, rr }));
    }

    /// Emit any single-register instruction (rd).
    #[inline]
    pub fn emit_rd<Op: AvrInstruction<Format = FormatRd>>(&mut self, rd: u8) {
        self.push(Op::from_operands(FormatRd { rd }));
    }

    pub fn mul(&mut self, rd: u8, rr: u8) {
        self.emit_rr::<MUL>(rd, rr);
    }

    pub fn add(&mut self, rd: u8, rr: u8) {
        self.emit_rr::<ADD>(rd, rr);
    }

    pub fn adc(&mut self, rd: u8, rr: u8) {
        self.emit_rr::<ADC>(rd, rr);
    }

    pub fn mov(&mut self, rd: u8, rr: u8) {
        self.emit_rr::<MOV>(rd, rr);
    }

    pub fn eor(&mut self, rd: u8, rr: u8) {
        self.emit_rr::<EOR>(rd, rr);
    }

    pub fn lsl(&mut self, rd: u8) {
        self.emit_rd::<LSL>(rd);
    }

    pub fn rol(&mut self, rd: u8) {
        self.emit_rd::<ROL>(rd);
    }

    pub fn ldi(&mut self, rd: u8, imm: u8) {
        assert!(
            rd >= LDI_MIN_REG,
            "ldi can only target r{LDI_MIN_REG}..r31, attempted r{rd}"
        );
        self.push(LDI::from(FormatImm { rd, imm }));
    }

    /// Post-increment load through a pointer.
    pub fn ld(&mut self, rd: u8, ptr: Ptr) {
        self.push(LD::from(FormatMem {
            reg: rd,
            ptr,
            advance: PointerAdvance::PostIncrement,
        }));
    }

    /// Load without advancing the pointer (`ld rd, z`).
    pub fn ld_fixed(&mut self, rd: u8, ptr: Ptr) {
        self.push(LD::from(FormatMem {
            reg: rd,
            ptr,
            advance: PointerAdvance::None,
        }));
    }

    /// Post-increment store through a pointer.
    pub fn st(&mut self, ptr: Ptr, rr: u8) {
        self.push(ST::from(FormatMem {
            reg: rr,
            ptr,
            advance: PointerAdvance::PostIncrement,
        }));
    }

    pub fn adiw(&mut self, ptr: Ptr, imm: u8) {
        debug_assert!(imm < 64, "adiw immediate is 6 bits");
        self.push(ADIW::from(FormatPtr { ptr, imm }));
    }

    pub fn sbiw(&mut self, ptr: Ptr, imm: u8) {
        debug_assert!(imm < 64, "sbiw immediate is 6 bits");
        self.push(SBIW::from(FormatPtr { ptr, imm }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_avr_syntax() {
        let mut asm = AsmBuilder::new();
        asm.ld(2, Ptr::X);
        asm.mul(2, 12);
        asm.st(Ptr::Z, 22);
        asm.ld_fixed(0, Ptr::Z);
        asm.adiw(Ptr::Z, 10);
        asm.ldi(25, 0);
        let rendered: Vec<String> = asm
            .finalize()
            .iter()
            .map(|instr| instr.to_string())
            .collect();
        assert_eq!(
            rendered,
            [
                "ld r2, x+",
                "mul r2, r12",
                "st z+, r22",
                "ld r0, z",
                "adiw r30, 10",
                "ldi r25, 0",
            ]
        );
    }

    #[test]
    #[should_panic(expected = "ldi can only target")]
    fn ldi_rejects_low_registers() {
        let mut asm = AsmBuilder::new();
        asm.ldi(2, 0);
    }
}
