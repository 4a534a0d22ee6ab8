//! Carry-save accumulator roles.
//!
//! One output limb is accumulated in three registers — low, high and
//! carry byte of the running sum. After the low byte is stored the
//! roles rotate: high becomes the next limb's low, carry becomes high,
//! and the retired low register is re-zeroed as the next carry slot, so
//! two of the three registers carry their value across diagonals for
//! free.

use common::constants::{MUL_HI, MUL_LO};
use emulator::utils::asm_builder::AsmBuilder;

/// The rotating (low, high, carry) register triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccTriple {
    regs: [u8; 3],
}

impl AccTriple {
    pub fn new(low: u8, high: u8, carry: u8) -> Self {
        Self {
            regs: [low, high, carry],
        }
    }

    pub fn low(&self) -> u8 {
        self.regs[0]
    }

    pub fn high(&self) -> u8 {
        self.regs[1]
    }

    pub fn carry(&self) -> u8 {
        self.regs[2]
    }

    /// Advance the role assignment to the next output limb.
    pub fn rotate(&mut self) {
        self.regs.rotate_left(1);
    }

    /// Accumulate one partial product:
    /// `mul` / `add low` / `adc high` / `adc carry, zero`.
    pub fn mul_acc(&self, asm: &mut AsmBuilder, zero: u8, ra: u8, rb: u8) {
        asm.mul(ra, rb);
        asm.add(self.low(), MUL_LO);
        asm.adc(self.high(), MUL_HI);
        asm.adc(self.carry(), zero);
    }

    /// Accumulate a doubled partial product; the product pair is shifted
    /// left one bit in place and the shifted-out bit lands in the carry
    /// slot before the add chain.
    pub fn mul_acc_doubled(&self, asm: &mut AsmBuilder, zero: u8, ra: u8, rb: u8) {
        asm.mul(ra, rb);
        asm.lsl(MUL_LO);
        asm.rol(MUL_HI);
        asm.adc(self.carry(), zero);
        asm.add(self.low(), MUL_LO);
        asm.adc(self.high(), MUL_HI);
        asm.adc(self.carry(), zero);
    }

    /// Add a single byte held in `src` into the triple.
    pub fn absorb(&self, asm: &mut AsmBuilder, src: u8, zero: u8) {
        asm.add(self.low(), src);
        asm.adc(self.high(), zero);
        asm.adc(self.carry(), zero);
    }
}

/// Five-register accumulator for the square generator.
///
/// Cross products must be doubled without doubling the incoming carry,
/// so each column gathers into a freshly zeroed triple, doubles it
/// whole, and only then absorbs the previous column's high/carry pair
/// (`old`). Advancing reassigns roles: the just-stored low register and
/// the consumed `old` pair become the next triple, the previous
/// high/carry become `old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareAccumulator {
    triple: AccTriple,
    old: [u8; 2],
}

impl SquareAccumulator {
    pub fn new(triple: AccTriple, old: [u8; 2]) -> Self {
        Self { triple, old }
    }

    pub fn low(&self) -> u8 {
        self.triple.low()
    }

    pub fn high(&self) -> u8 {
        self.triple.high()
    }

    pub fn carry(&self) -> u8 {
        self.triple.carry()
    }

    /// Zero the three registers of the next triple and swap roles.
    pub fn advance(&mut self, asm: &mut AsmBuilder) {
        asm.ldi(self.triple.low(), 0);
        asm.ldi(self.old[0], 0);
        asm.ldi(self.old[1], 0);
        let consumed = [self.triple.high(), self.triple.carry()];
        self.triple = AccTriple::new(self.triple.low(), self.old[0], self.old[1]);
        self.old = consumed;
    }

    pub fn mul_acc(&self, asm: &mut AsmBuilder, zero: u8, ra: u8, rb: u8) {
        self.triple.mul_acc(asm, zero, ra, rb);
    }

    pub fn mul_acc_doubled(&self, asm: &mut AsmBuilder, zero: u8, ra: u8, rb: u8) {
        self.triple.mul_acc_doubled(asm, zero, ra, rb);
    }

    /// Double the whole gathered triple in place.
    pub fn double(&self, asm: &mut AsmBuilder) {
        asm.lsl(self.triple.low());
        asm.rol(self.triple.high());
        asm.rol(self.triple.carry());
    }

    /// Absorb the previous column's carry pair.
    pub fn absorb_old(&self, asm: &mut AsmBuilder, zero: u8) {
        asm.add(self.triple.low(), self.old[0]);
        asm.adc(self.triple.high(), self.old[1]);
        asm.adc(self.triple.carry(), zero);
    }

    /// Closeout columns fall back to plain triple rotation; the `old`
    /// pair is dead from here on.
    pub fn rotate_triple(&mut self) {
        self.triple.rotate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_roles_rotate() {
        let mut acc = AccTriple::new(23, 24, 22);
        acc.rotate();
        assert_eq!((acc.low(), acc.high(), acc.carry()), (24, 22, 23));
        acc.rotate();
        acc.rotate();
        assert_eq!(acc, AccTriple::new(23, 24, 22));
    }

    #[test]
    fn mul_acc_emits_the_carry_chain() {
        let acc = AccTriple::new(23, 24, 22);
        let mut asm = AsmBuilder::new();
        acc.mul_acc(&mut asm, 25, 2, 12);
        let rendered: Vec<String> = asm.finalize().iter().map(|i| i.to_string()).collect();
        assert_eq!(
            rendered,
            ["mul r2, r12", "add r23, r0", "adc r24, r1", "adc r22, r25"]
        );
    }

    #[test]
    fn square_advance_reassigns_roles() {
        let mut asm = AsmBuilder::new();
        let mut acc = SquareAccumulator::new(AccTriple::new(23, 24, 22), [25, 26]);
        acc.advance(&mut asm);
        assert_eq!((acc.low(), acc.high(), acc.carry()), (23, 25, 26));
        acc.advance(&mut asm);
        assert_eq!((acc.low(), acc.high(), acc.carry()), (23, 24, 22));
        // Each advance zeroes exactly the three registers of the new triple.
        let rendered: Vec<String> = asm.finalize().iter().map(|i| i.to_string()).collect();
        assert_eq!(
            rendered,
            [
                "ldi r23, 0",
                "ldi r25, 0",
                "ldi r26, 0",
                "ldi r23, 0",
                "ldi r24, 0",
                "ldi r22, 0",
            ]
        );
    }
}
