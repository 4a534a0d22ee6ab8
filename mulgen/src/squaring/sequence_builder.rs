//! Square sequence assembler.
//!
//! Squaring keeps the whole operand resident at once — the two banks
//! that multiply splits between operands hold the low and high halves
//! of the single operand here — so there is no window rotation and no
//! scratch pass. The work saved comes from symmetry: each cross pair is
//! multiplied once and doubled, each equal pair added once. Cross sums
//! are gathered into a freshly zeroed accumulator triple and the triple
//! is doubled whole, because the column's incoming carry must not be
//! doubled with it.

use common::constants::{square, MUL_HI, MUL_LO};
use emulator::instruction::format::Ptr;
use emulator::instruction::Avr8Instruction;
use emulator::utils::asm_builder::AsmBuilder;
use tracing::debug;

use crate::accumulator::{AccTriple, SquareAccumulator};
use crate::diagonal::square_diagonal;
use crate::error::SequenceError;
use crate::window::RegisterFile;

struct SquareSequenceBuilder {
    asm: AsmBuilder,
    file: RegisterFile,
    acc: SquareAccumulator,
}

impl SquareSequenceBuilder {
    fn new(file: RegisterFile) -> Self {
        SquareSequenceBuilder {
            asm: AsmBuilder::new(),
            file,
            // Role state the low columns leave behind.
            acc: SquareAccumulator::new(
                AccTriple::new(square::ACC_HIGH, square::ACC_CARRY, square::ACC_LOW),
                [square::OLD_LOW, square::OLD_HIGH],
            ),
        }
    }

    fn r(&self, i: usize) -> u8 {
        self.file.limb_reg(i)
    }

    fn build(mut self) -> Vec<Avr8Instruction> {
        let limbs = self.file.operand_limbs();
        self.setup();
        self.low_columns();
        self.rising_columns();
        self.falling_columns();
        self.closeout();
        let sequence = self.asm.finalize();
        debug!(limbs, len = sequence.len(), "assembled square sequence");
        sequence
    }

    /// Bulk-load the whole operand; XH doubles as the zero register once
    /// the loads are done.
    fn setup(&mut self) {
        for i in 0..self.file.operand_limbs() {
            self.asm.ld(self.r(i), Ptr::X);
        }
        self.asm.ldi(square::ZERO, 0);
    }

    /// Columns 0–2, before the five-register machinery engages. The
    /// doubling happens on the raw product pair here, with the
    /// shifted-out bit caught in the carry slot.
    fn low_columns(&mut self) {
        self.asm.ldi(square::ACC_HIGH, 0);
        self.asm.mul(self.r(0), self.r(0));
        self.asm.st(Ptr::Z, MUL_LO);
        self.asm.mov(square::ACC_LOW, MUL_HI);

        let (r0, r1, r2) = (self.r(0), self.r(1), self.r(2));

        let triple = AccTriple::new(square::ACC_LOW, square::ACC_HIGH, square::ACC_CARRY);
        self.asm.ldi(square::ACC_CARRY, 0);
        triple.mul_acc_doubled(&mut self.asm, square::ZERO, r0, r1);
        self.asm.st(Ptr::Z, triple.low());

        let triple = AccTriple::new(square::ACC_HIGH, square::ACC_CARRY, square::ACC_LOW);
        self.asm.ldi(square::ACC_LOW, 0);
        triple.mul_acc_doubled(&mut self.asm, square::ZERO, r0, r2);
        triple.mul_acc(&mut self.asm, square::ZERO, r1, r1);
        self.asm.st(Ptr::Z, triple.low());
    }

    /// One generic column: gather cross pairs, double, add the equal
    /// pair if the column has one, absorb the previous column's carry
    /// pair, store.
    fn column(&mut self, k: usize) {
        let diag = square_diagonal(self.file.operand_limbs(), k);
        self.acc.advance(&mut self.asm);
        for (i, j) in diag.cross {
            let (ra, rb) = (self.r(i), self.r(j));
            self.acc.mul_acc(&mut self.asm, square::ZERO, ra, rb);
        }
        self.acc.double(&mut self.asm);
        if let Some(m) = diag.equal {
            let rm = self.r(m);
            self.acc.mul_acc(&mut self.asm, square::ZERO, rm, rm);
        }
        self.acc.absorb_old(&mut self.asm, square::ZERO);
        self.asm.st(Ptr::Z, self.acc.low());
    }

    fn rising_columns(&mut self) {
        for k in 3..self.file.operand_limbs() {
            self.column(k);
        }
    }

    fn falling_columns(&mut self) {
        let limbs = self.file.operand_limbs();
        for k in limbs..(2 * limbs - 4) {
            self.column(k);
        }
    }

    /// The last four output limbs have closed-form pair lists, so the
    /// generic column machinery is not worth its zeroing overhead.
    fn closeout(&mut self) {
        let limbs = self.file.operand_limbs();
        let (third, second, top) = (self.r(limbs - 3), self.r(limbs - 2), self.r(limbs - 1));

        self.acc.rotate_triple();
        self.asm.ldi(self.acc.carry(), 0);
        self.acc
            .mul_acc_doubled(&mut self.asm, square::ZERO, third, top);
        self.acc.mul_acc(&mut self.asm, square::ZERO, second, second);
        self.asm.st(Ptr::Z, self.acc.low());

        self.acc.rotate_triple();
        self.asm.ldi(self.acc.carry(), 0);
        self.acc
            .mul_acc_doubled(&mut self.asm, square::ZERO, second, top);
        self.asm.st(Ptr::Z, self.acc.low());

        self.asm.mul(top, top);
        self.asm.add(self.acc.high(), MUL_LO);
        self.asm.adc(self.acc.carry(), MUL_HI);
        self.asm.st(Ptr::Z, self.acc.high());
        self.asm.st(Ptr::Z, self.acc.carry());
        self.asm.eor(MUL_HI, MUL_HI);
    }
}

/// Build the square sequence for an operand of `2 * window` limbs.
///
/// On entry `X` points at the operand and `Z` at the
/// `4 * window`-limb product buffer; `Y` is unused.
pub fn square_sequence_builder(window: usize) -> Result<Vec<Avr8Instruction>, SequenceError> {
    let file = RegisterFile::new(window)?;
    Ok(SquareSequenceBuilder::new(file).build())
}
