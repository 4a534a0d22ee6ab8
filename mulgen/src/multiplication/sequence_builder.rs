//! Multiply sequence assembler.
//!
//! The product is computed in two passes over the register file. The
//! first pass multiplies the low half of operand A by the high half of
//! operand B and parks the 2W resulting bytes in the upper product
//! region; they are scratch, not final output. The second pass restarts
//! at the bottom of the product, and whenever one of its diagonals
//! overlaps the scratch block it folds the parked byte back in with a
//! no-advance `ld r0, z` — each parked byte is consumed exactly once.
//! Between the two bulk halves the operand windows slide one limb per
//! output limb, so every partial product finds both factors already
//! register-resident at the cost of a single load per step.

use common::constants::{mul, MUL_HI, MUL_LO};
use emulator::instruction::format::Ptr;
use emulator::instruction::Avr8Instruction;
use emulator::utils::asm_builder::AsmBuilder;
use tracing::debug;

use crate::accumulator::AccTriple;
use crate::diagonal::diagonal;
use crate::error::SequenceError;
use crate::window::{RegisterFile, RegisterWindow};

struct MulSequenceBuilder {
    asm: AsmBuilder,
    file: RegisterFile,
    acc: AccTriple,
    x_window: RegisterWindow,
    y_window: RegisterWindow,
}

impl MulSequenceBuilder {
    fn new(file: RegisterFile) -> Self {
        MulSequenceBuilder {
            asm: AsmBuilder::new(),
            file,
            acc: AccTriple::new(mul::ACC_HIGH, mul::ACC_CARRY, mul::ACC_LOW),
            x_window: RegisterWindow::new(file.x_bank()),
            y_window: RegisterWindow::new(file.y_bank()),
        }
    }

    fn rx(&self, i: usize) -> u8 {
        self.file.x_reg(i)
    }

    fn ry(&self, i: usize) -> u8 {
        self.file.y_reg(i)
    }

    fn build(mut self) -> Vec<Avr8Instruction> {
        let window = self.file.window();

        // First pass: a[0..w] × b[w..2w] into the scratch region.
        self.setup();
        self.low_diagonals();
        self.rising_diagonals();
        self.falling_diagonals();
        self.block_corner();

        // Second pass: the definitive product, low limbs first.
        self.reset_pointers();
        self.low_diagonals();
        self.rising_diagonals();
        self.slide_window_a();
        self.slide_window_b();
        self.corner();

        let sequence = self.asm.finalize();
        debug!(window, len = sequence.len(), "assembled multiply sequence");
        sequence
    }

    /// Park Z and Y one half up, then bulk-load both banks.
    fn setup(&mut self) {
        let window = self.file.window();
        self.asm.adiw(Ptr::Z, window as u8);
        self.asm.adiw(Ptr::Y, window as u8);
        for i in 0..window {
            self.asm.ld(self.rx(i), Ptr::X);
        }
        for i in 0..window {
            self.asm.ld(self.ry(i), Ptr::Y);
        }
        self.asm.ldi(mul::ZERO, 0);
    }

    /// Diagonals 0 and 1: too few pairs for the generic triple, handled
    /// with a two-register partial sum.
    fn low_diagonals(&mut self) {
        self.asm.ldi(mul::ACC_HIGH, 0);
        self.asm.mul(self.rx(0), self.ry(0));
        self.asm.st(Ptr::Z, MUL_LO);
        self.asm.mov(mul::ACC_LOW, MUL_HI);

        self.asm.ldi(mul::ACC_CARRY, 0);
        self.asm.mul(self.rx(0), self.ry(1));
        self.asm.add(mul::ACC_LOW, MUL_LO);
        self.asm.adc(mul::ACC_HIGH, MUL_HI);
        self.asm.mul(self.rx(1), self.ry(0));
        self.asm.add(mul::ACC_LOW, MUL_LO);
        self.asm.adc(mul::ACC_HIGH, MUL_HI);
        self.asm.adc(mul::ACC_CARRY, mul::ZERO);
        self.asm.st(Ptr::Z, mul::ACC_LOW);

        // The generic triple takes over with diagonal 2.
        self.acc = AccTriple::new(mul::ACC_HIGH, mul::ACC_CARRY, mul::ACC_LOW);
    }

    fn rising_diagonals(&mut self) {
        let window = self.file.window();
        for k in 2..window {
            self.asm.ldi(self.acc.carry(), 0);
            for (i, j) in diagonal(window, k) {
                let (ra, rb) = (self.rx(i), self.ry(j));
                self.acc.mul_acc(&mut self.asm, mul::ZERO, ra, rb);
            }
            self.asm.st(Ptr::Z, self.acc.low());
            self.acc.rotate();
        }
    }

    fn falling_diagonals(&mut self) {
        let window = self.file.window();
        for k in window..(2 * window - 2) {
            self.asm.ldi(self.acc.carry(), 0);
            for (i, j) in diagonal(window, k) {
                let (ra, rb) = (self.rx(i), self.ry(j));
                self.acc.mul_acc(&mut self.asm, mul::ZERO, ra, rb);
            }
            self.asm.st(Ptr::Z, self.acc.low());
            self.acc.rotate();
        }
    }

    /// Top diagonal of the first pass; its high byte is the last scratch
    /// byte, so both accumulator bytes are stored.
    fn block_corner(&mut self) {
        let top = self.file.window() - 1;
        self.asm.mul(self.rx(top), self.ry(top));
        self.asm.add(self.acc.low(), MUL_LO);
        self.asm.adc(self.acc.high(), MUL_HI);
        self.asm.st(Ptr::Z, self.acc.low());
        self.asm.st(Ptr::Z, self.acc.high());
    }

    /// Rewind Z to the product base and Y to operand B's low half, then
    /// load that half (X still points at operand A's high half).
    fn reset_pointers(&mut self) {
        let window = self.file.window();
        self.asm.sbiw(Ptr::Z, 3 * window as u8);
        self.asm.sbiw(Ptr::Y, 2 * window as u8);
        for i in 0..window {
            self.asm.ld(self.ry(i), Ptr::Y);
        }
    }

    /// One full cross-diagonal of the current windows.
    fn window_diagonal(&mut self) {
        let window = self.file.window();
        for (i, j) in diagonal(window, window - 1) {
            let (ra, rb) = (self.x_window.reg(i), self.y_window.reg(j));
            self.acc.mul_acc(&mut self.asm, mul::ZERO, ra, rb);
        }
    }

    /// Fold the parked scratch byte for this output limb back in; Z does
    /// not advance, the following store does.
    fn fold_scratch_byte(&mut self) {
        self.asm.ld_fixed(MUL_LO, Ptr::Z);
        self.acc.absorb(&mut self.asm, MUL_LO, mul::ZERO);
    }

    /// Slide operand A's window across its high half.
    fn slide_window_a(&mut self) {
        for _ in 0..self.file.window() {
            let incoming = self.x_window.slide();
            self.asm.ld(incoming, Ptr::X);
            self.asm.ldi(self.acc.carry(), 0);
            self.window_diagonal();
            self.fold_scratch_byte();
            self.asm.st(Ptr::Z, self.acc.low());
            self.acc.rotate();
        }
    }

    /// Slide operand B's window across its high half.
    fn slide_window_b(&mut self) {
        for _ in 0..self.file.window() {
            let incoming = self.y_window.slide();
            self.asm.ld(incoming, Ptr::Y);
            self.asm.ldi(self.acc.carry(), 0);
            self.window_diagonal();
            self.fold_scratch_byte();
            self.asm.st(Ptr::Z, self.acc.low());
            self.acc.rotate();
        }
    }

    /// Both windows are exhausted; the remaining diagonals shrink and
    /// need no further loads.
    fn corner(&mut self) {
        let window = self.file.window();
        for k in window..(2 * window - 2) {
            self.asm.ldi(self.acc.carry(), 0);
            for (i, j) in diagonal(window, k) {
                let (ra, rb) = (self.x_window.reg(i), self.y_window.reg(j));
                self.acc.mul_acc(&mut self.asm, mul::ZERO, ra, rb);
            }
            self.asm.st(Ptr::Z, self.acc.low());
            self.acc.rotate();
        }
        self.asm
            .mul(self.x_window.reg(window - 1), self.y_window.reg(window - 1));
        self.asm.add(self.acc.low(), MUL_LO);
        self.asm.adc(self.acc.high(), MUL_HI);
        self.asm.st(Ptr::Z, self.acc.low());
        self.asm.st(Ptr::Z, self.acc.high());
        // r1 must read zero again when control returns to compiled code.
        self.asm.eor(MUL_HI, MUL_HI);
    }
}

/// Build the multiply sequence for operands of `2 * window` limbs.
///
/// On entry `X` points at operand A, `Y` at operand B and `Z` at the
/// `4 * window`-limb product buffer.
pub fn mul_sequence_builder(window: usize) -> Result<Vec<Avr8Instruction>, SequenceError> {
    let file = RegisterFile::new(window)?;
    Ok(MulSequenceBuilder::new(file).build())
}
