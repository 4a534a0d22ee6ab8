//! Register-window management.
//!
//! The register file cannot hold every limb a full product needs, so the
//! generators keep a fixed-size window of each operand resident and
//! slide it one limb at a time: the least-needed limb is discarded and
//! the next never-yet-used limb is loaded into the freed register. The
//! window state is an explicit position → register permutation rather
//! than ambient mutable indices, so it can be inspected and tested on
//! its own.

use common::constants::{ACC_FLOOR, MAX_WINDOW, MIN_WINDOW, OPERAND_BASE};

use crate::error::SequenceError;

/// Validated physical layout for a chosen window width.
///
/// Multiply keeps two `window`-limb banks resident (operand A low, then
/// operand B above it); square treats the same span as one
/// `2 * window`-limb bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    window: usize,
}

impl RegisterFile {
    pub fn new(window: usize) -> Result<Self, SequenceError> {
        // Both banks must fit between the mul result pair and the
        // accumulator block.
        let bank_span = 2 * window;
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&window)
            || OPERAND_BASE as usize + bank_span > ACC_FLOOR as usize
        {
            return Err(SequenceError::RegisterWindowOverflow { window });
        }
        Ok(Self { window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Limbs per operand.
    pub fn operand_limbs(&self) -> usize {
        2 * self.window
    }

    /// Limbs of the full product.
    pub fn product_limbs(&self) -> usize {
        4 * self.window
    }

    /// Bank register for position `i` of operand A's window.
    pub fn x_reg(&self, i: usize) -> u8 {
        debug_assert!(i < self.window);
        OPERAND_BASE + i as u8
    }

    /// Bank register for position `i` of operand B's window.
    pub fn y_reg(&self, i: usize) -> u8 {
        debug_assert!(i < self.window);
        OPERAND_BASE + (self.window + i) as u8
    }

    /// Square variant: register for limb `i` of the single wide bank.
    pub fn limb_reg(&self, i: usize) -> u8 {
        debug_assert!(i < self.operand_limbs());
        OPERAND_BASE + i as u8
    }

    pub fn x_bank(&self) -> Vec<u8> {
        (0..self.window).map(|i| self.x_reg(i)).collect()
    }

    pub fn y_bank(&self) -> Vec<u8> {
        (0..self.window).map(|i| self.y_reg(i)).collect()
    }
}

/// Rotating window-position → physical-register map for one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWindow {
    regs: Vec<u8>,
}

impl RegisterWindow {
    pub fn new(regs: Vec<u8>) -> Self {
        Self { regs }
    }

    pub fn len(&self) -> usize {
        self.regs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Register currently bound to window position `i`.
    pub fn reg(&self, i: usize) -> u8 {
        self.regs[i]
    }

    /// Advance the window by one limb: every position shifts down and
    /// the register holding the discarded limb is returned, now bound to
    /// the top position and free to receive the incoming limb.
    pub fn slide(&mut self) -> u8 {
        self.regs.rotate_left(1);
        self.regs[self.regs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_windows_that_overflow_the_register_file() {
        assert_eq!(
            RegisterFile::new(11),
            Err(SequenceError::RegisterWindowOverflow { window: 11 })
        );
        assert_eq!(
            RegisterFile::new(1),
            Err(SequenceError::RegisterWindowOverflow { window: 1 })
        );
        assert!(RegisterFile::new(10).is_ok());
        assert!(RegisterFile::new(2).is_ok());
    }

    #[test]
    fn banks_are_adjacent_and_below_the_accumulators() {
        let file = RegisterFile::new(5).unwrap();
        assert_eq!(file.x_bank(), vec![2, 3, 4, 5, 6]);
        assert_eq!(file.y_bank(), vec![7, 8, 9, 10, 11]);
        let file = RegisterFile::new(10).unwrap();
        assert_eq!(file.x_reg(0), 2);
        assert_eq!(file.y_reg(0), 12);
        assert_eq!(file.y_reg(9), 21);
        assert!(file.y_reg(9) < ACC_FLOOR);
    }

    #[test]
    fn slide_rotates_and_frees_the_oldest_register() {
        let mut window = RegisterWindow::new(vec![2, 3, 4, 5]);
        assert_eq!(window.slide(), 2);
        assert_eq!(window.reg(0), 3);
        assert_eq!(window.reg(3), 2);
        // A full rotation restores the identity mapping.
        for _ in 0..3 {
            window.slide();
        }
        assert_eq!(window, RegisterWindow::new(vec![2, 3, 4, 5]));
    }
}
