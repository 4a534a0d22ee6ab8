//! Register-file layout and preset widths shared by the generators,
//! the emulator and the CLI.
//!
//! The target is a megaAVR-class register file: `r1:r0` receive the
//! result of `mul`, `ldi` can only address `r16..r31`, and the upper
//! six registers form the `X`/`Y`/`Z` pointer pairs.

pub const REGISTER_COUNT: usize = 32;

/// Low byte of every `mul` result.
pub const MUL_LO: u8 = 0;
/// High byte of every `mul` result.
pub const MUL_HI: u8 = 1;

/// First register of the operand banks. Limb `i` of the resident window
/// lives at `OPERAND_BASE + i`.
pub const OPERAND_BASE: u8 = 2;

/// First register reserved for accumulators; operand banks must stay
/// strictly below it.
pub const ACC_FLOOR: u8 = 22;

/// `ldi` is only encodable for `r16..r31`.
pub const LDI_MIN_REG: u8 = 16;

/// Multiply-variant fixed registers.
pub mod mul {
    /// Accumulator triple at the start of the generic diagonal loop:
    /// low, high, carry.
    pub const ACC_LOW: u8 = 22;
    pub const ACC_HIGH: u8 = 23;
    pub const ACC_CARRY: u8 = 24;
    /// Always-zero register used as the no-op `adc` source.
    pub const ZERO: u8 = 25;
}

/// Square-variant fixed registers. The zero register is `r27` (XH),
/// which is dead once the single bulk load through `X` has finished.
pub mod square {
    pub const ACC_LOW: u8 = 22;
    pub const ACC_HIGH: u8 = 23;
    pub const ACC_CARRY: u8 = 24;
    /// Carry-in pair absorbed at the end of each generic column.
    pub const OLD_LOW: u8 = 25;
    pub const OLD_HIGH: u8 = 26;
    pub const ZERO: u8 = 27;
}

/// Window bounds accepted by the generators. The upper bound keeps the
/// two operand banks (`2 * window` registers from [`OPERAND_BASE`])
/// below [`ACC_FLOOR`]; the lower bound keeps the specialized low
/// diagonals well-formed.
pub const MIN_WINDOW: usize = 2;
pub const MAX_WINDOW: usize = 10;

/// 80-bit operands, 160-bit product.
pub mod mul80 {
    pub const WINDOW: usize = 5;
    pub const OPERAND_LIMBS: usize = 2 * WINDOW;
    pub const PRODUCT_LIMBS: usize = 4 * WINDOW;
    pub const NAME: &str = "MP_MUL80";
}

/// 160-bit operands, 320-bit product; the width the 160-bit curve
/// arithmetic consumes.
pub mod mul160 {
    pub const WINDOW: usize = 10;
    pub const OPERAND_LIMBS: usize = 2 * WINDOW;
    pub const PRODUCT_LIMBS: usize = 4 * WINDOW;
    pub const NAME: &str = "MP_MUL160";
}
