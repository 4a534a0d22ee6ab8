//! Host-side reference API for the two supported widths. The generated
//! sequences compute exactly these functions on the target.

use common::constants::{mul160, mul80};

use crate::multiplication::exec::mp_mul;
use crate::squaring::exec::mp_square;

pub fn mul80(
    a: &[u8; mul80::OPERAND_LIMBS],
    b: &[u8; mul80::OPERAND_LIMBS],
) -> [u8; mul80::PRODUCT_LIMBS] {
    mp_mul(a, b).try_into().expect("product width is fixed")
}

pub fn square80(a: &[u8; mul80::OPERAND_LIMBS]) -> [u8; mul80::PRODUCT_LIMBS] {
    mp_square(a).try_into().expect("product width is fixed")
}

pub fn mul160(
    a: &[u8; mul160::OPERAND_LIMBS],
    b: &[u8; mul160::OPERAND_LIMBS],
) -> [u8; mul160::PRODUCT_LIMBS] {
    mp_mul(a, b).try_into().expect("product width is fixed")
}

pub fn square160(a: &[u8; mul160::OPERAND_LIMBS]) -> [u8; mul160::PRODUCT_LIMBS] {
    mp_square(a).try_into().expect("product width is fixed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_line_up() {
        let a = [0x11u8; 10];
        let b = [0x22u8; 10];
        let product = mul80(&a, &b);
        assert_eq!(product.len(), 20);
        assert_eq!(square80(&a), mul80(&a, &a));

        let wide = [0xffu8; 20];
        assert_eq!(square160(&wide), mul160(&wide, &wide));
    }
}
