/// Schoolbook multiplication on 8-bit limbs, little-endian.
///
/// Reference semantics for the generated sequence: the returned product
/// has `lhs.len() + rhs.len()` limbs and is exact.
pub fn mp_mul(lhs: &[u8], rhs: &[u8]) -> Vec<u8> {
    let mut product = vec![0u8; lhs.len() + rhs.len()];
    for (i, &a) in lhs.iter().enumerate() {
        let mut carry = 0u16;
        for (j, &b) in rhs.iter().enumerate() {
            // product byte + partial product + carry peaks at exactly 0xffff
            let sum = product[i + j] as u16 + (a as u16) * (b as u16) + carry;
            product[i + j] = sum as u8;
            carry = sum >> 8;
        }
        product[i + rhs.len()] = carry as u8;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::BigUint;

    #[test]
    fn matches_biguint_on_fixed_operands() {
        let lhs: Vec<u8> = (1..=20).collect();
        let rhs: Vec<u8> = (101..=120).collect();
        let product = mp_mul(&lhs, &rhs);
        let expected = BigUint::from_bytes_le(&lhs) * BigUint::from_bytes_le(&rhs);
        let mut expected_bytes = expected.to_bytes_le();
        expected_bytes.resize(product.len(), 0);
        assert_eq!(product, expected_bytes);
    }

    #[test]
    fn all_ff_operands_saturate_without_overflow() {
        let operand = vec![0xff; 20];
        let product = mp_mul(&operand, &operand);
        let expected = BigUint::from_bytes_le(&operand) * BigUint::from_bytes_le(&operand);
        let mut expected_bytes = expected.to_bytes_le();
        expected_bytes.resize(product.len(), 0);
        assert_eq!(product, expected_bytes);
    }
}
