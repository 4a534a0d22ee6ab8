use crate::diagonal::square_diagonal;

/// Symmetric schoolbook square on 8-bit limbs, little-endian: cross
/// pairs doubled, equal pairs once — the same decomposition the
/// generated sequence uses.
pub fn mp_square(operand: &[u8]) -> Vec<u8> {
    let limbs = operand.len();
    let mut product = vec![0u8; 2 * limbs];
    let mut carry: u32 = 0;
    for k in 0..(2 * limbs - 1) {
        let diag = square_diagonal(limbs, k);
        let mut column = carry;
        for (i, j) in diag.cross {
            column += 2 * (operand[i] as u32) * (operand[j] as u32);
        }
        if let Some(m) = diag.equal {
            column += (operand[m] as u32) * (operand[m] as u32);
        }
        product[k] = column as u8;
        carry = column >> 8;
    }
    // The top byte absorbs what remains; the product cannot overflow it.
    product[2 * limbs - 1] = carry as u8;
    product
}
