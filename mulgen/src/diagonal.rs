//! Diagonal decomposition of a product into per-output-limb
//! partial-product sets.
//!
//! Output limb `k` of an `limbs × limbs` product collects exactly the
//! pairs `(i, j)` with `i + j = k`. The generators always consume pairs
//! in ascending `i`, so the functions here return them that way.

/// Pairs contributing to output limb `k`, ascending `i`.
pub fn diagonal(limbs: usize, k: usize) -> Vec<(usize, usize)> {
    debug_assert!(k < 2 * limbs - 1);
    let lo = k.saturating_sub(limbs - 1);
    let hi = k.min(limbs - 1);
    (lo..=hi).map(|i| (i, k - i)).collect()
}

/// Diagonal `k` of a square, split for the symmetry optimization:
/// `cross` pairs (`i < j`) contribute doubled, the `equal` pair once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareDiagonal {
    pub cross: Vec<(usize, usize)>,
    pub equal: Option<usize>,
}

pub fn square_diagonal(limbs: usize, k: usize) -> SquareDiagonal {
    let cross = diagonal(limbs, k)
        .into_iter()
        .filter(|&(i, j)| i < j)
        .collect();
    let equal = (k % 2 == 0).then_some(k / 2).filter(|&m| m < limbs);
    SquareDiagonal { cross, equal }
}
