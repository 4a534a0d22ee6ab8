use emulator::utils::test_harness::{SequenceTestHarness, SramLayout};
use num::BigUint;
use rand::Rng;

use super::exec;
use super::sequence_builder::mul_sequence_builder;

pub fn create_mul_harness(window: usize) -> SequenceTestHarness {
    let operand = 2 * window;
    SequenceTestHarness::new(SramLayout::two_inputs(operand, operand, 4 * window))
}

pub mod mul_verify {
    use super::*;

    /// Generate, execute and check one multiply against both the exec
    /// reference and `BigUint`.
    pub fn assert_sequence_equiv(window: usize, lhs: &[u8], rhs: &[u8]) {
        let sequence = mul_sequence_builder(window).expect("window is feasible");
        let mut harness = create_mul_harness(window);
        harness.load_input(lhs);
        harness.load_input2(rhs);
        harness.setup_pointers();
        harness.execute_sequence(&sequence);

        let result = harness.read_output(4 * window);
        assert_eq!(
            result,
            exec::mp_mul(lhs, rhs),
            "generated multiply disagrees with the reference"
        );

        let expected = BigUint::from_bytes_le(lhs) * BigUint::from_bytes_le(rhs);
        let mut expected_bytes = expected.to_bytes_le();
        expected_bytes.resize(4 * window, 0);
        assert_eq!(result, expected_bytes, "generated multiply disagrees with BigUint");
    }
}

/// Operand vectors shared by the multiply and square tests.
pub struct TestVectors;

impl TestVectors {
    /// A fixed patterned pair for quick regressions.
    pub fn default_pair(limbs: usize) -> (Vec<u8>, Vec<u8>) {
        let lhs = (0..limbs).map(|i| (0x3b * (i + 1)) as u8).collect();
        let rhs = (0..limbs).map(|i| (0xc5 ^ (17 * i)) as u8).collect();
        (lhs, rhs)
    }

    pub fn random_pair(limbs: usize) -> (Vec<u8>, Vec<u8>) {
        let mut rng = rand::thread_rng();
        let lhs = (0..limbs).map(|_| rng.gen()).collect();
        let rhs = (0..limbs).map(|_| rng.gen()).collect();
        (lhs, rhs)
    }

    pub fn edge_cases(limbs: usize) -> Vec<(Vec<u8>, Vec<u8>, &'static str)> {
        let zero = vec![0u8; limbs];
        let one = {
            let mut v = vec![0u8; limbs];
            v[0] = 1;
            v
        };
        let max = vec![0xffu8; limbs];
        let top_limb_only = {
            let mut v = vec![0u8; limbs];
            v[limbs - 1] = 0xff;
            v
        };
        let single_low = {
            let mut v = vec![0u8; limbs];
            v[0] = 0xa7;
            v
        };
        vec![
            (zero.clone(), zero.clone(), "0 * 0"),
            (zero.clone(), max.clone(), "0 * MAX"),
            (one.clone(), max.clone(), "1 * MAX"),
            (max.clone(), max.clone(), "MAX * MAX"),
            (single_low.clone(), single_low.clone(), "single low limb"),
            (top_limb_only.clone(), one, "top limb * 1"),
            (top_limb_only, single_low, "top limb * single low limb"),
            (max, zero, "MAX * 0"),
        ]
    }
}
