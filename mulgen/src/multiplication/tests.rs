use common::constants::{mul160, mul80, MAX_WINDOW, MIN_WINDOW};
use emulator::instruction::Avr8Instruction;
use itertools::Itertools;

use super::sequence_builder::mul_sequence_builder;
use super::test_utils::{create_mul_harness, mul_verify, TestVectors};
use crate::error::SequenceError;

fn mul_count(sequence: &[Avr8Instruction]) -> usize {
    sequence
        .iter()
        .filter(|instr| matches!(instr, Avr8Instruction::MUL(_)))
        .count()
}

#[test]
fn test_mul_default_vectors() {
    for window in [mul80::WINDOW, mul160::WINDOW] {
        let (lhs, rhs) = TestVectors::default_pair(2 * window);
        mul_verify::assert_sequence_equiv(window, &lhs, &rhs);
    }
}

#[test]
fn test_mul_random() {
    for window in [mul80::WINDOW, mul160::WINDOW] {
        for _ in 0..50 {
            let (lhs, rhs) = TestVectors::random_pair(2 * window);
            mul_verify::assert_sequence_equiv(window, &lhs, &rhs);
        }
    }
}

#[test]
fn test_mul_edge_cases() {
    for window in [mul80::WINDOW, mul160::WINDOW] {
        for (lhs, rhs, description) in TestVectors::edge_cases(2 * window) {
            // The description keeps failures attributable.
            eprintln!("edge case: {description}");
            mul_verify::assert_sequence_equiv(window, &lhs, &rhs);
        }
    }
}

#[test]
fn test_every_feasible_window_executes() {
    for window in MIN_WINDOW..=MAX_WINDOW {
        let (lhs, rhs) = TestVectors::default_pair(2 * window);
        mul_verify::assert_sequence_equiv(window, &lhs, &rhs);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let first = mul_sequence_builder(mul160::WINDOW).unwrap();
    let second = mul_sequence_builder(mul160::WINDOW).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_instruction_counts_are_closed_form() {
    for window in MIN_WINDOW..=MAX_WINDOW {
        let sequence = mul_sequence_builder(window).unwrap();
        // One mul per limb pair of the full product.
        assert_eq!(mul_count(&sequence), (2 * window) * (2 * window));
        let stores = sequence
            .iter()
            .filter(|instr| matches!(instr, Avr8Instruction::ST(_)))
            .count();
        assert_eq!(stores, 6 * window, "2w scratch stores + 4w product stores");
        let loads = sequence
            .iter()
            .filter(|instr| matches!(instr, Avr8Instruction::LD(_)))
            .count();
        assert_eq!(loads, 7 * window, "5w operand loads + 2w scratch re-reads");
    }
}

#[test]
fn test_infeasible_windows_are_rejected() {
    for window in [0, 1, MAX_WINDOW + 1, 64] {
        assert_eq!(
            mul_sequence_builder(window).unwrap_err(),
            SequenceError::RegisterWindowOverflow { window }
        );
    }
}

#[test]
fn test_sequence_opening_is_pinned() {
    let sequence = mul_sequence_builder(mul160::WINDOW).unwrap();
    let rendered: Vec<String> = sequence.iter().map(|instr| instr.to_string()).collect();
    let mut expected: Vec<String> = vec!["adiw r30, 10".into(), "adiw r28, 10".into()];
    for i in 0..10 {
        expected.push(format!("ld r{}, x+", i + 2));
    }
    for i in 0..10 {
        expected.push(format!("ld r{}, y+", i + 12));
    }
    expected.extend(
        [
            "ldi r25, 0",
            "ldi r23, 0",
            "mul r2, r12",
            "st z+, r0",
            "mov r22, r1",
            "ldi r24, 0",
            "mul r2, r13",
            "add r22, r0",
            "adc r23, r1",
            "mul r3, r12",
            "add r22, r0",
            "adc r23, r1",
            "adc r24, r25",
            "st z+, r22",
            "ldi r22, 0",
            "mul r2, r14",
        ]
        .map(String::from),
    );
    assert_eq!(&rendered[..expected.len()], expected.as_slice());
    assert_eq!(rendered.last().unwrap(), "eor r1, r1");
}

#[test]
fn test_no_use_before_def() {
    for window in [mul80::WINDOW, mul160::WINDOW] {
        let sequence = mul_sequence_builder(window).unwrap();
        let harness = create_mul_harness(window);
        if let Err(violation) = harness.verify_dataflow(&sequence) {
            panic!("use-before-def in multiply sequence: {violation}");
        }
    }
}

#[test]
fn test_diagonal_completeness() {
    for window in [mul80::WINDOW, mul160::WINDOW] {
        let limbs = 2 * window;
        // Identifying limb values: operand A limbs are 1..=2w, operand B
        // limbs 101..=100+2w, so every recorded mul names its limb pair.
        let lhs: Vec<u8> = (0..limbs).map(|i| (i + 1) as u8).collect();
        let rhs: Vec<u8> = (0..limbs).map(|j| (101 + j) as u8).collect();

        let sequence = mul_sequence_builder(window).unwrap();
        let mut harness = create_mul_harness(window);
        harness.load_input(&lhs);
        harness.load_input2(&rhs);
        harness.setup_pointers();
        harness.execute_sequence(&sequence);

        let observed = harness
            .cpu
            .mul_trace
            .iter()
            .map(|&(a, b)| (a as usize - 1, b as usize - 101))
            .counts();
        for i in 0..limbs {
            for j in 0..limbs {
                assert_eq!(
                    observed.get(&(i, j)).copied(),
                    Some(1),
                    "pair ({i}, {j}) must be multiplied exactly once"
                );
            }
        }
        assert_eq!(observed.len(), limbs * limbs);
    }
}

#[test]
fn test_output_limbs_stream_in_order() {
    let window = mul160::WINDOW;
    let (lhs, rhs) = TestVectors::default_pair(2 * window);
    let sequence = mul_sequence_builder(window).unwrap();
    let mut harness = create_mul_harness(window);
    harness.load_input(&lhs);
    harness.load_input2(&rhs);
    harness.setup_pointers();
    harness.execute_sequence(&sequence);

    let offsets: Vec<usize> = harness
        .cpu
        .store_trace
        .iter()
        .map(|&(address, _)| harness.output_offset(address).expect("store outside product"))
        .collect();
    assert_eq!(offsets.len(), 6 * window);

    // First pass parks 2w scratch bytes at offsets w..3w.
    let scratch = &offsets[..2 * window];
    assert_eq!(scratch, (window..3 * window).collect::<Vec<_>>().as_slice());

    // The definitive output streams strictly left to right, no revisits.
    let definitive = &offsets[2 * window..];
    assert_eq!(
        definitive,
        (0..4 * window).collect::<Vec<_>>().as_slice()
    );

    // Each scratch byte is re-read exactly once, by a no-advance load.
    let scratch_reads = harness
        .cpu
        .load_trace
        .iter()
        .filter_map(|&address| harness.output_offset(address))
        .counts();
    assert_eq!(scratch_reads.len(), 2 * window);
    for offset in window..3 * window {
        assert_eq!(scratch_reads.get(&offset).copied(), Some(1));
    }
}
