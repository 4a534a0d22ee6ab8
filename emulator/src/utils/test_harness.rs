//! Generic harness for validating generated sequences.
//!
//! Seeds operands into SRAM, points `X`/`Y`/`Z` at the right regions,
//! runs a sequence on the [`Cpu`] and reads the product back — the same
//! setup the firmware wrapper performs around the inline assembly.

use crate::emulator::cpu::Cpu;
use crate::instruction::format::Ptr;
use crate::instruction::Avr8Instruction;
use crate::utils::dataflow::{verify_no_use_before_def, DataflowViolation, EntryState};

/// ATmega-style SRAM origin; keeps the low I/O space out of the way.
pub const SRAM_BASE: u16 = 0x0100;
pub const TEST_SRAM_CAPACITY: usize = 0x0400;

#[derive(Clone, Copy)]
pub enum RegionMapping {
    Input,
    Input2,
    Output,
}

/// Where operands and product live in SRAM and which pointer register
/// addresses which region.
pub struct SramLayout {
    pub input_base: u16,
    pub input_size: usize,
    pub input2_base: Option<u16>,
    pub input2_size: Option<usize>,
    pub output_base: u16,
    pub output_size: usize,
    pub x_mapping: RegionMapping,
    pub y_mapping: Option<RegionMapping>,
    pub z_mapping: RegionMapping,
}

impl SramLayout {
    /// Two operands, one product: `X` = left, `Y` = right, `Z` = product.
    pub fn two_inputs(input_size: usize, input2_size: usize, output_size: usize) -> Self {
        Self {
            input_base: SRAM_BASE,
            input_size,
            input2_base: Some(SRAM_BASE + input_size as u16),
            input2_size: Some(input2_size),
            output_base: SRAM_BASE + (input_size + input2_size) as u16,
            output_size,
            x_mapping: RegionMapping::Input,
            y_mapping: Some(RegionMapping::Input2),
            z_mapping: RegionMapping::Output,
        }
    }

    /// One operand, one product: `X` = operand, `Z` = product.
    pub fn single_input(input_size: usize, output_size: usize) -> Self {
        Self {
            input_base: SRAM_BASE,
            input_size,
            input2_base: None,
            input2_size: None,
            output_base: SRAM_BASE + input_size as u16,
            output_size,
            x_mapping: RegionMapping::Input,
            y_mapping: None,
            z_mapping: RegionMapping::Output,
        }
    }

    fn address_for(&self, mapping: RegionMapping) -> u16 {
        match mapping {
            RegionMapping::Input => self.input_base,
            RegionMapping::Input2 => self
                .input2_base
                .expect("Input2 mapping requires input2_base"),
            RegionMapping::Output => self.output_base,
        }
    }
}

pub struct SequenceTestHarness {
    pub cpu: Cpu,
    layout: SramLayout,
}

impl SequenceTestHarness {
    pub fn new(layout: SramLayout) -> Self {
        Self {
            cpu: Cpu::new(TEST_SRAM_CAPACITY),
            layout,
        }
    }

    pub fn load_input(&mut self, data: &[u8]) {
        assert!(
            data.len() <= self.layout.input_size,
            "Input data exceeds allocated size"
        );
        for (i, &byte) in data.iter().enumerate() {
            self.cpu
                .sram
                .store(self.layout.input_base + i as u16, byte)
                .expect("Failed to store input byte");
        }
    }

    pub fn load_input2(&mut self, data: &[u8]) {
        let base = self
            .layout
            .input2_base
            .expect("No second input region defined");
        let size = self.layout.input2_size.expect("No second input size");
        assert!(data.len() <= size, "Second input data exceeds allocated size");
        for (i, &byte) in data.iter().enumerate() {
            self.cpu
                .sram
                .store(base + i as u16, byte)
                .expect("Failed to store second input byte");
        }
    }

    /// Point `X`/`Y`/`Z` at their mapped regions.
    pub fn setup_pointers(&mut self) {
        self.cpu
            .set_pointer(Ptr::X, self.layout.address_for(self.layout.x_mapping));
        if let Some(mapping) = self.layout.y_mapping {
            self.cpu.set_pointer(Ptr::Y, self.layout.address_for(mapping));
        }
        self.cpu
            .set_pointer(Ptr::Z, self.layout.address_for(self.layout.z_mapping));
    }

    pub fn execute_sequence(&mut self, sequence: &[Avr8Instruction]) {
        self.cpu.execute_sequence(sequence);
    }

    pub fn read_output(&mut self, count: usize) -> Vec<u8> {
        assert!(count <= self.layout.output_size, "Read exceeds output size");
        (0..count)
            .map(|i| {
                self.cpu
                    .sram
                    .load(self.layout.output_base + i as u16)
                    .expect("Failed to load output byte")
            })
            .collect()
    }

    /// The dataflow entry state this layout guarantees.
    pub fn entry_state(&self) -> EntryState {
        let mut pointers = vec![
            (Ptr::X, self.layout.address_for(self.layout.x_mapping)),
            (Ptr::Z, self.layout.address_for(self.layout.z_mapping)),
        ];
        if let Some(mapping) = self.layout.y_mapping {
            pointers.push((Ptr::Y, self.layout.address_for(mapping)));
        }
        let mut defined_sram = vec![(self.layout.input_base, self.layout.input_size)];
        if let (Some(base), Some(size)) = (self.layout.input2_base, self.layout.input2_size) {
            defined_sram.push((base, size));
        }
        EntryState {
            pointers,
            defined_sram,
            sram_capacity: TEST_SRAM_CAPACITY,
        }
    }

    pub fn verify_dataflow(
        &self,
        sequence: &[Avr8Instruction],
    ) -> Result<(), DataflowViolation> {
        verify_no_use_before_def(sequence, &self.entry_state())
    }

    /// Offset of a store address inside the output region, if it is one.
    pub fn output_offset(&self, address: u16) -> Option<usize> {
        let base = self.layout.output_base;
        let size = self.layout.output_size;
        if address >= base && (address as usize) < base as usize + size {
            Some((address - base) as usize)
        } else {
            None
        }
    }
}
