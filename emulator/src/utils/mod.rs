pub mod asm_builder;
pub mod dataflow;
pub mod instruction_macros;
pub mod test_harness;
