#[macro_export]
macro_rules! declare_avr_instr {
    (
      name     = $name:ident,
      mnemonic = $mnemonic:expr,
      format   = $format:ty
  ) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub operands: $format,
        }

        impl $crate::instruction::AvrInstruction for $name {
            const MNEMONIC: &'static str = $mnemonic;

            type Format = $format;

            fn operands(&self) -> &Self::Format {
                &self.operands
            }

            fn from_operands(operands: Self::Format) -> Self {
                Self { operands }
            }

            fn execute(&self, cpu: &mut $crate::emulator::cpu::Cpu) {
                self.exec(cpu)
            }
        }

        impl From<$format> for $name {
            fn from(operands: $format) -> Self {
                Self { operands }
            }
        }
    };
}
