use serde::{Deserialize, Serialize};

/// Register-immediate format (`ldi rd, imm`). Only `r16..r31` are
/// encodable destinations; the assembler enforces this.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatImm {
    pub rd: u8,
    pub imm: u8,
}
