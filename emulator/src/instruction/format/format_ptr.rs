use serde::{Deserialize, Serialize};

use super::Ptr;

/// Pointer-adjust format (`adiw`/`sbiw`); the immediate is a word count
/// in `0..=63`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPtr {
    pub ptr: Ptr,
    pub imm: u8,
}
