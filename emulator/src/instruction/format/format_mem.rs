use serde::{Deserialize, Serialize};

use super::Ptr;

/// Whether a pointer-indirect access advances the pointer.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerAdvance {
    /// `ld rd, z` — the one read-back case; the pointer stays put.
    None,
    /// `ld rd, x+` / `st z+, rr`.
    #[default]
    PostIncrement,
}

/// Pointer-indirect memory format (`ld`/`st`). `reg` is the data
/// register; direction is fixed by the mnemonic.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMem {
    pub reg: u8,
    pub ptr: Ptr,
    pub advance: PointerAdvance,
}
