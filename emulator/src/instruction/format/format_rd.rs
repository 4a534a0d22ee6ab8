use serde::{Deserialize, Serialize};

/// Single-register format (`lsl rd`, `rol rd`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRd {
    pub rd: u8,
}
