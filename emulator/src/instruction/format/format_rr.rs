use serde::{Deserialize, Serialize};

/// Two-register format: destination and source (`add rd, rr`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRr {
    pub rd: u8,
    pub rr: u8,
}
