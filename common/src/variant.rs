use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Which generator to run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Full product of two independent operands.
    Multiply,
    /// Product of one operand with itself; roughly halves the `mul` count.
    Square,
}
