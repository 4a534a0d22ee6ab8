pub mod constants;
pub mod variant;
