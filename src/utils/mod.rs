pub mod error;
pub mod logging;
pub mod mojibake;
pub mod normalization;

pub use error::*;
pub use mojibake::repair_mojibake;
pub use normalization::normalize_header;
