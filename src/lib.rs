pub mod analyzer;
pub mod api;
pub mod artifact;
pub mod config;
pub mod consts;
pub mod digits;
pub mod error;
pub mod layouts;
pub mod matrix;
pub mod scorer;
pub mod typist;
// cmd and reports (console tables) belong to the binary.

pub use error::{DcResult, DigitCostError};
