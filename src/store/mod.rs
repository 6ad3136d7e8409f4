pub mod call_config;
pub mod questions;
pub mod transcripts;

pub use call_config::*;
pub use questions::*;
pub use transcripts::*;
