pub mod client;
pub mod models;
pub mod prompts;

pub use client::*;
pub use models::*;
pub use prompts::*;
