pub mod analysis;
pub mod question;

pub use analysis::*;
pub use question::*;
