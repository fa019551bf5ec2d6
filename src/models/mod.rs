pub mod catalog;
pub mod edit;
pub mod gemini;

pub use catalog::*;
pub use edit::*;
pub use gemini::*;
