//! Instructions module for the Counter program
//!
//! Each instruction handler lives in its own file next to its account
//! validation context.

pub mod initialize;
pub mod increase;
pub mod get_value;

// Re-export instruction handlers
pub use initialize::*;
pub use increase::*;
pub use get_value::*;
