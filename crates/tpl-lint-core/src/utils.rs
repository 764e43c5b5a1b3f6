//! Utility modules for rule implementations.

pub mod allowance;
pub mod tree;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use allowance::{check_allow_with_reason, AllowCheck};
#[doc(inline)]
pub use tree::{nearest_ancestor, to_pattern};
