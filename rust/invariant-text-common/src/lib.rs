//! Common definitions (error type and result helpers), shared by the invariant-text crates.

pub mod error;
pub mod result;

pub use result::Result;
