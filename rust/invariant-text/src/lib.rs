//! Locale-invariant folding of Latin-script text into a plain, IA5-like repertoire.
//!
//! Diacritics are stripped down to their base letter, ligatures are expanded,
//! enclosed and styled alphanumerics are unwrapped, and spacing and punctuation
//! variants are reduced to their ASCII counterparts. The result is meant for
//! lenient comparison: `"açe"` folds to `"ace"`, `"straße"` to `"strasse"`.
//!
//! The crate is organized bottom-up:
//!
//! - [`tables`]: the curated category tables, generated at build time.
//! - [`mapper`]: the per-code-point classifier and replacement engine.
//! - [`scanner`]: applies the engine over whole texts and ranges of them.
//! - [`comparison`] and [`search`]: lenient equality, ordering and substring search.

pub mod axis;
pub mod case_conversions;
pub mod category;
pub mod comparison;
pub mod mapper;
pub mod scanner;
pub mod search;
pub mod tables;

pub use axis::Axis;
pub use category::Category;
pub use mapper::{FoldedChars, Folding, classify, fold_char, translate};
pub use scanner::InvariantTextExt;
pub use search::InvariantSearch;
