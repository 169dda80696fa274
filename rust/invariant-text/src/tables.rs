//! Curated category tables.
//!
//! The data lives in `data/categories/*.txt`, one file per category. `build.rs`
//! merges the files in precedence order into a single table sorted by code
//! point, which is searched with a binary search.

use crate::category::Category;

/// One curated code point: its category and its replacement. An empty
/// replacement drops the code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldingEntry {
    code: u32,
    category: Category,
    replacement: &'static str,
}

impl FoldingEntry {
    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replacement characters, between 0 and 4 of them.
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    pub fn is_drop(&self) -> bool {
        self.replacement.is_empty()
    }
}

mod generated {
    use super::FoldingEntry;
    use crate::category::Category;

    include!(concat!(env!("OUT_DIR"), "/folding_table.rs"));
}

/// The whole merged table, sorted by code point.
pub fn entries() -> &'static [FoldingEntry] {
    &generated::FOLDING_TABLE[..generated::FOLDING_TABLE_LEN]
}

/// Looks up a curated code point.
#[inline]
pub fn lookup(code: u32) -> Option<&'static FoldingEntry> {
    let table = entries();
    table
        .binary_search_by_key(&code, FoldingEntry::code)
        .ok()
        .map(|idx| &table[idx])
}

/// Printable ASCII that is already in normal form: letters, digits, the space
/// and the punctuation range. U+0060 GRAVE ACCENT is excluded, it is curated
/// punctuation that folds to an apostrophe.
#[inline]
pub fn is_ascii_bypass(code: u32) -> bool {
    (0x20..=0x7E).contains(&code) && code != 0x60
}
