//! Per-code-point classification and replacement.
//!
//! [`translate`] is the engine everything else is built on: for one character
//! and an [`Axis`] it decides the [`Category`], the replacement the category
//! prescribes and applies the axis to whatever is emitted.

use tinyvec::ArrayVec;

use crate::{
    axis::Axis,
    category::Category,
    tables::{self, FoldingEntry},
};

/// Maximum number of characters a single code point can be replaced with.
pub const MAX_REPLACEMENT_LEN: usize = 4;

/// Output of [`translate`] for a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folding {
    /// The code point vanishes from the output.
    Drop,
    /// The first `n` characters of the slot (`1..=4`) replace the code point.
    Replaced(usize),
    /// No category matched; the (case-mapped) code point passes through.
    PassThrough(char),
}

impl Folding {
    /// Whether emitting this folding changes the text relative to `original`.
    ///
    /// Drops and replacements always count as a modification, even when the
    /// replacement happens to equal the original character. A pass-through is
    /// a modification only if the axis changed its case.
    #[inline]
    pub fn is_modified(&self, original: char) -> bool {
        match self {
            Folding::Drop | Folding::Replaced(_) => true,
            Folding::PassThrough(ch) => *ch != original,
        }
    }

    /// Number of characters this folding emits.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Folding::Drop => 0,
            Folding::Replaced(n) => *n,
            Folding::PassThrough(_) => 1,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Characters emitted for one code point (at most [`MAX_REPLACEMENT_LEN`]).
pub type FoldedChars = ArrayVec<[char; MAX_REPLACEMENT_LEN]>;

#[inline]
fn curated_entry(ch: char) -> Option<&'static FoldingEntry> {
    let code = u32::from(ch);
    if tables::is_ascii_bypass(code) {
        None
    } else {
        tables::lookup(code)
    }
}

/// Returns the category `ch` belongs to.
pub fn classify(ch: char) -> Category {
    curated_entry(ch).map_or(Category::Unknown, |e| e.category())
}

/// Folds a single character.
///
/// Replacement characters are written to the beginning of `slot` and the
/// returned [`Folding::Replaced`] tells how many of them are valid; the rest
/// of the slot is left untouched. The axis is applied last, to every emitted
/// character.
///
/// Classification always looks at `ch` itself. A few uncurated characters
/// case-map onto curated ones (`'ɓ'` uppercases to `'Ɓ'`), so under a case axis
/// their output folds further when it is folded again.
#[inline]
pub fn translate(axis: Axis, ch: char, slot: &mut [char; MAX_REPLACEMENT_LEN]) -> Folding {
    let Some(entry) = curated_entry(ch) else {
        return Folding::PassThrough(axis.apply(ch));
    };
    if entry.is_drop() {
        return Folding::Drop;
    }
    let mut len = 0;
    for (dst, src) in slot.iter_mut().zip(entry.replacement().chars()) {
        *dst = axis.apply(src);
        len += 1;
    }
    Folding::Replaced(len)
}

/// Folds a single character into an inline array of the emitted characters.
pub fn fold_char(axis: Axis, ch: char) -> FoldedChars {
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    let mut folded = FoldedChars::new();
    match translate(axis, ch, &mut slot) {
        Folding::Drop => {}
        Folding::Replaced(n) => folded.extend_from_slice(&slot[..n]),
        Folding::PassThrough(c) => folded.push(c),
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded(axis: Axis, ch: char) -> String {
        fold_char(axis, ch).iter().collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('\u{0}'), Category::NonGlyph);
        assert_eq!(classify('ç'), Category::Diacritic);
        assert_eq!(classify('æ'), Category::Ligature);
        assert_eq!(classify('ª'), Category::SuperSubscript);
        assert_eq!(classify('ⓐ'), Category::Itemized);
        assert_eq!(classify('ø'), Category::Adopted);
        assert_eq!(classify('²'), Category::Numeric);
        assert_eq!(classify('\u{2003}'), Category::Spacing);
        assert_eq!(classify('Ａ'), Category::Alignment);
        assert_eq!(classify('…'), Category::Punctuation);
        assert_eq!(classify('½'), Category::Unknown);
        assert_eq!(classify('a'), Category::Unknown);
        assert_eq!(classify('`'), Category::Punctuation);
        assert_eq!(classify('\u{10FFFF}'), Category::Unknown);
    }

    #[test]
    fn test_translate_replacement_slot() {
        let mut slot = ['#'; MAX_REPLACEMENT_LEN];
        assert_eq!(translate(Axis::None, 'ﬃ', &mut slot), Folding::Replaced(3));
        assert_eq!(slot, ['f', 'f', 'i', '#']);

        assert_eq!(translate(Axis::Uppercase, '\u{A7D2}', &mut slot), Folding::Replaced(4));
        assert_eq!(slot, ['T', 'H', 'T', 'H']);

        assert_eq!(translate(Axis::Lowercase, '\u{A7D2}', &mut slot), Folding::Replaced(4));
        assert_eq!(slot, ['t', 'h', 't', 'h']);
    }

    #[test]
    fn test_translate_drop_and_pass_through() {
        let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
        assert_eq!(translate(Axis::None, '\u{FEFF}', &mut slot), Folding::Drop);
        assert_eq!(translate(Axis::Uppercase, '¿', &mut slot), Folding::Drop);
        assert_eq!(translate(Axis::None, 'x', &mut slot), Folding::PassThrough('x'));
        assert_eq!(translate(Axis::Uppercase, 'x', &mut slot), Folding::PassThrough('X'));
        assert_eq!(translate(Axis::Lowercase, 'Ω', &mut slot), Folding::PassThrough('ω'));
        assert_eq!(translate(Axis::None, '½', &mut slot), Folding::PassThrough('½'));
    }

    #[test]
    fn test_low_code_points_are_dropped() {
        // Code points 1..=4 must never be confused with a replacement length.
        let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
        for code in 0..=4u32 {
            let ch = char::from_u32(code).unwrap();
            assert_eq!(translate(Axis::None, ch, &mut slot), Folding::Drop);
        }
    }

    #[test]
    fn test_control_ranges_are_dropped() {
        let ranges = [0x00..=0x08u32, 0x0E..=0x1F, 0x7F..=0x9F];
        for code in ranges.into_iter().flatten() {
            let ch = char::from_u32(code).unwrap();
            if code == 0x85 {
                // NEXT LINE is a line separator.
                assert_eq!(folded(Axis::None, ch), "\n");
                continue;
            }
            assert!(fold_char(Axis::None, ch).is_empty(), "U+{code:04X}");
        }
    }

    #[test]
    fn test_replacements_follow_source_case() {
        assert_eq!(folded(Axis::None, 'Ç'), "C");
        assert_eq!(folded(Axis::None, 'ç'), "c");
        assert_eq!(folded(Axis::None, 'Æ'), "AE");
        assert_eq!(folded(Axis::None, 'ǅ'), "Dz");
        assert_eq!(folded(Axis::Uppercase, 'ǅ'), "DZ");
        assert_eq!(folded(Axis::Lowercase, 'ǅ'), "dz");
        assert_eq!(folded(Axis::None, 'ß'), "ss");
        assert_eq!(folded(Axis::None, 'ẞ'), "SS");
    }

    #[test]
    fn test_categories_fold() {
        assert_eq!(folded(Axis::None, 'ⁿ'), "n");
        assert_eq!(folded(Axis::None, 'Ⓩ'), "Z");
        assert_eq!(folded(Axis::None, 'Þ'), "TH");
        assert_eq!(folded(Axis::None, 'ĸ'), "k");
        assert_eq!(folded(Axis::None, '⑳'), "20");
        assert_eq!(folded(Axis::None, '㊿'), "50");
        assert_eq!(folded(Axis::None, '\t'), " ");
        assert_eq!(folded(Axis::None, '\u{2029}'), "\n");
        assert_eq!(folded(Axis::None, 'ｚ'), "z");
        assert_eq!(folded(Axis::None, '‽'), "?!");
        assert_eq!(folded(Axis::None, '⩴'), "::==");
        assert_eq!(folded(Axis::None, '“'), "\"");
        assert_eq!(folded(Axis::Uppercase, '•'), "·");
    }

    #[test]
    fn test_case_counterpart_of_curated_char() {
        assert_eq!(classify('ɓ'), Category::Unknown);
        assert_eq!(classify('Ɓ'), Category::Adopted);
        assert_eq!(folded(Axis::Uppercase, 'ɓ'), "Ɓ");
        assert_eq!(folded(Axis::Uppercase, 'Ɓ'), "B");
        // ANGSTROM SIGN lowercases to the curated 'å'.
        assert_eq!(folded(Axis::Lowercase, '\u{212B}'), "å");
        assert_eq!(folded(Axis::Lowercase, 'å'), "a");
    }

    #[test]
    fn test_folding_modification() {
        assert!(Folding::Drop.is_modified('\u{200B}'));
        assert!(Folding::Replaced(1).is_modified('\n'));
        assert!(!Folding::PassThrough('a').is_modified('a'));
        assert!(Folding::PassThrough('A').is_modified('a'));
        assert_eq!(Folding::Drop.len(), 0);
        assert!(Folding::Drop.is_empty());
        assert_eq!(Folding::Replaced(3).len(), 3);
        assert_eq!(Folding::PassThrough('x').len(), 1);
    }

    #[test]
    fn test_every_code_point_folds_to_at_most_four_chars() {
        let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
        for ch in '\0'..=char::MAX {
            for axis in [Axis::None, Axis::Lowercase, Axis::Uppercase] {
                let folding = translate(axis, ch, &mut slot);
                assert!(folding.len() <= MAX_REPLACEMENT_LEN);
                if let Folding::Replaced(n) = folding {
                    assert!(n >= 1);
                }
            }
        }
    }
}
