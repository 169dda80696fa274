include!(concat!(env!("OUT_DIR"), "/case_mapping.rs"));

/// Simple (one-to-one) case mapping, as defined by the `Simple_Lowercase_Mapping`
/// and `Simple_Uppercase_Mapping` properties of the Unicode Character Database.
///
/// Unlike `char::to_lowercase()` and `char::to_uppercase()`, the mapping always
/// yields exactly one character. Characters whose full mapping expands to
/// several characters use their simple mapping instead, which may be the
/// character itself:
///
/// <pre>
/// ß ŉ ǰ ΐ ΰ ẖ ẗ ẘ ẙ ẚ ὐ ὒ ὔ ὖ ᾶ ῆ ῖ ῦ ῶ ﬀ ﬁ ﬂ ﬃ ﬄ ﬅ ﬆ  (no simple uppercase)
/// ᾀ → ᾈ   ᾳ → ᾼ   ῃ → ῌ   ῳ → ῼ                          (titlecase forms)
/// İ → i                                                   (simple lowercase)
/// </pre>
pub trait CharCaseMapper {
    fn to_lowercase_ignore_special(&self) -> Self;
    fn to_uppercase_ignore_special(&self) -> Self;
}

impl CharCaseMapper for char {
    #[inline]
    fn to_lowercase_ignore_special(&self) -> Self {
        if self.is_ascii() {
            return self.to_ascii_lowercase();
        }
        simple_mapping(*self, &case_mapping::TOLOWER_MAP[..case_mapping::TOLOWER_MAP_LEN])
    }

    #[inline]
    fn to_uppercase_ignore_special(&self) -> Self {
        if self.is_ascii() {
            return self.to_ascii_uppercase();
        }
        simple_mapping(*self, &case_mapping::TOUPPER_MAP[..case_mapping::TOUPPER_MAP_LEN])
    }
}

#[inline]
fn simple_mapping(ch: char, map: &[u32]) -> char {
    map.get(u32::from(ch) as usize)
        .copied()
        .filter(|&mapped| mapped != 0)
        .and_then(char::from_u32)
        .unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use crate::case_conversions::CharCaseMapper;

    fn upper(s: &str) -> String {
        s.chars().map(|ch| ch.to_uppercase_ignore_special()).collect()
    }

    fn lower(s: &str) -> String {
        s.chars().map(|ch| ch.to_lowercase_ignore_special()).collect()
    }

    #[test]
    pub fn test_to_uppercase_ignore_special() {
        assert_eq!('ß', 'ß'.to_uppercase_ignore_special());
        assert_eq!('ŉ', 'ŉ'.to_uppercase_ignore_special());
        assert_eq!('Ǆ', 'ǅ'.to_uppercase_ignore_special());
        assert_eq!('Ǆ', 'ǆ'.to_uppercase_ignore_special());
        assert_eq!('S', 'ſ'.to_uppercase_ignore_special());
        assert_eq!('Ÿ', 'ÿ'.to_uppercase_ignore_special());
        assert_eq!("STRAßE", upper("Straße"));
        assert_eq!("אבגדה", upper("אבגדה"));
        assert_eq!("", upper(""));
        assert_eq!("🐥 AND 🐓 ARE FUNNY", upper("🐥 and 🐓 are funny"));
    }

    #[test]
    pub fn test_to_lowercase_ignore_special() {
        assert_eq!('ß', 'ẞ'.to_lowercase_ignore_special());
        assert_eq!('i', 'İ'.to_lowercase_ignore_special());
        assert_eq!('ǆ', 'ǅ'.to_lowercase_ignore_special());
        assert_eq!('å', '\u{212B}'.to_lowercase_ignore_special());
        assert_eq!('ω', '\u{2126}'.to_lowercase_ignore_special());
        assert_eq!("straße", lower("STRAẞE"));
        assert_eq!("אבגדה", lower("אבגדה"));
        assert_eq!("🐥 and 🐓 are funny", lower("🐥 And 🐓 are funny"));
    }

    #[test]
    fn test_expanding_full_mappings_use_simple_mappings() {
        // Iota subscripts uppercase to the titlecase letter.
        assert_eq!('\u{1F88}', '\u{1F80}'.to_uppercase_ignore_special());
        assert_eq!('\u{1FAF}', '\u{1FA7}'.to_uppercase_ignore_special());
        assert_eq!('\u{1FBC}', '\u{1FB3}'.to_uppercase_ignore_special());
        assert_eq!('\u{1FCC}', '\u{1FC3}'.to_uppercase_ignore_special());
        assert_eq!('\u{1FFC}', '\u{1FF3}'.to_uppercase_ignore_special());
        assert_eq!('\u{1F80}', '\u{1F88}'.to_lowercase_ignore_special());
        // No simple uppercase: the character stays as it is.
        for ch in [
            '\u{0390}', '\u{03B0}', '\u{1F50}', '\u{1F52}', '\u{1F54}', '\u{1F56}', '\u{1FB6}',
            '\u{1FC6}', '\u{01F0}', '\u{1E96}', '\u{FB00}', '\u{0587}',
        ] {
            assert_eq!(ch, ch.to_uppercase_ignore_special(), "U+{:04X}", u32::from(ch));
        }
    }

    #[test]
    fn test_mapping_is_idempotent() {
        for ch in '\0'..=char::MAX {
            let up = ch.to_uppercase_ignore_special();
            assert_eq!(up, up.to_uppercase_ignore_special());
            let low = ch.to_lowercase_ignore_special();
            assert_eq!(low, low.to_lowercase_ignore_special());
        }
    }
}
