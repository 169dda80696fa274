/// Semantic category of a code point.
///
/// Variants are declared in precedence order: a code point is tested against
/// the categories in this order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Control and format characters with no visible or comparable form.
    NonGlyph,
    /// Accented Latin letters, folded to the bare base letter.
    Diacritic,
    /// Fused letters, expanded to their constituent letters.
    Ligature,
    /// Superscript and subscript modifier letters.
    SuperSubscript,
    /// Circled, squared and parenthesized enclosed alphanumerics.
    Itemized,
    /// Non-composite letters adopted from a specific ASCII letter.
    Adopted,
    /// Enclosed, styled and compound digits.
    Numeric,
    /// Whitespace, line separators and zero-width format characters.
    Spacing,
    /// Fullwidth Latin letters used for CJK-style alignment.
    Alignment,
    /// Quotes, dashes, bullets, ellipses and operator look-alikes.
    Punctuation,
    /// No category matched; the code point passes through.
    Unknown,
}

impl Category {
    /// All categories, in precedence order.
    pub const ALL: [Category; 11] = [
        Category::NonGlyph,
        Category::Diacritic,
        Category::Ligature,
        Category::SuperSubscript,
        Category::Itemized,
        Category::Adopted,
        Category::Numeric,
        Category::Spacing,
        Category::Alignment,
        Category::Punctuation,
        Category::Unknown,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Category::NonGlyph => "non-glyph",
            Category::Diacritic => "diacritic",
            Category::Ligature => "ligature",
            Category::SuperSubscript => "super-subscript",
            Category::Itemized => "itemized",
            Category::Adopted => "adopted",
            Category::Numeric => "numeric",
            Category::Spacing => "spacing",
            Category::Alignment => "alignment",
            Category::Punctuation => "punctuation",
            Category::Unknown => "unknown",
        }
    }

    /// Whether the category is backed by a curated table (every category
    /// except `Unknown`).
    pub const fn is_curated(&self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
