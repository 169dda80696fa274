use std::collections::VecDeque;

use crate::{axis::Axis, mapper::fold_char};

/// Knuth-Morris-Pratt sub-text search over invariant forms.
/// https://en.wikipedia.org/wiki/Knuth%E2%80%93Morris%E2%80%93Pratt_algorithm
///
/// The pattern is folded once when it is set; the searched text is folded on
/// the fly, and matches are reported as byte ranges of the original text.
pub struct InvariantSearch {
    axis: Axis,
    pattern: Vec<char>,
    pattern_str: String,
    lps: Vec<usize>,
}

impl InvariantSearch {
    pub fn new(axis: Axis) -> Self {
        InvariantSearch {
            axis,
            pattern: Vec::default(),
            pattern_str: String::default(),
            lps: Vec::new(),
        }
    }

    pub fn new_with_pattern(pattern: &str, axis: Axis) -> Self {
        let mut search = Self::new(axis);
        search.set_pattern(pattern);
        search
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        let axis = self.axis;
        self.pattern.clear();
        self.pattern
            .extend(pattern.chars().flat_map(|ch| fold_char(axis, ch)));

        self.pattern_str.clear();
        self.pattern_str.extend(self.pattern.iter());

        self.build_lps_table();
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The folded pattern.
    pub fn pattern(&self) -> &str {
        self.pattern_str.as_str()
    }

    /// Length of the folded pattern in characters.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Pre-builds the longest proper suffix table based on the pattern.
    fn build_lps_table(&mut self) {
        self.lps.clear();
        if self.pattern.is_empty() {
            return;
        }
        self.lps.resize(self.pattern.len(), 0);

        let pattern = self.pattern.as_slice();
        let mut i = 1usize;
        let mut j = 0usize;
        while i < pattern.len() {
            if pattern[i] == pattern[j] {
                self.lps[i] = j + 1;
                i += 1;
                j += 1;
            } else if j != 0 {
                j = self.lps[j - 1];
            } else {
                self.lps[i] = 0;
                i += 1;
            }
        }
    }

    /// Searches for the first pattern appearance in `text`. If the pattern is
    /// found, the start/end byte offsets of the matching source text are
    /// returned.
    pub fn search(&self, text: &str) -> Option<(usize, usize)> {
        let mut result: Option<(usize, usize)> = None;
        self.search_all(text, |start_pos, end_pos| {
            result.replace((start_pos, end_pos));
            true
        });
        result
    }

    /// Searches for all pattern appearances in `text`. The collector is called
    /// for every match with the start and end byte offsets of the source
    /// characters whose folded output makes up the match. The search continues
    /// until the collector signals to stop by returning true, or until the end
    /// of the text.
    ///
    /// A match may begin or end in the middle of the expansion of a single
    /// source character (pattern "s" inside "ß"); the whole character is then
    /// part of the reported range.
    pub fn search_all<F>(&self, text: &str, mut collector: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        if self.pattern.is_empty() {
            collector(0, 0);
            return;
        }

        let pattern_len = self.pattern.len();
        // Source start offsets of the last `pattern_len` folded characters.
        let mut starts = VecDeque::with_capacity(pattern_len);
        let mut i = 0usize;
        for (byte_pos, orig_ch) in text.char_indices() {
            let end_pos = byte_pos + orig_ch.len_utf8();
            for mapped_ch in fold_char(self.axis, orig_ch) {
                if starts.len() == pattern_len {
                    starts.pop_front();
                }
                starts.push_back(byte_pos);

                while i != 0 && self.pattern[i] != mapped_ch {
                    i = self.lps[i - 1];
                }
                if self.pattern[i] == mapped_ch {
                    i += 1;
                    if i == pattern_len {
                        if collector(starts[0], end_pos) {
                            return;
                        }
                        i = self.lps[i - 1];
                    }
                }
            }
        }
    }
}
