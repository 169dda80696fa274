//! Applies the folding engine across whole texts.
//!
//! Every input encoding comes in two tiers:
//!
//! - `*_into` functions append the folded text to a caller-owned buffer, use a
//!   caller-owned replacement slot and only return whether anything changed.
//!   They never touch what the buffer held before the call, and when they
//!   return `false` the buffer is left exactly as it was.
//! - Convenience functions allocate their own buffer and hand it out only if
//!   something changed, so already-invariant text is never copied.
//!
//! Range variants take `from` (inclusive) and `till` (exclusive) in code units
//! of the input encoding, and never look at code units outside of that range.
//! Invalid ranges are programming errors and panic; the `try_*` variants check
//! them and return an error instead.

use std::borrow::Cow;

use invariant_text_common::{Result, verify_arg};

use crate::{
    axis::Axis,
    mapper::{Folding, MAX_REPLACEMENT_LEN, translate},
    tables::is_ascii_bypass,
};

#[inline]
fn append_folded(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    ch: char,
) -> bool {
    let folding = translate(axis, ch, slot);
    match folding {
        Folding::Drop => {}
        Folding::Replaced(n) => norm.extend(&slot[..n]),
        Folding::PassThrough(c) => norm.push(c),
    }
    folding.is_modified(ch)
}

/// Runs `append` over `norm` and drops whatever it appended unless it reports
/// a change.
#[inline]
fn append_if_modified(norm: &mut String, append: impl FnOnce(&mut String) -> bool) -> bool {
    let len = norm.len();
    let modified = append(norm);
    if !modified {
        norm.truncate(len);
    }
    modified
}

/// Folds every character of `chars` into `norm`; the result is the logical OR
/// of the per-character modification flags.
fn fold_chars_into<I>(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    chars: I,
) -> bool
where
    I: Iterator<Item = char>,
{
    append_if_modified(norm, |norm| {
        chars.fold(false, |modified, ch| {
            append_folded(norm, slot, axis, ch) | modified
        })
    })
}

/// Same as `fold_chars_into`, for decoders that report malformed code units.
/// Those are folded as `char::REPLACEMENT_CHARACTER` and count as a change.
fn fold_decoded_into<I, E>(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    decoded: I,
) -> bool
where
    I: Iterator<Item = std::result::Result<char, E>>,
{
    let mut replaced = 0usize;
    let modified = append_if_modified(norm, |norm| {
        decoded.fold(false, |modified, ch| match ch {
            Ok(ch) => append_folded(norm, slot, axis, ch) | modified,
            Err(_) => {
                replaced += 1;
                append_folded(norm, slot, axis, char::REPLACEMENT_CHARACTER);
                true
            }
        })
    });
    if replaced != 0 {
        log::debug!("replaced {replaced} malformed code unit sequence(s) with U+FFFD");
    }
    modified
}

/// Whether `data` consists of ASCII that folds to itself under `axis`, which
/// lets the convenience functions skip the buffer entirely.
#[inline]
fn is_invariant_ascii(axis: Axis, data: &[u8]) -> bool {
    data.iter().all(|&b| {
        is_ascii_bypass(u32::from(b))
            && match axis {
                Axis::None => true,
                Axis::Lowercase => !b.is_ascii_uppercase(),
                Axis::Uppercase => !b.is_ascii_lowercase(),
            }
    })
}

/// Folds UTF-8 text `data` into `norm`.
///
/// ## Returns
///
/// `true` if the folded text differs from `data`.
pub fn str_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &str,
) -> bool {
    fold_chars_into(norm, slot, axis, data.chars())
}

/// Folds the byte range `from..till` of `data` into `norm`.
///
/// ## Panics
///
/// If `from > till`, `till > data.len()`, or either offset is not on a char
/// boundary.
pub fn str_range_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &str,
    from: usize,
    till: usize,
) -> bool {
    str_to_invariant_into(norm, slot, axis, &data[from..till])
}

/// Folds UTF-8 text `data`. Returns `Cow::Borrowed(data)` if nothing changed.
pub fn str_to_invariant(axis: Axis, data: &str) -> Cow<'_, str> {
    if is_invariant_ascii(axis, data.as_bytes()) {
        return Cow::Borrowed(data);
    }
    let mut norm = String::with_capacity(data.len());
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    if str_to_invariant_into(&mut norm, &mut slot, axis, data) {
        Cow::Owned(norm)
    } else {
        Cow::Borrowed(data)
    }
}

/// Folds the byte range `from..till` of `data`. Returns the borrowed range
/// itself if nothing changed.
///
/// ## Panics
///
/// Under the same conditions as [`str_range_to_invariant_into`].
pub fn str_range_to_invariant(axis: Axis, data: &str, from: usize, till: usize) -> Cow<'_, str> {
    str_to_invariant(axis, &data[from..till])
}

/// Checked variant of [`str_range_to_invariant`].
pub fn try_str_range_to_invariant(
    axis: Axis,
    data: &str,
    from: usize,
    till: usize,
) -> Result<Cow<'_, str>> {
    verify_str_range(data, from, till).inspect_err(|e| {
        log::debug!("rejected range {from}..{till} over {} bytes: {e}", data.len())
    })?;
    Ok(str_range_to_invariant(axis, data, from, till))
}

fn verify_str_range(data: &str, from: usize, till: usize) -> Result<()> {
    verify_arg!(from, from <= till);
    verify_arg!(till, till <= data.len());
    verify_arg!(from, data.is_char_boundary(from));
    verify_arg!(till, data.is_char_boundary(till));
    Ok(())
}

/// Whether folding `data` under `axis` would leave it unchanged. Does not
/// allocate.
pub fn str_is_invariant(axis: Axis, data: &str) -> bool {
    if is_invariant_ascii(axis, data.as_bytes()) {
        return true;
    }
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    data.chars()
        .all(|ch| !translate(axis, ch, &mut slot).is_modified(ch))
}

/// Folds UTF-16 code units `data` into `norm`. Unpaired surrogates are folded
/// as U+FFFD.
///
/// ## Returns
///
/// `true` if the folded text differs from `data`.
pub fn utf16_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &[u16],
) -> bool {
    fold_decoded_into(norm, slot, axis, char::decode_utf16(data.iter().copied()))
}

/// Folds the code unit range `from..till` of `data` into `norm`. A surrogate
/// pair cut by the range boundary is folded as U+FFFD.
///
/// ## Panics
///
/// If `from > till` or `till > data.len()`.
pub fn utf16_range_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &[u16],
    from: usize,
    till: usize,
) -> bool {
    utf16_to_invariant_into(norm, slot, axis, &data[from..till])
}

/// Folds UTF-16 code units `data`. Returns `None` if nothing changed.
pub fn utf16_to_invariant(axis: Axis, data: &[u16]) -> Option<String> {
    let mut norm = String::with_capacity(data.len());
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    utf16_to_invariant_into(&mut norm, &mut slot, axis, data).then_some(norm)
}

/// Folds the code unit range `from..till` of `data`. Returns `None` if
/// nothing changed.
///
/// ## Panics
///
/// If `from > till` or `till > data.len()`.
pub fn utf16_range_to_invariant(
    axis: Axis,
    data: &[u16],
    from: usize,
    till: usize,
) -> Option<String> {
    utf16_to_invariant(axis, &data[from..till])
}

/// Checked variant of [`utf16_range_to_invariant`].
pub fn try_utf16_range_to_invariant(
    axis: Axis,
    data: &[u16],
    from: usize,
    till: usize,
) -> Result<Option<String>> {
    verify_utf16_range(data, from, till).inspect_err(|e| {
        log::debug!(
            "rejected range {from}..{till} over {} code units: {e}",
            data.len()
        )
    })?;
    Ok(utf16_range_to_invariant(axis, data, from, till))
}

fn verify_utf16_range(data: &[u16], from: usize, till: usize) -> Result<()> {
    verify_arg!(from, from <= till);
    verify_arg!(till, till <= data.len());
    Ok(())
}

/// Folds possibly malformed UTF-8 bytes `data` into `norm`. Invalid sequences
/// are folded as U+FFFD.
///
/// ## Returns
///
/// `true` if the folded text differs from `data`.
pub fn utf8_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &[u8],
) -> bool {
    match simdutf8::basic::from_utf8(data) {
        Ok(valid) => str_to_invariant_into(norm, slot, axis, valid),
        Err(_) => {
            log::debug!("replacing malformed UTF-8 in {} bytes with U+FFFD", data.len());
            let fixed = String::from_utf8_lossy(data);
            str_to_invariant_into(norm, slot, axis, &fixed);
            true
        }
    }
}

/// Folds possibly malformed UTF-8 bytes `data`. Returns `None` if nothing
/// changed.
pub fn utf8_to_invariant(axis: Axis, data: &[u8]) -> Option<String> {
    if is_invariant_ascii(axis, data) {
        return None;
    }
    let mut norm = String::with_capacity(data.len());
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    utf8_to_invariant_into(&mut norm, &mut slot, axis, data).then_some(norm)
}

/// Folds UTF-32 code points `data` into `norm`. Values that are not Unicode
/// scalar values are folded as U+FFFD.
///
/// ## Returns
///
/// `true` if the folded text differs from `data`.
pub fn utf32_to_invariant_into(
    norm: &mut String,
    slot: &mut [char; MAX_REPLACEMENT_LEN],
    axis: Axis,
    data: &[u32],
) -> bool {
    fold_decoded_into(
        norm,
        slot,
        axis,
        widestring::decode_utf32(data.iter().copied()),
    )
}

/// Folds UTF-32 code points `data`. Returns `None` if nothing changed.
pub fn utf32_to_invariant(axis: Axis, data: &[u32]) -> Option<String> {
    let mut norm = String::with_capacity(data.len());
    let mut slot = ['\0'; MAX_REPLACEMENT_LEN];
    utf32_to_invariant_into(&mut norm, &mut slot, axis, data).then_some(norm)
}

/// Invariant folding for string slices.
pub trait InvariantTextExt {
    /// See [`str_to_invariant`].
    fn to_invariant(&self, axis: Axis) -> Cow<'_, str>;

    /// See [`str_to_invariant_into`].
    fn to_invariant_into(
        &self,
        norm: &mut String,
        slot: &mut [char; MAX_REPLACEMENT_LEN],
        axis: Axis,
    ) -> bool;

    /// See [`str_is_invariant`].
    fn is_invariant(&self, axis: Axis) -> bool;
}

impl InvariantTextExt for str {
    fn to_invariant(&self, axis: Axis) -> Cow<'_, str> {
        str_to_invariant(axis, self)
    }

    fn to_invariant_into(
        &self,
        norm: &mut String,
        slot: &mut [char; MAX_REPLACEMENT_LEN],
        axis: Axis,
    ) -> bool {
        str_to_invariant_into(norm, slot, axis, self)
    }

    fn is_invariant(&self, axis: Axis) -> bool {
        str_is_invariant(axis, self)
    }
}
