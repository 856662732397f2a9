//! `!text/<name>` reference expansion.
//!
//! A template is scanned left to right. Each `!text/` marker followed by a
//! run of `[a-z_0-9]` is replaced by the text for that name. Inserted text
//! can hold further markers, so the scan repeats until a pass makes no
//! substitution, up to [`MAX_PASSES`] passes.
//!
//! A backslash escapes the character after it: the pair is copied through
//! untouched and the escaped character never starts a marker. Escapes are
//! never removed here; unescaping belongs to whatever parses the result.

use std::borrow::Cow;

use keytexts_core::error::KeyTextsError;
use keytexts_tables::names::is_name_char;

/// Marker that introduces a reference.
pub const PREFIX_TEXT: &str = "!text/";

/// Scan passes allowed before expansion is declared runaway. The last pass
/// must come back clean, so at most `MAX_PASSES - 1` levels of nesting
/// resolve.
pub const MAX_PASSES: usize = 10;

const BACKSLASH: u8 = b'\\';

/// Expand every reference in `raw`, looking names up with `get_text`.
///
/// Returns `Ok(None)` when the input or the expansion is empty. Names that
/// `get_text` cannot supply expand to nothing. The only error is
/// [`KeyTextsError::TooManyIndirections`], which carries the text as it
/// stood when the limit was hit.
pub fn resolve_text_reference<'t, F>(
    raw: &str,
    mut get_text: F,
) -> Result<Option<String>, KeyTextsError>
where
    F: FnMut(&str) -> Option<&'t str>,
{
    if raw.is_empty() {
        return Ok(None);
    }

    let mut text = Cow::Borrowed(raw);
    let mut passes = 0;
    loop {
        if passes == MAX_PASSES {
            return Err(KeyTextsError::TooManyIndirections {
                text: text.into_owned(),
                passes,
            });
        }
        passes += 1;
        match expand_once(&text, &mut get_text) {
            Some(expanded) => text = Cow::Owned(expanded),
            None => break,
        }
    }

    Ok((!text.is_empty()).then(|| text.into_owned()))
}

/// One left-to-right pass. `None` means nothing was substituted and `text`
/// stands as is.
fn expand_once<'t, F>(text: &str, get_text: &mut F) -> Option<String>
where
    F: FnMut(&str) -> Option<&'t str>,
{
    if text.len() < PREFIX_TEXT.len() {
        return None;
    }

    let bytes = text.as_bytes();
    // Allocated on the first substitution only.
    let mut out: Option<String> = None;
    let mut pos = 0;
    while pos < bytes.len() {
        if text[pos..].starts_with(PREFIX_TEXT) {
            let buf = out.get_or_insert_with(|| {
                let mut buf = String::with_capacity(text.len());
                buf.push_str(&text[..pos]);
                buf
            });
            let start = pos + PREFIX_TEXT.len();
            let end = name_end(bytes, start);
            if let Some(value) = get_text(&text[start..end]) {
                buf.push_str(value);
            }
            pos = end;
        } else if bytes[pos] == BACKSLASH {
            let end = pos + 1 + char_len_at(text, pos + 1);
            if let Some(buf) = out.as_mut() {
                buf.push_str(&text[pos..end]);
            }
            pos = end;
        } else {
            let end = pos + char_len_at(text, pos);
            if let Some(buf) = out.as_mut() {
                buf.push_str(&text[pos..end]);
            }
            pos = end;
        }
    }
    out
}

/// End of the name starting at `start`: the first byte outside
/// `[a-z_0-9]`, or the end of input.
fn name_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&c| !is_name_char(c))
        .map_or(bytes.len(), |n| start + n)
}

/// UTF-8 length of the char at byte `pos`, 0 at end of input.
fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(0, char::len_utf8)
}
