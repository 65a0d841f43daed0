//! ASCII case-insensitive helpers for taking apart statement text.
//!
//! Lowercasing only ASCII keeps byte offsets identical between the original and lowered text,
//! and ASCII needles can only match on char boundaries.

pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// Splits on the first occurrence of `separator`
pub(crate) fn split_once_ignore_case<'a>(
    text: &'a str,
    separator: &str,
) -> Option<(&'a str, &'a str)> {
    let index = find_ignore_case(text, separator)?;
    Some((&text[..index], &text[index + separator.len()..]))
}

pub(crate) fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

/// Replaces every occurrence of `word`, including occurrences inside longer words
pub(crate) fn replace_ignore_case(text: &str, word: &str, with: &str) -> String {
    let mut replaced = String::with_capacity(text.len());
    let mut rest = text;
    while let Some((before, after)) = split_once_ignore_case(rest, word) {
        replaced.push_str(before);
        replaced.push_str(with);
        rest = after;
    }
    replaced.push_str(rest);
    replaced
}

/// Gets the trimmed text following the first occurrence of `word` preceded by a space and
/// followed by a space or the end of the text.
pub(crate) fn after_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let lowered = text.to_ascii_lowercase();
    let bytes = lowered.as_bytes();
    let needle = format!(" {}", word.to_ascii_lowercase());
    lowered.match_indices(&needle).find_map(|(index, matched)| {
        let end = index + matched.len();
        (end == bytes.len() || bytes[end] == b' ').then(|| text[end..].trim())
    })
}

pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
