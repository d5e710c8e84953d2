//! Slug derivation for catalog names.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F).
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Turn free text into a URL-safe slug.
///
/// Lowercases, decomposes to NFD and drops the diacritic marks, then collapses
/// every run of characters outside `[a-z0-9]` into a single `-`. Leading and
/// trailing dashes are trimmed, so the result may be empty.
///
/// ```
/// assert_eq!(hcn_core::slugify("Codo 90° PVC 1/2\""), "codo-90-pvc-1-2");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .collect();

    let mut out = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }
    out
}
