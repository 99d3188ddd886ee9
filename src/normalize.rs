//! Venue-name normalization.
//!
//! Raw venue names arrive with arbitrary casing and punctuation. Before two
//! names are compared they are reduced to a normalized key: lower-cased,
//! stripped of everything outside `[a-z0-9 ]`, with whitespace runs collapsed
//! to a single space. The key is a pure function of the input and is never
//! persisted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM_SPACE: Regex = Regex::new(r"[^a-z0-9 ]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Reduce a raw venue name to its normalized comparison key.
///
/// The result is trimmed, lower-case, contains only `[a-z0-9 ]`, and has no
/// consecutive spaces. Normalization is idempotent: applying it to an already
/// normalized key returns the key unchanged. The empty string normalizes to
/// the empty string.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, " ");
    let stripped = NON_ALNUM_SPACE.replace_all(&collapsed, "");
    // Stripping punctuation can leave new runs ("Café  Lumière" keeps two
    // spaces once the accented characters go), so collapse and trim again.
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
