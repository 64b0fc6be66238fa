//! Donor name canonicalization.
//!
//! A donor is keyed by its canonical display name:
//! - Leading and trailing whitespace is dropped
//! - Runs of internal whitespace collapse to a single space
//! - Every run of letters starts uppercase and continues lowercase
//!
//! So `"  chris   stone "`, `"CHRIS STONE"` and `"Chris Stone"` all name the
//! same donor.

/// Canonicalize a donor name as typed at the console.
///
/// Canonicalization is idempotent. A name that contains no visible
/// characters canonicalizes to the empty string.
///
/// # Examples
///
/// ```
/// use mailroom_ledger::names::canonicalize_name;
///
/// assert_eq!(canonicalize_name("  chris   stone "), "Chris Stone");
/// assert_eq!(canonicalize_name("mary-jane o'neil"), "Mary-Jane O'Neil");
/// assert_eq!(canonicalize_name("   "), "");
/// ```
pub fn canonicalize_name(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&collapsed)
}

/// Returns `true` if `name` is already in canonical form.
pub fn is_canonical(name: &str) -> bool {
    canonicalize_name(name) == name
}

// A letter following another letter is lowercased, any other letter is
// uppercased. Apostrophes and hyphens therefore start a new word.
//
// Only the first char of a case mapping is kept: `ß` uppercases to `SS`,
// whose second letter a later pass would lowercase.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            let mapped = if prev_letter {
                ch.to_lowercase().next()
            } else {
                ch.to_uppercase().next()
            };
            out.push(mapped.unwrap_or(ch));
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}
