//! Display sort keys for buyer and item names.
//!
//! Names whose first non-space character is an ASCII letter come first,
//! compared case-insensitively; every other name follows in plain order.

use std::cmp::Ordering;

/// Sort key: `(group, key)` where group 0 holds ASCII-letter names.
pub fn display_key(name: &str) -> (u8, String) {
    match name.trim_start().chars().next() {
        Some(c) if c.is_ascii_alphabetic() => (0, name.to_lowercase()),
        _ => (1, name.to_string()),
    }
}

/// Compare two names by [`display_key`], falling back to the raw strings
/// so names equal under case folding still have a stable order.
pub fn compare_display(a: &str, b: &str) -> Ordering {
    display_key(a)
        .cmp(&display_key(b))
        .then_with(|| a.cmp(b))
}

/// Collect and sort names for display.
pub fn sort_for_display<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut names: Vec<String> = names.into_iter().collect();
    names.sort_by(|a, b| compare_display(a, b));
    names
}
