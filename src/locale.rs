//! Locale-preferring text selection.
//!
//! API resources carry human-readable text as lists of language-tagged entries,
//! each resource nesting the text under its own field name. Every fetcher picks
//! its text through [`select_text`] so the preference order is applied in one
//! place.

use crate::config::LocalePreference;

/// Text substituted when no entry matches a preferred language.
pub const PLACEHOLDER: &str = "Description unavailable";

/// An entry in a language-tagged text list.
pub trait LocalizedEntry {
    fn language(&self) -> &str;
}

/// Returns the entry for the primary language, else the fallback language.
pub fn select_entry<'a, E: LocalizedEntry>(
    entries: &'a [E],
    preference: &LocalePreference,
) -> Option<&'a E> {
    preference
        .tags()
        .into_iter()
        .find_map(|tag| entries.iter().find(|entry| entry.language() == tag))
}

/// Picks the preferred-language text, or `placeholder` when neither language
/// is present or the extracted field is missing.
pub fn select_text_or<E, F>(
    entries: &[E],
    preference: &LocalePreference,
    extract: F,
    placeholder: &str,
) -> String
where
    E: LocalizedEntry,
    F: Fn(&E) -> Option<&str>,
{
    select_entry(entries, preference)
        .and_then(extract)
        .map(clean_text)
        .unwrap_or_else(|| placeholder.to_string())
}

/// [`select_text_or`] with the standard [`PLACEHOLDER`].
pub fn select_text<E, F>(entries: &[E], preference: &LocalePreference, extract: F) -> String
where
    E: LocalizedEntry,
    F: Fn(&E) -> Option<&str>,
{
    select_text_or(entries, preference, extract, PLACEHOLDER)
}

/// Game text is hard-wrapped with newlines and form feeds; flatten it to one line.
pub fn clean_text(text: &str) -> String {
    text.replace(['\n', '\u{000C}'], " ")
}
