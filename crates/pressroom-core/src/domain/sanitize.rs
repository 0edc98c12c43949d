//! Bidi control stripping for rich-text content.
//!
//! Directional override characters pasted into the editor can flip the visual
//! order of everything after them. The store removes them on both the read
//! and write paths so persisted content never carries them. No other HTML
//! sanitization happens here.

/// True for the bidi control characters the store strips:
/// U+202A..=U+202E (LRE/RLE/PDF/LRO/RLO) plus U+200E/U+200F (LRM/RLM).
fn is_bidi_control(c: char) -> bool {
    matches!(c, '\u{202A}'..='\u{202E}' | '\u{200E}' | '\u{200F}')
}

/// Remove every bidi control character from `input`.
pub fn strip_bidi(input: &str) -> String {
    if !input.chars().any(is_bidi_control) {
        return input.to_string();
    }
    input.chars().filter(|c| !is_bidi_control(*c)).collect()
}
