//! # Glyph Mirror Table
//!
//! Maps each lowercase letter to the glyph that, displayed normally, reads as
//! that letter's mirror image, so the badge stays legible when viewed through
//! a reflective surface.
//!
//! The table covers exactly `a`-`z`. Symmetric letters map to themselves,
//! `b`/`d` and `p`/`q` swap, and the remaining letters use glyphs from the
//! badge's extended character set. Anything outside `a`-`z` has no mirrored
//! counterpart and is rejected rather than passed through.

use crate::error::{BadgeLinkError, Result};

/// Look up the mirrored glyph for a lowercase letter
///
/// # Errors
///
/// Returns [`BadgeLinkError::UnsupportedMirrorChar`] for any character outside
/// `a`-`z` (uppercase, digits, punctuation, whitespace).
pub fn mirror_char(c: char) -> Result<char> {
    let mirrored = match c {
        'a' => 'ɒ',
        'b' => 'd',
        'c' => 'ɔ',
        'd' => 'b',
        'e' => 'ɘ',
        'f' => 'ʇ',
        'g' => 'ϱ',
        'h' => 'ʜ',
        'i' => 'i',
        'j' => 'į',
        'k' => 'ʞ',
        'l' => 'l',
        'm' => 'm',
        'n' => 'n',
        'o' => 'o',
        'p' => 'q',
        'q' => 'p',
        'r' => 'ɿ',
        's' => 'ƨ',
        't' => 'Ɉ',
        'u' => 'u',
        'v' => 'v',
        'w' => 'w',
        'x' => 'x',
        'y' => 'y',
        'z' => 'z',
        other => return Err(BadgeLinkError::UnsupportedMirrorChar(other)),
    };

    Ok(mirrored)
}

/// Mirror a whole string, character by character
///
/// Fails on the first unsupported character so that no partially mirrored
/// text can ever reach the encoder.
///
/// # Errors
///
/// Returns [`BadgeLinkError::UnsupportedMirrorChar`] if any character is
/// outside `a`-`z`.
pub fn mirror_text(text: &str) -> Result<String> {
    text.chars().map(mirror_char).collect()
}
