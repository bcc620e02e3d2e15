//! # B1248 Protocol Constants and Types
//!
//! Core protocol definitions for the B1248 LED badge command protocol.

use crate::error::{BadgeLinkError, Result};

use super::mirror::mirror_text;

/// Begin-of-command-sequence frame (single zero byte)
pub const COMMAND_BEGIN: [u8; 1] = [0x00];

/// Text-segment command prefix
pub const COMMAND_TEXT: [u8; 3] = [0x02, 0x31, 0x06];

/// End-of-command-sequence frame
pub const COMMAND_END: [u8; 3] = [0x02, 0x33, 0x01];

/// Maximum text payload length in wire bytes
///
/// The payload length travels in a single header byte, so it can never
/// exceed 250 once the 4-byte header is accounted for within the 256-byte
/// segment span.
pub const MAX_TEXT_LEN: usize = 250;

/// Size of one zero-padded text segment
pub const SEGMENT_SIZE: usize = 64;

/// Total header+text span covered by the four segments (offsets 0/64/128/192)
pub const SEGMENT_SPAN: usize = 256;

/// Length of every text-segment frame:
/// prefix (3) + offset (1) + payload (64) + checksum (1)
pub const TEXT_FRAME_LEN: usize = 69;

/// Highest scroll speed the single header digit can carry
pub const SPEED_MAX: u8 = 9;

/// Default scroll speed
pub const DEFAULT_SPEED: u8 = 5;

/// Default display mode
pub const DEFAULT_MODE: char = 'B';

/// Speed used by the clear operation
pub const CLEAR_SPEED: u8 = 1;

/// Mode used by the clear operation
pub const CLEAR_MODE: char = 'A';

/// A validated message ready for frame encoding
///
/// Construction performs all validation up front: once a `Message` exists,
/// encoding it cannot fail, so no bytes ever hit the wire for a message that
/// would have to be aborted partway through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Text payload in wire bytes, not yet truncated
    payload: Vec<u8>,

    /// Scroll speed (0-9)
    speed: u8,

    /// Display mode letter
    mode: char,
}

impl Message {
    /// Create a message from plain text
    ///
    /// Each character must fit in a single wire byte (code point ≤ U+00FF).
    ///
    /// # Arguments
    ///
    /// * `text` - Text to display (truncated to 250 bytes at encode time)
    /// * `speed` - Scroll speed, 0-9
    /// * `mode` - Display mode, an uppercase ASCII letter
    ///
    /// # Errors
    ///
    /// Returns an error if the speed or mode is out of range, or if any
    /// character cannot be represented as one byte.
    pub fn text(text: &str, speed: u8, mode: char) -> Result<Self> {
        validate_speed(speed)?;
        validate_mode(mode)?;

        let payload = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).map_err(|_| BadgeLinkError::UnencodableChar(c)))
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { payload, speed, mode })
    }

    /// Create a message whose text is glyph-mirrored for reflected viewing
    ///
    /// The mirrored string is serialized as UTF-8: glyphs from the badge's
    /// extended character set occupy multiple wire bytes, which is how the
    /// firmware addresses them.
    ///
    /// # Errors
    ///
    /// Returns an error if the speed or mode is out of range, or if any
    /// character has no mirrored glyph (only `a`-`z` are mirrorable).
    pub fn mirrored(text: &str, speed: u8, mode: char) -> Result<Self> {
        validate_speed(speed)?;
        validate_mode(mode)?;

        let mirrored = mirror_text(text)?;

        Ok(Self {
            payload: mirrored.into_bytes(),
            speed,
            mode,
        })
    }

    /// The message that blanks the display
    ///
    /// Not a distinct wire command: an empty text with speed 1 and mode `A`,
    /// sent through the general text path.
    pub fn clear() -> Self {
        Self {
            payload: Vec::new(),
            speed: CLEAR_SPEED,
            mode: CLEAR_MODE,
        }
    }

    /// Text payload in wire bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Scroll speed (0-9)
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Display mode letter
    pub fn mode(&self) -> char {
        self.mode
    }
}

fn validate_speed(speed: u8) -> Result<()> {
    // A speed above 9 would print as two ASCII digits and shift every later
    // byte of the header, silently desyncing the device.
    if speed > SPEED_MAX {
        return Err(BadgeLinkError::InvalidSpeed(speed));
    }
    Ok(())
}

fn validate_mode(mode: char) -> Result<()> {
    if !mode.is_ascii_uppercase() {
        return Err(BadgeLinkError::InvalidMode(mode));
    }
    Ok(())
}
