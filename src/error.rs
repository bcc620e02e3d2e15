//! # Error Types
//!
//! Custom error types for Badge Link using `thiserror`.

use thiserror::Error;

/// Main error type for Badge Link
#[derive(Debug, Error)]
pub enum BadgeLinkError {
    /// No mirrored glyph exists for this character (only `a`-`z` are mirrorable)
    #[error("no mirrored glyph for character {0:?}")]
    UnsupportedMirrorChar(char),

    /// Character cannot be represented as a single protocol byte
    #[error("character {0:?} is outside the encodable byte range")]
    UnencodableChar(char),

    /// Scroll speed outside the single-digit range the header can carry
    #[error("invalid scroll speed {0} (must be 0-9)")]
    InvalidSpeed(u8),

    /// Display mode outside the badge's effect-letter range
    #[error("invalid display mode {0:?} (must be an uppercase ASCII letter)")]
    InvalidMode(char),

    /// Serial port errors
    #[error("serial port error: {0}")]
    Serial(String),

    /// Write failure partway through a frame sequence
    #[error("transmission failed at frame {frame} of {total}: {source}")]
    Transmission {
        frame: usize,
        total: usize,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Badge Link
pub type Result<T> = std::result::Result<T, BadgeLinkError>;
