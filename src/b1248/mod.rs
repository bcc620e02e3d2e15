//! # B1248 Protocol Module
//!
//! Implementation of the B1248 LED badge command protocol.
//!
//! This module handles:
//! - Message validation (scroll speed, display mode, encodable text)
//! - Command frame encoding (begin marker, 64-byte text segments, end marker)
//! - Sum-mod-256 checksum calculation
//! - Glyph mirroring for viewing the badge through a reflective surface

pub mod checksum;
pub mod encoder;
pub mod mirror;
pub mod protocol;
