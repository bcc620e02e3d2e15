//! # Badge Link Library
//!
//! Drive a B1248 scrolling LED name badge over USB serial.
//!
//! This library encodes short text messages into the badge's fixed binary
//! command protocol and pushes the resulting frames out through a serial
//! byte sink, one frame at a time, with the settle delay the badge firmware
//! requires between commands.

pub mod b1248;
pub mod config;
pub mod error;
pub mod serial;
pub mod transmit;
