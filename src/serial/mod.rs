//! # Serial Communication Module
//!
//! Opens the badge's USB serial port. The B1248 enumerates as a generic
//! Prolific PL2303 virtual serial port (VID 067B, PID 2303) and listens at
//! a fixed 38,400 baud, 8N1, no flow control.

use crate::error::{BadgeLinkError, Result};
use tokio_serial::SerialPortBuilderExt;
use tracing::info;

pub mod port_trait;

pub use port_trait::{BadgePort, SerialPortIO};

/// Baud rate the B1248 firmware listens at
pub const BADGE_BAUD_RATE: u32 = 38_400;

/// Default device path of the PL2303 bridge
pub const DEFAULT_DEVICE_PATH: &str = "/dev/tty.usbserial";

/// Open the badge's serial port
///
/// # Arguments
///
/// * `path` - Device path (e.g., "/dev/tty.usbserial")
/// * `baud_rate` - Line rate, normally [`BADGE_BAUD_RATE`]
///
/// # Returns
///
/// * `Result<BadgePort>` - Opened port ready for frame writes
///
/// # Errors
///
/// Returns [`BadgeLinkError::Serial`] if the device cannot be opened (wrong
/// path, device busy, missing permissions). Callers must treat this as a hard
/// failure; there is no usable fallback sink.
pub fn open_badge_port(path: &str, baud_rate: u32) -> Result<BadgePort> {
    let port = tokio_serial::new(path, baud_rate)
        .data_bits(tokio_serial::DataBits::Eight)
        .parity(tokio_serial::Parity::None)
        .stop_bits(tokio_serial::StopBits::One)
        .flow_control(tokio_serial::FlowControl::None)
        .open_native_async()
        .map_err(|e| BadgeLinkError::Serial(format!("failed to open {}: {}", path, e)))?;

    info!("Opened badge serial port at {} ({} baud)", path, baud_rate);
    Ok(BadgePort::new(port))
}
