//! # Message Transmission
//!
//! Pushes encoded frame sequences out through an injected byte sink.
//!
//! The protocol is write-only and fire-and-forget: nothing is ever read back
//! from the badge. The one timing requirement is the settle delay after each
//! frame: the firmware needs a quiescent gap to execute a command before it
//! will accept the next one.

use std::time::Duration;

use tracing::{debug, info};

use crate::b1248::encoder::encode_message;
use crate::b1248::protocol::Message;
use crate::error::{BadgeLinkError, Result};
use crate::serial::SerialPortIO;

/// Pause after every frame write, required by the badge firmware timing
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Sends messages to the badge, one frame at a time
///
/// The sink is injected at construction, so a transmitter can only exist for
/// an already-opened connection. Messages are fully encoded before the first
/// byte is written: an invalid message never causes a partial transmission.
pub struct Transmitter<S: SerialPortIO> {
    sink: S,
}

impl<S: SerialPortIO> Transmitter<S> {
    /// Create a transmitter over an opened byte sink
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Display text on the badge
    ///
    /// # Arguments
    ///
    /// * `text` - Text to display (truncated to 250 bytes)
    /// * `speed` - Scroll speed, 0-9
    /// * `mode` - Display mode, an uppercase ASCII letter
    ///
    /// # Errors
    ///
    /// Returns an encoding error before any write, or a
    /// [`BadgeLinkError::Transmission`] if a write fails mid-sequence.
    pub async fn send_text(&mut self, text: &str, speed: u8, mode: char) -> Result<()> {
        let message = Message::text(text, speed, mode)?;
        self.send_message(&message).await
    }

    /// Display glyph-mirrored text on the badge
    ///
    /// An empty input sends nothing at all, not even the begin/end markers.
    ///
    /// # Errors
    ///
    /// Same as [`Transmitter::send_text`], plus
    /// [`BadgeLinkError::UnsupportedMirrorChar`] for text outside `a`-`z`.
    pub async fn send_mirrored(&mut self, text: &str, speed: u8, mode: char) -> Result<()> {
        if text.is_empty() {
            debug!("Empty mirror text, nothing to transmit");
            return Ok(());
        }

        let message = Message::mirrored(text, speed, mode)?;
        self.send_message(&message).await
    }

    /// Blank the display
    ///
    /// Reuses the general text path with an empty payload (speed 1, mode `A`).
    pub async fn clear(&mut self) -> Result<()> {
        self.send_message(&Message::clear()).await
    }

    /// Encode and transmit one message as its complete frame sequence
    ///
    /// Frames go out strictly in order (begin, the four segments, end), each
    /// followed by [`SETTLE_DELAY`]. A mid-sequence I/O failure reports which
    /// frame it hit; the badge may be left mid-update, which the write-only
    /// protocol gives no way to detect.
    pub async fn send_message(&mut self, message: &Message) -> Result<()> {
        let frames = encode_message(message);
        let total = frames.len();

        for (index, frame) in frames.iter().enumerate() {
            self.write_frame(frame, index + 1, total).await?;
        }

        info!("Transmitted {} frames", total);
        Ok(())
    }

    async fn write_frame(&mut self, frame: &[u8], frame_no: usize, total: usize) -> Result<()> {
        self.sink
            .write_all(frame)
            .await
            .map_err(|source| BadgeLinkError::Transmission { frame: frame_no, total, source })?;
        self.sink
            .flush()
            .await
            .map_err(|source| BadgeLinkError::Transmission { frame: frame_no, total, source })?;

        debug!("Sent frame {}/{} ({} bytes)", frame_no, total, frame.len());

        tokio::time::sleep(SETTLE_DELAY).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b1248::protocol::TEXT_FRAME_LEN;
    use crate::serial::port_trait::mocks::MockSerialPort;

    fn transmitter() -> (Transmitter<MockSerialPort>, MockSerialPort) {
        let mock = MockSerialPort::new();
        (Transmitter::new(mock.clone()), mock)
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_text_writes_full_sequence() {
        let (mut tx, mock) = transmitter();

        tx.send_text("hello", 5, 'B').await.unwrap();

        let frames = mock.get_written_frames();
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[0], vec![0x00]);
        assert_eq!(frames[5], vec![0x02, 0x33, 0x01]);
        for frame in &frames[1..5] {
            assert_eq!(frame.len(), TEXT_FRAME_LEN);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_delay_after_every_frame() {
        let (mut tx, _mock) = transmitter();

        let start = tokio::time::Instant::now();
        tx.send_text("hi", 5, 'B').await.unwrap();

        // 6 frames, 200ms after each
        assert_eq!(start.elapsed(), SETTLE_DELAY * 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_sends_six_frames_through_text_path() {
        let (mut tx, mock) = transmitter();

        tx.clear().await.unwrap();

        let frames = mock.get_written_frames();
        assert_eq!(frames.len(), 6);
        // Header: speed '1', literal '1', mode 'A', length 0; rest padding
        assert_eq!(&frames[1][4..8], &[b'1', b'1', b'A', 0]);
        assert!(frames[1][8..68].iter().all(|&b| b == 0x00));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mirrored_empty_text_sends_nothing() {
        let (mut tx, mock) = transmitter();

        tx.send_mirrored("", 5, 'B').await.unwrap();

        assert!(mock.get_written_frames().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_plain_empty_text_still_sends_sequence() {
        let (mut tx, mock) = transmitter();

        tx.send_text("", 5, 'B').await.unwrap();

        assert_eq!(mock.get_written_frames().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_mirror_char_aborts_before_any_write() {
        let (mut tx, mock) = transmitter();

        let result = tx.send_mirrored("a5b", 5, 'B').await;

        match result {
            Err(BadgeLinkError::UnsupportedMirrorChar('5')) => {}
            other => panic!("expected UnsupportedMirrorChar, got {:?}", other),
        }
        assert!(mock.get_written_frames().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_speed_aborts_before_any_write() {
        let (mut tx, mock) = transmitter();

        assert!(tx.send_text("hi", 11, 'B').await.is_err());
        assert!(mock.get_written_frames().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_error_reports_frame_position() {
        let (mut tx, mock) = transmitter();
        mock.fail_after(2);

        let result = tx.send_text("hello", 5, 'B').await;

        match result {
            Err(BadgeLinkError::Transmission { frame, total, .. }) => {
                assert_eq!(frame, 3);
                assert_eq!(total, 6);
            }
            other => panic!("expected Transmission error, got {:?}", other),
        }
        // Nothing further was written after the failure
        assert_eq!(mock.get_written_frames().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_write_error_is_frame_one() {
        let (mut tx, mock) = transmitter();
        mock.set_write_error(std::io::ErrorKind::BrokenPipe);

        match tx.send_text("hello", 5, 'B').await {
            Err(BadgeLinkError::Transmission { frame, total, .. }) => {
                assert_eq!(frame, 1);
                assert_eq!(total, 6);
            }
            other => panic!("expected Transmission error, got {:?}", other),
        }
    }
}
