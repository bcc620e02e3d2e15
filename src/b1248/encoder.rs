//! # Frame Encoder
//!
//! Encodes a validated [`Message`] into the full B1248 command frame sequence.
//!
//! A message always becomes six frames, in order: the begin marker, four
//! text-segment frames at offsets 0/64/128/192, and the end marker. Segments
//! beyond the end of the header+text are all padding but are transmitted
//! anyway, since the device expects the complete span on every update.

use super::checksum::frame_checksum;
use super::protocol::{
    Message, COMMAND_BEGIN, COMMAND_END, COMMAND_TEXT, MAX_TEXT_LEN, SEGMENT_SIZE, SEGMENT_SPAN,
    TEXT_FRAME_LEN,
};

/// Encode a message into the complete, ordered frame sequence
///
/// # Arguments
///
/// * `message` - Validated message (text, speed, mode)
///
/// # Returns
///
/// * `Vec<Vec<u8>>` - Six frames: begin, segment@0, segment@64, segment@128,
///   segment@192, end
pub fn encode_message(message: &Message) -> Vec<Vec<u8>> {
    let body = encode_body(message);

    let mut frames = Vec::with_capacity(2 + SEGMENT_SPAN / SEGMENT_SIZE);
    frames.push(COMMAND_BEGIN.to_vec());

    for offset in (0..SEGMENT_SPAN).step_by(SEGMENT_SIZE) {
        let segment = if offset < body.len() {
            let end = (offset + SEGMENT_SIZE).min(body.len());
            &body[offset..end]
        } else {
            &[][..]
        };
        frames.push(encode_text_frame(offset as u8, segment));
    }

    frames.push(COMMAND_END.to_vec());
    frames
}

/// Build the header+text body that gets segmented across the four text frames
///
/// Layout: ASCII speed digit, literal `1`, mode letter, payload length byte,
/// then the payload itself. Truncation to [`MAX_TEXT_LEN`] happens before the
/// length byte is written, so the encoded length always matches the bytes
/// actually transmitted.
fn encode_body(message: &Message) -> Vec<u8> {
    let payload = message.payload();
    let text = &payload[..payload.len().min(MAX_TEXT_LEN)];

    let mut body = Vec::with_capacity(4 + text.len());
    body.push(b'0' + message.speed());
    body.push(b'1');
    body.push(message.mode() as u8);
    body.push(text.len() as u8);
    body.extend_from_slice(text);
    body
}

/// Build one text-segment frame
///
/// Frame layout: 3-byte text command prefix, 1-byte segment offset, the
/// segment zero-padded to 64 bytes, and a 1-byte checksum covering everything
/// after the first prefix byte.
fn encode_text_frame(offset: u8, segment: &[u8]) -> Vec<u8> {
    debug_assert!(segment.len() <= SEGMENT_SIZE);

    let mut frame = Vec::with_capacity(TEXT_FRAME_LEN);
    frame.extend_from_slice(&COMMAND_TEXT);
    frame.push(offset);
    frame.extend_from_slice(segment);
    frame.resize(COMMAND_TEXT.len() + 1 + SEGMENT_SIZE, 0x00);
    frame.push(frame_checksum(&frame[1..]));
    frame
}
