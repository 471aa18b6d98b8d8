//! Core types for bccframe packets

use crate::constants::{
    MessageType, ADDRESS_LEN, BCC_SIZE, DEST_OFFSET, HEADER_SIZE, MIN_FRAME_SIZE, MSG_TYPE_OFFSET,
    SEQUENCE_OFFSET, SOURCE_OFFSET,
};
use crate::cursor::{Cursor, FixedRecord};
use crate::error::FrameError;
use alloc::string::String;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Copy at most [`ADDRESS_LEN`] bytes of `text` into a zero-filled field
///
/// Longer texts are cut at the field width; shorter ones leave the rest of
/// the field as padding zeros.
pub(crate) fn pack_address(text: &str) -> [u8; ADDRESS_LEN] {
    let mut field = [0u8; ADDRESS_LEN];
    let bytes = text.as_bytes();
    let take = bytes.len().min(ADDRESS_LEN);
    field[..take].copy_from_slice(&bytes[..take]);
    field
}

/// Render a null-padded identifier field back to text, stopping at the
/// first padding byte
fn unpack_address(field: &[u8; ADDRESS_LEN]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(ADDRESS_LEN);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Fixed frame header occupying the first [`HEADER_SIZE`] bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Application message kind
    pub message_type: MessageType,

    /// Per-packet sequence number
    pub sequence: u8,

    /// Sender identifier, null-padded to [`ADDRESS_LEN`] bytes
    pub source: [u8; ADDRESS_LEN],

    /// Receiver identifier, null-padded to [`ADDRESS_LEN`] bytes
    pub dest: [u8; ADDRESS_LEN],
}

impl Header {
    /// Create a new header with zeroed identifier fields
    pub fn new(message_type: MessageType, sequence: u8) -> Self {
        Self {
            message_type,
            sequence,
            source: [0; ADDRESS_LEN],
            dest: [0; ADDRESS_LEN],
        }
    }

    /// Set the source identifier, truncating to [`ADDRESS_LEN`] bytes
    pub fn set_source(&mut self, text: &str) {
        self.source = pack_address(text);
    }

    /// Set the destination identifier, truncating to [`ADDRESS_LEN`] bytes
    pub fn set_dest(&mut self, text: &str) {
        self.dest = pack_address(text);
    }

    /// Source identifier as text, trimmed at the first padding byte
    pub fn source_text(&self) -> String {
        unpack_address(&self.source)
    }

    /// Destination identifier as text, trimmed at the first padding byte
    pub fn dest_text(&self) -> String {
        unpack_address(&self.dest)
    }
}

impl FixedRecord for Header {
    const SIZE: usize = HEADER_SIZE;

    fn encode_into(&self, buf: &mut [u8]) {
        buf[MSG_TYPE_OFFSET] = self.message_type.as_u8();
        buf[SEQUENCE_OFFSET] = self.sequence;
        buf[SOURCE_OFFSET..SOURCE_OFFSET + ADDRESS_LEN].copy_from_slice(&self.source);
        buf[DEST_OFFSET..DEST_OFFSET + ADDRESS_LEN].copy_from_slice(&self.dest);
    }

    fn decode_from(buf: &[u8]) -> Self {
        let mut source = [0u8; ADDRESS_LEN];
        source.copy_from_slice(&buf[SOURCE_OFFSET..SOURCE_OFFSET + ADDRESS_LEN]);
        let mut dest = [0u8; ADDRESS_LEN];
        dest.copy_from_slice(&buf[DEST_OFFSET..DEST_OFFSET + ADDRESS_LEN]);
        Self {
            message_type: MessageType::new(buf[MSG_TYPE_OFFSET]),
            sequence: buf[SEQUENCE_OFFSET],
            source,
            dest,
        }
    }
}

/// A finalized frame held in one contiguous allocation
///
/// Produced by [`FrameBuilder::finalize`](crate::builder::FrameBuilder::finalize);
/// the buffer is laid out as header, payload, checksum and never changes
/// again. Identifier accessors return the text handed to the builder, even
/// when the wire fields hold a truncated copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContiguousFrame {
    message_type: MessageType,
    sequence: u8,
    source: String,
    dest: String,
    checksum: u8,
    frame: Bytes,
}

impl ContiguousFrame {
    pub(crate) fn new(
        message_type: MessageType,
        sequence: u8,
        source: String,
        dest: String,
        checksum: u8,
        frame: Bytes,
    ) -> Self {
        Self {
            message_type,
            sequence,
            source,
            dest,
            checksum,
            frame,
        }
    }

    /// Re-attach accessors to a stored finalized frame
    ///
    /// Header fields are lifted back out of the leading bytes, so the
    /// identifiers come back in their truncated wire form. Payload bytes
    /// stay opaque.
    pub fn from_bytes(frame: Bytes) -> Result<Self, FrameError> {
        if frame.len() < MIN_FRAME_SIZE {
            return Err(FrameError::FrameTooShort {
                expected: MIN_FRAME_SIZE,
                actual: frame.len(),
            });
        }

        let mut header = Header::default();
        Cursor::read_only(&frame, 0, frame.len()).read_record(&mut header);
        let checksum = frame[frame.len() - BCC_SIZE];

        Ok(Self {
            message_type: header.message_type,
            sequence: header.sequence,
            source: header.source_text(),
            dest: header.dest_text(),
            checksum,
            frame,
        })
    }

    /// Message kind stamped into the header
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Sequence number stamped into the header
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Source identifier as given to the builder
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destination identifier as given to the builder
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// The appended block check character
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// The complete finalized frame: header, payload, checksum
    pub fn as_bytes(&self) -> &[u8] {
        &self.frame
    }

    /// Total frame length in bytes
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Whether the frame holds no bytes (a finalized frame never does)
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// The payload region between header and checksum
    pub fn payload(&self) -> &[u8] {
        &self.frame[HEADER_SIZE..self.frame.len() - BCC_SIZE]
    }

    /// Header fields lifted back out of the leading frame bytes
    pub fn header(&self) -> Header {
        let mut header = Header::default();
        Cursor::read_only(&self.frame, 0, self.frame.len()).read_record(&mut header);
        header
    }
}

/// Closed set of frame kinds, tagged by how the frame is laid out
///
/// All kinds share the header, payload, checksum wire shape; presentation
/// code matches on the tag instead of going through dynamic dispatch.
/// Today there is exactly one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    /// Frame assembled in a single contiguous allocation
    Contiguous(ContiguousFrame),
}

impl Packet {
    /// Re-attach accessors to a stored finalized frame
    ///
    /// See [`ContiguousFrame::from_bytes`] for what survives the round trip.
    pub fn from_bytes(frame: Bytes) -> Result<Self, FrameError> {
        ContiguousFrame::from_bytes(frame).map(Packet::Contiguous)
    }

    /// Message kind stamped into the header
    pub fn message_type(&self) -> MessageType {
        match self {
            Packet::Contiguous(frame) => frame.message_type(),
        }
    }

    /// Sequence number stamped into the header
    pub fn sequence(&self) -> u8 {
        match self {
            Packet::Contiguous(frame) => frame.sequence(),
        }
    }

    /// Source identifier as given to the builder
    pub fn source(&self) -> &str {
        match self {
            Packet::Contiguous(frame) => frame.source(),
        }
    }

    /// Destination identifier as given to the builder
    pub fn dest(&self) -> &str {
        match self {
            Packet::Contiguous(frame) => frame.dest(),
        }
    }

    /// The appended block check character
    pub fn checksum(&self) -> u8 {
        match self {
            Packet::Contiguous(frame) => frame.checksum(),
        }
    }

    /// The complete finalized frame: header, payload, checksum
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Packet::Contiguous(frame) => frame.as_bytes(),
        }
    }

    /// Total frame length in bytes
    pub fn len(&self) -> usize {
        match self {
            Packet::Contiguous(frame) => frame.len(),
        }
    }

    /// Whether the frame holds no bytes (a finalized frame never does)
    pub fn is_empty(&self) -> bool {
        match self {
            Packet::Contiguous(frame) => frame.is_empty(),
        }
    }

    /// The payload region between header and checksum
    pub fn payload(&self) -> &[u8] {
        match self {
            Packet::Contiguous(frame) => frame.payload(),
        }
    }

    /// Header fields lifted back out of the leading frame bytes
    pub fn header(&self) -> Header {
        match self {
            Packet::Contiguous(frame) => frame.header(),
        }
    }
}
