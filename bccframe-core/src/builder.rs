//! Frame assembly and finalization

use crate::checksum::bcc;
use crate::constants::{MessageType, HEADER_SIZE};
use crate::cursor::{Cursor, FixedRecord};
use crate::error::FrameError;
use crate::types::{ContiguousFrame, Header, Packet};
use alloc::string::{String, ToString};
use bytes::{BufMut, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Builder for assembling one frame
///
/// The buffer starts as a zero-filled header region and grows with payload
/// appends. Header setters overwrite their field in place, so they can run
/// in any order, any number of times; payload bytes keep their append
/// order. Every mutator takes the builder by value and hands it back, so
/// assembly reads as one chain ending in [`finalize`](Self::finalize).
pub struct FrameBuilder {
    frame: BytesMut,
    header: Header,
    source: String,
    dest: String,
}

impl FrameBuilder {
    /// Create a builder with a zeroed header and no payload
    pub fn new() -> Self {
        Self {
            frame: BytesMut::zeroed(HEADER_SIZE),
            header: Header::default(),
            source: String::new(),
            dest: String::new(),
        }
    }

    /// Create a builder with the message type already stamped
    pub fn with_message_type(kind: MessageType) -> Self {
        Self::new().message_type(kind)
    }

    /// Set the message type byte
    pub fn message_type(mut self, kind: MessageType) -> Self {
        self.header.message_type = kind;
        self.restamp_header();
        self
    }

    /// Set the sequence number byte
    pub fn sequence(mut self, seq: u8) -> Self {
        self.header.sequence = seq;
        self.restamp_header();
        self
    }

    /// Set the source identifier
    ///
    /// The wire field is zero-filled and takes at most its width in bytes;
    /// the untruncated text is kept for the finalized frame's accessors.
    pub fn source(mut self, text: &str) -> Self {
        self.header.set_source(text);
        self.source = text.to_string();
        self.restamp_header();
        self
    }

    /// Set the destination identifier, with the same truncation rule as
    /// [`source`](Self::source)
    pub fn dest(mut self, text: &str) -> Self {
        self.header.set_dest(text);
        self.dest = text.to_string();
        self.restamp_header();
        self
    }

    /// Append one payload byte to the end of the frame
    pub fn write_u8(mut self, value: u8) -> Self {
        self.frame.put_u8(value);
        self
    }

    /// Append `len` payload bytes read from `source`'s current position
    ///
    /// The append happens only if the cursor is readable and can supply all
    /// `len` bytes at once; otherwise the frame stays unchanged. The cursor
    /// is only borrowed and does not advance.
    pub fn write_payload(mut self, source: &Cursor<'_>, len: usize) -> Self {
        let _ = self.try_write_payload(source, len);
        self
    }

    /// Checked variant of [`write_payload`](Self::write_payload)
    ///
    /// Reports the shortfall the silent path would have swallowed.
    pub fn try_write_payload(
        &mut self,
        source: &Cursor<'_>,
        len: usize,
    ) -> Result<(), FrameError> {
        match source.peek(len) {
            Some(bytes) => {
                self.frame.put_slice(bytes);
                Ok(())
            }
            None => {
                #[cfg(feature = "logging")]
                warn!(
                    "Payload append skipped: requested {} bytes, cursor offers {}",
                    len,
                    source.remaining()
                );
                Err(FrameError::PayloadUnavailable {
                    requested: len,
                    available: source.remaining(),
                })
            }
        }
    }

    /// Parse payload bytes back out of `source`
    ///
    /// No current frame kind implements payload parsing, so this always
    /// reports [`FrameError::ReadNotSupported`] and leaves the builder
    /// untouched.
    pub fn read_payload(&mut self, _source: &Cursor<'_>) -> Result<(), FrameError> {
        #[cfg(feature = "logging")]
        warn!("Payload read-back requested; no frame kind supports it");
        Err(FrameError::ReadNotSupported)
    }

    /// Header fields as currently stamped, identifiers in wire form
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Bytes assembled so far: header region plus appended payload
    pub fn as_bytes(&self) -> &[u8] {
        &self.frame
    }

    /// Current length: header size plus payload appended so far
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Whether the buffer holds no bytes (it always holds the header)
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Compute the block check character over everything assembled so far,
    /// append it, and freeze the buffer into a [`Packet`]
    ///
    /// Finalizing consumes the builder, so the checksum byte is always the
    /// last write: a finished frame cannot grow or be re-finalized.
    pub fn finalize(mut self) -> Packet {
        let checksum = bcc(&self.frame);
        self.frame.put_u8(checksum);

        #[cfg(feature = "logging")]
        debug!(
            "Finalized frame: {} bytes, checksum {:#04x}",
            self.frame.len(),
            checksum
        );

        Packet::Contiguous(ContiguousFrame::new(
            self.header.message_type,
            self.header.sequence,
            self.source,
            self.dest,
            checksum,
            self.frame.freeze(),
        ))
    }

    fn restamp_header(&mut self) {
        self.header.encode_into(&mut self.frame[..HEADER_SIZE]);
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
