//! Constants and layout for the bccframe wire format

use serde::{Deserialize, Serialize};

/// Size of the fixed frame header in bytes
/// 1 (message type) + 1 (sequence) + 10 (source) + 10 (dest) = 22 bytes
pub const HEADER_SIZE: usize = 22;

/// Size of the source and destination identifier fields in bytes
pub const ADDRESS_LEN: usize = 10;

/// Size of the trailing block check character in bytes
pub const BCC_SIZE: usize = 1;

/// Smallest possible finalized frame: bare header plus checksum
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + BCC_SIZE;

/// Byte offset of the message type field within the header
pub const MSG_TYPE_OFFSET: usize = 0;

/// Byte offset of the sequence number field within the header
pub const SEQUENCE_OFFSET: usize = 1;

/// Byte offset of the source identifier field within the header
pub const SOURCE_OFFSET: usize = 2;

/// Byte offset of the destination identifier field within the header
pub const DEST_OFFSET: usize = 12;

/// Application message kind carried in the first header byte
///
/// Stored as a raw discriminant so applications can define their own kinds;
/// the assembly logic stamps the byte but never interprets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageType(u8);

impl MessageType {
    /// Create a message type from its raw discriminant
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw discriminant byte
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl From<u8> for MessageType {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}
