//! # Bccframe Core
//!
//! Bounds-checked assembly of fixed-layout device frames with a trailing
//! XOR block check character.
//!
//! ## Modules
//!
//! - `constants`: Frame layout offsets, sizes, and the message type tag
//! - `cursor`: Bounds-checked positional access over byte regions
//! - `types`: Core types (Header, Packet, ContiguousFrame)
//! - `builder`: Frame assembly and finalization
//! - `checksum`: Block check character computation and verification

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod builder;
pub mod checksum;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use builder::FrameBuilder;
pub use constants::MessageType;
pub use cursor::{Cursor, FixedRecord};
pub use error::FrameError;
pub use types::{ContiguousFrame, Header, Packet};

/// Result type alias for bccframe operations
pub type Result<T> = core::result::Result<T, FrameError>;
