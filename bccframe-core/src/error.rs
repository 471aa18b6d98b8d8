//! Error types for bccframe operations

/// Errors reported by checked bccframe operations
///
/// The assembly path never fails: cursor and builder writes degrade to
/// silent no-ops when they fall out of bounds. These variants surface only
/// from the opt-in checked APIs and the verification helpers.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Payload read-back requested, but no frame kind implements parsing
    #[cfg_attr(feature = "std", error("Payload read-back is not supported"))]
    ReadNotSupported,

    /// The source cursor cannot supply the requested number of bytes
    #[cfg_attr(
        feature = "std",
        error("Payload unavailable: requested {requested} bytes, cursor offers {available}")
    )]
    PayloadUnavailable {
        /// The number of bytes the append asked for.
        requested: usize,
        /// The number of bytes the cursor could actually supply.
        available: usize,
    },

    /// Incomplete frame - not enough bytes for header plus checksum
    #[cfg_attr(
        feature = "std",
        error("Frame too short: expected at least {expected} bytes, got {actual}")
    )]
    FrameTooShort {
        /// The minimum number of bytes expected.
        expected: usize,
        /// The number of bytes actually found.
        actual: usize,
    },

    /// Checksum mismatch
    #[cfg_attr(
        feature = "std",
        error("Checksum mismatch: stored {stored:#04x}, computed {computed:#04x}")
    )]
    ChecksumMismatch {
        /// The checksum byte stored at the end of the frame.
        stored: u8,
        /// The checksum recomputed over the frame body.
        computed: u8,
    },
}
