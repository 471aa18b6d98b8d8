//! Block check character computation and frame verification

use crate::constants::{BCC_SIZE, MIN_FRAME_SIZE};
use crate::error::FrameError;

/// XOR-fold of `data`: the block check character over those bytes
///
/// The empty fold is 0, and folding a finalized frame including its
/// trailing checksum byte always yields 0.
pub fn bcc(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &byte| acc ^ byte)
}

/// Check the trailing block check character of a finalized frame
///
/// Recomputes the BCC over everything before the last byte and compares it
/// with the stored value.
pub fn verify_frame(frame: &[u8]) -> Result<(), FrameError> {
    if frame.len() < MIN_FRAME_SIZE {
        return Err(FrameError::FrameTooShort {
            expected: MIN_FRAME_SIZE,
            actual: frame.len(),
        });
    }

    let (body, trailer) = frame.split_at(frame.len() - BCC_SIZE);
    let computed = bcc(body);
    let stored = trailer[0];

    if stored != computed {
        #[cfg(feature = "logging")]
        tracing::warn!(
            "Checksum mismatch: stored {:#04x}, computed {:#04x}",
            stored,
            computed
        );
        return Err(FrameError::ChecksumMismatch { stored, computed });
    }

    Ok(())
}
