//! Fuzzing placeholder for bccframe-core assembly and verification
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_build

pub fn fuzz_cursor(data: &[u8]) {
    use bccframe_core::Cursor;

    // Walk the region with mixed reads and advances - should never panic
    let mut value = 0u8;
    let mut cursor = Cursor::read_only(data, 0, data.len());
    for step in data.iter().copied().take(64) {
        cursor = cursor.read_u8(&mut value).advance(step as usize);
    }
    let _ = cursor.peek(16);
}

pub fn fuzz_build(data: &[u8]) {
    use bccframe_core::{checksum::verify_frame, Cursor, FrameBuilder};

    let reader = Cursor::read_only(data, 0, data.len());
    let packet = FrameBuilder::new()
        .sequence(data.first().copied().unwrap_or(0))
        .write_payload(&reader, data.len())
        .finalize();

    // A finalized frame always carries a matching checksum
    assert!(verify_frame(packet.as_bytes()).is_ok());
}

pub fn fuzz_verify(data: &[u8]) {
    use bccframe_core::checksum::verify_frame;

    // Try to verify - should never panic
    let _ = verify_frame(data);
}

pub fn fuzz_reload(data: &[u8]) {
    use bccframe_core::Packet;
    use bytes::Bytes;

    // Try to reload arbitrary bytes as a packet - should never panic
    let _ = Packet::from_bytes(Bytes::copy_from_slice(data));
}
