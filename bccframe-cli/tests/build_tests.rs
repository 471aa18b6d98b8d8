use std::fs;
use tempfile::tempdir;

use bccframe_cli::commands::build;
use bccframe_core::checksum::verify_frame;
use bccframe_core::constants::HEADER_SIZE;

#[test]
fn build_sample_frame_matches_golden_bytes() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("frame.bin");

    build::execute(
        /*msg_type*/ 1,
        /*sequence*/ 42,
        /*source*/ "DeviceA",
        /*dest*/ "DeviceB",
        /*payload_hex*/ &["aa".to_string(), "123456".to_string(), "ff".to_string()],
        /*payload_file*/ None,
        out_path.to_str().unwrap(),
        /*dump*/ false,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(
        hex::encode(&bytes),
        "012a4465766963654100000044657669636542000000aa123456ff0d"
    );
    verify_frame(&bytes).unwrap();
}

#[test]
fn build_appends_payload_file_after_hex_chunks() {
    let td = tempdir().unwrap();
    let payload_path = td.path().join("payload.bin");
    let out_path = td.path().join("frame.bin");

    fs::write(&payload_path, [0x10u8, 0x20, 0x30]).unwrap();

    build::execute(
        5,
        9,
        "A",
        "B",
        &["beef".to_string()],
        Some(payload_path.to_str().unwrap()),
        out_path.to_str().unwrap(),
        false,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    // header + 2 hex bytes + 3 file bytes + checksum
    assert_eq!(bytes.len(), HEADER_SIZE + 2 + 3 + 1);
    assert_eq!(&bytes[HEADER_SIZE..HEADER_SIZE + 5], &[0xBE, 0xEF, 0x10, 0x20, 0x30]);
    verify_frame(&bytes).unwrap();
}

#[test]
fn build_with_no_payload_emits_minimum_frame() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("frame.bin");

    build::execute(0, 0, "", "", &[], None, out_path.to_str().unwrap(), false).unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(bytes.len(), HEADER_SIZE + 1);
    verify_frame(&bytes).unwrap();
}

#[test]
fn build_rejects_invalid_hex_chunk() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("frame.bin");

    let result = build::execute(
        0,
        0,
        "",
        "",
        &["zz".to_string()],
        None,
        out_path.to_str().unwrap(),
        false,
    );

    assert!(result.is_err());
    assert!(!out_path.exists());
}

#[test]
fn build_rejects_missing_payload_file() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("frame.bin");
    let missing = td.path().join("nope.bin");

    let result = build::execute(
        0,
        0,
        "",
        "",
        &[],
        Some(missing.to_str().unwrap()),
        out_path.to_str().unwrap(),
        false,
    );

    assert!(result.is_err());
}
