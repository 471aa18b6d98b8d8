use anyhow::{Context, Result};
use bccframe_core::{checksum::verify_frame, Packet};
use bytes::Bytes;
use colored::*;
use serde::Serialize;
use std::fs;
use tracing::info;

#[derive(Serialize)]
struct FrameSummary {
    message_type: u8,
    sequence: u8,
    source: String,
    dest: String,
    checksum: u8,
    frame_len: usize,
    payload_len: usize,
    checksum_valid: bool,
    frame_hex: String,
}

pub fn execute(input: &str, json: bool) -> Result<()> {
    info!("Inspecting frame file: {}", input);

    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    let packet = Packet::from_bytes(Bytes::from(data))?;
    let checksum_ok = verify_frame(packet.as_bytes()).is_ok();

    if json {
        let summary = match &packet {
            Packet::Contiguous(frame) => FrameSummary {
                message_type: frame.message_type().as_u8(),
                sequence: frame.sequence(),
                source: frame.source().to_string(),
                dest: frame.dest().to_string(),
                checksum: frame.checksum(),
                frame_len: frame.len(),
                payload_len: frame.payload().len(),
                checksum_valid: checksum_ok,
                frame_hex: hex::encode(frame.as_bytes()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print!("{}", super::render_packet(&packet));
    if checksum_ok {
        println!("{} Checksum valid", "✓".green());
    } else {
        println!("{} Checksum mismatch", "✗".red());
    }

    Ok(())
}
