use anyhow::{Context, Result};
use bccframe_core::{Cursor, FrameBuilder, MessageType};
use std::fs;
use tracing::info;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    msg_type: u8,
    sequence: u8,
    source: &str,
    dest: &str,
    payload_hex: &[String],
    payload_file: Option<&str>,
    output: &str,
    dump: bool,
) -> Result<()> {
    info!("Assembling frame to {}", output);

    let mut builder = FrameBuilder::new()
        .message_type(MessageType::new(msg_type))
        .sequence(sequence)
        .source(source)
        .dest(dest);

    // Append hex chunks in the order they were given
    for chunk in payload_hex {
        let bytes = hex::decode(chunk)
            .with_context(|| format!("Invalid hex payload chunk: {}", chunk))?;
        let reader = Cursor::read_only(&bytes, 0, bytes.len());
        builder = builder.write_payload(&reader, bytes.len());
    }

    // Raw file bytes go in after the hex chunks
    if let Some(path) = payload_file {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read payload file: {}", path))?;
        let reader = Cursor::read_only(&bytes, 0, bytes.len());
        builder = builder.write_payload(&reader, bytes.len());
        info!("Appended {} payload bytes from {}", bytes.len(), path);
    }

    let packet = builder.finalize();

    fs::write(output, packet.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Wrote {} byte frame (checksum {:#04x})",
        packet.len(),
        packet.checksum()
    );

    if dump {
        print!("{}", super::render_packet(&packet));
    }

    Ok(())
}
