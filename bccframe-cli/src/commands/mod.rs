pub mod build;
pub mod inspect;
pub mod verify;

use bccframe_core::Packet;

/// Render the labeled header summary and full hex dump of a finalized frame
pub fn render_packet(packet: &Packet) -> String {
    match packet {
        Packet::Contiguous(frame) => {
            let mut out = String::new();
            out.push_str("Packet Header:\n");
            out.push_str(&format!("  Source      : {}\n", frame.source()));
            out.push_str(&format!("  Destination : {}\n", frame.dest()));
            out.push_str(&format!("  Sequence    : {}\n", frame.sequence()));
            out.push_str(&format!("  Checksum    : {}\n", frame.checksum()));
            out.push_str(&format!("  Message Type: {}\n", frame.message_type().as_u8()));
            out.push_str(&format!("Full frame ({} bytes):\n", frame.len()));
            out.push_str(&hex_dump(frame.as_bytes()));
            out.push('\n');
            out
        }
    }
}

/// Space-separated lowercase hex rendering of a byte region
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
