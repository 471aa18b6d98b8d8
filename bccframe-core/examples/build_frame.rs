//! Basic frame assembly example

use bccframe_core::cursor::FixedRecord;
use bccframe_core::{Cursor, FrameBuilder, Header, MessageType, Packet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Bccframe Basic Assembly Example\n");

    // Payload bytes staged in an external region, pulled in through a
    // read-only cursor
    let staged: Vec<u8> = vec![0x12, 0x34, 0x56];
    let reader = Cursor::read_only(&staged, 0, staged.len());

    let packet = FrameBuilder::new()
        .message_type(MessageType::new(1))
        .sequence(42)
        .source("DeviceA")
        .dest("DeviceB")
        .write_u8(0xAA)
        .write_payload(&reader, staged.len())
        .write_u8(0xFF)
        .finalize();

    match &packet {
        Packet::Contiguous(frame) => {
            println!("Packet Header:");
            println!("  Source      : {}", frame.source());
            println!("  Destination : {}", frame.dest());
            println!("  Sequence    : {}", frame.sequence());
            println!("  Checksum    : {}", frame.checksum());
            println!("  Message Type: {}", frame.message_type().as_u8());
            println!("Full frame ({} bytes):", frame.len());
            let dump: Vec<String> = frame
                .as_bytes()
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect();
            println!("{}\n", dump.join(" "));
        }
    }

    // Headers can also be stamped straight into a raw region through a
    // write cursor, then lifted back out through a read cursor
    let mut header = Header::new(MessageType::new(2), 7);
    header.set_source("Relay");
    header.set_dest("Hub");

    let mut region = vec![0u8; Header::SIZE];
    Cursor::read_write(&mut region, 0, Header::SIZE).write_record(&header);

    let mut lifted = Header::default();
    Cursor::read_only(&region, 0, Header::SIZE).read_record(&mut lifted);
    println!(
        "Stamped and lifted a header: {} -> {} (seq {})",
        lifted.source_text(),
        lifted.dest_text(),
        lifted.sequence
    );

    std::fs::write("example_frame.bin", packet.as_bytes())?;
    println!("\nWrote {} bytes to example_frame.bin", packet.len());
    println!("Use 'bccframe verify --input example_frame.bin' to check it");

    Ok(())
}
