use anyhow::{bail, Context, Result};
use bccframe_core::checksum::verify_frame;
use colored::*;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

pub fn execute(input: &str) -> Result<()> {
    info!("Verifying file: {}", input);

    // Read input file or stdin
    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    match verify_frame(&data) {
        Ok(()) => {
            println!(
                "{} Checksum valid ({} byte frame)",
                "✓".green(),
                data.len()
            );
            Ok(())
        }
        Err(err) => {
            warn!("Verification failed: {}", err);
            println!("{} {}", "✗".red(), err);
            bail!("Frame verification failed");
        }
    }
}
