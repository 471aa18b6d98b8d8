mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bccframe")]
#[command(about = "Bccframe - Fixed-layout frame assembly with BCC checksums", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a finalized frame from header fields and payload bytes
    Build {
        /// Message type discriminant for the header
        #[arg(long, default_value = "0")]
        msg_type: u8,

        /// Sequence number for the header
        #[arg(long, default_value = "0")]
        sequence: u8,

        /// Source identifier (at most 10 bytes land on the wire)
        #[arg(long, default_value = "")]
        source: String,

        /// Destination identifier (at most 10 bytes land on the wire)
        #[arg(long, default_value = "")]
        dest: String,

        /// Hex payload chunk, appended in order (repeatable)
        #[arg(long = "payload", value_name = "HEX")]
        payload: Vec<String>,

        /// File whose raw bytes are appended after the hex chunks
        #[arg(long)]
        payload_file: Option<String>,

        /// Output file for the finalized frame
        #[arg(short, long)]
        output: String,

        /// Print the assembled packet summary
        #[arg(long)]
        dump: bool,
    },

    /// Show header fields and checksum of a stored frame
    Inspect {
        /// Input frame file
        #[arg(short, long)]
        input: String,

        /// Emit a JSON summary instead of the labeled dump
        #[arg(long)]
        json: bool,
    },

    /// Recompute a stored frame's checksum and compare
    Verify {
        /// Input file to verify, or - for stdin
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Build {
            msg_type,
            sequence,
            source,
            dest,
            payload,
            payload_file,
            output,
            dump,
        } => commands::build::execute(
            msg_type,
            sequence,
            &source,
            &dest,
            &payload,
            payload_file.as_deref(),
            &output,
            dump,
        ),

        Commands::Inspect { input, json } => commands::inspect::execute(&input, json),

        Commands::Verify { input } => commands::verify::execute(&input),
    }
}
