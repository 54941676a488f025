//! syncgraph CLI
//!
//! Command-line tools for syncgraph transit payloads.
//!
//! # Commands
//!
//! - `inspect` - Display the entry tree of a payload
//! - `convert` - Re-encode a payload between JSON and CBOR
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use commands::Encoding;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// syncgraph command-line payload tools.
#[derive(Parser)]
#[command(name = "syncgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the entry tree of a payload
    Inspect {
        /// Payload file
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Payload encoding
        #[arg(short, long, value_enum, default_value_t = Encoding::Json)]
        input: Encoding,
    },

    /// Re-encode a payload between JSON and CBOR
    Convert {
        /// Payload file to read
        input: PathBuf,

        /// File to write
        output: PathBuf,

        /// Encoding of the input file
        #[arg(long, value_enum)]
        from: Encoding,

        /// Encoding of the output file
        #[arg(long, value_enum)]
        to: Encoding,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Inspect {
            file,
            format,
            input,
        } => {
            commands::inspect::run(&file, input, &format)?;
        }
        Commands::Convert {
            input,
            output,
            from,
            to,
            pretty,
        } => {
            commands::convert::run(&input, &output, from, to, pretty)?;
        }
        Commands::Version => {
            println!("syncgraph CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("syncgraph core v{}", syncgraph_core::VERSION);
        }
    }

    Ok(())
}
