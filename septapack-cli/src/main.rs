mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::Format;

#[derive(Parser)]
#[command(name = "septapack")]
#[command(about = "Septapack - 7-bit alphabet transcoder for short-message payloads", long_about = None)]
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
    /// Encode text into packed septets
    Encode {
        /// Input text file ('-' for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file for the packed octets (hex on stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Representation used for the output file
        #[arg(long, value_enum, default_value_t = Format::Raw)]
        format: Format,
    },

    /// Decode packed septets back into text
    Decode {
        /// Input file with packed octets ('-' for stdin)
        #[arg(short, long)]
        input: String,

        /// Output text file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Representation of the input file
        #[arg(long, value_enum, default_value_t = Format::Raw)]
        format: Format,

        /// Decode exactly this many septets, trimming the block fill
        #[arg(long)]
        septets: Option<usize>,
    },

    /// Run the built-in known-answer fixtures
    Selftest {
        /// Output JSON file for the full report
        #[arg(short, long)]
        output: Option<String>,
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
        Commands::Encode {
            input,
            output,
            format,
        } => commands::encode::execute(&input, output.as_deref(), format),

        Commands::Decode {
            input,
            output,
            format,
            septets,
        } => commands::decode::execute(&input, output.as_deref(), format, septets),

        Commands::Selftest { output } => commands::selftest::execute(output.as_deref()),
    }
}
