mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rostra",
    version,
    about = "Crew roster PDF parsing and pay-period audit tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a roster PDF into structured duty days (without auditing)
    Parse {
        /// Path to roster PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the capture envelope to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Audit a roster (PDF or captured JSON) against a pay period
    Audit {
        /// Path to roster PDF or capture JSON file
        input_file: PathBuf,

        /// Fortnight start date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        fortnight_start: String,

        /// Actual pay date (YYYY-MM-DD), to flag pay-run anomalies
        #[arg(short, long, value_name = "DATE")]
        pay_date: Option<String>,

        /// Hotel code treated as own accommodation on layover days
        #[arg(long, default_value = "BNEO", value_name = "CODE")]
        own_accom_hotel: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show duty days outside both pay windows too
        #[arg(long)]
        all: bool,
    },
    /// Show pay-period window arithmetic for a fortnight start or pay date
    Windows {
        /// Fortnight start date (YYYY-MM-DD)
        #[arg(short, long, value_name = "DATE")]
        fortnight_start: Option<String>,

        /// Pay date (YYYY-MM-DD); alone, suggests a fortnight start
        #[arg(short, long, value_name = "DATE")]
        pay_date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Audit {
            input_file,
            fortnight_start,
            pay_date,
            own_accom_hotel,
            output,
            all,
        } => commands::audit::run(
            input_file,
            &fortnight_start,
            pay_date.as_deref(),
            own_accom_hotel,
            &output,
            all,
        ),
        Commands::Windows {
            fortnight_start,
            pay_date,
        } => commands::windows::run(fortnight_start.as_deref(), pay_date.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
