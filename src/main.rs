//! CLI entry point for the bikeshare statistics tool.
//!
//! Provides subcommands for a one-shot analysis of a city, an interactive
//! exploration session, and listing the supported cities.

use anyhow::Result;
use bikeshare_stats::{
    analyzers::analyzer::analyze,
    city::City,
    filter::{FilterSpec, filter, parse_day_filter, parse_month_filter},
    loader::load,
    output::{TextReport, preview, print_pretty, to_json},
    prompt::explore,
    source::CsvDirSource,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, global = true, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics for one city
    Analyze {
        /// City name: chicago, "new york city" or washington
        #[arg(short, long)]
        city: String,

        /// Full month name, or "all"
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Full weekday name, or "all"
        #[arg(short = 'w', long, default_value = "all")]
        day: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Print the first N matching trips before the statistics
        #[arg(short, long, default_value_t = 0)]
        preview: usize,
    },
    /// Interactive session: pick a city and filters, page through rows, see statistics
    Explore,
    /// List the supported cities and where their data is expected
    Cities,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_stats.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_stats.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let source = CsvDirSource::new(&cli.data_dir);

    match cli.command {
        Commands::Analyze {
            city,
            month,
            day,
            format,
            preview: preview_rows,
        } => {
            let spec = FilterSpec::new(city.parse()?)
                .with_month(parse_month_filter(&month)?)
                .with_day(parse_day_filter(&day)?);
            info!(filter = %spec, "Starting analysis");

            let dataset = load(&source, spec.city)?;
            let filtered = filter(&dataset, &spec);
            if filtered.is_empty() {
                warn!(filter = %spec, "No trips match the filter");
            }

            if preview_rows > 0 {
                if let Some(rows) = preview(&filtered, 0, preview_rows) {
                    println!("{rows}");
                }
            }

            let report = analyze(&filtered, &spec);
            print_pretty(&report);
            match format {
                Format::Text => print!("{}", TextReport(&report)),
                Format::Json => println!("{}", to_json(&report)?),
            }
        }
        Commands::Explore => {
            let stdin = std::io::stdin();
            explore(&source, stdin.lock(), std::io::stdout())?;
        }
        Commands::Cities => {
            for city in City::ALL {
                let path = source.path_for(city);
                info!(
                    city = %city,
                    path = %path.display(),
                    present = path.exists(),
                    demographics = city.has_demographics(),
                    "City"
                );
            }
            info!(data_dir = %source.dir().display(), "Known cities listed");
        }
    }

    Ok(())
}
