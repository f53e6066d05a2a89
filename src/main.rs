use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paystation::application::engine::StationEngine;
use paystation::domain::ports::StationPortBox;
use paystation::domain::station::{PayStation, PendingOnEmpty};
use paystation::domain::tariff::Tariff;
use paystation::infrastructure::shared::SharedPayStation;
use paystation::infrastructure::tariff_file::load_tariff;
use paystation::interfaces::csv::event_reader::EventReader;
use paystation::interfaces::csv::outcome_writer::OutcomeWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input station events CSV file
    input: PathBuf,

    /// Tariff JSON file with the legal coins and rate. Defaults to 5/10/25 cents, 2 min per 5 cents.
    #[arg(long)]
    tariff: Option<PathBuf>,

    /// Keep an unfinished transaction when the till is emptied instead of discarding its coins
    #[arg(long)]
    keep_pending_on_empty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let tariff = match cli.tariff {
        Some(path) => load_tariff(path).into_diagnostic()?,
        None => Tariff::default(),
    };
    let policy = if cli.keep_pending_on_empty {
        PendingOnEmpty::Keep
    } else {
        PendingOnEmpty::Discard
    };
    info!(?tariff, ?policy, "starting pay station");

    let station: StationPortBox = Box::new(SharedPayStation::from(
        PayStation::with_tariff(tariff).with_pending_on_empty(policy),
    ));
    let engine = StationEngine::new(station);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock()).into_diagnostic()?;

    for event_result in reader.events() {
        match event_result {
            Ok(event) => match engine.process_event(event).await {
                Ok(outcome) => writer.write_outcome(&outcome).into_diagnostic()?,
                Err(e) => eprintln!("Error processing event: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;

    let station = engine.into_station();
    info!(display = station.read_display().await, "session finished");

    Ok(())
}
