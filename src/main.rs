use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use vrchive::app::{forward_lines, App};
use vrchive::kernel::services::adapters::{load_settings, SearchService};
use vrchive::kernel::services::ports::SearchSettings;
use vrchive::kernel::services::{bus, BusMessage};

mod logging;

/// Search exported chat transcripts for shared resource links.
#[derive(Debug, Parser)]
#[command(name = "vrchive", version)]
struct Cli {
    /// Folder containing the exported .html transcripts.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Run a single search and exit instead of reading searches from stdin.
    #[arg(long, short)]
    query: Option<String>,

    /// Settings file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref());
    if let Some(data) = cli.data {
        settings.data_dir = data;
    }
    if let Some(log_file) = cli.log_file {
        settings.log_file = log_file;
    }

    let _logging = match logging::init(&settings.log_file, &settings.log_filter) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error setting up logger: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(settings, cli.query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "app failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: SearchSettings, query: Option<String>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let (bus_tx, bus_rx) = bus();
    let service =
        SearchService::new(runtime.handle().clone()).with_result_buffer(settings.result_buffer);

    tracing::info!(data_dir = %settings.data_dir.display(), "setup application and running it");

    match query {
        Some(query) => {
            bus_tx
                .send_query(query)
                .and_then(|_| bus_tx.send(BusMessage::InputClosed))
                .map_err(|e| io::Error::new(io::ErrorKind::BrokenPipe, e.to_string()))?;
        }
        None => {
            let input_bus = bus_tx.clone();
            std::thread::Builder::new()
                .name("vrchive-input".to_string())
                .spawn(move || forward_lines(io::stdin().lock(), &input_bus))?;
        }
    }

    let app = App::new(service, bus_tx, settings, io::stdout());
    app.run(bus_rx)?;
    Ok(())
}
