use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::FmtSubscriber;

use rer_core::{Dataset, Selection};
use rer_io::{dataset, settings};

mod shell;

use shell::Shell;

/// Console reports over renewable-electricity statistics by country.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Directory holding the dataset and settings files
    /// (defaults to the directory containing the executable)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

/// Data files live next to the deployed binary unless --data-dir says otherwise.
fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let dataset_path = data_dir.join(dataset::DATASET_FILENAME);
    let settings_path = data_dir.join(settings::SETTINGS_FILENAME);

    // Dataset load is fatal-soft: the shell still runs, reports just come up empty.
    let data = match dataset::load_dataset(&dataset_path) {
        Ok(data) => {
            info!("Dataset loaded: {} countries.", data.len());
            data
        }
        Err(err) => {
            error!(
                "Failed to load dataset from {}: {err}",
                dataset_path.display()
            );
            Dataset::default()
        }
    };

    let selection = match settings::load_settings(&settings_path) {
        Ok(Some(selection)) => {
            info!("Settings loaded.");
            selection
        }
        Ok(None) => Selection::default(),
        Err(err) => {
            warn!(
                "Ignoring settings from {}: {err}",
                settings_path.display()
            );
            Selection::default()
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let mut shell = Shell::new(&data, selection);
    if let Err(err) = shell.replay_last(&mut input, &mut output) {
        error!("Failed to replay the saved report: {err}");
    }
    if let Err(err) = shell.run(&mut input, &mut output) {
        error!("Shell error: {err}");
    }

    match settings::save_settings(&settings_path, shell.selection()) {
        Ok(()) => info!("Settings saved."),
        Err(err) => error!("Error saving settings: {err}"),
    }
}
