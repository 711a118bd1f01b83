use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use curvefit::configuration::Configuration;
use curvefit::curvefiterror::Result;
use curvefit::report::report::render_report;

/// Fits population and internet-usage history and prints estimates for the configured years
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the JSON configuration
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Log fitted parameters and other debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<String> {
    let config = Configuration::from_reader(&cli.config)?;
    tracing::info!(config = %cli.config, "configuration loaded");
    let table = config.data_source().load()?;
    render_report(&table, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    match run(&cli) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        },
        Err(error) => {
            tracing::error!(%error, "curve fitting failed");
            ExitCode::FAILURE
        }
    }
}
