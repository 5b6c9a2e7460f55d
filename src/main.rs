use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use hour_stat::{config::Config, logging::init_logging, pipeline::analyze_file};

#[derive(Parser, Debug)]
#[command(
    name = "hour_stat",
    version,
    about = "Busiest and quietest hours of a web server access log"
)]
struct Cli {
    /// Access log to read (overrides `log_path` from the config)
    log: Option<String>,

    /// Path to a TOML config file, tried before the default locations
    #[arg(long)]
    config: Option<String>,

    /// Number of hours listed in each section
    #[arg(long)]
    top: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let mut config = Config::load(cli.config.as_deref());
    if let Some(log) = cli.log {
        config.log_path = log;
    }
    if let Some(top) = cli.top {
        config.report_size = top;
    }

    let report = match analyze_file(&config.log_path) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(path = %config.log_path, error = ?e, "analysis failed");
            eprintln!("hour_stat: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = report
        .render(&mut out, config.effective_report_size())
        .and_then(|_| out.flush())
    {
        eprintln!("hour_stat: failed to write report: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
