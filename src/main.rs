mod cli;
use cli::{CliMode, parse_cli_mode, run_summary_mode};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("Usage: chronowheel [--summary [YYYY/MM]] [--sample]");
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::SummaryMonth(month) => run_summary_mode(month)?,
        CliMode::Default { sample } => run_tui(sample)?,
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("chronowheel"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "chronowheel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("chronowheel started");
}
