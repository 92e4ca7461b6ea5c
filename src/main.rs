use clap::Parser;
use tracing_subscriber::EnvFilter;

use shopdash::app::App;
use shopdash::cli::Cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Logs go to a file so the alternate screen stays clean.
    let log_file = std::sync::Arc::new(std::fs::File::create("shopdash.log")?);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&cli.log_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let terminal = ratatui::init();
    let result = App::new(cli.source()).run(terminal).await;
    ratatui::restore();
    result
}
