use anyhow::Result;
use openclaw_terminal::config::Settings;
use openclaw_terminal::repl::start_repl;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("OPENCLAW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load()?;
    tracing::debug!(?settings, "settings loaded");
    start_repl(&settings)
}
