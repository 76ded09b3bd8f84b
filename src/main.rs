use anyhow::Result;

use snapshot_greeter::{config::DEFAULT_LOG_FILTER, run};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the greetings.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    run()?;

    Ok(())
}
