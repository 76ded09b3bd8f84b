use anyhow::Result;
use log::debug;
use std::io::{self, Write};

pub mod config;
pub mod greeter;
pub mod greeting;

pub use greeter::Greeter;
pub use greeting::{hello_world, write_hello_world};

use config::DEFAULT_NAME;

/// Prints the world greeting and then greets [`DEFAULT_NAME`], one line each.
pub fn run() -> Result<()> {
    hello_world();

    let greeter = Greeter::new(DEFAULT_NAME);
    let stdout = io::stdout();
    write_greeting(&mut stdout.lock(), &greeter)
}

/// Writes `greeter`'s greeting, followed by a newline, to `out` and flushes it.
pub fn write_greeting<W: Write>(out: &mut W, greeter: &Greeter) -> Result<()> {
    debug!("Greeting {}", greeter.name());
    writeln!(out, "{}", greeter.greet())
        .map_err(|e| anyhow::anyhow!("Failed to write greeting for {}: {}", greeter.name(), e))?;

    out.flush()
        .map_err(|e| anyhow::anyhow!("Failed to flush output: {}", e))?;
    Ok(())
}
