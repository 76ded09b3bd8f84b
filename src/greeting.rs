use log::{debug, error};
use std::io::{self, Write};

use crate::config::WORLD_GREETING;

/// Prints the world greeting to standard output.
pub fn hello_world() {
    let stdout = io::stdout();
    if let Err(e) = write_hello_world(&mut stdout.lock()) {
        error!("Failed to write world greeting: {}", e);
    }
}

/// Writes the world greeting, followed by a newline, to `out`.
pub fn write_hello_world<W: Write>(out: &mut W) -> io::Result<()> {
    debug!("Writing world greeting");
    writeln!(out, "{WORLD_GREETING}")
}
