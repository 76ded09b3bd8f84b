/// Line written by the world greeting.
pub const WORLD_GREETING: &str = "Hello, world!";

/// Name the entry point greets.
pub const DEFAULT_NAME: &str = "SnapshotUser";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";
