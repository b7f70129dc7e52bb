//! Logger setup shared by the dialog binaries.

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
///
/// stdout is reserved for the clicked button label, so nothing is logged there.
pub fn init() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {e}");
    }
}
