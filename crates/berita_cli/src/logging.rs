use std::sync::Once;

use berita_core::{Error, Result};
use tracing::Level;

static INIT: Once = Once::new();

/// Install the fmt subscriber once for the whole process.
pub fn init_logging(level: &str) -> Result<()> {
    let level: Level = level
        .parse()
        .map_err(|_| Error::Config(format!("unknown log level '{}'", level)))?;
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt().with_max_level(level).init();
        });
    }
    Ok(())
}
