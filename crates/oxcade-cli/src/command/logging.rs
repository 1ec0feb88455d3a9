use std::{fs::File, path::Path, sync::Mutex};

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;

/// Installs the global subscriber writing to `log_file`.
///
/// Without a log file nothing is installed and every event is discarded.
pub(super) fn init(log_file: Option<&Path>, level: LevelFilter) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
