//! The `marksheet start` command (also the default).

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use marksheet_core::config::load_config_from;
use marksheet_core::Session;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::from_config(&config, stdin.lock(), stdout.lock());

    let end = session.run().context("console I/O failed")?;
    tracing::debug!(?end, "session ended");
    Ok(())
}
