use anyhow::{Context, Result};
use tracing::info;

use cesso_uci::UciEngine;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("cesso starting");

    UciEngine::new().run().context("UCI loop failed")?;

    info!("cesso exiting");
    Ok(())
}
