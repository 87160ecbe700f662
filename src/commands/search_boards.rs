//! Search command - list boards by name

use std::io::{self, Write};

use anyhow::Context;

use trello2md::config::{Config, Credentials};
use trello2md::core::services;

/// Print `{id} - {name}` for every board matching the filter
pub fn search_boards(
    config: &Config,
    credentials: &Credentials,
    board_filter: &str,
) -> anyhow::Result<()> {
    let client = super::client(config, credentials);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let found = services::search_boards(&client, &mut out, board_filter)
        .with_context(|| format!("board search for '{board_filter}' failed"))?;
    out.flush()?;

    log::debug!("{found} board(s) matched '{board_filter}'");
    Ok(())
}
