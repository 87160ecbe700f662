//! Export command - write the Markdown report to stdout

use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;

use crate::cli::ExportArgs;
use trello2md::config::{Config, Credentials, ShowOverrides};
use trello2md::core::services;

/// Export the configured list of every board
pub fn export_boards(
    config: &Config,
    credentials: &Credentials,
    args: ExportArgs,
) -> anyhow::Result<()> {
    let overrides = ShowOverrides {
        labels_and_members: args.show_labels_and_members,
        description: args.show_description,
        checklists: args.show_checklists,
        comments: args.show_comments,
        attachments: args.show_attachments,
    };
    let request = config.export_request(args.board_ids, args.list_filter, overrides)?;
    log::debug!("export request: {request:?}");

    let client = super::client(config, credentials);
    let today = Local::now().date_naive();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = services::export_boards(&client, &mut out, &request, today);
    out.flush()?;

    result.context("export failed")
}
