//! Whole-document export across boards

use std::io::Write;

use chrono::NaiveDate;
use log::info;

use super::renderer::{render_cards, sort_cards};
use super::resolver::resolve_export_target;
use crate::core::models::{DATE_FORMAT, ExportOptions};
use crate::core::ports::TrelloApi;
use crate::error::Result;

/// Everything needed to produce one export document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Boards to export, in output order
    pub board_ids: Vec<String>,
    /// Exact name of the list to export on each board
    pub list_filter: String,
    /// Optional card sections
    pub options: ExportOptions,
}

/// Write the export document for every requested board.
///
/// The date header comes first, then one `### {board}` section per board
/// with its cards oldest first. The first error stops the export.
pub fn export_boards<A, W>(
    api: &A,
    out: &mut W,
    request: &ExportRequest,
    today: NaiveDate,
) -> Result<()>
where
    A: TrelloApi + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "## {}", today.format(DATE_FORMAT))?;

    for board_id in &request.board_ids {
        let target = resolve_export_target(api, board_id, &request.list_filter)?;
        writeln!(out, "### {}", target.board.name)?;

        let cards = sort_cards(api.list_cards(&target.list.id)?)?;
        info!(
            "exporting {} card(s) from {} / {}",
            cards.len(),
            target.board.name,
            target.list.name
        );
        render_cards(api, out, &cards, request.options)?;
    }

    Ok(())
}
