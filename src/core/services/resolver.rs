//! Board resolver - finds the list to export on a board

use log::debug;

use crate::core::models::{Board, List};
use crate::core::ports::TrelloApi;
use crate::error::{Result, Trello2mdError};

/// A board together with the list selected for export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// The board, used for the section header
    pub board: Board,
    /// The list whose cards are exported
    pub list: List,
}

/// Fetch a board and pick the list named exactly `list_filter`.
///
/// Lists are scanned in the order Trello returns them and the first exact,
/// case-sensitive match wins, so duplicate names resolve deterministically.
///
/// # Errors
///
/// `NotFound` if the board does not exist, `NoMatchingList` if no list
/// carries the name, or whatever the port reports for failed requests.
pub fn resolve_export_target<A>(api: &A, board_id: &str, list_filter: &str) -> Result<ExportTarget>
where
    A: TrelloApi + ?Sized,
{
    let board = api.board(board_id)?;
    debug!("resolved board {} ({})", board.name, board.id);

    let list = api
        .board_lists(&board.id)?
        .into_iter()
        .find(|list| list.name == list_filter)
        .ok_or_else(|| Trello2mdError::NoMatchingList {
            board: board.name.clone(),
            filter: list_filter.to_string(),
        })?;
    debug!("board {} exports list {} ({})", board.name, list.name, list.id);

    Ok(ExportTarget { board, list })
}
