//! Board search

use std::io::Write;

use crate::core::ports::TrelloApi;
use crate::error::Result;

/// Print `{id} - {name}` for every board whose name contains `name_filter`.
///
/// Matching and ordering are left to Trello.
pub fn search_boards<A, W>(api: &A, out: &mut W, name_filter: &str) -> Result<usize>
where
    A: TrelloApi + ?Sized,
    W: Write + ?Sized,
{
    let boards = api.search_boards(name_filter)?;
    for board in &boards {
        writeln!(out, "{} - {}", board.id, board.name)?;
    }
    Ok(boards.len())
}
