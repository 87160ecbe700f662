//! Trello port
//!
//! Defines the read-only Trello operations the export needs.

use crate::core::models::{Action, Attachment, Board, Card, Checklist, List, Member};
use crate::error::Result;

/// Read access to Trello.
///
/// Every call is a single blocking request that either returns the whole
/// sequence in Trello order or fails.
#[cfg_attr(test, mockall::automock)]
pub trait TrelloApi {
    /// Look up a board by identifier
    fn board(&self, board_id: &str) -> Result<Board>;

    /// Lists on a board
    fn board_lists(&self, board_id: &str) -> Result<Vec<List>>;

    /// Cards in a list
    fn list_cards(&self, list_id: &str) -> Result<Vec<Card>>;

    /// Members assigned to a card
    fn card_members(&self, card_id: &str) -> Result<Vec<Member>>;

    /// Checklists on a card
    fn card_checklists(&self, card_id: &str) -> Result<Vec<Checklist>>;

    /// Actions recorded on a card (comments and others)
    fn card_actions(&self, card_id: &str) -> Result<Vec<Action>>;

    /// Attachments on a card
    fn card_attachments(&self, card_id: &str) -> Result<Vec<Attachment>>;

    /// Boards visible to the credentials whose name contains `query`
    fn search_boards(&self, query: &str) -> Result<Vec<Board>>;
}
