//! Boards and the lists they contain

use serde::Deserialize;

/// A Trello board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Board {
    /// Board identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// A named column of cards on a board
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct List {
    /// List identifier
    pub id: String,
    /// Display name, matched exactly against the list filter
    pub name: String,
}
