//! Adapter implementations of the core ports
//!
//! - `trello` - the Trello REST API over blocking HTTP

pub mod trello;

pub use trello::TrelloClient;
