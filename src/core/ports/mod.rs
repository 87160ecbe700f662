//! Port traits (interfaces) for external dependencies
//!
//! The export pipeline depends only on these traits, never on the HTTP
//! client, so it can be driven by an in-memory fake in tests.
//!
//! Implementations live in the `adapters` module.

mod trello;

pub use trello::TrelloApi;
#[cfg(test)]
pub use trello::MockTrelloApi;
