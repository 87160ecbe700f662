//! Trello REST adapter
//!
//! Implements [`TrelloApi`](crate::core::ports::TrelloApi) against
//! `https://api.trello.com/1`. Every request is authenticated with the
//! application key and token as query parameters.

mod client;

pub use client::{DEFAULT_BASE_URL, TrelloClient, status_error};
