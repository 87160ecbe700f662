//! Core export logic for trello2md
//!
//! Nothing in here knows about HTTP. Trello is reached through the
//! [`ports::TrelloApi`] trait so the pipeline can run against any source.
//!
//! ## Architecture
//!
//! - `models/` - Trello entities and the export options
//! - `ports/` - Trait describing the Trello operations the pipeline needs
//! - `services/` - List resolution, Markdown rendering and board search

pub mod models;
pub mod ports;
pub mod services;
