//! trello2md - Export lists from multiple Trello boards into a single Markdown document
//!
//! The library holds the export pipeline: resolving the list to export on each
//! board, fetching per-card details and rendering them as Markdown. Trello is
//! reached through the [`core::ports::TrelloApi`] trait, implemented over HTTP by
//! [`adapters::trello::TrelloClient`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;

pub use error::{Result, Trello2mdError};
