//! Trello entities as the export pipeline sees them
//!
//! All of these are read-only snapshots fetched fresh on every run.
//!
//! - [`Board`] / [`List`] - where the cards live
//! - [`Card`] - the unit of the report, with its [`Label`]s
//! - [`Member`], [`Checklist`], [`Action`], [`Attachment`] - per-card details
//! - [`ExportOptions`] - which optional card sections to render

mod action;
mod attachment;
mod board;
mod card;
mod checklist;
mod options;
mod timestamp;

pub use action::{Action, ActionData, COMMENT_CARD};
pub use attachment::Attachment;
pub use board::{Board, List};
pub use card::{Card, Label, Member};
pub use checklist::{CHECK_ITEM_COMPLETE, CheckItem, Checklist};
pub use options::ExportOptions;
pub use timestamp::{DATE_FORMAT, parse_timestamp};
