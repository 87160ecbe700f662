//! Export services
//!
//! The pipeline runs strictly in order: resolve the list on each board, sort
//! its cards, render each card. Every function writes straight to the given
//! writer so output appears as soon as it is produced.

mod export;
mod renderer;
mod resolver;
mod search;

pub use export::{ExportRequest, export_boards};
pub use renderer::{
    comment_actions, format_check_item, quote_comment_body, render_card, render_cards, sort_cards,
};
pub use resolver::{ExportTarget, resolve_export_target};
pub use search::search_boards;
