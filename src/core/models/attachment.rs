//! Card attachments

use serde::Deserialize;

/// A file or link attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attachment {
    /// Attachment name
    #[serde(default)]
    pub name: String,
    /// Where the attachment lives; used for both the link and the image embed
    pub url: String,
}
