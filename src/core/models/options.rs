//! Export toggles

/// Which optional sections to render for every card.
///
/// The title line is always rendered; everything else is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExportOptions {
    /// Render labels and the card's members
    pub show_labels_and_members: bool,
    /// Render the description
    pub show_description: bool,
    /// Render checklists
    pub show_checklists: bool,
    /// Render comments
    pub show_comments: bool,
    /// Render attachments
    pub show_attachments: bool,
}

impl ExportOptions {
    /// Every section enabled
    #[must_use]
    pub const fn all() -> Self {
        Self {
            show_labels_and_members: true,
            show_description: true,
            show_checklists: true,
            show_comments: true,
            show_attachments: true,
        }
    }
}
