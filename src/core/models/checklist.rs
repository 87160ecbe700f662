//! Checklists and check items

use serde::Deserialize;

/// The only check item state that counts as done
pub const CHECK_ITEM_COMPLETE: &str = "complete";

/// A single entry of a checklist
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckItem {
    /// Entry text
    pub name: String,
    /// Trello state string, usually `complete` or `incomplete`
    #[serde(default)]
    pub state: String,
}

impl CheckItem {
    /// Whether the item is ticked. Only the exact string `complete` counts.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == CHECK_ITEM_COMPLETE
    }
}

/// A named group of check items
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Checklist title
    pub name: String,
    /// Items in Trello order
    #[serde(default)]
    pub check_items: Vec<CheckItem>,
}
