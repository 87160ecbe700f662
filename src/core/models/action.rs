//! Card actions (only comments are rendered)

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::card::Member;
use super::timestamp::parse_timestamp;
use crate::error::Result;

/// Action type tag for a comment left on a card
pub const COMMENT_CARD: &str = "commentCard";

/// Payload of an action; comments carry their body in `text`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ActionData {
    /// Comment body
    #[serde(default)]
    pub text: String,
}

/// Something that happened on a card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// Action type, e.g. `commentCard` or `updateCard`
    #[serde(rename = "type")]
    pub action_type: String,
    /// RFC3339 timestamp of the action
    pub date: String,
    /// Member who performed the action
    #[serde(default)]
    pub member_creator: Member,
    /// Action payload
    #[serde(default)]
    pub data: ActionData,
}

impl Action {
    /// Whether this action is a comment
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.action_type == COMMENT_CARD
    }

    /// Parse the action timestamp
    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.date)
    }
}
