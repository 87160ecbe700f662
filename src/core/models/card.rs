//! Cards, their labels and their members

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::timestamp::parse_timestamp;
use crate::error::Result;

/// A label attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Label {
    /// Label text (may be empty for colour-only labels)
    #[serde(default)]
    pub name: String,
}

/// A Trello member, as referenced from cards and actions
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Full display name
    #[serde(default)]
    pub full_name: String,
}

/// A card within a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card identifier
    pub id: String,
    /// Card title
    pub name: String,
    /// Link to the card in the Trello UI
    #[serde(default)]
    pub url: String,
    /// Description text, rendered verbatim
    #[serde(default)]
    pub desc: String,
    /// RFC3339 timestamp of the most recent change, as sent by Trello
    pub date_last_activity: String,
    /// Labels in the order Trello returns them
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Card {
    /// Parse the last-activity timestamp
    pub fn last_activity(&self) -> Result<DateTime<FixedOffset>> {
        parse_timestamp(&self.date_last_activity)
    }
}
