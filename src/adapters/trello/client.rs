//! Blocking HTTP client for the Trello REST API

use std::fmt;

use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Action, Attachment, Board, Card, Checklist, List, Member};
use crate::core::ports::TrelloApi;
use crate::error::{Result, Trello2mdError};

/// Public Trello API root
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Trello REST client authenticated with an application key and token
#[derive(Clone)]
pub struct TrelloClient {
    http: Client,
    base_url: String,
    key: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    boards: Vec<Board>,
}

/// Map a non-success HTTP status onto an error.
///
/// 401 means the key or token was rejected and 404 means `resource` does not
/// exist. Everything else is reported with the response body.
#[must_use]
pub fn status_error(status: u16, resource: &str, body: String) -> Trello2mdError {
    match status {
        401 => Trello2mdError::Auth,
        404 => Trello2mdError::NotFound {
            resource: resource.to_string(),
        },
        _ => Trello2mdError::Api { status, body },
    }
}

impl TrelloClient {
    /// Client for the public Trello API
    #[must_use]
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, key, token)
    }

    /// Client for a Trello-compatible API rooted at `base_url`
    #[must_use]
    pub fn with_base_url(
        base_url: impl Into<String>,
        key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
            token: token.into(),
        }
    }

    /// The API root requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        resource: &str,
    ) -> Result<T> {
        let raw = format!("{}{path}", self.base_url);
        let auth = [("key", self.key.as_str()), ("token", self.token.as_str())];
        let url = Url::parse_with_params(&raw, auth.iter().chain(params)).map_err(|e| {
            Trello2mdError::InvalidUrl {
                url: raw.clone(),
                reason: e.to_string(),
            }
        })?;

        debug!("GET {raw}");
        let resp = self.http.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(status_error(status.as_u16(), resource, body));
        }

        Ok(resp.json()?)
    }
}

impl fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl TrelloApi for TrelloClient {
    fn board(&self, board_id: &str) -> Result<Board> {
        let resource = format!("board {board_id}");
        // Trello answers a malformed board id with `400 invalid id`
        self.get(&format!("/boards/{board_id}"), &[("fields", "name")], &resource)
            .map_err(|err| match err {
                Trello2mdError::Api { status: 400, .. } => Trello2mdError::NotFound { resource },
                other => other,
            })
    }

    fn board_lists(&self, board_id: &str) -> Result<Vec<List>> {
        self.get(
            &format!("/boards/{board_id}/lists"),
            &[],
            &format!("lists of board {board_id}"),
        )
    }

    fn list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        self.get(
            &format!("/lists/{list_id}/cards"),
            &[],
            &format!("cards of list {list_id}"),
        )
    }

    fn card_members(&self, card_id: &str) -> Result<Vec<Member>> {
        self.get(
            &format!("/cards/{card_id}/members"),
            &[],
            &format!("members of card {card_id}"),
        )
    }

    fn card_checklists(&self, card_id: &str) -> Result<Vec<Checklist>> {
        self.get(
            &format!("/cards/{card_id}/checklists"),
            &[],
            &format!("checklists of card {card_id}"),
        )
    }

    fn card_actions(&self, card_id: &str) -> Result<Vec<Action>> {
        self.get(
            &format!("/cards/{card_id}/actions"),
            &[],
            &format!("actions of card {card_id}"),
        )
    }

    fn card_attachments(&self, card_id: &str) -> Result<Vec<Attachment>> {
        self.get(
            &format!("/cards/{card_id}/attachments"),
            &[],
            &format!("attachments of card {card_id}"),
        )
    }

    fn search_boards(&self, query: &str) -> Result<Vec<Board>> {
        let found: SearchResponse = self.get(
            "/search",
            &[("query", query), ("modelTypes", "boards"), ("partial", "true")],
            "board search",
        )?;
        Ok(found.boards)
    }
}
