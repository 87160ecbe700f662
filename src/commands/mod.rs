//! Command implementations

mod export_boards;
mod search_boards;

pub use export_boards::export_boards;
pub use search_boards::search_boards;

use trello2md::adapters::TrelloClient;
use trello2md::config::{Config, Credentials};

/// Build the Trello client, honouring an `api_url` override from the config file
fn client(config: &Config, credentials: &Credentials) -> TrelloClient {
    let key = credentials.key.clone();
    let token = credentials.token.clone();
    match config.api_url.as_deref() {
        Some(url) => TrelloClient::with_base_url(url, key, token),
        None => TrelloClient::new(key, token),
    }
}
