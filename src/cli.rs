//! CLI definitions and entry point

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};

use crate::commands;
use trello2md::config::Config;

/// trello2md - Export Trello lists as Markdown
#[derive(Parser, Debug)]
#[command(
    name = "trello2md",
    version,
    about = "Exports a list from multiple Trello boards into a single Markdown document",
    long_about = "Exports a list from multiple Trello boards into a single Markdown document.\n\n\
                  For every board the list named by --list-filter is exported, cards oldest \
                  first. Labels, members, descriptions, attachments, checklists and comments \
                  can be switched on per section."
)]
pub struct Cli {
    /// Trello application key
    #[arg(long, global = true, env = "KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Trello API token
    #[arg(long, global = true, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file (defaults to ~/.config/trello2md/config.toml)
    #[arg(long, global = true, env = "TRELLO2MD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export the matching list of every board as Markdown
    ExportBoards(ExportArgs),

    /// Find boards whose name contains a substring
    SearchBoards {
        /// The board name filter to apply
        #[arg(long, env = "BOARD_FILTER")]
        board_filter: String,
    },
}

/// Arguments for `export-boards`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// The Trello board ids of the boards to export
    #[arg(long = "board-id", env = "BOARD_ID", value_delimiter = ',')]
    pub board_ids: Vec<String>,

    /// Name of the list to export on each board [default: Done]
    #[arg(long, env = "LIST_FILTER")]
    pub list_filter: Option<String>,

    /// Render card labels and card members
    #[arg(
        long,
        env = "SHOW_LABELS_AND_MEMBERS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_labels_and_members: Option<bool>,

    /// Render card descriptions
    #[arg(
        long,
        env = "SHOW_DESCRIPTION",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_description: Option<bool>,

    /// Render card checklists
    #[arg(
        long,
        env = "SHOW_CHECKLISTS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_checklists: Option<bool>,

    /// Render card comments
    #[arg(
        long,
        env = "SHOW_COMMENTS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_comments: Option<bool>,

    /// Render card attachments
    #[arg(
        long,
        env = "SHOW_ATTACHMENTS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub show_attachments: Option<bool>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = Config::load_or_default(cli.config.as_deref())?;
    let credentials = config.credentials(cli.key, cli.token)?;

    match cli.command {
        Command::ExportBoards(args) => commands::export_boards(&config, &credentials, args),
        Command::SearchBoards { board_filter } => {
            commands::search_boards(&config, &credentials, &board_filter)
        },
    }
}
