//! # Inkpost
//!
//! Command-line front end: compose, list, view, edit and delete posts kept in a
//! local data directory or on a REST backend, and ask the backend's docs
//! assistant a question.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use inkpost_core::domain::PostId;
use inkpost_core::listing::SortOrder;

mod commands;
mod config;
mod state;
mod telemetry;
mod terminal;

use commands::ContentSource;
use config::{AppConfig, StoreBackend};
use state::AppState;
use telemetry::TelemetryConfig;
use terminal::TerminalInteraction;

/// inkpost - rich-text posts from the terminal
#[derive(Parser, Debug)]
#[command(name = "inkpost")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where posts are kept [env: INKPOST_STORE]
    #[arg(long, global = true, value_enum)]
    store: Option<StoreBackend>,

    /// Backend base URL for the remote store [env: INKPOST_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Data directory for the local store [env: INKPOST_DATA_DIR]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a new post (content from --content, --file, or stdin)
    New {
        #[command(flatten)]
        source: ContentSource,

        /// Title to use instead of prompting (required when content comes from stdin)
        #[arg(long)]
        title: Option<String>,

        /// Print the sanitized preview before saving
        #[arg(long)]
        preview: bool,
    },

    /// List saved posts
    #[command(alias = "ls")]
    List {
        /// Sort order: newest or oldest
        #[arg(long, default_value_t = SortOrder::Newest)]
        sort: SortOrder,

        /// Only show posts whose title or content contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one post
    Show {
        /// Post id
        id: PostId,
    },

    /// Replace the content of a post
    Edit {
        /// Post id
        id: PostId,

        #[command(flatten)]
        source: ContentSource,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Post id
        id: PostId,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Ask the docs assistant a question [uses INKPOST_API_URL]
    Ask {
        /// The question, as one or more words
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().with_overrides(cli.store, cli.api_url, cli.data_dir);
    let state = AppState::new(&config)?;

    match cli.command {
        Command::New {
            source,
            title,
            preview,
        } => {
            let interaction = Arc::new(TerminalInteraction::new().answer_prompts_with(title));
            commands::new_post(&state, interaction, &source, preview).await
        }
        Command::List { sort, search } => {
            commands::list_posts(&state, Arc::new(TerminalInteraction::new()), sort, search).await
        }
        Command::Show { id } => {
            commands::show_post(&state, Arc::new(TerminalInteraction::new()), id).await
        }
        Command::Edit { id, source } => {
            commands::edit_post(&state, Arc::new(TerminalInteraction::new()), id, &source).await
        }
        Command::Delete { id, yes } => {
            let interaction = Arc::new(TerminalInteraction::new().assume_yes(yes));
            commands::delete_post(&state, interaction, id).await
        }
        Command::Ask { question } => commands::ask(&state, question.join(" ")).await,
    }
}
