//! dogwalk CLI - log your dog's walks from the terminal
//!
//! Every command opens the local store, refreshes it from Supabase when
//! configured, applies its change, and waits for the remote side to settle.

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};
use dogwalk_core::RemoteConfig;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::{resolve_db_path, AppContext};
use crate::commands::config::run_config;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, WalkEdit};
use crate::commands::list::run_list;
use crate::commands::stats::run_stats;
use crate::commands::sync::run_sync;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dogwalk=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let context = AppContext {
        db_path: resolve_db_path(cli.db_path),
        remote: RemoteConfig::resolve(cli.supabase_url, cli.supabase_anon_key)?,
    };

    match cli.command {
        Some(Commands::Add {
            quality,
            bathroom,
            notes,
            user,
        }) => run_add(quality, bathroom, notes, user, &context).await?,
        Some(Commands::List {
            quality,
            limit,
            json,
        }) => run_list(quality, limit, json, &context).await?,
        Some(Commands::Stats { json }) => run_stats(json, &context).await?,
        Some(Commands::Edit {
            id,
            quality,
            bathroom,
            notes,
        }) => {
            let edit = WalkEdit {
                quality,
                bathroom,
                notes,
            };
            run_edit(&id, edit, &context).await?;
        }
        Some(Commands::Delete { id }) => run_delete(&id, &context).await?,
        Some(Commands::Sync) => run_sync(&context).await?,
        Some(Commands::Config { command }) => run_config(command, &context).await?,
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
