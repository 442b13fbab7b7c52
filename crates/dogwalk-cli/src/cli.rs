use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dogwalk_core::config::{SUPABASE_ANON_KEY_ENV, SUPABASE_URL_ENV};
use dogwalk_core::{BathroomActivity, WalkQuality};

#[derive(Parser)]
#[command(name = "dogwalk")]
#[command(about = "Log your dog's walks and sync them to Supabase")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Supabase project URL
    #[arg(long, global = true, env = SUPABASE_URL_ENV, value_name = "URL")]
    pub supabase_url: Option<String>,

    /// Supabase anonymous API key
    #[arg(
        long,
        global = true,
        env = SUPABASE_ANON_KEY_ENV,
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub supabase_anon_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a walk
    #[command(alias = "log")]
    Add {
        /// How the walk went: good, okay, bad
        quality: WalkQuality,
        /// Bathroom activity: none, pee, poop, both
        bathroom: BathroomActivity,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Log under this name instead of the saved display name
        #[arg(long)]
        user: Option<String>,
    },
    /// Show walk history, newest first
    List {
        /// Only show walks with this quality
        #[arg(short, long)]
        quality: Option<WalkQuality>,
        /// Number of walks to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show walk totals per quality
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a logged walk
    Edit {
        /// Walk ID or unique ID prefix
        id: String,
        /// New quality
        #[arg(short, long)]
        quality: Option<WalkQuality>,
        /// New bathroom activity
        #[arg(short, long)]
        bathroom: Option<BathroomActivity>,
        /// New notes (pass "" to clear)
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete a logged walk
    Delete {
        /// Walk ID or unique ID prefix
        id: String,
    },
    /// Replace local walks with the remote table
    Sync,
    /// Manage local settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the display name, or save a new one
    Name {
        /// New display name
        name: Option<String>,
    },
}
