//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reflect")]
#[command(about = "Reflective journaling companion", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a journaling session (asks for a name when --user is absent).
    Chat {
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Show the most recent stored reflections, newest first.
    History {
        #[arg(short, long)]
        user: String,
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Print the context summary derived from the user's history.
    Profile {
        #[arg(short, long)]
        user: String,
    },
}
