//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// Create and manage source-to-image components on a container platform
#[derive(Parser)]
#[command(
    name = "loft",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new component and set it as the active component
    Create(commands::create::CreateArgs),

    /// Show the active component for the current application and project
    Current,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let app = AppContext::new(self.no_color, self.quiet)?;
        match self.command {
            Command::Create(args) => commands::create::run(&args, &app).await,
            Command::Current => commands::current::run(&app).await,
        }
    }
}
