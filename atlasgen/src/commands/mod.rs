mod completions;
mod create;
mod files;
mod include;
mod structure;
mod ui;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use create::CreateCommand;
use eyre::Result;
use files::FilesCommand;
use include::IncludeCommand;
use structure::StructureCommand;
use ui::UiCommand;

/// Extension trait for exiting on scaffold errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for atlasgen_scaffold::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "atlasgen")]
#[command(version)]
#[command(about = "Scaffold Atlas feature modules from naming conventions")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Create(cmd) => cmd.run(),
            Commands::Structure(cmd) => cmd.run(),
            Commands::Files(cmd) => cmd.run(),
            Commands::Ui(cmd) => cmd.run(),
            Commands::Include(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a full feature module and register it
    Create(CreateCommand),

    /// Create only the directory skeleton and build descriptor
    Structure(StructureCommand),

    /// Generate only the data-layer source files
    Files(FilesCommand),

    /// Generate only the UI source and resource files
    Ui(UiCommand),

    /// Register a module in settings.gradle.kts
    Include(IncludeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
