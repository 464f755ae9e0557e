use std::path::PathBuf;

use atlasgen_scaffold::{CancelToken, ModuleIdentifier, Stage, run_stage};
use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, files::overwrite_policy};

#[derive(Args)]
pub struct UiCommand {
    /// Module name, e.g. feature-login
    pub name: String,

    /// Project root the module lives under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Replace files that already exist
    #[arg(long, conflicts_with = "skip_existing")]
    pub overwrite: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,
}

impl UiCommand {
    pub fn run(&self) -> Result<()> {
        let id = ModuleIdentifier::parse(&self.name).unwrap_or_exit();

        let outcome = run_stage(
            Stage::UiFiles,
            &self.root,
            &id,
            overwrite_policy(self.overwrite, self.skip_existing),
            &CancelToken::new(),
        )
        .unwrap_or_exit();

        println!(
            "Generated UI files for {} ({} written, {} skipped)",
            id.raw(),
            outcome.files_written,
            outcome.files_skipped
        );
        println!("Next: atlasgen include {}", id.raw());
        Ok(())
    }
}
