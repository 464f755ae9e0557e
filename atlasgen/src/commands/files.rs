use std::path::PathBuf;

use atlasgen_core::OverwritePolicy;
use atlasgen_scaffold::{CancelToken, ModuleIdentifier, Stage, run_stage};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FilesCommand {
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

impl FilesCommand {
    pub fn run(&self) -> Result<()> {
        let id = ModuleIdentifier::parse(&self.name).unwrap_or_exit();

        let outcome = run_stage(
            Stage::SourceFiles,
            &self.root,
            &id,
            overwrite_policy(self.overwrite, self.skip_existing),
            &CancelToken::new(),
        )
        .unwrap_or_exit();

        println!(
            "Generated data-layer files for {} ({} written, {} skipped)",
            id.raw(),
            outcome.files_written,
            outcome.files_skipped
        );
        println!("Next: atlasgen ui {}", id.raw());
        Ok(())
    }
}

pub(crate) fn overwrite_policy(overwrite: bool, skip_existing: bool) -> OverwritePolicy {
    if overwrite {
        OverwritePolicy::Overwrite
    } else if skip_existing {
        OverwritePolicy::Skip
    } else {
        OverwritePolicy::Fail
    }
}
