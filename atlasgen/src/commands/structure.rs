use std::path::PathBuf;

use atlasgen_core::OverwritePolicy;
use atlasgen_scaffold::{CancelToken, ModuleIdentifier, Stage, run_stage};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct StructureCommand {
    /// Module name, e.g. feature-login
    pub name: String,

    /// Project root to scaffold into
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl StructureCommand {
    pub fn run(&self) -> Result<()> {
        let id = ModuleIdentifier::parse(&self.name).unwrap_or_exit();

        run_stage(
            Stage::Structure,
            &self.root,
            &id,
            OverwritePolicy::Fail,
            &CancelToken::new(),
        )
        .unwrap_or_exit();

        println!("Created skeleton for {}", id.raw());
        println!("Next: atlasgen files {}", id.raw());
        Ok(())
    }
}
