use std::path::PathBuf;

use atlasgen_scaffold::{DEFAULT_SETTINGS_FILE, ModuleIdentifier, PatchOutcome, include};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct IncludeCommand {
    /// Module name, e.g. feature-login
    pub name: String,

    /// Project root the settings file lives under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Settings file to register the module in
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl IncludeCommand {
    pub fn run(&self) -> Result<()> {
        let id = ModuleIdentifier::parse(&self.name).unwrap_or_exit();
        let settings_path = self
            .manifest
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_SETTINGS_FILE));

        match include(&settings_path, &id).unwrap_or_exit() {
            PatchOutcome::Added => {
                println!("Registered {} in {}", id.raw(), settings_path.display())
            }
            PatchOutcome::AlreadyIncluded => println!("{} is already registered", id.raw()),
            PatchOutcome::ManifestMissing => {
                eprintln!(
                    "warning: {} not found; module not registered",
                    settings_path.display()
                );
            }
        }

        Ok(())
    }
}
