use std::path::PathBuf;

use atlasgen_scaffold::{
    CancelToken, Error, ModuleIdentifier, Orchestrator, PatchOutcome, ScaffoldOptions,
};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CreateCommand {
    /// Module name, e.g. feature-login
    pub name: String,

    /// Skip UI file generation (no view model, activity, layout, strings)
    #[arg(long)]
    pub skip_ui: bool,

    /// Project root to scaffold into
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Settings file to register the module in
    /// (defaults to <root>/settings.gradle.kts)
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl CreateCommand {
    pub fn run(&self) -> Result<()> {
        let id = ModuleIdentifier::parse(&self.name).unwrap_or_exit();

        let cancel = CancelToken::new();
        let handler_token = cancel.clone();
        ctrlc::set_handler(move || handler_token.cancel())
            .wrap_err("Failed to install interrupt handler")?;

        let options = ScaffoldOptions {
            skip_ui: self.skip_ui,
            settings_path: self.manifest.clone(),
        };
        let mut orchestrator = Orchestrator::new(&self.root, options).with_cancel_token(cancel);

        let report = match orchestrator.run(&id) {
            Ok(report) => report,
            Err(err @ Error::Interrupted { cleaned, .. }) => {
                eprintln!("{:?}", miette::Report::new(err));
                if cleaned {
                    eprintln!("Removed the partially created module '{}'", id.raw());
                }
                std::process::exit(1);
            }
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                eprintln!(
                    "The partial module was left in place; re-run the failed stage \
                     (e.g. 'atlasgen files {}') after resolving the conflict",
                    id.raw()
                );
                std::process::exit(1);
            }
        };

        println!(
            "Created module {} ({} files)",
            report.module, report.files_written
        );
        match report.settings {
            PatchOutcome::Added => println!("Registered {} in settings.gradle.kts", id.raw()),
            PatchOutcome::AlreadyIncluded => {
                println!("{} was already registered", id.raw())
            }
            PatchOutcome::ManifestMissing => {
                eprintln!("warning: settings.gradle.kts not found; module not registered")
            }
        }

        println!();
        println!("Next steps:");
        println!("  1. Sync the project");
        println!("  2. Adapt the generated sources to the feature's needs");
        if !self.skip_ui {
            println!("  3. Flesh out {}ViewModelTest", id.symbol_name());
            println!();
            println!("Route: /{}", id.slug());
            println!("Activity: {}Activity", id.symbol_name());
        }

        Ok(())
    }
}
