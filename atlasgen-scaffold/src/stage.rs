//! The independently invocable generation stages.

use std::{fmt, path::Path};

use atlasgen_core::{OverwritePolicy, WriteResult, ensure_dir, write_file};
use atlasgen_templates::render;

use crate::{
    cancel::CancelToken,
    error::{Error, Result},
    module_id::ModuleIdentifier,
    plan::ModulePlan,
};

/// One phase of the scaffolding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Directory skeleton and build descriptor. Requires the module
    /// directory to not exist yet.
    Structure,
    /// Data-layer sources and module metadata files.
    SourceFiles,
    /// View model, activity, resources, and the unit-test stub.
    UiFiles,
}

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Stage::Structure => "structure",
            Stage::SourceFiles => "source-files",
            Stage::UiFiles => "ui-files",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Stage::Structure => "create the directory skeleton and build descriptor",
            Stage::SourceFiles => "generate data-layer source files",
            Stage::UiFiles => "generate UI source and resource files",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of what a stage actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageOutcome {
    pub files_written: usize,
    pub files_skipped: usize,
}

/// Run a single stage for `id` under `root`.
///
/// Stage preconditions are checked here: `structure` refuses a module
/// directory that already exists, the later stages refuse one that does
/// not. The cancel token is observed before every file write, so an
/// interrupted stage never leaves a half-written file behind.
pub fn run_stage(
    stage: Stage,
    root: &Path,
    id: &ModuleIdentifier,
    policy: OverwritePolicy,
    cancel: &CancelToken,
) -> Result<StageOutcome> {
    let plan = ModulePlan::new(root, id);

    match stage {
        Stage::Structure => {
            if plan.module_dir().exists() {
                return Err(Error::ModuleAlreadyExists {
                    path: plan.module_dir().to_path_buf(),
                });
            }
        }
        Stage::SourceFiles | Stage::UiFiles => {
            if !plan.module_dir().exists() {
                return Err(Error::ModuleNotFound {
                    path: plan.module_dir().to_path_buf(),
                });
            }
        }
    }

    let mut outcome = StageOutcome::default();

    if stage == Stage::Structure {
        for dir in plan.directories() {
            if cancel.is_cancelled() {
                return Err(Error::Interrupted {
                    stage: stage.name(),
                    cleaned: false,
                });
            }
            ensure_dir(dir)?;
        }
    }

    let ctx = id.render_context();
    for file in plan.files_for(stage) {
        if cancel.is_cancelled() {
            return Err(Error::Interrupted {
                stage: stage.name(),
                cleaned: false,
            });
        }

        let content = render(file.template, &ctx)?;
        match write_file(&plan.target_path(file), &content, policy)? {
            WriteResult::Written => outcome.files_written += 1,
            WriteResult::Skipped => outcome.files_skipped += 1,
        }
    }

    Ok(outcome)
}
