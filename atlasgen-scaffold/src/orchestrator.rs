//! The pipeline state machine composing the stages.

use std::path::{Path, PathBuf};

use atlasgen_core::OverwritePolicy;

use crate::{
    cancel::CancelToken,
    error::{Error, Result},
    module_id::ModuleIdentifier,
    settings::{self, DEFAULT_SETTINGS_FILE, PatchOutcome},
    stage::{Stage, run_stage},
};

/// States of one scaffolding run.
///
/// `Failed` is terminal and reachable from any non-terminal state. The
/// UI transition is elided when the run is configured to skip UI files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    NotStarted,
    StructureCreated,
    FilesGenerated,
    UiGenerated,
    ManifestPatched,
    Done,
    Failed,
}

/// Configuration for a scaffolding run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Generate no UI-layer files (no view model, activity, layout,
    /// strings, or test stub).
    pub skip_ui: bool,
    /// Settings file to register the module in. Defaults to
    /// `settings.gradle.kts` under the project root.
    pub settings_path: Option<PathBuf>,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub module: String,
    pub stages_run: Vec<&'static str>,
    pub files_written: usize,
    pub files_skipped: usize,
    pub settings: PatchOutcome,
}

/// Runs the generation stages in order and registers the module last.
///
/// Failure policy: an ordinary stage failure halts the pipeline and leaves
/// the partial module in place for inspection, wrapped with the stage
/// name. External cancellation instead rolls back by deleting the module
/// root this run created, so an interrupted invocation leaves no trace.
pub struct Orchestrator {
    root: PathBuf,
    options: ScaffoldOptions,
    cancel: CancelToken,
    state: PipelineState,
    created_root: bool,
}

impl Orchestrator {
    pub fn new(root: impl Into<PathBuf>, options: ScaffoldOptions) -> Self {
        Self {
            root: root.into(),
            options,
            cancel: CancelToken::new(),
            state: PipelineState::NotStarted,
            created_root: false,
        }
    }

    /// Use an externally shared cancel token (e.g. armed by a ctrl-c
    /// handler).
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    fn settings_path(&self) -> PathBuf {
        self.options
            .settings_path
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_SETTINGS_FILE))
    }

    /// Run the full pipeline for `id`.
    pub fn run(&mut self, id: &ModuleIdentifier) -> Result<ScaffoldReport> {
        self.state = PipelineState::NotStarted;
        self.created_root = false;

        match self.execute(id) {
            Ok(report) => Ok(report),
            Err(err) => {
                self.state = PipelineState::Failed;
                Err(self.recover(id, err))
            }
        }
    }

    fn execute(&mut self, id: &ModuleIdentifier) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport {
            module: id.raw().to_string(),
            stages_run: Vec::new(),
            files_written: 0,
            files_skipped: 0,
            settings: PatchOutcome::ManifestMissing,
        };

        self.exec_stage(Stage::Structure, id, &mut report)?;
        self.state = PipelineState::StructureCreated;

        self.exec_stage(Stage::SourceFiles, id, &mut report)?;
        self.state = PipelineState::FilesGenerated;

        if !self.options.skip_ui {
            self.exec_stage(Stage::UiFiles, id, &mut report)?;
            self.state = PipelineState::UiGenerated;
        }

        // Registration is always the last step, whether or not UI
        // generation ran.
        if self.cancel.is_cancelled() {
            return Err(Error::Interrupted {
                stage: "settings",
                cleaned: false,
            });
        }
        report.settings =
            settings::include(&self.settings_path(), id).map_err(|e| Error::StageFailed {
                stage: "settings",
                source: Box::new(e),
            })?;
        self.state = PipelineState::ManifestPatched;

        self.state = PipelineState::Done;
        Ok(report)
    }

    fn exec_stage(
        &mut self,
        stage: Stage,
        id: &ModuleIdentifier,
        report: &mut ScaffoldReport,
    ) -> Result<()> {
        // The structure stage refuses a pre-existing module root, so any
        // root on disk once it starts was created by this run. Recorded
        // before the stage executes: cancellation can land between the
        // individual directory creations, and the rollback in `recover`
        // must still cover whatever the aborted stage left behind.
        if stage == Stage::Structure {
            self.created_root = !self.root.join(id.raw()).exists();
        }

        let outcome = run_stage(stage, &self.root, id, OverwritePolicy::Fail, &self.cancel)
            .map_err(|e| match e {
                interrupted @ Error::Interrupted { .. } => interrupted,
                other => Error::StageFailed {
                    stage: stage.name(),
                    source: Box::new(other),
                },
            })?;

        report.stages_run.push(stage.name());
        report.files_written += outcome.files_written;
        report.files_skipped += outcome.files_skipped;
        Ok(())
    }

    /// On interruption, remove the module root, but only if this run
    /// created it. Ordinary failures are passed through untouched so the
    /// partial module stays inspectable.
    fn recover(&self, id: &ModuleIdentifier, err: Error) -> Error {
        match err {
            Error::Interrupted { stage, .. } => {
                let module_dir = self.root.join(id.raw());
                let cleaned = self.created_root && module_dir.exists() && remove_tree(&module_dir);
                Error::Interrupted { stage, cleaned }
            }
            other => other,
        }
    }
}

fn remove_tree(path: &Path) -> bool {
    std::fs::remove_dir_all(path).is_ok()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn login() -> ModuleIdentifier {
        ModuleIdentifier::parse("feature-login").unwrap()
    }

    #[test]
    fn test_state_machine_reaches_done() {
        let temp = TempDir::new().unwrap();
        let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default());

        orchestrator.run(&login()).unwrap();

        assert_eq!(orchestrator.state(), PipelineState::Done);
    }

    #[test]
    fn test_skip_ui_elides_ui_stage() {
        let temp = TempDir::new().unwrap();
        let mut orchestrator = Orchestrator::new(
            temp.path(),
            ScaffoldOptions {
                skip_ui: true,
                ..Default::default()
            },
        );

        let report = orchestrator.run(&login()).unwrap();

        assert_eq!(report.stages_run, vec!["structure", "source-files"]);
        assert_eq!(orchestrator.state(), PipelineState::Done);
    }

    #[test]
    fn test_interruption_after_structure_rolls_back_module_root() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&settings, "rootProject.name = \"atlas\"\n").unwrap();

        let cancel = CancelToken::new();
        let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default())
            .with_cancel_token(cancel.clone());
        let id = login();

        // Drive the pipeline the way run() does: the structure stage
        // completes, then cancellation arrives before the next stage.
        let mut report = ScaffoldReport {
            module: id.raw().to_string(),
            stages_run: Vec::new(),
            files_written: 0,
            files_skipped: 0,
            settings: PatchOutcome::ManifestMissing,
        };
        orchestrator
            .exec_stage(Stage::Structure, &id, &mut report)
            .unwrap();
        assert!(temp.path().join("feature-login").exists());

        cancel.cancel();
        let err = orchestrator
            .exec_stage(Stage::SourceFiles, &id, &mut report)
            .unwrap_err();
        let err = orchestrator.recover(&id, err);

        assert!(matches!(
            err,
            Error::Interrupted {
                stage: "source-files",
                cleaned: true
            }
        ));
        assert!(!temp.path().join("feature-login").exists());
        assert_eq!(
            std::fs::read_to_string(&settings).unwrap(),
            "rootProject.name = \"atlas\"\n"
        );
    }

    #[test]
    fn test_interruption_during_structure_rolls_back_module_root() {
        let temp = TempDir::new().unwrap();
        let settings = temp.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&settings, "rootProject.name = \"atlas\"\n").unwrap();

        let cancel = CancelToken::new();
        let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default())
            .with_cancel_token(cancel.clone());
        let id = login();

        let mut report = ScaffoldReport {
            module: id.raw().to_string(),
            stages_run: Vec::new(),
            files_written: 0,
            files_skipped: 0,
            settings: PatchOutcome::ManifestMissing,
        };

        // Cancellation lands while the structure stage is creating the
        // skeleton: the stage aborts partway, with some of the
        // directories already on disk.
        cancel.cancel();
        let err = orchestrator
            .exec_stage(Stage::Structure, &id, &mut report)
            .unwrap_err();
        std::fs::create_dir_all(temp.path().join("feature-login/src/main")).unwrap();

        let err = orchestrator.recover(&id, err);

        assert!(matches!(
            err,
            Error::Interrupted {
                stage: "structure",
                cleaned: true
            }
        ));
        assert!(!temp.path().join("feature-login").exists());
        assert_eq!(
            std::fs::read_to_string(&settings).unwrap(),
            "rootProject.name = \"atlas\"\n"
        );
    }

    #[test]
    fn test_interruption_never_deletes_a_preexisting_module() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("feature-login")).unwrap();

        let cancel = CancelToken::new();
        cancel.cancel();
        let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default())
            .with_cancel_token(cancel.clone());

        // Not interrupted: the structure precondition fires first, and
        // the existing module stays put.
        let err = orchestrator.run(&login()).unwrap_err();

        assert!(matches!(err, Error::StageFailed { .. }));
        assert!(temp.path().join("feature-login").exists());
    }

    #[test]
    fn test_failure_state_is_terminal_and_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("feature-login")).unwrap();
        let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default());

        let err = orchestrator.run(&login()).unwrap_err();

        assert_eq!(orchestrator.state(), PipelineState::Failed);
        match err {
            Error::StageFailed { stage, source } => {
                assert_eq!(stage, "structure");
                assert!(matches!(*source, Error::ModuleAlreadyExists { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
