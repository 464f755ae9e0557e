//! Scaffolding pipeline for Atlas feature modules.
//!
//! A module is created in three independently invocable stages, composed
//! by [`Orchestrator`]:
//!
//! 1. `structure`: the directory skeleton and build descriptor.
//! 2. `source-files`: data-layer sources and module metadata files.
//! 3. `ui-files`: view model, activity, resources, and the test stub.
//!
//! After the stages run, the module is registered in the project's
//! `settings.gradle.kts`. Registration is always the final step, so
//! interrupt rollback never has to revert a settings append.

mod cancel;
mod error;
mod module_id;
mod orchestrator;
mod plan;
mod settings;
mod stage;

pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use module_id::{MODULE_PREFIX, ModuleIdentifier};
pub use orchestrator::{Orchestrator, PipelineState, ScaffoldOptions, ScaffoldReport};
pub use plan::{ModulePlan, PlannedFile};
pub use settings::{DEFAULT_SETTINGS_FILE, PatchOutcome, include, include_line};
pub use stage::{Stage, StageOutcome, run_stage};
