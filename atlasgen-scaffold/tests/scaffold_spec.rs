//! End-to-end tests for the scaffolding pipeline.

use std::fs;
use std::path::Path;

use atlasgen_scaffold::{
    CancelToken, Error, ModuleIdentifier, Orchestrator, PatchOutcome, PipelineState,
    ScaffoldOptions,
};
use tempfile::TempDir;

const SETTINGS: &str = "settings.gradle.kts";

fn project_with_settings() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(SETTINGS),
        "rootProject.name = \"atlas\"\ninclude(\":app\")\n",
    )
    .unwrap();
    temp
}

fn login() -> ModuleIdentifier {
    ModuleIdentifier::parse("feature-login").unwrap()
}

fn module_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join("feature-login").join(rel)).unwrap()
}

#[test]
fn full_pipeline_scaffolds_login_module() {
    let temp = project_with_settings();
    let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default());

    let report = orchestrator.run(&login()).unwrap();

    assert_eq!(orchestrator.state(), PipelineState::Done);
    assert_eq!(report.settings, PatchOutcome::Added);
    assert_eq!(
        report.stages_run,
        vec!["structure", "source-files", "ui-files"]
    );

    let module_dir = temp.path().join("feature-login");
    assert!(
        module_dir
            .join("src/main/java/com/sword/atlas/feature/login/data/api")
            .is_dir()
    );

    let api = module_file(
        temp.path(),
        "src/main/java/com/sword/atlas/feature/login/data/api/LoginApi.kt",
    );
    assert!(api.contains("interface LoginApi"));

    let model = module_file(
        temp.path(),
        "src/main/java/com/sword/atlas/feature/login/data/model/LoginResponse.kt",
    );
    assert!(model.contains("data class LoginResponse"));

    let settings = fs::read_to_string(temp.path().join(SETTINGS)).unwrap();
    assert!(settings.contains("include(\":feature-login\")"));
}

#[test]
fn second_run_fails_at_structure_and_leaves_settings_unchanged() {
    let temp = project_with_settings();

    Orchestrator::new(temp.path(), ScaffoldOptions::default())
        .run(&login())
        .unwrap();
    let settings_after_first = fs::read_to_string(temp.path().join(SETTINGS)).unwrap();

    let err = Orchestrator::new(temp.path(), ScaffoldOptions::default())
        .run(&login())
        .unwrap_err();

    match err {
        Error::StageFailed { stage, source } => {
            assert_eq!(stage, "structure");
            assert!(matches!(*source, Error::ModuleAlreadyExists { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        fs::read_to_string(temp.path().join(SETTINGS)).unwrap(),
        settings_after_first,
        "no duplicate settings entry"
    );
}

#[test]
fn skip_ui_produces_no_ui_files_but_registers_module() {
    let temp = project_with_settings();
    let mut orchestrator = Orchestrator::new(
        temp.path(),
        ScaffoldOptions {
            skip_ui: true,
            ..Default::default()
        },
    );

    let report = orchestrator.run(&login()).unwrap();

    assert_eq!(report.settings, PatchOutcome::Added);
    let module_dir = temp.path().join("feature-login");
    assert!(
        module_dir
            .join("src/main/java/com/sword/atlas/feature/login/data/repository/LoginRepository.kt")
            .is_file()
    );
    assert!(
        !module_dir
            .join("src/main/res/layout/activity_login.xml")
            .exists()
    );
    assert!(
        !module_dir
            .join(
                "src/main/java/com/sword/atlas/feature/login/ui/viewmodel/LoginViewModel.kt"
            )
            .exists()
    );
    assert!(
        !module_dir
            .join("src/main/java/com/sword/atlas/feature/login/ui/activity/LoginActivity.kt")
            .exists()
    );
    let settings = fs::read_to_string(temp.path().join(SETTINGS)).unwrap();
    assert!(settings.contains("include(\":feature-login\")"));
}

#[test]
fn cancelled_run_leaves_no_module_and_untouched_settings() {
    let temp = project_with_settings();
    let settings_before = fs::read_to_string(temp.path().join(SETTINGS)).unwrap();

    let cancel = CancelToken::new();
    cancel.cancel();
    let mut orchestrator =
        Orchestrator::new(temp.path(), ScaffoldOptions::default()).with_cancel_token(cancel);

    let err = orchestrator.run(&login()).unwrap_err();

    assert!(matches!(err, Error::Interrupted { .. }));
    assert_eq!(orchestrator.state(), PipelineState::Failed);
    assert!(!temp.path().join("feature-login").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join(SETTINGS)).unwrap(),
        settings_before
    );
}

#[test]
fn invalid_identifier_fails_before_any_filesystem_write() {
    let temp = project_with_settings();

    let err = ModuleIdentifier::parse("login").unwrap_err();

    assert!(matches!(err, Error::InvalidIdentifier { .. }));
    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![SETTINGS], "only the settings file exists");
}

#[test]
fn missing_settings_file_is_nonfatal() {
    let temp = TempDir::new().unwrap();
    let mut orchestrator = Orchestrator::new(temp.path(), ScaffoldOptions::default());

    let report = orchestrator.run(&login()).unwrap();

    assert_eq!(report.settings, PatchOutcome::ManifestMissing);
    assert_eq!(orchestrator.state(), PipelineState::Done);
}

#[test]
fn explicit_settings_path_is_respected() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("config").join(SETTINGS);
    fs::create_dir_all(settings.parent().unwrap()).unwrap();
    fs::write(&settings, "").unwrap();

    let mut orchestrator = Orchestrator::new(
        temp.path(),
        ScaffoldOptions {
            settings_path: Some(settings.clone()),
            ..Default::default()
        },
    );
    let report = orchestrator.run(&login()).unwrap();

    assert_eq!(report.settings, PatchOutcome::Added);
    assert_eq!(
        fs::read_to_string(&settings).unwrap(),
        "include(\":feature-login\")\n"
    );
}
