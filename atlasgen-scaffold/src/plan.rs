//! Planning of the module skeleton.
//!
//! Planning is total and touches no filesystem state: given a project root
//! and a validated identifier it computes every directory and every
//! `(relative path, template)` pair the skeleton needs.

use std::path::{Path, PathBuf};

use crate::{module_id::ModuleIdentifier, stage::Stage};

/// Package root the feature sources live under, relative to the module dir.
const JAVA_SOURCE_ROOT: &str = "src/main/java/com/sword/atlas/feature";
/// Unit-test counterpart of [`JAVA_SOURCE_ROOT`].
const TEST_SOURCE_ROOT: &str = "src/test/java/com/sword/atlas/feature";
/// Instrumented-test counterpart of [`JAVA_SOURCE_ROOT`].
const ANDROID_TEST_SOURCE_ROOT: &str = "src/androidTest/java/com/sword/atlas/feature";

/// One file the skeleton contains: where it goes and which template fills it.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path relative to the module directory.
    pub relative_path: PathBuf,
    /// Registered template id that renders this file.
    pub template: &'static str,
    /// Stage that writes this file.
    pub stage: Stage,
}

/// The computed skeleton for one module: directories plus planned files.
#[derive(Debug, Clone)]
pub struct ModulePlan {
    module_dir: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<PlannedFile>,
}

impl ModulePlan {
    /// Compute the full skeleton for `id` under `root`.
    pub fn new(root: &Path, id: &ModuleIdentifier) -> Self {
        let module_dir = root.join(id.raw());
        let pkg = Path::new(JAVA_SOURCE_ROOT).join(id.slug());

        let relative_dirs: Vec<PathBuf> = vec![
            PathBuf::from("src/main"),
            pkg.join("data/api"),
            pkg.join("data/model"),
            pkg.join("data/repository"),
            pkg.join("domain/usecase"),
            pkg.join("domain/model"),
            pkg.join("ui/activity"),
            pkg.join("ui/fragment"),
            pkg.join("ui/viewmodel"),
            PathBuf::from("src/main/res/layout"),
            PathBuf::from("src/main/res/values"),
            PathBuf::from("src/main/res/drawable"),
            Path::new(TEST_SOURCE_ROOT).join(id.slug()),
            Path::new(ANDROID_TEST_SOURCE_ROOT).join(id.slug()),
        ];

        let mut directories = vec![module_dir.clone()];
        directories.extend(relative_dirs.into_iter().map(|d| module_dir.join(d)));

        let symbol = id.symbol_name();
        let files = vec![
            // Stage 1: structure
            planned("build.gradle.kts", "build-gradle", Stage::Structure),
            // Stage 2: source files
            planned(
                "src/main/AndroidManifest.xml",
                "android-manifest",
                Stage::SourceFiles,
            ),
            planned("proguard-rules.pro", "proguard-rules", Stage::SourceFiles),
            planned("consumer-rules.pro", "consumer-rules", Stage::SourceFiles),
            planned(
                pkg.join(format!("data/api/{symbol}Api.kt")),
                "api-interface",
                Stage::SourceFiles,
            ),
            planned(
                pkg.join(format!("data/model/{symbol}Response.kt")),
                "response-model",
                Stage::SourceFiles,
            ),
            planned(
                pkg.join(format!("data/repository/{symbol}Repository.kt")),
                "repository",
                Stage::SourceFiles,
            ),
            // Stage 3: UI files
            planned(
                pkg.join(format!("ui/viewmodel/{symbol}ViewModel.kt")),
                "view-model",
                Stage::UiFiles,
            ),
            planned(
                pkg.join(format!("ui/activity/{symbol}Activity.kt")),
                "activity",
                Stage::UiFiles,
            ),
            planned(
                format!("src/main/res/layout/activity_{}.xml", id.resource_name()),
                "layout",
                Stage::UiFiles,
            ),
            planned("src/main/res/values/strings.xml", "strings", Stage::UiFiles),
            planned(
                Path::new(TEST_SOURCE_ROOT)
                    .join(id.slug())
                    .join(format!("{symbol}ViewModelTest.kt")),
                "view-model-test",
                Stage::UiFiles,
            ),
        ];

        Self {
            module_dir,
            directories,
            files,
        }
    }

    /// The module's root directory.
    pub fn module_dir(&self) -> &Path {
        &self.module_dir
    }

    /// Every directory the skeleton needs, module root first.
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Every planned file, in generation order.
    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// Planned files belonging to `stage`, in generation order.
    pub fn files_for(&self, stage: Stage) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(move |f| f.stage == stage)
    }

    /// The absolute target path of a planned file.
    pub fn target_path(&self, file: &PlannedFile) -> PathBuf {
        self.module_dir.join(&file.relative_path)
    }
}

fn planned(path: impl Into<PathBuf>, template: &'static str, stage: Stage) -> PlannedFile {
    PlannedFile {
        relative_path: path.into(),
        template,
        stage,
    }
}
