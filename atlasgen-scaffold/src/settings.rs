//! Idempotent patching of the project-wide `settings.gradle.kts`.

use std::{fs, io::Write, path::Path};

use crate::{
    error::{Error, Result},
    module_id::ModuleIdentifier,
};

/// Default settings file name at the project root.
pub const DEFAULT_SETTINGS_FILE: &str = "settings.gradle.kts";

/// What patching the settings file amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The inclusion record was appended.
    Added,
    /// The record was already present; nothing was written.
    AlreadyIncluded,
    /// No settings file exists; the module was not registered.
    ManifestMissing,
}

/// The literal inclusion record for a module.
pub fn include_line(id: &ModuleIdentifier) -> String {
    format!("include(\":{}\")", id.raw())
}

/// Register `id` in the settings file at `path`.
///
/// Append-only: existing content is never reformatted or reordered, and a
/// record that is already present is left alone. A missing settings file
/// is an outcome for the caller to warn about, not an error.
pub fn include(path: &Path, id: &ModuleIdentifier) -> Result<PatchOutcome> {
    if !path.exists() {
        return Ok(PatchOutcome::ManifestMissing);
    }

    let content = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let line = include_line(id);
    if content.contains(&line) {
        return Ok(PatchOutcome::AlreadyIncluded);
    }

    let mut record = String::new();
    if !content.is_empty() && !content.ends_with('\n') {
        record.push('\n');
    }
    record.push_str(&line);
    record.push('\n');

    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    file.write_all(record.as_bytes()).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(PatchOutcome::Added)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn login() -> ModuleIdentifier {
        ModuleIdentifier::parse("feature-login").unwrap()
    }

    #[test]
    fn test_include_line_shape() {
        assert_eq!(include_line(&login()), "include(\":feature-login\")");
    }

    #[test]
    fn test_include_appends_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "rootProject.name = \"atlas\"\n").unwrap();

        let outcome = include(&path, &login()).unwrap();

        assert_eq!(outcome, PatchOutcome::Added);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "rootProject.name = \"atlas\"\ninclude(\":feature-login\")\n"
        );
    }

    #[test]
    fn test_include_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "").unwrap();

        include(&path, &login()).unwrap();
        let before = fs::read_to_string(&path).unwrap();
        let outcome = include(&path, &login()).unwrap();

        assert_eq!(outcome, PatchOutcome::AlreadyIncluded);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_include_preserves_prefix_without_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_SETTINGS_FILE);
        fs::write(&path, "include(\":app\")").unwrap();

        include(&path, &login()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "include(\":app\")\ninclude(\":feature-login\")\n"
        );
    }

    #[test]
    fn test_missing_settings_is_a_warning_outcome() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_SETTINGS_FILE);

        let outcome = include(&path, &login()).unwrap();

        assert_eq!(outcome, PatchOutcome::ManifestMissing);
        assert!(!path.exists());
    }
}
