use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

/// Flag holding the dark-mode toggle
pub const DARK_MODE: &str = "dark_mode";

/// Error type for preference writes
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Boolean preferences that outlive the session
pub trait PreferenceStore {
    /// `None` when the flag was never set
    fn get_flag(&self, name: &str) -> Option<bool>;
    fn set_flag(&mut self, name: &str, value: bool) -> Result<(), PrefsError>;
}

/// Flags kept in the `[flags]` table of `preferences.toml`. Edits go
/// through toml_edit so anything else in the file survives.
#[derive(Debug)]
pub struct TomlPreferences {
    path: PathBuf,
    doc: toml_edit::DocumentMut,
}

impl TomlPreferences {
    /// Open `preferences.toml` in `config_dir`. A missing file starts empty;
    /// a corrupt one is backed up as `.bak` and also starts empty.
    pub fn open(config_dir: &Path) -> Self {
        let path = config_dir.join("preferences.toml");
        let doc = match fs::read_to_string(&path) {
            Ok(text) => match text.parse::<toml_edit::DocumentMut>() {
                Ok(doc) => doc,
                Err(e) => {
                    let bak = path.with_extension("toml.bak");
                    let _ = fs::copy(&path, &bak);
                    warn!(
                        path = %path.display(),
                        backup = %bak.display(),
                        error = %e,
                        "could not parse preferences, starting fresh"
                    );
                    toml_edit::DocumentMut::new()
                }
            },
            Err(_) => toml_edit::DocumentMut::new(),
        };
        TomlPreferences { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<(), PrefsError> {
        let to_err = |source| PrefsError::WriteError {
            path: self.path.clone(),
            source,
        };
        let dir = self.path.parent().unwrap_or(Path::new("."));
        fs::create_dir_all(dir).map_err(to_err)?;
        // Write beside the target, then rename over it
        let mut tmp = NamedTempFile::new_in(dir).map_err(to_err)?;
        tmp.write_all(self.doc.to_string().as_bytes()).map_err(to_err)?;
        tmp.persist(&self.path).map_err(|e| to_err(e.error))?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferences {
    fn get_flag(&self, name: &str) -> Option<bool> {
        self.doc.get("flags")?.get(name)?.as_bool()
    }

    fn set_flag(&mut self, name: &str, value: bool) -> Result<(), PrefsError> {
        if !self.doc.get("flags").is_some_and(|item| item.is_table_like()) {
            self.doc["flags"] = toml_edit::Item::Table(toml_edit::Table::new());
        }
        self.doc["flags"][name] = toml_edit::value(value);
        self.write()
    }
}

/// In-memory flags; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    flags: HashMap<String, bool>,
}

impl PreferenceStore for MemoryPreferences {
    fn get_flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }

    fn set_flag(&mut self, name: &str, value: bool) -> Result<(), PrefsError> {
        self.flags.insert(name.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unset_flag_is_none() {
        let dir = TempDir::new().unwrap();
        let prefs = TomlPreferences::open(dir.path());
        assert_eq!(prefs.get_flag(DARK_MODE), None);
    }

    #[test]
    fn set_flag_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let mut prefs = TomlPreferences::open(dir.path());
        prefs.set_flag(DARK_MODE, true).unwrap();
        assert_eq!(prefs.get_flag(DARK_MODE), Some(true));

        let reopened = TomlPreferences::open(dir.path());
        assert_eq!(reopened.get_flag(DARK_MODE), Some(true));

        let mut reopened = reopened;
        reopened.set_flag(DARK_MODE, false).unwrap();
        assert_eq!(TomlPreferences::open(dir.path()).get_flag(DARK_MODE), Some(false));
    }

    #[test]
    fn creates_missing_config_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("rally");
        let mut prefs = TomlPreferences::open(&nested);
        prefs.set_flag(DARK_MODE, true).unwrap();
        assert!(nested.join("preferences.toml").exists());
    }

    #[test]
    fn set_flag_preserves_comments_and_other_keys() {
        let dir = TempDir::new().unwrap();
        let original = "# my prefs\n[flags]\n# night owl\ndark_mode = false\nother = true\n";
        fs::write(dir.path().join("preferences.toml"), original).unwrap();

        let mut prefs = TomlPreferences::open(dir.path());
        prefs.set_flag(DARK_MODE, true).unwrap();

        let written = fs::read_to_string(dir.path().join("preferences.toml")).unwrap();
        assert!(written.contains("# my prefs"));
        assert!(written.contains("# night owl"));
        assert!(written.contains("dark_mode = true"));
        assert!(written.contains("other = true"));
    }

    #[test]
    fn non_bool_value_reads_as_unset() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("preferences.toml"),
            "[flags]\ndark_mode = \"yes\"\n",
        )
        .unwrap();
        let prefs = TomlPreferences::open(dir.path());
        assert_eq!(prefs.get_flag(DARK_MODE), None);
    }

    #[test]
    fn corrupt_file_is_backed_up_and_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "[flags\ndark_mode = ").unwrap();
        let mut prefs = TomlPreferences::open(dir.path());
        assert_eq!(prefs.get_flag(DARK_MODE), None);
        assert!(dir.path().join("preferences.toml.bak").exists());

        prefs.set_flag(DARK_MODE, true).unwrap();
        assert_eq!(TomlPreferences::open(dir.path()).get_flag(DARK_MODE), Some(true));
    }

    #[test]
    fn memory_preferences_round_trip() {
        let mut prefs = MemoryPreferences::default();
        assert_eq!(prefs.get_flag(DARK_MODE), None);
        prefs.set_flag(DARK_MODE, true).unwrap();
        assert_eq!(prefs.get_flag(DARK_MODE), Some(true));
    }
}
