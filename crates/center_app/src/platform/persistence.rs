use std::fs;
use std::io::Write;
use std::path::PathBuf;

use center_core::TemplateStore;
use center_logging::{center_error, center_info, center_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

const TEMPLATES_FILENAME: &str = ".center_templates.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedTemplates {
    entries: Vec<String>,
}

/// Template snapshot on disk as RON, written atomically via a tempfile
/// rename. Read failures degrade to "nothing persisted"; write failures
/// are logged and swallowed.
pub struct RonTemplateStore {
    dir: PathBuf,
}

impl RonTemplateStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(TEMPLATES_FILENAME)
    }

    fn write_atomic(&self, content: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path();
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|err| err.error)?;
        Ok(())
    }
}

impl TemplateStore for RonTemplateStore {
    fn load(&self) -> Option<Vec<String>> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return None;
            }
            Err(err) => {
                center_warn!("Failed to read persisted templates from {:?}: {}", path, err);
                return None;
            }
        };

        match ron::from_str::<PersistedTemplates>(&content) {
            Ok(state) => {
                center_info!("Loaded persisted templates from {:?}", path);
                Some(state.entries)
            }
            Err(err) => {
                center_warn!("Failed to parse persisted templates from {:?}: {}", path, err);
                None
            }
        }
    }

    fn save(&self, entries: &[String]) {
        let state = PersistedTemplates {
            entries: entries.to_vec(),
        };
        let pretty = ron::ser::PrettyConfig::new();
        let content = match ron::ser::to_string_pretty(&state, pretty) {
            Ok(text) => text,
            Err(err) => {
                center_error!("Failed to serialize templates: {}", err);
                return;
            }
        };
        if let Err(err) = self.write_atomic(&content) {
            center_error!(
                "Failed to write persisted templates to {:?}: {}",
                self.dir,
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips_the_full_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonTemplateStore::new(dir.path().to_path_buf());

        let entries = vec![
            "first template".to_string(),
            "second template".to_string(),
        ];
        store.save(&entries);

        assert_eq!(store.load(), Some(entries));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonTemplateStore::new(dir.path().to_path_buf());

        assert_eq!(store.load(), None);
    }

    #[test]
    fn unparseable_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TEMPLATES_FILENAME), "not ron at all {{{").unwrap();
        let store = RonTemplateStore::new(dir.path().to_path_buf());

        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = RonTemplateStore::new(dir.path().to_path_buf());

        store.save(&["old".to_string()]);
        store.save(&["new".to_string(), "order".to_string()]);

        assert_eq!(
            store.load(),
            Some(vec!["new".to_string(), "order".to_string()])
        );
    }
}
