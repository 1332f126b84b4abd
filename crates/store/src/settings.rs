//! Export settings
//!
//! Layout geometry, PDF options and sink directories, persisted as JSON.
//! A missing file means defaults; an unreadable one logs a warning and
//! falls back to defaults.

use crate::pdf::PdfExportOptions;
use crate::Result;
use layout_engine::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything the exporter can be configured with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportSettings {
    pub layout: LayoutConfig,
    pub pdf: PdfExportOptions,
    pub directories: DirectorySettings,
}

/// Local roots standing in for the platform directories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectorySettings {
    pub documents: PathBuf,
    pub external_storage: PathBuf,
    /// Where browser-style downloads land
    pub downloads: PathBuf,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            documents: PathBuf::from("Documents"),
            external_storage: PathBuf::from("ExternalStorage"),
            downloads: PathBuf::from("Downloads"),
        }
    }
}

impl DirectorySettings {
    /// Put all three roots under one base directory
    pub fn under(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            documents: base.join("Documents"),
            external_storage: base.join("ExternalStorage"),
            downloads: base.join("Downloads"),
        }
    }
}

/// Loads and saves [`ExportSettings`]
pub struct SettingsManager {
    settings_path: PathBuf,
    current: ExportSettings,
}

impl SettingsManager {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: ExportSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn current(&self) -> &ExportSettings {
        &self.current
    }

    pub fn set(&mut self, settings: ExportSettings) {
        self.current = settings;
    }

    pub async fn load(&mut self) -> Result<&ExportSettings> {
        self.current = if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    /// Load synchronously (for use before a runtime exists)
    pub fn load_sync(&mut self) -> Result<&ExportSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }
}

fn parse_or_default(content: &str) -> ExportSettings {
    match serde_json::from_str::<ExportSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse export settings, using defaults: {}", e);
            ExportSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::PageSize;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = SettingsManager::new(dir.path().join("export.json"));
        let settings = manager.load().await.unwrap();
        assert_eq!(*settings, ExportSettings::default());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("export.json");

        let mut settings = ExportSettings::default();
        settings.layout = LayoutConfig::letter().with_margins(20.0);
        settings.pdf = PdfExportOptions::new().with_author("Exam Cell");
        settings.directories = DirectorySettings::under(dir.path());

        let mut manager = SettingsManager::new(&path);
        manager.set(settings.clone());
        manager.save().await.unwrap();

        let mut reloaded = SettingsManager::new(&path);
        assert_eq!(*reloaded.load().await.unwrap(), settings);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(
            &path,
            r#"{"layout": {"pageSize": {"kind": "letter"}, "marginTop": 25}}"#,
        )
        .unwrap();

        let mut manager = SettingsManager::new(&path);
        let settings = manager.load_sync().unwrap();
        assert_eq!(settings.layout.page_size, PageSize::Letter);
        assert_eq!(settings.layout.margin_top, 25.0);
        assert_eq!(settings.layout.margin_left, 15.0);
        assert!(settings.pdf.compress);
        assert_eq!(settings.directories, DirectorySettings::default());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = SettingsManager::new(&path);
        assert_eq!(*manager.load_sync().unwrap(), ExportSettings::default());
    }
}
