use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::persona::ScoringTable;
use crate::util::{data_dir, expand_tilde};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollsConfig {
    pub version: u32,
    /// Path to a variant scoring table (JSON). Builtin table when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_table: Option<String>,
}

impl Default for ScrollsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            scoring_table: None,
        }
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.json")
}

/// Missing or unreadable config falls back to defaults.
pub fn read_config(dir: &Path) -> ScrollsConfig {
    let path = config_path(dir);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return ScrollsConfig::default(),
        Err(e) => {
            tracing::warn!("Cannot read config at {}, using defaults: {}", path.display(), e);
            return ScrollsConfig::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
        ScrollsConfig::default()
    })
}

pub fn write_config(dir: &Path, config: &ScrollsConfig) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path(dir), json)?;
    Ok(())
}

/// The scoring table named by `config`, or the builtin one if it is unset
/// or fails to load.
pub fn resolve_scoring_table(config: &ScrollsConfig) -> ScoringTable {
    let Some(ref path) = config.scoring_table else {
        return ScoringTable::builtin().clone();
    };
    let path = expand_tilde(path);
    let loaded = std::fs::read_to_string(&path)
        .map_err(AppError::from)
        .and_then(|json| Ok(ScoringTable::from_json(&json)?));
    match loaded {
        Ok(table) => {
            tracing::info!("Using scoring table from {}", path);
            table
        }
        Err(e) => {
            tracing::warn!("Falling back to builtin scoring table, {} failed: {}", path, e);
            ScoringTable::builtin().clone()
        }
    }
}

#[tauri::command]
pub async fn load_config() -> Option<ScrollsConfig> {
    let dir = data_dir()?;
    tokio::task::spawn_blocking(move || read_config(&dir))
        .await
        .ok()
}

/// Points the app at a variant scoring table, or back at the builtin one
/// with `None`. Takes effect on next launch.
#[tauri::command]
pub async fn save_config(scoring_table: Option<String>) -> Result<ScrollsConfig> {
    let dir = data_dir()
        .ok_or_else(|| AppError::Custom("Cannot find home directory".into()))?;

    tokio::task::spawn_blocking(move || -> Result<ScrollsConfig> {
        let mut config = read_config(&dir);
        config.version = CONFIG_VERSION;
        config.scoring_table = scoring_table.filter(|p| !p.trim().is_empty());
        write_config(&dir, &config)?;
        Ok(config)
    })
    .await
    .map_err(|e| AppError::Custom(format!("Background task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{calculate_persona_scores_with, PersonaCategory, SurveyAnswers};

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_config(dir.path()), ScrollsConfig::default());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScrollsConfig {
            version: CONFIG_VERSION,
            scoring_table: Some("/tmp/variant-b.json".into()),
        };
        write_config(dir.path(), &config).unwrap();
        let raw = std::fs::read_to_string(config_path(dir.path())).unwrap();
        assert!(raw.contains("scoringTable"));
        assert_eq!(read_config(dir.path()), config);
    }

    #[test]
    fn test_variant_table_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let mut variant = ScoringTable::builtin().clone();
        variant.questions[0].answers[0].points.seeker = 4;
        let table_path = dir.path().join("variant.json");
        std::fs::write(&table_path, serde_json::to_string(&variant).unwrap()).unwrap();

        let config = ScrollsConfig {
            scoring_table: Some(table_path.to_string_lossy().to_string()),
            ..Default::default()
        };
        let resolved = resolve_scoring_table(&config);
        assert_eq!(resolved, variant);

        // question1's first answer now gives seeker 4 instead of 3
        let answers = SurveyAnswers {
            question1: "I'm just starting to explore faith.".into(),
            ..Default::default()
        };
        let wheel = calculate_persona_scores_with(&resolved, &answers);
        assert_eq!(wheel.primary_persona, PersonaCategory::Seeker);
        assert_eq!(wheel.scores[0].score, 4);
        let builtin = calculate_persona_scores_with(ScoringTable::builtin(), &answers);
        assert_eq!(builtin.scores[0].score, 3);
    }

    #[test]
    fn test_unreadable_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(config_path(dir.path()), b"{\"version\": 1, \"scoringTable\": \"\xFF\"}").unwrap();
        assert_eq!(read_config(dir.path()), ScrollsConfig::default());
    }

    #[test]
    fn test_bad_variant_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let table_path = dir.path().join("broken.json");
        std::fs::write(&table_path, r#"{"questions": []}"#).unwrap();

        let config = ScrollsConfig {
            scoring_table: Some(table_path.to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(&resolve_scoring_table(&config), ScoringTable::builtin());

        let missing = ScrollsConfig {
            scoring_table: Some(dir.path().join("nope.json").to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(&resolve_scoring_table(&missing), ScoringTable::builtin());
    }
}
