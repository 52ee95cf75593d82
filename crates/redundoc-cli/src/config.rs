//! Loading `redundoc.toml` and applying command-line overrides.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use redundoc_check::Settings;
use redundoc_score::SimilarityThreshold;

pub const CONFIG_FILENAME: &str = "redundoc.toml";

/// Loads settings from `explicit`, or from `redundoc.toml` in `dir`.
///
/// A missing default file means defaults. A missing explicit file, an
/// unreadable file or invalid contents are errors.
pub fn load_settings(explicit: Option<&Path>, dir: &Path) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        return parse_settings(&content, path);
    }

    let path = dir.join(CONFIG_FILENAME);
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content, &path),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::info!("no {CONFIG_FILENAME} in {}, using defaults", dir.display());
            Ok(Settings::default())
        }
        Err(error) => Err(error).with_context(|| format!("read config {}", path.display())),
    }
}

fn parse_settings(content: &str, path: &Path) -> Result<Settings> {
    let settings =
        toml::from_str(content).with_context(|| format!("parse config {}", path.display()))?;
    tracing::info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Settings given on the command line. They win over the file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Explicit threshold, validated on apply.
    pub threshold: Option<f64>,
    /// Use the strict threshold unless `threshold` is also given.
    pub strict: bool,
    /// Added to the configured stop words.
    pub extra_stop_words: Vec<String>,
    /// Start from an empty stop word list instead of the configured one.
    pub no_default_stop_words: bool,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: Settings) -> Result<Settings> {
        if self.strict {
            settings.threshold = SimilarityThreshold::STRICT;
        }
        if let Some(value) = self.threshold {
            settings.threshold = SimilarityThreshold::new(value).context("--threshold")?;
        }
        if self.no_default_stop_words {
            settings.stop_words.clear();
        }
        settings
            .stop_words
            .extend(self.extra_stop_words.iter().cloned());
        Ok(settings)
    }
}
