//! Display-language resolution and persistence.
//!
//! The active locale resolves from the persisted preference, then the system
//! language, then a fixed default. Persistence is one small file under the
//! platform config directory; last write wins.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parses an exact stored code. Anything other than `en`/`zh` is invalid.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to persist locale to {path}: {source}")]
    Persist {
        path: String,
        source: std::io::Error,
    },
}

/// Resolves the active locale.
///
/// Order: stored preference if it is exactly a supported code, else system
/// language tag by prefix (`zh*` maps to `Zh`), else `En`. Total: always
/// returns a valid locale.
pub fn resolve(stored: Option<&str>, system: Option<&str>) -> Locale {
    if let Some(code) = stored {
        if let Some(locale) = Locale::from_code(code) {
            return locale;
        }
    }

    if let Some(tag) = system {
        if tag.to_lowercase().starts_with("zh") {
            return Locale::Zh;
        }
    }

    Locale::En
}

/// Reads the system language tag from the usual environment variables.
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Explicit settings object owning the persisted locale preference.
///
/// Replaces ambient global storage: callers construct one, resolve through
/// it, and `set` returns the new resolved state.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    path: PathBuf,
}

impl LocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<config_dir>/skill-router/locale`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(".skill-router/locale"),
            |d| d.join("skill-router/locale"),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw stored preference, if the file exists. Not validated.
    pub fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Resolves the active locale from the stored preference and the system
    /// language.
    pub fn resolve(&self) -> Locale {
        resolve(self.load().as_deref(), system_language().as_deref())
    }

    /// Persists a new preference and returns the new resolved state.
    pub fn set(&self, locale: Locale) -> Result<Locale, LocaleError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| LocaleError::Persist {
                path: self.path.display().to_string(),
                source,
            })?;
        }
        std::fs::write(&self.path, locale.as_str()).map_err(|source| LocaleError::Persist {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(locale)
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
