//! Core data contract shared with the skill-router server.
//!
//! The server is the source of truth; these records are transient, read-only
//! snapshots fetched per request.

use serde::{Deserialize, Serialize};

/// Where a skill is owned: directly by the user, or by a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSource {
    User,
    Plugin,
}

impl SkillSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Plugin => "plugin",
        }
    }
}

/// A named unit of installable capability.
///
/// `file_name` is unique among skills sharing the same `source`/`plugin_name`
/// pairing; the server enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Display name, taken from the skill file's frontmatter.
    pub name: String,
    pub description: String,
    /// Identifier used for enable/disable/delete operations.
    pub file_name: String,
    /// Server-relative location of the skill file.
    pub file_path: String,
    pub enabled: bool,
    pub source: SkillSource,
    /// Owning plugin; empty for user skills.
    #[serde(default)]
    pub plugin_name: String,
}

impl Skill {
    /// Returns the owning plugin name, if this is a plugin skill.
    pub fn plugin(&self) -> Option<&str> {
        if self.source == SkillSource::Plugin && !self.plugin_name.is_empty() {
            Some(&self.plugin_name)
        } else {
            None
        }
    }
}
