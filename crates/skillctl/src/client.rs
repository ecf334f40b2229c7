//! HTTP client for the skill-router server.
//!
//! Every method maps one intent to one request against the `/api` base path
//! and normalizes the outcome. No retry, no caching, no local recovery; all
//! failures surface to the caller as a `ClientError`.

use serde::{Deserialize, Serialize};
use skill_core::types::Skill;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("cannot reach skill-router at {addr}\n  → start the server first\n  → or set SKILL_ROUTER_ADDR if it listens elsewhere")]
    ConnectionFailed { addr: String },

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("skill file already exists (pass --overwrite to replace it)")]
    AlreadyExists,

    #[error("{0}")]
    InstallRejected(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            let addr = e
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            ClientError::ConnectionFailed { addr }
        } else {
            ClientError::HttpError {
                status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                message: e.to_string(),
            }
        }
    }
}

/// Request payload for installing skills from a repository URL.
#[derive(Debug, Serialize)]
struct InstallRequest<'a> {
    url: &'a str,
}

/// Response from the install endpoint.
#[derive(Debug, Deserialize)]
struct InstallResponse {
    installed: u64,
}

/// Message shown when an install failure carries no diagnostic body.
const INSTALL_FALLBACK_MESSAGE: &str = "failed to install skills from URL";

/// HTTP client for a skill-router server.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    pub fn new(addr: &str) -> Self {
        Self {
            base_url: format!("{}/api", addr.trim_end_matches('/')),
            http: reqwest::Client::new(),
        }
    }

    /// Returns the API base URL (for error messages).
    pub fn addr(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into an error carrying the status and
    /// whatever diagnostic text the server sent.
    async fn handle_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        let message = message.trim();
        let message = if message.is_empty() {
            "unknown error".to_string()
        } else {
            message.to_string()
        };

        ClientError::HttpError { status, message }
    }

    /// Issue a body-less POST and expect nothing back.
    async fn post_empty(&self, url: String) -> Result<(), ClientError> {
        let response = self.http.post(&url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        Ok(())
    }

    /// List all skills.
    /// GET /api/skills
    pub async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let url = format!("{}/skills", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Enable a user skill.
    /// POST /api/skills/{fileName}/enable
    pub async fn enable_skill(&self, file_name: &str) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/skills/{}/enable",
            self.base_url,
            urlencoding::encode(file_name)
        ))
        .await
    }

    /// Disable a user skill.
    /// POST /api/skills/{fileName}/disable
    pub async fn disable_skill(&self, file_name: &str) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/skills/{}/disable",
            self.base_url,
            urlencoding::encode(file_name)
        ))
        .await
    }

    /// Delete a user skill from either registry.
    ///
    /// The `enabled` flag is always sent as a literal `true`/`false` so the
    /// server knows which registry holds the file.
    /// DELETE /api/skills/{fileName}?enabled={bool}
    pub async fn delete_skill(&self, file_name: &str, enabled: bool) -> Result<(), ClientError> {
        let url = format!(
            "{}/skills/{}?enabled={}",
            self.base_url,
            urlencoding::encode(file_name),
            enabled
        );
        let response = self.http.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        Ok(())
    }

    /// Upload a skill file.
    ///
    /// The one operation with status-specific branching: HTTP 409 means the
    /// file already exists and `overwrite` was false.
    /// POST /api/skills/upload (multipart: file, overwrite)
    pub async fn upload_skill(
        &self,
        file_name: &str,
        content: Vec<u8>,
        overwrite: bool,
    ) -> Result<(), ClientError> {
        let url = format!("{}/skills/upload", self.base_url);
        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("overwrite", if overwrite { "true" } else { "false" });

        let response = self.http.post(&url).multipart(form).send().await?;

        let status = response.status();
        if status.as_u16() == 409 {
            return Err(ClientError::AlreadyExists);
        }
        if !status.is_success() {
            return Err(self.handle_error(response).await);
        }

        Ok(())
    }

    /// Install skills from a repository URL; returns how many were installed.
    ///
    /// Failures carry the server's diagnostic body verbatim.
    /// POST /api/skills/install (JSON {url})
    pub async fn install_from_url(&self, url: &str) -> Result<u64, ClientError> {
        let endpoint = format!("{}/skills/install", self.base_url);
        let response = self
            .http
            .post(&endpoint)
            .json(&InstallRequest { url })
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.trim();
            return Err(ClientError::InstallRejected(if text.is_empty() {
                INSTALL_FALLBACK_MESSAGE.to_string()
            } else {
                text.to_string()
            }));
        }

        let body: InstallResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(body.installed)
    }

    /// Enable a skill owned by a plugin.
    /// POST /api/plugins/{pluginName}/skills/{skillName}/enable
    pub async fn enable_plugin_skill(
        &self,
        plugin_name: &str,
        skill_name: &str,
    ) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/plugins/{}/skills/{}/enable",
            self.base_url,
            urlencoding::encode(plugin_name),
            urlencoding::encode(skill_name)
        ))
        .await
    }

    /// Disable a skill owned by a plugin.
    /// POST /api/plugins/{pluginName}/skills/{skillName}/disable
    pub async fn disable_plugin_skill(
        &self,
        plugin_name: &str,
        skill_name: &str,
    ) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/plugins/{}/skills/{}/disable",
            self.base_url,
            urlencoding::encode(plugin_name),
            urlencoding::encode(skill_name)
        ))
        .await
    }

    /// Enable a plugin as a unit.
    /// POST /api/plugins/{pluginName}/enable
    pub async fn enable_plugin(&self, plugin_name: &str) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/plugins/{}/enable",
            self.base_url,
            urlencoding::encode(plugin_name)
        ))
        .await
    }

    /// Disable a plugin as a unit.
    /// POST /api/plugins/{pluginName}/disable
    pub async fn disable_plugin(&self, plugin_name: &str) -> Result<(), ClientError> {
        self.post_empty(format!(
            "{}/plugins/{}/disable",
            self.base_url,
            urlencoding::encode(plugin_name)
        ))
        .await
    }

    /// Delete a plugin and everything it owns.
    /// DELETE /api/plugins/{pluginName}
    pub async fn delete_plugin(&self, plugin_name: &str) -> Result<(), ClientError> {
        let url = format!(
            "{}/plugins/{}",
            self.base_url,
            urlencoding::encode(plugin_name)
        );
        let response = self.http.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Client construction tests ---

    #[test]
    fn client_trims_trailing_slash() {
        let client = Client::new("http://localhost:9527/");
        assert_eq!(client.base_url, "http://localhost:9527/api");
    }

    #[test]
    fn client_appends_api_base_path() {
        let client = Client::new("http://localhost:9527");
        assert_eq!(client.addr(), "http://localhost:9527/api");
    }

    // --- Error display tests ---

    #[test]
    fn connection_failed_error_mentions_addr_override() {
        let err = ClientError::ConnectionFailed {
            addr: "http://127.0.0.1:9527".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:9527"));
        assert!(msg.contains("SKILL_ROUTER_ADDR"));
    }

    #[test]
    fn already_exists_error_suggests_overwrite() {
        let msg = ClientError::AlreadyExists.to_string();
        assert!(msg.contains("already exists"));
        assert!(msg.contains("--overwrite"));
    }

    #[test]
    fn install_rejected_message_is_verbatim() {
        // The install path surfaces the server's diagnostic text unchanged.
        let err = ClientError::InstallRejected("no SKILL.md found in repository".to_string());
        assert_eq!(err.to_string(), "no SKILL.md found in repository");
    }

    #[test]
    fn http_error_carries_status_and_body() {
        let err = ClientError::HttpError {
            status: 500,
            message: "failed to move skill".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("failed to move skill"));
    }

    // --- Connection failure tests ---

    #[tokio::test]
    async fn list_skills_fails_when_server_not_running() {
        let client = Client::new("http://127.0.0.1:19999");
        let result = client.list_skills().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn post_operations_fail_when_server_not_running() {
        let client = Client::new("http://127.0.0.1:19999");
        assert!(client.enable_skill("a.md").await.is_err());
        assert!(client.disable_plugin("superpowers").await.is_err());
    }
}
