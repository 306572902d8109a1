//! Client for the Oxidized configuration-backup tool.
//!
//! Two sources of truth: the `router.db` file listing the devices
//! Oxidized backs up (colon-separated `name:model` lines), and the HTTP
//! API for fetching the last stored configuration of a device.

use std::path::Path;

use serde::Serialize;

use crate::config::OxidizedSettings;
use crate::core::{NetadmError, Result};

/// One device from router.db.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupDevice {
    pub name: String,
    pub model: String,
}

/// Oxidized API client.
pub struct OxidizedClient {
    http: reqwest::Client,
    url: String,
    username: Option<String>,
    password: Option<String>,
    router_db: Option<String>,
}

impl OxidizedClient {
    pub fn new(settings: &OxidizedSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: settings.url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            router_db: settings.router_db.clone(),
        }
    }

    /// Devices listed in the configured router.db file.
    pub fn devices(&self) -> Result<Vec<BackupDevice>> {
        let path = self
            .router_db
            .as_deref()
            .ok_or(NetadmError::ConfigSection { section: "oxidized.router_db" })?;
        parse_router_db(Path::new(path))
    }

    /// Last stored configuration for a device, `None` when Oxidized has
    /// none.
    pub async fn device_config(&self, name: &str) -> Result<Option<String>> {
        let mut request = self.http.get(format!("{}/node/fetch/{name}", self.url));
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }
        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(NetadmError::ApiStatus { system: "oxidized", status: status.as_u16() });
        }
        Ok(Some(response.text().await?))
    }
}

/// Parse a router.db file. Lines without a model are skipped with a
/// warning, matching how Oxidized itself tolerates them.
fn parse_router_db(path: &Path) -> Result<Vec<BackupDevice>> {
    let raw = std::fs::read_to_string(path)?;
    let mut devices = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(name), Some(model)) if !name.is_empty() && !model.is_empty() => {
                devices.push(BackupDevice { name: name.to_string(), model: model.to_string() });
            }
            _ => tracing::warn!(line, "ignoring malformed router.db line"),
        }
    }
    Ok(devices)
}
