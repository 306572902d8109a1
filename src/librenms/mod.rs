//! Client for the LibreNMS API.
//!
//! Token-authenticated REST API. Device hostnames are qualified with the
//! configured default domain before being sent, matching how devices are
//! registered, and the loaded device set is keyed by lower-cased
//! qualified hostname.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::config::LibrenmsSettings;
use crate::core::{NetadmError, Result};
use crate::inventory::resolve::qualify_name;

/// One device as known to the NMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub device_id: i64,
    pub hostname: String,
    /// Remaining device columns, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct DevicesResponse {
    devices: Vec<Device>,
}

/// LibreNMS API client.
pub struct LibrenmsClient {
    http: reqwest::Client,
    url: String,
    token: String,
    snmp_version: String,
    default_domain: String,
}

impl LibrenmsClient {
    pub fn new(settings: &LibrenmsSettings, default_domain: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: settings.api.url.clone(),
            token: settings.api.key.clone(),
            snmp_version: settings.snmp.version.clone(),
            default_domain: default_domain.to_string(),
        }
    }

    fn check(&self, status: reqwest::StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(NetadmError::ApiStatus { system: "librenms", status: status.as_u16() })
        }
    }

    /// All devices, keyed by lower-cased hostname.
    pub async fn devices(&self) -> Result<BTreeMap<String, Device>> {
        let response = self
            .http
            .get(format!("{}/devices", self.url))
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;
        self.check(response.status())?;
        let devices: DevicesResponse = response.json().await?;
        Ok(devices
            .devices
            .into_iter()
            .map(|device| (device.hostname.to_lowercase(), device))
            .collect())
    }

    /// Register a device for monitoring.
    ///
    /// `force_add` skips the reachability check the NMS normally runs
    /// before accepting a device.
    pub async fn add_device(&self, name: &str, force_add: bool) -> Result<Value> {
        let name = qualify_name(name, &self.default_domain);
        let response = self
            .http
            .post(format!("{}/devices", self.url))
            .header("X-Auth-Token", &self.token)
            .json(&json!({
                "hostname": name,
                "version": self.snmp_version,
                "force_add": u8::from(force_add),
            }))
            .send()
            .await?;
        self.check(response.status())?;
        Ok(response.json().await?)
    }

    /// Remove a device from monitoring.
    pub async fn remove_device(&self, name: &str) -> Result<Value> {
        let name = qualify_name(name, &self.default_domain);
        let response = self
            .http
            .delete(format!("{}/devices/{name}", self.url))
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;
        self.check(response.status())?;
        Ok(response.json().await?)
    }

    /// Patch device columns. The API takes parallel `field`/`data`
    /// arrays rather than a key-value object.
    pub async fn update_device(&self, name: &str, fields: &[(String, Value)]) -> Result<Value> {
        let name = qualify_name(name, &self.default_domain);
        let (field, data): (Vec<_>, Vec<_>) =
            fields.iter().map(|(k, v)| (k.clone(), v.clone())).unzip();
        let response = self
            .http
            .patch(format!("{}/devices/{name}", self.url))
            .header("X-Auth-Token", &self.token)
            .json(&json!({ "field": field, "data": data }))
            .send()
            .await?;
        self.check(response.status())?;
        Ok(response.json().await?)
    }
}
