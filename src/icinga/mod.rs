//! Client for the Icinga2 monitoring API.
//!
//! Queries the object endpoints for hosts and services that are down
//! and not acknowledged. Icinga expects filter expressions in a JSON
//! body on what is semantically a GET, hence the method-override
//! header. The API certificate is commonly self-signed, so the client
//! optionally accepts invalid certificates per configuration.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::IcingaSettings;
use crate::core::{NetadmError, Result};

/// State of one host that is down and unacknowledged.
#[derive(Debug, Clone, Serialize)]
pub struct HostState {
    pub name: String,
    pub state: i64,
    pub address: String,
    pub address6: String,
    pub last_hard_state: i64,
    pub last_hard_state_changed: DateTime<Utc>,
    pub notes: String,
    pub comments: String,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
    pub platform: String,
    pub role: String,
    pub site_name: String,
}

/// State of one service that is not OK and unacknowledged.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceState {
    pub host_name: String,
    pub name: String,
    pub state: i64,
    pub last_hard_state: i64,
    pub last_hard_state_changed: DateTime<Utc>,
    pub output: String,
    pub notes: String,
}

#[derive(Deserialize)]
struct ObjectsResponse {
    results: Vec<IcingaObject>,
}

#[derive(Deserialize)]
struct IcingaObject {
    name: String,
    attrs: Value,
}

/// Icinga2 API client.
pub struct IcingaClient {
    http: reqwest::Client,
    url: String,
    username: String,
    password: String,
}

impl IcingaClient {
    pub fn new(settings: &IcingaSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(settings.api.insecure)
            .build()?;
        Ok(Self {
            http,
            url: settings.api.url.clone(),
            username: settings.api.username.clone(),
            password: settings.api.password.clone(),
        })
    }

    async fn query_objects(&self, endpoint: &str, filter: &str) -> Result<Vec<IcingaObject>> {
        let response = self
            .http
            .get(format!("{}/v1/objects/{endpoint}", self.url))
            .header("Accept", "application/json")
            .header("X-HTTP-Method-Override", "GET")
            .basic_auth(&self.username, Some(&self.password))
            .json(&json!({ "filter": filter }))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetadmError::ApiStatus { system: "icinga", status: status.as_u16() });
        }
        let objects: ObjectsResponse = response.json().await?;
        Ok(objects.results)
    }

    /// Hosts that are down and not acknowledged, newest state change
    /// first.
    pub async fn hosts_down(&self) -> Result<Vec<HostState>> {
        let results = self
            .query_objects("hosts", "host.state!=0 && host.acknowledgement==0")
            .await?;
        let mut hosts: Vec<HostState> = results
            .into_iter()
            .map(|object| {
                let attrs = &object.attrs;
                HostState {
                    name: object.name,
                    state: attr_i64(attrs, "state"),
                    address: attr_str(attrs, "address"),
                    address6: attr_str(attrs, "address6"),
                    last_hard_state: attr_i64(attrs, "last_hard_state"),
                    last_hard_state_changed: dt_from_timestamp(attr_f64(
                        attrs,
                        "last_hard_state_change",
                    )),
                    notes: attr_str(attrs, "notes"),
                    comments: attr_str(attrs, "vars.pe_comments"),
                    location: attr_str(attrs, "vars.pe_location"),
                    manufacturer: attr_str(attrs, "vars.pe_manufacturer"),
                    model: attr_str(attrs, "vars.pe_model"),
                    platform: attr_str(attrs, "vars.pe_platform"),
                    role: attr_str(attrs, "vars.pe_role"),
                    site_name: attr_str(attrs, "vars.pe_site_name"),
                }
            })
            .collect();
        hosts.sort_by(|a, b| b.last_hard_state_changed.cmp(&a.last_hard_state_changed));
        Ok(hosts)
    }

    /// Services that are not OK and not acknowledged, newest state
    /// change first.
    pub async fn services_down(&self) -> Result<Vec<ServiceState>> {
        let results = self
            .query_objects("services", "service.state!=0 && service.acknowledgement==0")
            .await?;
        let mut services: Vec<ServiceState> = results
            .into_iter()
            .map(|object| {
                let attrs = &object.attrs;
                ServiceState {
                    host_name: attr_str(attrs, "host_name"),
                    name: attr_str(attrs, "name"),
                    state: attr_i64(attrs, "state"),
                    last_hard_state: attr_i64(attrs, "last_hard_state"),
                    last_hard_state_changed: dt_from_timestamp(attr_f64(
                        attrs,
                        "last_hard_state_change",
                    )),
                    output: attr_str(attrs, "last_check_result.output"),
                    notes: attr_str(attrs, "notes"),
                }
            })
            .collect();
        services.sort_by(|a, b| b.last_hard_state_changed.cmp(&a.last_hard_state_changed));
        Ok(services)
    }
}

/// Human-readable form of an Icinga host/service state number.
pub fn state_to_str(state: i64) -> &'static str {
    match state {
        0 => "OK",
        1 => "WARNING",
        2 => "CRITICAL",
        _ => "UNKNOWN",
    }
}

/// Walk a dot-separated path into the attrs tree; empty string on any
/// missing step.
fn attr_str(attrs: &Value, path: &str) -> String {
    match attr_lookup(attrs, path) {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => String::new(),
    }
}

fn attr_i64(attrs: &Value, path: &str) -> i64 {
    attr_lookup(attrs, path).and_then(Value::as_f64).map(|v| v as i64).unwrap_or(0)
}

fn attr_f64(attrs: &Value, path: &str) -> f64 {
    attr_lookup(attrs, path).and_then(Value::as_f64).unwrap_or(0.0)
}

fn attr_lookup<'a>(attrs: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = attrs;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    Some(current)
}

/// Icinga timestamps are fractional epoch seconds.
fn dt_from_timestamp(timestamp: f64) -> DateTime<Utc> {
    Utc.timestamp_opt(timestamp as i64, 0).single().unwrap_or_default()
}
