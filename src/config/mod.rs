//! Configuration management for netadm.
//!
//! All client wrappers read their endpoints and credentials from one
//! YAML file. The file location is resolved in priority order:
//!
//! 1. `--config` CLI flag
//! 2. `NETADM_CONFIG` environment variable
//! 3. `/etc/netadm/netadm.yaml`
//!
//! Every per-system section is optional so a host only running, say, the
//! monitoring commands does not need inventory credentials on disk. A
//! subcommand that needs a missing section fails with
//! [`NetadmError::ConfigSection`](crate::core::NetadmError::ConfigSection).
//!
//! # File format
//!
//! ```yaml
//! default_domain: net.example.com
//!
//! inventory:
//!   eapi:
//!     url: https://inventory.example.com/eapi
//!     username: api
//!     password: secret
//!
//! elements:
//!   api:
//!     url: https://elements.example.com/api/elements
//!
//! icinga:
//!   api:
//!     url: https://icinga.example.com:5665
//!     username: monitor
//!     password: secret
//!     insecure: true          # accept self-signed API certificate
//!
//! librenms:
//!   api:
//!     url: https://nms.example.com/api/v0
//!     key: 0123456789abcdef
//!   snmp:
//!     version: v2c
//!
//! oxidized:
//!   url: http://oxidized.example.com:8888
//!   username: backup          # optional
//!   password: secret
//!   router_db: /var/lib/oxidized/router.db
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::{NetadmError, Result};

/// Top-level settings, one optional section per external system.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Domain appended to unqualified device names.
    pub default_domain: String,
    /// SOAP inventory system.
    pub inventory: Option<InventorySettings>,
    /// REST element inventory.
    pub elements: Option<ElementsSettings>,
    /// Icinga2 monitoring API.
    pub icinga: Option<IcingaSettings>,
    /// LibreNMS API.
    pub librenms: Option<LibrenmsSettings>,
    /// Oxidized configuration-backup tool.
    pub oxidized: Option<OxidizedSettings>,
}

/// SOAP inventory connection details.
#[derive(Debug, Clone, Deserialize)]
pub struct InventorySettings {
    /// External API endpoint and credentials.
    pub eapi: EapiSettings,
}

/// Endpoint plus session credentials for the inventory external API.
#[derive(Debug, Clone, Deserialize)]
pub struct EapiSettings {
    pub url: String,
    pub username: String,
    pub password: String,
}

/// REST element inventory endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementsSettings {
    pub api: ElementsApi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementsApi {
    pub url: String,
}

/// Icinga2 API endpoint and credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct IcingaSettings {
    pub api: IcingaApi,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IcingaApi {
    pub url: String,
    pub username: String,
    pub password: String,
    /// Accept an invalid/self-signed API certificate. Icinga installs
    /// commonly run with the generated CA, so this defaults to false but
    /// is routinely enabled.
    #[serde(default)]
    pub insecure: bool,
}

/// LibreNMS API token and SNMP defaults for device creation.
#[derive(Debug, Clone, Deserialize)]
pub struct LibrenmsSettings {
    pub api: LibrenmsApi,
    #[serde(default)]
    pub snmp: SnmpSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LibrenmsApi {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnmpSettings {
    /// SNMP version used when registering new devices.
    pub version: String,
}

impl Default for SnmpSettings {
    fn default() -> Self {
        Self { version: "v2c".to_string() }
    }
}

/// Oxidized endpoint plus the exported router.db location.
#[derive(Debug, Clone, Deserialize)]
pub struct OxidizedSettings {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Path to the router.db file Oxidized reads its device list from.
    pub router_db: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`NetadmError::ConfigRead`] when the file cannot be read
    /// and [`NetadmError::ConfigParse`] when it does not match the
    /// schema.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| NetadmError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let settings: Self = serde_yaml::from_str(&raw)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(settings)
    }

    /// Inventory section, or a typed error if absent.
    pub fn inventory(&self) -> Result<&InventorySettings> {
        self.inventory.as_ref().ok_or(NetadmError::ConfigSection { section: "inventory" })
    }

    /// Elements section, or a typed error if absent.
    pub fn elements(&self) -> Result<&ElementsSettings> {
        self.elements.as_ref().ok_or(NetadmError::ConfigSection { section: "elements" })
    }

    /// Icinga section, or a typed error if absent.
    pub fn icinga(&self) -> Result<&IcingaSettings> {
        self.icinga.as_ref().ok_or(NetadmError::ConfigSection { section: "icinga" })
    }

    /// LibreNMS section, or a typed error if absent.
    pub fn librenms(&self) -> Result<&LibrenmsSettings> {
        self.librenms.as_ref().ok_or(NetadmError::ConfigSection { section: "librenms" })
    }

    /// Oxidized section, or a typed error if absent.
    pub fn oxidized(&self) -> Result<&OxidizedSettings> {
        self.oxidized.as_ref().ok_or(NetadmError::ConfigSection { section: "oxidized" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = "default_domain: net.example.com\n";

    const FULL: &str = r#"
default_domain: net.example.com
inventory:
  eapi:
    url: https://inv.example.com/eapi
    username: api
    password: s3cret
icinga:
  api:
    url: https://icinga.example.com:5665
    username: monitor
    password: pw
    insecure: true
librenms:
  api:
    url: https://nms.example.com/api/v0
    key: abcdef
oxidized:
  url: http://oxidized.example.com:8888
  router_db: /var/lib/oxidized/router.db
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_minimal_config_loads() {
        let file = write_config(MINIMAL);
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.default_domain, "net.example.com");
        assert!(settings.inventory.is_none());
    }

    #[test]
    fn test_missing_section_is_typed_error() {
        let file = write_config(MINIMAL);
        let settings = Settings::load(file.path()).unwrap();
        let err = settings.icinga().unwrap_err();
        assert!(matches!(err, NetadmError::ConfigSection { section: "icinga" }));
    }

    #[test]
    fn test_full_config_sections() {
        let file = write_config(FULL);
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.inventory().unwrap().eapi.username, "api");
        assert!(settings.icinga().unwrap().api.insecure);
        assert_eq!(settings.librenms().unwrap().snmp.version, "v2c");
        let oxidized = settings.oxidized().unwrap();
        assert!(oxidized.username.is_none());
        assert_eq!(oxidized.router_db.as_deref(), Some("/var/lib/oxidized/router.db"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Settings::load(Path::new("/nonexistent/netadm.yaml")).unwrap_err();
        assert!(matches!(err, NetadmError::ConfigRead { .. }));
    }
}
