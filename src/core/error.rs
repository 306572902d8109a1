//! Error handling for netadm.
//!
//! All client wrappers report failures through [`NetadmError`]. The
//! variants carry enough context (which system, which endpoint, what the
//! remote said) for the CLI to print something actionable without string
//! matching.
//!
//! Common lower-level errors are converted automatically:
//! - [`std::io::Error`] → [`NetadmError::Io`]
//! - [`reqwest::Error`] → [`NetadmError::Http`]
//! - [`serde_yaml::Error`] → [`NetadmError::ConfigParse`]
//! - [`quick_xml::Error`] → [`NetadmError::Xml`]
//!
//! "Not found" is deliberately missing from this enum. A remote lookup
//! that returns zero results is a normal outcome, surfaced as `None` by
//! the APIs involved, and drives walk termination in the inventory
//! resolvers rather than error paths.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, NetadmError>;

/// The main error type for netadm operations.
#[derive(Error, Debug)]
pub enum NetadmError {
    /// A remote HTTP API answered with an unexpected status code.
    ///
    /// Raised after the transport succeeded but the remote refused the
    /// request (auth failure, bad filter, server-side error).
    #[error("{system} API request failed with status {status}")]
    ApiStatus {
        /// Which system answered (e.g. "icinga", "librenms").
        system: &'static str,
        /// The HTTP status code received.
        status: u16,
    },

    /// A remote HTTP API returned a body we could not decode.
    #[error("{system} API returned an unexpected response: {reason}")]
    ApiResponse {
        /// Which system answered.
        system: &'static str,
        /// What was wrong with the payload.
        reason: String,
    },

    /// The SOAP inventory service reported a fault.
    #[error("inventory SOAP fault {code}: {message}")]
    SoapFault {
        /// Fault code from the envelope.
        code: String,
        /// Human-readable fault string.
        message: String,
    },

    /// The SOAP response was well-formed XML but missing a required
    /// field (e.g. no session id in the login response).
    #[error("inventory response missing expected field: {field}")]
    SoapResponse {
        /// The field that could not be located.
        field: &'static str,
    },

    /// The configuration file could not be read.
    #[error("cannot read configuration file {path}: {source}")]
    ConfigRead {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A subcommand needs a configuration section that is not present.
    #[error("configuration has no `{section}` section")]
    ConfigSection {
        /// The missing top-level section name.
        section: &'static str,
    },

    /// Configuration file exists but is not valid YAML for our schema.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Network-level HTTP failure (connect, TLS, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// XML read/write failure while talking SOAP.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Generic I/O failure (router.db reading and friends).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
