//! netadm — client wrappers for network-management systems.
//!
//! One crate, one thin client per external system, all normalizing into
//! plain in-memory records for the larger automation tooling built on
//! top:
//!
//! - [`inventory`] — the SOAP object-tree inventory, including the
//!   ancestor-walk resolution core (object cache, upward walk, attribute
//!   and parent inheritance)
//! - [`elements`] — the REST element inventory
//! - [`icinga`] — Icinga2 monitoring (hosts/services down)
//! - [`librenms`] — LibreNMS device management
//! - [`oxidized`] — configuration backups
//!
//! Supporting modules: [`config`] (one YAML file, one optional section
//! per system), [`core`] (error types), [`constants`], and the [`cli`]
//! behind the `netadm` binary.
//!
//! All clients are async over a shared tokio runtime, propagate
//! transport failures as typed [`core::NetadmError`] values, and model
//! "the remote has no such thing" as `Option::None` rather than an
//! error.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;

// One module per external system
pub mod elements;
pub mod icinga;
pub mod inventory;
pub mod librenms;
pub mod oxidized;

// In-memory fakes for unit and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
