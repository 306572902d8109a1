//! Core types shared by every netadm subsystem.
//!
//! The module is deliberately small: a strongly-typed error enum
//! ([`NetadmError`]) covering the failure modes of the remote systems we
//! talk to, and the crate-wide [`Result`] alias built on it.
//!
//! # Error Philosophy
//!
//! Two kinds of outcomes are kept strictly apart:
//!
//! - **Failures** — network, authentication, protocol, and configuration
//!   problems. These are always propagated to the caller as
//!   [`NetadmError`] values, never retried or swallowed by the client
//!   wrappers.
//! - **Absence** — a lookup that legitimately finds nothing (an unknown
//!   object identifier, a device with no stored configuration, an
//!   element with no inherited alarm routing). Absence is modeled as
//!   `Option::None` in the relevant return types and is never an error.

pub mod error;

pub use error::{NetadmError, Result};
