//! Global constants used throughout the netadm codebase.
//!
//! Centralizes the well-known inventory identifiers, default file
//! locations, and environment variable names so the magic values stay
//! discoverable.

use crate::inventory::Oid;

/// Well-known identifier of the inventory tree root.
///
/// Ancestor walks never continue past this oid: a node whose parent is
/// the root has no further inheritance sources. The remote system
/// assigns this identifier; it is not configurable.
pub const ROOT_OID: Oid = 1;

/// Node class for manageable endpoints (routers, switches, CPEs).
///
/// Everything else in the tree is structural/grouping and only matters
/// as a source of inherited attributes.
pub const ELEMENT_CLASS: &str = "element-attach";

/// Opaque attribute carrying an explicit comma-separated parent list.
pub const PARENTS_OPAQUE: &str = "parents";

/// Opaque attribute naming where alarms for an element should be routed.
pub const ALARM_DESTINATION_OPAQUE: &str = "alarm_destination";

/// Opaque attribute naming the time period during which alarms apply.
pub const ALARM_TIMEPERIOD_OPAQUE: &str = "alarm_timeperiod";

/// Default location of the YAML configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/netadm/netadm.yaml";

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "NETADM_CONFIG";
