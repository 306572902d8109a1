//! Tree-resolution core for the SOAP inventory system.
//!
//! The remote inventory is one rooted object tree. Elements (class
//! `element-attach`) inherit attributes they do not carry themselves —
//! alarm routing, logical parent devices — from their ancestors, so
//! resolving an element means walking upward through `parent_oid` links
//! until something answers.
//!
//! The module is layered bottom-up:
//!
//! - [`node`] — immutable records for fetched tree objects
//! - [`transport`] — the [`ObjectSource`] seam to the remote system
//! - [`store`] — [`ObjectStore`], the per-session memoizing cache
//! - [`walk`] — the single generic ancestor-walk primitive
//! - [`resolve`] — the two inheritance resolvers and the batch driver
//! - [`soap`] — the production SOAP/HTTP transport
//!
//! Resolution is strictly sequential; the store needs no locking because
//! there is exactly one walk in flight at a time. A run over a whole
//! subtree warms the cache quickly since sibling elements share their
//! ancestor chains.
//!
//! # Example
//!
//! ```rust,no_run
//! use netadm::inventory::{ObjectStore, resolve};
//! use netadm::inventory::soap::SoapClient;
//! # async fn example(settings: &netadm::config::EapiSettings) -> netadm::core::Result<()> {
//! let client = SoapClient::connect(settings).await?;
//! let mut store = ObjectStore::new(Box::new(client));
//! let elements = resolve::resolve_elements(&mut store, None, "net.example.com").await?;
//! for element in &elements {
//!     println!("{} parents={}", element.name, element.parents);
//! }
//! # Ok(())
//! # }
//! ```

pub mod node;
pub mod resolve;
pub mod soap;
pub mod store;
pub mod transport;
pub mod walk;

pub use node::{InetResource, Node, Oid, Opaque};
pub use resolve::{Interface, ResolvedElement};
pub use store::ObjectStore;
pub use transport::ObjectSource;
pub use walk::walk_up;
