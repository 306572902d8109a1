//! Client for the element REST inventory.
//!
//! Small JSON API: the collection endpoint returns every element keyed
//! by hostname, the item endpoint returns one. The full set is loaded
//! lazily and memoized for the client's lifetime; single-element lookups
//! are served from the loaded set when possible.

use serde_json::{Map, Value};

use crate::config::ElementsSettings;
use crate::core::{NetadmError, Result};

/// Lazy-loading element inventory client.
///
/// The element map fills up as lookups happen; a full load marks the
/// set complete so later misses are answered locally.
pub struct ElementsClient {
    http: reqwest::Client,
    url: String,
    elements: Map<String, Value>,
    loaded: bool,
}

impl ElementsClient {
    pub fn new(settings: &ElementsSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: settings.api.url.clone(),
            elements: Map::new(),
            loaded: false,
        }
    }

    /// All elements, keyed by hostname. Fetched once, then memoized.
    pub async fn elements(&mut self) -> Result<&Map<String, Value>> {
        if !self.loaded {
            let response = self.http.get(&self.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(NetadmError::ApiStatus { system: "elements", status: status.as_u16() });
            }
            self.elements = response.json().await?;
            self.loaded = true;
            tracing::debug!(count = self.elements.len(), "loaded element inventory");
        }
        Ok(&self.elements)
    }

    /// One element by hostname, from the local set or a direct fetch.
    pub async fn element(&mut self, hostname: &str) -> Result<Option<Value>> {
        if let Some(element) = self.elements.get(hostname) {
            return Ok(Some(element.clone()));
        }
        if self.loaded {
            return Ok(None);
        }
        let response = self.http.get(format!("{}/{hostname}", self.url)).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(NetadmError::ApiStatus { system: "elements", status: status.as_u16() });
        }
        // The item endpoint wraps the element in a one-entry map.
        let wrapped: Map<String, Value> = response.json().await?;
        match wrapped.into_iter().next() {
            Some((name, element)) => {
                self.elements.insert(name, element.clone());
                Ok(Some(element))
            }
            None => Ok(None),
        }
    }

    /// Interface list of one element, when the inventory carries it.
    pub async fn element_interfaces(&mut self, hostname: &str) -> Result<Option<Value>> {
        let element = self.element(hostname).await?;
        Ok(element.and_then(|e| e.get("interfaces").cloned()))
    }
}
