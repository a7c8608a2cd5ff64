//! Router that switches pages inside the app and pre-warms sections

use std::sync::Arc;

use bf_core::{PrefetchError, Router};
use bf_data::{ContentCache, ContentStore, Section};
use tracing::debug;

/// Queues navigation for the next frame and loads neighbors into the cache
pub struct PageRouter {
    store: Arc<ContentStore>,
    cache: ContentCache,
    pending: Option<String>,
}

impl PageRouter {
    pub fn new(store: Arc<ContentStore>, cache: ContentCache) -> Self {
        Self {
            store,
            cache,
            pending: None,
        }
    }

    /// Route requested since the last call, if any
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}

/// Section for a route, from the cache or loaded into it
pub fn load_section(
    store: &ContentStore,
    cache: &ContentCache,
    route: &str,
) -> Result<Arc<Section>, bf_data::DataError> {
    if let Some(section) = cache.get(route) {
        return Ok(section);
    }
    let section = Arc::new(store.section_for_route(route)?.clone());
    cache.put(route, section.clone());
    Ok(section)
}

impl Router for PageRouter {
    fn navigate(&mut self, route: &str) {
        self.pending = Some(route.to_string());
    }

    fn prefetch(&mut self, route: &str) -> Result<(), PrefetchError> {
        load_section(&self.store, &self.cache, route)
            .map_err(|e| PrefetchError::new(route, e.to_string()))?;
        debug!(route, "section pre-warmed");
        Ok(())
    }
}
