//! Pre-warmed section cache

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::store::Section;

struct CacheInner {
    sections: AHashMap<String, Arc<Section>>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

/// Sections prepared ahead of navigation, keyed by route.
///
/// Cloning the cache shares the same storage.
#[derive(Clone)]
pub struct ContentCache {
    inner: Arc<RwLock<CacheInner>>,
    max_sections: usize,
}

impl ContentCache {
    pub fn new(max_sections: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                sections: AHashMap::new(),
                order: VecDeque::new(),
            })),
            max_sections: max_sections.max(1),
        }
    }

    pub fn get(&self, route: &str) -> Option<Arc<Section>> {
        self.inner.read().sections.get(route).cloned()
    }

    pub fn contains(&self, route: &str) -> bool {
        self.inner.read().sections.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.inner.read().sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a section, evicting the oldest entry when full
    pub fn put(&self, route: impl Into<String>, section: Arc<Section>) {
        let route = route.into();
        let mut inner = self.inner.write();

        if inner.sections.insert(route.clone(), section).is_some() {
            return;
        }
        inner.order.push_back(route);
        while inner.sections.len() > self.max_sections {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.sections.remove(&oldest);
        }
    }

    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.sections.clear();
        inner.order.clear();
    }
}
