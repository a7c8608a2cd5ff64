//! Router collaborator trait

use thiserror::Error;

/// Why a route could not be prepared ahead of time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to prefetch '{route}': {reason}")]
pub struct PrefetchError {
    pub route: String,
    pub reason: String,
}

impl PrefetchError {
    pub fn new(route: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            reason: reason.into(),
        }
    }
}

/// External routing collaborator that receives navigation requests
pub trait Router {
    /// Switch the host to `route`
    fn navigate(&mut self, route: &str);

    /// Advisory hint that `route` is likely to be visited next
    fn prefetch(&mut self, route: &str) -> Result<(), PrefetchError>;
}

/// Router that only records what it was asked to do
#[derive(Debug, Default, Clone)]
pub struct RecordingRouter {
    pub navigations: Vec<String>,
    pub prefetches: Vec<String>,
    /// Routes whose prefetch should fail
    pub failing_prefetches: Vec<String>,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Router for RecordingRouter {
    fn navigate(&mut self, route: &str) {
        self.navigations.push(route.to_string());
    }

    fn prefetch(&mut self, route: &str) -> Result<(), PrefetchError> {
        self.prefetches.push(route.to_string());
        if self.failing_prefetches.iter().any(|r| r == route) {
            return Err(PrefetchError::new(route, "unavailable"));
        }
        Ok(())
    }
}

impl<R: Router + ?Sized> Router for &mut R {
    fn navigate(&mut self, route: &str) {
        (**self).navigate(route)
    }

    fn prefetch(&mut self, route: &str) -> Result<(), PrefetchError> {
        (**self).prefetch(route)
    }
}

impl<R: Router + ?Sized> Router for Box<R> {
    fn navigate(&mut self, route: &str) {
        (**self).navigate(route)
    }

    fn prefetch(&mut self, route: &str) -> Result<(), PrefetchError> {
        (**self).prefetch(route)
    }
}
