//! Core functionality for the BioForge section viewer
//!
//! This crate provides the edge-intent scroll navigator: the state machine
//! that turns wheel, key and touch input at the edge of a scroll surface into
//! navigation along an ordered sequence of routes.

pub mod navigation;

// Re-export commonly used types
pub use navigation::{
    Direction, EdgeIntentNavigator, InputEvent, InputKind, NavKey, NavigatorConfig,
    NavigatorOutcome, PrefetchError, RecordingRouter, RouteSequence, Router, Scheduler,
    ScrollMetrics, ScrollSurface, TaskHandle,
};
