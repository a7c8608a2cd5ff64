//! Navigator tuning

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the edge-intent navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Distance in pixels from either end that counts as "at the edge"
    pub edge_threshold_px: f32,

    /// Suppression window after a navigation, in milliseconds
    pub cooldown_ms: u64,

    /// Consecutive same-direction nudges needed to confirm intent
    pub min_nudges: u32,

    /// Time allowed between nudges before intent is abandoned
    pub intent_window_ms: u64,

    /// How long the surface must rest at the edge before navigating
    pub rest_ms: u64,

    /// Vertical travel in pixels for a touch gesture to count as a swipe
    pub swipe_threshold_px: f32,

    /// Selector of a non-default scroll surface; `None` means the page itself
    pub surface: Option<String>,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            edge_threshold_px: 24.0,
            cooldown_ms: 800,
            min_nudges: 2,
            intent_window_ms: 600,
            rest_ms: 150,
            swipe_threshold_px: 40.0,
            surface: None,
        }
    }
}

impl NavigatorConfig {
    /// Clamp values that would make the heuristics meaningless
    pub fn sanitized(mut self) -> Self {
        self.edge_threshold_px = non_negative(self.edge_threshold_px);
        self.swipe_threshold_px = non_negative(self.swipe_threshold_px);
        self.min_nudges = self.min_nudges.max(1);
        self
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn intent_window(&self) -> Duration {
        Duration::from_millis(self.intent_window_ms)
    }

    pub fn rest(&self) -> Duration {
        Duration::from_millis(self.rest_ms)
    }
}

fn non_negative(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}
