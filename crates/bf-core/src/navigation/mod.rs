use serde::{Deserialize, Serialize};

mod config;
mod engine;
mod input;
mod router;
mod routes;
mod scheduler;
mod surface;

pub use config::NavigatorConfig;
pub use engine::{EdgeIntentNavigator, NavigatorOutcome};
pub use input::{InputEvent, InputKind, NavKey};
pub use router::{PrefetchError, RecordingRouter, Router};
pub use routes::RouteSequence;
pub use scheduler::{Scheduler, TaskHandle};
pub use surface::{ScrollMetrics, ScrollSurface};

/// Direction of a navigation gesture along the route sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the top of the surface, i.e. the previous route
    Up,
    /// Toward the bottom of the surface, i.e. the next route
    Down,
}
