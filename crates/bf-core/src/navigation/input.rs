//! Raw input events as delivered by the host

use super::Direction;

/// Keys the navigator cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Space,
    Other,
}

impl NavKey {
    pub fn direction(self) -> Option<Direction> {
        match self {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => Some(Direction::Down),
            NavKey::ArrowUp | NavKey::PageUp => Some(Direction::Up),
            NavKey::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputKind {
    /// Wheel movement; positive `delta_y` scrolls toward the bottom
    Wheel { delta_y: f32 },
    Key(NavKey),
    TouchStart { y: f32 },
    TouchEnd { y: f32 },
}

/// One input event plus where it originated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub kind: InputKind,
    /// Origin lies inside a region marked as independently scrollable
    pub in_nested_scrollable: bool,
}

impl InputEvent {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            in_nested_scrollable: false,
        }
    }

    pub fn wheel(delta_y: f32) -> Self {
        Self::new(InputKind::Wheel { delta_y })
    }

    pub fn key(key: NavKey) -> Self {
        Self::new(InputKind::Key(key))
    }

    pub fn touch_start(y: f32) -> Self {
        Self::new(InputKind::TouchStart { y })
    }

    pub fn touch_end(y: f32) -> Self {
        Self::new(InputKind::TouchEnd { y })
    }

    /// Mark the event as coming from a nested scrollable region
    pub fn nested(mut self) -> Self {
        self.in_nested_scrollable = true;
        self
    }
}

/// Direction of a finished swipe, given where it started and ended
pub fn swipe_direction(start_y: f32, end_y: f32, threshold: f32) -> Option<Direction> {
    let dy = start_y - end_y;
    if dy > threshold {
        Some(Direction::Down)
    } else if dy < -threshold {
        Some(Direction::Up)
    } else {
        None
    }
}
