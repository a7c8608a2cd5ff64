//! Translation of egui input into navigator events

use bf_core::{InputEvent, NavKey};
use egui::{Context, Event, Key, Pos2, Rect, TouchPhase};

/// Screen regions that scroll on their own, such as code blocks.
///
/// Regions are registered while rendering, so a frame's input is tested
/// against the regions of the previous frame.
#[derive(Debug, Clone, Default)]
pub struct NestedScrollRegions {
    rects: Vec<Rect>,
}

impl NestedScrollRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn register(&mut self, rect: Rect) {
        if rect.is_positive() {
            self.rects.push(rect);
        }
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        self.rects.iter().any(|rect| rect.contains(pos))
    }
}

fn nav_key(key: Key) -> Option<NavKey> {
    match key {
        Key::ArrowUp => Some(NavKey::ArrowUp),
        Key::ArrowDown => Some(NavKey::ArrowDown),
        Key::PageUp => Some(NavKey::PageUp),
        Key::PageDown => Some(NavKey::PageDown),
        Key::Space => Some(NavKey::Space),
        _ => None,
    }
}

/// Convert raw egui events into navigator input.
///
/// Wheel deltas are flipped so that positive means toward the bottom. Wheel
/// input is nested when the pointer hovers a nested region, touches when the
/// touch itself lands in one. Keys have no origin and are never nested.
pub fn translate_events(
    events: &[Event],
    pointer: Option<Pos2>,
    regions: &NestedScrollRegions,
) -> Vec<InputEvent> {
    let pointer_nested = pointer.map_or(false, |pos| regions.contains(pos));
    let mark = |event: InputEvent, nested: bool| if nested { event.nested() } else { event };

    events
        .iter()
        .filter_map(|event| match event {
            Event::Scroll(delta) if delta.y != 0.0 => {
                Some(mark(InputEvent::wheel(-delta.y), pointer_nested))
            }
            Event::Key {
                key, pressed: true, ..
            } => nav_key(*key).map(InputEvent::key),
            Event::Touch { phase, pos, .. } => {
                let nested = regions.contains(*pos);
                match phase {
                    TouchPhase::Start => Some(mark(InputEvent::touch_start(pos.y), nested)),
                    TouchPhase::End => Some(mark(InputEvent::touch_end(pos.y), nested)),
                    _ => None,
                }
            }
            _ => None,
        })
        .collect()
}

/// Navigator input from this frame's egui events
pub fn collect_input(ctx: &Context, regions: &NestedScrollRegions) -> Vec<InputEvent> {
    ctx.input(|i| translate_events(&i.events, i.pointer.hover_pos(), regions))
}
