//! Edge-intent navigator implementation

use super::input::swipe_direction;
use super::{
    Direction, InputEvent, InputKind, NavigatorConfig, RouteSequence, Router, Scheduler,
    ScrollSurface, TaskHandle,
};
use std::time::Instant;
use tracing::{debug, info};

/// Tasks the navigator schedules on its own scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTask {
    IntentWindow,
    Cooldown,
    RestCheck,
}

/// Accumulated same-direction nudges at an edge
#[derive(Debug, Default)]
struct EdgeIntent {
    direction: Option<Direction>,
    nudges: u32,
    window: Option<TaskHandle>,
}

/// Confirmed intent waiting for the surface to settle
#[derive(Debug)]
struct RestCheck {
    direction: Direction,
    last_distance: f32,
    settled_since: Instant,
    task: TaskHandle,
}

/// What a call into the navigator did
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorOutcome {
    /// Nothing relevant happened
    Idle,
    /// Event was not directional, came from a nested scrollable, or no route is active
    Ignored,
    /// Surface could not be resolved
    NoSurface,
    /// Navigation is suppressed until the cooldown lapses
    CoolingDown,
    /// Surface is not at the edge matching the gesture; intent was cleared
    NotAtEdge,
    /// No adjacent route in the gesture's direction
    NoNeighbor,
    /// Intent accumulated but is not yet confirmed
    Nudged { direction: Direction, count: u32 },
    /// Intent confirmed, waiting for the surface to rest at the edge
    RestPending { direction: Direction },
    /// A navigation request was issued
    Navigated { route: String },
}

/// Turns edge gestures into navigation along a fixed route sequence.
///
/// The navigator owns its transient state and its timers. The host feeds it
/// input through [`handle_input`](Self::handle_input) and calls
/// [`tick`](Self::tick) once per rendered frame while
/// [`needs_tick`](Self::needs_tick) is true.
pub struct EdgeIntentNavigator<R: Router> {
    routes: RouteSequence,
    active: Option<usize>,
    config: NavigatorConfig,
    router: R,
    scheduler: Scheduler<NavTask>,
    intent: EdgeIntent,
    rest: Option<RestCheck>,
    cooldown: Option<TaskHandle>,
    touch_start_y: Option<f32>,
}

impl<R: Router> EdgeIntentNavigator<R> {
    /// Create a navigator attached to `active_route`
    pub fn new(
        routes: RouteSequence,
        config: NavigatorConfig,
        router: R,
        active_route: &str,
    ) -> Self {
        let mut navigator = Self {
            routes,
            active: None,
            config: config.sanitized(),
            router,
            scheduler: Scheduler::new(),
            intent: EdgeIntent::default(),
            rest: None,
            cooldown: None,
            touch_start_y: None,
        };
        navigator.set_active_route(active_route);
        navigator
    }

    /// Routes this navigator moves along
    pub fn routes(&self) -> &RouteSequence {
        &self.routes
    }

    /// Effective configuration, after sanitizing
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Router that receives navigation and prefetch requests
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Mutable access to the router, e.g. to drain queued navigation
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Active route, or `None` when it is not part of the sequence
    pub fn active_route(&self) -> Option<&str> {
        self.active.and_then(|idx| self.routes.get(idx))
    }

    /// True until the cooldown timer of the last navigation fires
    pub fn is_cooling_down(&self) -> bool {
        self.cooldown
            .map_or(false, |handle| self.scheduler.is_scheduled(handle))
    }

    /// Direction and count of the intent being accumulated
    pub fn pending_intent(&self) -> Option<(Direction, u32)> {
        self.intent.direction.map(|d| (d, self.intent.nudges))
    }

    /// True while confirmed intent waits for the surface to settle
    pub fn is_resting(&self) -> bool {
        self.rest.is_some()
    }

    /// True while a per-frame rest check is running
    pub fn wants_frames(&self) -> bool {
        self.scheduler.has_frame_tasks()
    }

    /// True while any timer or frame task is outstanding
    pub fn needs_tick(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// Earliest timer deadline, for scheduling the next repaint
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Point the navigator at a new active route.
    ///
    /// Accumulated intent is discarded; the cooldown survives so that events
    /// fired during the page transition are still absorbed.
    pub fn set_active_route(&mut self, route: &str) {
        let active = self.routes.position(route);
        if active.is_some() && active == self.active {
            return;
        }

        self.reset();
        self.touch_start_y = None;
        self.active = active;
        debug!(route, index = ?active, "navigator attached");
        self.prewarm_neighbors();
    }

    /// The scroll surface was replaced; drop anything measured against the old one
    pub fn surface_changed(&mut self) {
        self.reset();
        self.touch_start_y = None;
    }

    /// Tear down: cancel every timer and frame task
    pub fn detach(&mut self) {
        self.scheduler.cancel_all();
        self.intent = EdgeIntent::default();
        self.rest = None;
        self.cooldown = None;
        self.touch_start_y = None;
        self.active = None;
        debug!("navigator detached");
    }

    /// Discard accumulated intent and any pending rest check
    pub fn reset(&mut self) {
        self.scheduler.cancel_slot(&mut self.intent.window);
        if let Some(rest) = self.rest.take() {
            self.scheduler.cancel(rest.task);
        }
        self.intent.direction = None;
        self.intent.nudges = 0;
    }

    /// Feed one input event
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        surface: Option<&dyn ScrollSurface>,
        now: Instant,
    ) -> NavigatorOutcome {
        self.run_timers(now);

        if event.in_nested_scrollable {
            return NavigatorOutcome::Ignored;
        }
        if self.cooldown.is_some() {
            self.touch_start_y = None;
            return NavigatorOutcome::CoolingDown;
        }

        let direction = match event.kind {
            InputKind::Wheel { delta_y } if delta_y > 0.0 => Direction::Down,
            InputKind::Wheel { delta_y } if delta_y < 0.0 => Direction::Up,
            InputKind::Wheel { .. } => return NavigatorOutcome::Ignored,
            InputKind::Key(key) => match key.direction() {
                Some(direction) => direction,
                None => return NavigatorOutcome::Ignored,
            },
            InputKind::TouchStart { y } => {
                self.touch_start_y = Some(y);
                return NavigatorOutcome::Ignored;
            }
            InputKind::TouchEnd { y } => {
                let swipe = self
                    .touch_start_y
                    .take()
                    .and_then(|start| swipe_direction(start, y, self.config.swipe_threshold_px));
                match swipe {
                    Some(direction) => direction,
                    None => return NavigatorOutcome::Ignored,
                }
            }
        };

        let Some(index) = self.active else {
            return NavigatorOutcome::Ignored;
        };
        let Some(surface) = surface else {
            return NavigatorOutcome::NoSurface;
        };

        if !self.at_edge(surface, direction) {
            if self.intent.direction.is_some() {
                debug!(?direction, "left the edge, intent cleared");
            }
            self.reset();
            return NavigatorOutcome::NotAtEdge;
        }
        if self.routes.neighbor(index, direction).is_none() {
            self.reset();
            return NavigatorOutcome::NoNeighbor;
        }

        self.nudge(direction, surface, now)
    }

    /// Per-frame callback: fires due timers and runs the rest check
    pub fn tick(&mut self, now: Instant, surface: Option<&dyn ScrollSurface>) -> NavigatorOutcome {
        if !self.run_timers(now) {
            return NavigatorOutcome::Idle;
        }

        let Some(rest) = self.rest.as_mut() else {
            return NavigatorOutcome::Idle;
        };
        let direction = rest.direction;
        let Some(surface) = surface else {
            self.reset();
            return NavigatorOutcome::NoSurface;
        };

        let distance = edge_distance(surface, direction);
        if distance > self.config.edge_threshold_px {
            debug!(?direction, distance, "surface left the edge during rest check");
            self.reset();
            return NavigatorOutcome::NotAtEdge;
        }
        if (distance - rest.last_distance).abs() > f32::EPSILON {
            rest.last_distance = distance;
            rest.settled_since = now;
            return NavigatorOutcome::RestPending { direction };
        }
        if now.saturating_duration_since(rest.settled_since) < self.config.rest() {
            return NavigatorOutcome::RestPending { direction };
        }

        self.navigate(direction, now)
    }

    fn nudge(
        &mut self,
        direction: Direction,
        surface: &dyn ScrollSurface,
        now: Instant,
    ) -> NavigatorOutcome {
        if self.intent.direction == Some(direction) {
            self.intent.nudges += 1;
        } else {
            self.reset();
            self.intent.direction = Some(direction);
            self.intent.nudges = 1;
        }

        // already confirmed: still scrolling, so the rest measurement starts over
        if let Some(rest) = self.rest.as_mut() {
            rest.last_distance = edge_distance(surface, direction);
            rest.settled_since = now;
            return NavigatorOutcome::RestPending { direction };
        }

        let count = self.intent.nudges;
        if count < self.config.min_nudges {
            self.scheduler.cancel_slot(&mut self.intent.window);
            let deadline = now + self.config.intent_window();
            self.intent.window = Some(self.scheduler.schedule_at(deadline, NavTask::IntentWindow));
            debug!(?direction, count, "edge nudge");
            return NavigatorOutcome::Nudged { direction, count };
        }

        self.scheduler.cancel_slot(&mut self.intent.window);
        if self.config.rest_ms == 0 {
            return self.navigate(direction, now);
        }

        debug!(?direction, count, "edge intent confirmed, waiting for rest");
        let task = self.scheduler.schedule_every_frame(NavTask::RestCheck);
        self.rest = Some(RestCheck {
            direction,
            last_distance: edge_distance(surface, direction),
            settled_since: now,
            task,
        });
        NavigatorOutcome::RestPending { direction }
    }

    fn navigate(&mut self, direction: Direction, now: Instant) -> NavigatorOutcome {
        let target = self
            .active
            .and_then(|idx| self.routes.neighbor(idx, direction))
            .map(str::to_string);
        self.reset();

        let Some(route) = target else {
            return NavigatorOutcome::NoNeighbor;
        };

        info!(route = %route, ?direction, "edge navigation");
        self.router.navigate(&route);
        self.scheduler.cancel_slot(&mut self.cooldown);
        let deadline = now + self.config.cooldown();
        self.cooldown = Some(self.scheduler.schedule_at(deadline, NavTask::Cooldown));
        NavigatorOutcome::Navigated { route }
    }

    /// Fire due timers. Returns true when the rest check should run this frame.
    fn run_timers(&mut self, now: Instant) -> bool {
        let mut rest_due = false;
        for (handle, task) in self.scheduler.poll(now) {
            match task {
                NavTask::IntentWindow if self.intent.window == Some(handle) => {
                    debug!(nudges = self.intent.nudges, "intent window elapsed");
                    self.intent = EdgeIntent::default();
                }
                NavTask::Cooldown if self.cooldown == Some(handle) => {
                    self.cooldown = None;
                }
                NavTask::RestCheck => rest_due = true,
                _ => {}
            }
        }
        rest_due
    }

    fn prewarm_neighbors(&mut self) {
        let Some(index) = self.active else {
            return;
        };
        let neighbors = [self.routes.previous(index), self.routes.next(index)];
        for route in neighbors.into_iter().flatten() {
            if let Err(e) = self.router.prefetch(route) {
                debug!(error = %e, "prefetch failed");
            }
        }
    }

    fn at_edge(&self, surface: &dyn ScrollSurface, direction: Direction) -> bool {
        edge_distance(surface, direction) <= self.config.edge_threshold_px
    }
}

fn edge_distance(surface: &dyn ScrollSurface, direction: Direction) -> f32 {
    match direction {
        Direction::Up => surface.distance_from_top(),
        Direction::Down => surface.distance_from_bottom(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavKey, RecordingRouter, ScrollMetrics};
    use std::time::Duration;

    fn config(rest_ms: u64) -> NavigatorConfig {
        NavigatorConfig {
            edge_threshold_px: 4.0,
            cooldown_ms: 800,
            min_nudges: 2,
            intent_window_ms: 600,
            rest_ms,
            ..Default::default()
        }
    }

    fn navigator(active: &str, rest_ms: u64) -> EdgeIntentNavigator<RecordingRouter> {
        EdgeIntentNavigator::new(
            RouteSequence::new(["/a", "/a/2", "/a/3"]),
            config(rest_ms),
            RecordingRouter::new(),
            active,
        )
    }

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    // 2px from the bottom of a 2000px document in a 600px viewport
    fn bottom() -> ScrollMetrics {
        ScrollMetrics::new(1398.0, 600.0, 2000.0)
    }

    fn top() -> ScrollMetrics {
        ScrollMetrics::new(0.0, 600.0, 2000.0)
    }

    fn middle() -> ScrollMetrics {
        ScrollMetrics::new(700.0, 600.0, 2000.0)
    }

    // content shorter than the viewport sits at both edges
    fn short() -> ScrollMetrics {
        ScrollMetrics::new(0.0, 600.0, 300.0)
    }

    #[test]
    fn test_two_wheel_nudges_at_bottom_navigate_next() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();

        let first = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        assert_eq!(first, NavigatorOutcome::Nudged { direction: Direction::Down, count: 1 });

        let second = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 50));
        assert_eq!(second, NavigatorOutcome::Navigated { route: "/a/3".to_string() });
        assert_eq!(nav.router().navigations, vec!["/a/3"]);
    }

    #[test]
    fn test_single_nudge_does_not_navigate() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.tick(at(t0, 2000), Some(&bottom()));
        assert!(nav.router().navigations.is_empty());
        assert_eq!(nav.pending_intent(), None);
    }

    #[test]
    fn test_last_route_has_no_next() {
        let mut nav = navigator("/a/3", 0);
        let t0 = Instant::now();
        for i in 0..4 {
            let outcome = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, i * 10));
            assert_eq!(outcome, NavigatorOutcome::NoNeighbor);
        }
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_cooldown_suppresses_second_navigation() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));
        assert!(nav.is_cooling_down());

        for ms in [110, 120, 130] {
            let outcome = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, ms));
            assert_eq!(outcome, NavigatorOutcome::CoolingDown);
        }
        assert_eq!(nav.router().navigations.len(), 1);

        // cooldown lapses 800ms after the navigation
        nav.tick(at(t0, 810), Some(&bottom()));
        assert!(!nav.is_cooling_down());
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 900));
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 950));
        assert_eq!(nav.router().navigations.len(), 2);
    }

    #[test]
    fn test_settled_navigation_starts_cooldown() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));

        // settled since 10ms, so the 180ms frame is the first past the rest duration
        let mut navigated_at = None;
        for ms in (30..=300).step_by(30) {
            if let NavigatorOutcome::Navigated { .. } = nav.tick(at(t0, ms), Some(&bottom())) {
                navigated_at.get_or_insert(ms);
            }
        }
        assert_eq!(navigated_at, Some(180));
        assert!(nav.is_cooling_down());

        for ms in (330..=960).step_by(30) {
            let outcome = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, ms));
            assert_eq!(outcome, NavigatorOutcome::CoolingDown);
            assert_eq!(nav.tick(at(t0, ms), Some(&bottom())), NavigatorOutcome::Idle);
        }
        assert_eq!(nav.router().navigations, vec!["/a/3"]);

        nav.tick(at(t0, 990), Some(&bottom()));
        assert!(!nav.is_cooling_down());
        assert_eq!(nav.pending_intent(), None);
    }

    #[test]
    fn test_upward_intent_at_top_navigates_previous() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(-30.0), Some(&top()), t0);
        nav.handle_input(InputEvent::wheel(-30.0), Some(&top()), at(t0, 20));
        assert_eq!(nav.router().navigations, vec!["/a"]);
    }

    #[test]
    fn test_first_route_has_no_previous() {
        let mut nav = navigator("/a", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(-30.0), Some(&top()), t0);
        nav.handle_input(InputEvent::wheel(-30.0), Some(&top()), at(t0, 20));
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_reversal_requires_fresh_sequence() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&short()), t0);
        let reversed = nav.handle_input(InputEvent::wheel(-40.0), Some(&short()), at(t0, 10));
        assert_eq!(reversed, NavigatorOutcome::Nudged { direction: Direction::Up, count: 1 });

        let again = nav.handle_input(InputEvent::wheel(40.0), Some(&short()), at(t0, 20));
        assert_eq!(again, NavigatorOutcome::Nudged { direction: Direction::Down, count: 1 });
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_reversal_without_neighbor_still_clears_intent() {
        let mut nav = navigator("/a", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&short()), t0);
        nav.handle_input(InputEvent::wheel(-40.0), Some(&short()), at(t0, 10));
        let outcome = nav.handle_input(InputEvent::wheel(40.0), Some(&short()), at(t0, 20));
        assert_eq!(outcome, NavigatorOutcome::Nudged { direction: Direction::Down, count: 1 });
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_leaving_edge_clears_intent() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        let away = nav.handle_input(InputEvent::wheel(40.0), Some(&middle()), at(t0, 10));
        assert_eq!(away, NavigatorOutcome::NotAtEdge);
        assert_eq!(nav.pending_intent(), None);

        let back = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 20));
        assert_eq!(back, NavigatorOutcome::Nudged { direction: Direction::Down, count: 1 });
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_intent_window_expires() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        let late = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 700));
        assert_eq!(late, NavigatorOutcome::Nudged { direction: Direction::Down, count: 1 });
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_nudges_extend_the_window() {
        let mut nav = EdgeIntentNavigator::new(
            RouteSequence::new(["/a", "/a/2", "/a/3"]),
            NavigatorConfig { min_nudges: 3, ..config(0) },
            RecordingRouter::new(),
            "/a/2",
        );
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 500));
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 1000));
        assert_eq!(nav.router().navigations, vec!["/a/3"]);
    }

    #[test]
    fn test_nested_scrollable_events_are_ignored() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        for i in 0..5 {
            let outcome =
                nav.handle_input(InputEvent::wheel(40.0).nested(), Some(&bottom()), at(t0, i));
            assert_eq!(outcome, NavigatorOutcome::Ignored);
        }
        assert_eq!(nav.pending_intent(), None);

        // a nested event in the middle of a sequence leaves it intact
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));
        nav.handle_input(InputEvent::wheel(40.0).nested(), Some(&middle()), at(t0, 20));
        assert_eq!(nav.pending_intent(), Some((Direction::Down, 1)));
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_rest_check_navigates_after_settling() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        let confirmed = nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 20));
        assert_eq!(confirmed, NavigatorOutcome::RestPending { direction: Direction::Down });
        assert!(nav.wants_frames());

        assert_eq!(
            nav.tick(at(t0, 100), Some(&bottom())),
            NavigatorOutcome::RestPending { direction: Direction::Down }
        );
        assert!(nav.router().navigations.is_empty());

        let settled = nav.tick(at(t0, 170), Some(&bottom()));
        assert_eq!(settled, NavigatorOutcome::Navigated { route: "/a/3".to_string() });
        assert!(!nav.wants_frames());
        assert!(!nav.is_resting());
    }

    #[test]
    fn test_rest_check_restarts_while_still_scrolling() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 20));

        // momentum carries the surface another pixel into the edge
        let closer = ScrollMetrics::new(1399.0, 600.0, 2000.0);
        nav.tick(at(t0, 100), Some(&closer));
        nav.tick(at(t0, 200), Some(&closer));
        assert!(nav.router().navigations.is_empty());

        // a further nudge also counts as movement
        nav.handle_input(InputEvent::wheel(40.0), Some(&closer), at(t0, 240));
        nav.tick(at(t0, 300), Some(&closer));
        assert!(nav.router().navigations.is_empty());

        nav.tick(at(t0, 400), Some(&closer));
        assert_eq!(nav.router().navigations, vec!["/a/3"]);
    }

    #[test]
    fn test_rest_check_cancelled_when_leaving_edge() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 20));

        assert_eq!(nav.tick(at(t0, 60), Some(&middle())), NavigatorOutcome::NotAtEdge);
        assert!(!nav.wants_frames());
        assert_eq!(nav.tick(at(t0, 500), Some(&bottom())), NavigatorOutcome::Idle);
        assert!(nav.router().navigations.is_empty());
    }

    #[test]
    fn test_rest_check_cancelled_when_surface_disappears() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 20));
        assert_eq!(nav.tick(at(t0, 60), None), NavigatorOutcome::NoSurface);
        assert!(!nav.wants_frames());
    }

    #[test]
    fn test_keyboard_and_swipe_gestures() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::key(NavKey::PageDown), Some(&bottom()), t0);
        nav.handle_input(InputEvent::key(NavKey::Space), Some(&bottom()), at(t0, 10));
        assert_eq!(nav.router().navigations, vec!["/a/3"]);

        let mut nav = navigator("/a/2", 0);
        for (i, ms) in [0u64, 100].into_iter().enumerate() {
            let start = nav.handle_input(InputEvent::touch_start(300.0), Some(&top()), at(t0, ms));
            assert_eq!(start, NavigatorOutcome::Ignored);
            let end = nav.handle_input(InputEvent::touch_end(380.0), Some(&top()), at(t0, ms + 50));
            if i == 0 {
                assert_eq!(end, NavigatorOutcome::Nudged { direction: Direction::Up, count: 1 });
            }
        }
        assert_eq!(nav.router().navigations, vec!["/a"]);
    }

    #[test]
    fn test_tap_is_not_a_swipe() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::touch_start(300.0), Some(&bottom()), t0);
        let tap = nav.handle_input(InputEvent::touch_end(295.0), Some(&bottom()), at(t0, 50));
        assert_eq!(tap, NavigatorOutcome::Ignored);

        // touch end without a start is ignored too
        let stray = nav.handle_input(InputEvent::touch_end(100.0), Some(&bottom()), at(t0, 60));
        assert_eq!(stray, NavigatorOutcome::Ignored);
    }

    #[test]
    fn test_other_keys_and_zero_delta_are_ignored() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        assert_eq!(
            nav.handle_input(InputEvent::key(NavKey::Other), Some(&bottom()), t0),
            NavigatorOutcome::Ignored
        );
        assert_eq!(
            nav.handle_input(InputEvent::wheel(0.0), Some(&bottom()), t0),
            NavigatorOutcome::Ignored
        );
    }

    #[test]
    fn test_degenerate_inputs_never_navigate() {
        let t0 = Instant::now();

        let mut empty = EdgeIntentNavigator::new(
            RouteSequence::default(),
            config(0),
            RecordingRouter::new(),
            "/a",
        );
        assert_eq!(empty.active_route(), None);
        for i in 0..3 {
            empty.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, i));
        }
        assert!(empty.router().navigations.is_empty());

        let mut single =
            EdgeIntentNavigator::new(RouteSequence::new(["/a"]), config(0), RecordingRouter::new(), "/a");
        for i in 0..3 {
            single.handle_input(InputEvent::wheel(40.0), Some(&short()), at(t0, i));
            single.handle_input(InputEvent::wheel(-40.0), Some(&short()), at(t0, i));
        }
        assert!(single.router().navigations.is_empty());
        assert!(single.router().prefetches.is_empty());

        let mut no_surface = navigator("/a/2", 0);
        assert_eq!(
            no_surface.handle_input(InputEvent::wheel(40.0), None, t0),
            NavigatorOutcome::NoSurface
        );
        assert!(no_surface.router().navigations.is_empty());
    }

    #[test]
    fn test_prefetches_neighbors_on_attach() {
        let nav = navigator("/a/2", 0);
        assert_eq!(nav.router().prefetches, vec!["/a", "/a/3"]);

        let nav = navigator("/a", 0);
        assert_eq!(nav.router().prefetches, vec!["/a/2"]);
    }

    #[test]
    fn test_failed_prefetch_is_not_fatal() {
        let router = RecordingRouter {
            failing_prefetches: vec!["/a".to_string()],
            ..Default::default()
        };
        let mut nav = EdgeIntentNavigator::new(
            RouteSequence::new(["/a", "/a/2", "/a/3"]),
            config(0),
            router,
            "/a/2",
        );
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));
        assert_eq!(nav.router().navigations, vec!["/a/3"]);
    }

    #[test]
    fn test_route_change_resets_intent_but_keeps_cooldown() {
        let mut nav = navigator("/a/2", 0);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));
        nav.set_active_route("/a/3");
        assert_eq!(nav.active_route(), Some("/a/3"));
        assert!(nav.is_cooling_down());

        let residual = nav.handle_input(InputEvent::wheel(-40.0), Some(&top()), at(t0, 50));
        assert_eq!(residual, NavigatorOutcome::CoolingDown);

        let mut nav = navigator("/a/2", 0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.set_active_route("/a");
        assert_eq!(nav.pending_intent(), None);
        assert!(!nav.needs_tick());
    }

    #[test]
    fn test_detach_cancels_everything() {
        let mut nav = navigator("/a/2", 150);
        let t0 = Instant::now();
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), t0);
        nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 10));
        assert!(nav.needs_tick());

        nav.detach();
        assert!(!nav.needs_tick());
        assert_eq!(nav.next_deadline(), None);
        assert_eq!(nav.tick(at(t0, 1000), Some(&bottom())), NavigatorOutcome::Idle);
        assert_eq!(
            nav.handle_input(InputEvent::wheel(40.0), Some(&bottom()), at(t0, 1001)),
            NavigatorOutcome::Ignored
        );
        assert!(nav.router().navigations.is_empty());
    }
}
