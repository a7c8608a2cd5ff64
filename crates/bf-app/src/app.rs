//! Section viewer application state

use std::sync::Arc;
use std::time::Instant;

use bf_core::{EdgeIntentNavigator, RouteSequence, Router, ScrollSurface};
use bf_data::{parse_route, AppConfig, ContentCache, ContentStore, Section};
use bf_ui::{NestedScrollRegions, ScrollAreaSurface, SurfaceRegistry, Theme, PAGE_SURFACE};
use egui::{Context, Id, RichText, ScrollArea, Vec2};
use tracing::{debug, info, warn};

use crate::router::{load_section, PageRouter};

/// Name of the project list scroll area in the side panel
pub const PROJECT_LIST_SURFACE: &str = "project_list";

pub struct BioForgeApp {
    config: AppConfig,
    store: Arc<ContentStore>,
    cache: ContentCache,

    /// Navigator over the sections of the active project
    navigator: EdgeIntentNavigator<PageRouter>,

    route: String,
    section: Option<Arc<Section>>,

    /// Scroll area geometry from the last frame
    surfaces: SurfaceRegistry,
    /// Id of the scroll area the navigator currently measures
    surface_id: Option<Id>,
    nested: NestedScrollRegions,
    scroll_to_top: bool,
}

impl BioForgeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, store: ContentStore) -> Self {
        bf_ui::apply_theme(&cc.egui_ctx, &Theme::new(config.dark_mode));

        let store = Arc::new(store);
        let cache = ContentCache::new(config.cache_sections);
        let route = start_route(&config, &store);
        let navigator = build_navigator(&config, &store, &cache, &route);

        let mut app = Self {
            config,
            store,
            cache,
            navigator,
            route: route.clone(),
            section: None,
            surfaces: SurfaceRegistry::new(),
            surface_id: None,
            nested: NestedScrollRegions::new(),
            scroll_to_top: true,
        };
        app.show_route(route);
        app
    }

    /// Switch the page, rebuilding the navigator when the project changes
    fn show_route(&mut self, route: String) {
        let same_project = project_slug(&route).is_some()
            && project_slug(&route) == project_slug(&self.route);

        if same_project {
            self.navigator.set_active_route(&route);
        } else {
            self.navigator.detach();
            self.cache.clear();
            self.navigator = build_navigator(&self.config, &self.store, &self.cache, &route);
        }

        self.section = match load_section(&self.store, &self.cache, &route) {
            Ok(section) => Some(section),
            Err(e) => {
                debug!(route = %route, error = %e, "no content for route");
                None
            }
        };
        info!(route = %route, "showing page");
        self.route = route;
        self.surfaces.clear();
        self.scroll_to_top = true;
    }

    fn handle_navigation(&mut self, ctx: &Context) {
        let now = Instant::now();
        let events = bf_ui::collect_input(ctx, &self.nested);
        let surface = self.surfaces.resolve(self.config.navigator.surface.as_deref());
        follow_surface(&mut self.navigator, &mut self.surface_id, surface);
        let surface = surface.map(|s| s as &dyn ScrollSurface);

        for event in events {
            let outcome = self.navigator.handle_input(event, surface, now);
            debug!(?event, ?outcome, "navigator input");
        }
        self.navigator.tick(now, surface);

        if let Some(route) = self.navigator.router_mut().take_pending() {
            self.show_route(route);
        }

        if self.navigator.wants_frames() {
            ctx.request_repaint();
        } else if let Some(deadline) = self.navigator.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn side_panel(&mut self, ctx: &Context) {
        let mut selected = None;
        let current = self.route.clone();

        let panel = egui::SidePanel::left("projects")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_source(PROJECT_LIST_SURFACE).show(ui, |ui| {
                    for project in self.store.projects() {
                        ui.label(RichText::new(&project.title).strong());
                        if !project.description.is_empty() {
                            ui.label(
                                RichText::new(&project.description)
                                    .small()
                                    .color(bf_ui::theme::muted_text_color()),
                            );
                        }
                        for kind in bf_data::SectionKind::ALL {
                            let route = kind.route(&project.slug);
                            let label = format!("{} {}", bf_ui::icons::SECTION, kind.title());
                            if ui.selectable_label(route == current, label).clicked() {
                                selected = Some(route);
                            }
                        }
                        ui.add_space(12.0);
                    }
                })
            });
        self.surfaces
            .record(PROJECT_LIST_SURFACE, ScrollAreaSurface::from_output(&panel.inner));

        // The measured surface must not count as nested
        if self.config.navigator.surface.as_deref() != Some(PROJECT_LIST_SURFACE) {
            self.nested.register(panel.response.rect);
        }

        if let Some(route) = selected.filter(|route| *route != self.route) {
            self.show_route(route);
        }
    }

    fn page(&mut self, ctx: &Context) {
        let section = self.section.clone();
        let storage = &self.config.storage;
        let nested = &mut self.nested;
        let route = &self.route;

        let mut scroll = ScrollArea::vertical().id_source(PAGE_SURFACE).auto_shrink([false, false]);
        if self.scroll_to_top {
            scroll = scroll.scroll_offset(Vec2::ZERO);
            self.scroll_to_top = false;
        }

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                scroll.show(ui, |ui| {
                    ui.set_max_width(860.0);
                    match &section {
                        Some(section) => bf_ui::show_section(ui, section, storage, nested),
                        None => {
                            ui.heading(page_title(route));
                            ui.label(
                                RichText::new("Nothing here yet.")
                                    .color(bf_ui::theme::muted_text_color()),
                            );
                        }
                    }
                })
            })
            .inner;

        self.surfaces.record(PAGE_SURFACE, ScrollAreaSurface::from_output(&output));
    }
}

impl eframe::App for BioForgeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_navigation(ctx);

        // Regions are rebuilt while drawing and tested against next frame's input
        self.nested.clear();
        self.side_panel(ctx);
        self.page(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.navigator.detach();
    }
}

/// Track the measured scroll area, resetting the navigator when it is replaced
fn follow_surface<R: Router>(
    navigator: &mut EdgeIntentNavigator<R>,
    current: &mut Option<Id>,
    surface: Option<&ScrollAreaSurface>,
) {
    let Some(surface) = surface else {
        return;
    };
    if let Some(previous) = current.replace(surface.id) {
        if previous != surface.id {
            debug!(?previous, id = ?surface.id, "scroll surface changed");
            navigator.surface_changed();
        }
    }
}

fn build_navigator(
    config: &AppConfig,
    store: &Arc<ContentStore>,
    cache: &ContentCache,
    route: &str,
) -> EdgeIntentNavigator<PageRouter> {
    let routes = match project_slug(route) {
        Some(slug) => RouteSequence::new(bf_data::project_routes(slug)),
        None => RouteSequence::default(),
    };
    EdgeIntentNavigator::new(
        routes,
        config.navigator.clone(),
        PageRouter::new(store.clone(), cache.clone()),
        route,
    )
}

fn project_slug(route: &str) -> Option<&str> {
    parse_route(route).map(|(slug, _)| slug)
}

fn page_title(route: &str) -> String {
    match parse_route(route) {
        Some((slug, kind)) => format!("{}: {}", bf_data::title_from_slug(slug), kind.title()),
        None => route.to_string(),
    }
}

/// Configured start route when it names a known project, else the first overview
fn start_route(config: &AppConfig, store: &ContentStore) -> String {
    if let Some(route) = &config.start_route {
        match project_slug(route) {
            Some(slug) if store.project(slug).is_ok() => return route.clone(),
            _ => warn!(route = %route, "ignoring unknown start route"),
        }
    }
    store
        .projects()
        .first()
        .map(|project| bf_data::SectionKind::Overview.route(&project.slug))
        .unwrap_or_else(|| bf_data::catalog::PROJECTS_ROUTE.to_string())
}
