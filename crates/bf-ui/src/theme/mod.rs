use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Corner radius shared by frames and placeholders
pub const ROUNDING: f32 = 6.0;

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "BioForge".to_string(),
            dark_mode: true,
        }
    }
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Default::default()
        }
    }
}

/// Apply the reading theme: long-form text, quiet chrome, green accent
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    let accent = accent_color();
    if theme.dark_mode {
        let bg_color = Color32::from_rgb(18, 20, 19);
        let panel_bg = Color32::from_rgb(26, 29, 27);
        let widget_bg = Color32::from_rgb(36, 40, 37);

        visuals.window_fill = panel_bg;
        visuals.panel_fill = bg_color;
        visuals.extreme_bg_color = Color32::from_rgb(12, 14, 13);
        visuals.faint_bg_color = widget_bg;
        visuals.code_bg_color = Color32::from_rgb(30, 33, 31);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(55, 60, 57));
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(222, 226, 223));
    }

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = Rounding::same(ROUNDING);
    }
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.selection.bg_fill = accent.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.indent = 20.0;

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(72, 187, 120)
}

pub fn muted_text_color() -> Color32 {
    Color32::from_rgb(140, 148, 143)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}
