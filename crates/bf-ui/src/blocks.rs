//! Rendering of normalized content blocks

use bf_data::{BlockBody, ContentBlock, ImagePayload, ImageSource, Section, StorageConfig};
use egui::{Align2, FontId, Frame, Label, Margin, RichText, ScrollArea, Sense, Stroke, Ui, Vec2};

use crate::input::NestedScrollRegions;
use crate::theme;

/// What can be shown for an image block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Ready(String),
    /// `tried` is the `bucket/path` that could not be resolved
    Unavailable { tried: Option<String> },
}

pub fn image_status(image: &ImagePayload, storage: &StorageConfig) -> ImageStatus {
    let source = image.source();
    if let Some(url) = storage.resolve(&source) {
        return ImageStatus::Ready(url);
    }
    let tried = match source {
        ImageSource::Storage { bucket, path } => Some(format!("{}/{}", bucket, path)),
        _ => None,
    };
    ImageStatus::Unavailable { tried }
}

/// Scale an image to the available width, keeping its aspect ratio
pub fn fit_image_size(width: f32, height: f32, available_width: f32) -> Vec2 {
    let (width, height) = if width > 0.0 && height > 0.0 {
        (width, height)
    } else {
        (bf_data::content::DEFAULT_IMAGE_WIDTH, bf_data::content::DEFAULT_IMAGE_HEIGHT)
    };
    let scale = (available_width / width).min(1.0).max(0.0);
    Vec2::new(width * scale, height * scale)
}

/// Render every block of a section, top to bottom
pub fn show_section(
    ui: &mut Ui,
    section: &Section,
    storage: &StorageConfig,
    nested: &mut NestedScrollRegions,
) {
    ui.heading(section.title());
    ui.add_space(8.0);

    if section.items.is_empty() {
        ui.label(RichText::new("Nothing here yet.").color(theme::muted_text_color()));
        return;
    }

    for item in &section.items {
        ui.push_id(&item.id, |ui| show_block(ui, &item.block, storage, nested));
        ui.add_space(12.0);
    }
}

pub fn show_block(
    ui: &mut Ui,
    block: &ContentBlock,
    storage: &StorageConfig,
    nested: &mut NestedScrollRegions,
) {
    if let Some(title) = &block.title {
        ui.label(RichText::new(title).strong().size(16.0));
    }
    if let Some(subtitle) = &block.subtitle {
        ui.label(RichText::new(subtitle).color(theme::muted_text_color()));
    }

    match &block.body {
        BlockBody::Text { text } => {
            ui.add(Label::new(text.as_str()).wrap(true));
        }
        BlockBody::Code { code, language } => show_code(ui, code, language.as_deref(), nested),
        BlockBody::Image(image) => show_image(ui, image, storage),
    }
}

fn show_code(ui: &mut Ui, code: &str, language: Option<&str>, nested: &mut NestedScrollRegions) {
    let response = Frame::none()
        .fill(ui.visuals().code_bg_color)
        .rounding(theme::ROUNDING)
        .inner_margin(Margin::same(8.0))
        .show(ui, |ui| {
            if let Some(language) = language {
                let label = format!("{} {}", crate::icons::CODE, language);
                ui.label(RichText::new(label).small().color(theme::muted_text_color()));
            }
            ScrollArea::horizontal()
                .id_source("code_scroll")
                .show(ui, |ui| {
                    ui.add(Label::new(RichText::new(code).monospace()).wrap(false));
                });
        })
        .response;

    nested.register(response.rect);
}

fn show_image(ui: &mut Ui, image: &ImagePayload, storage: &StorageConfig) {
    let status = image_status(image, storage);
    let size = fit_image_size(image.width, image.height, ui.available_width());
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

    let painter = ui.painter_at(rect);
    painter.rect(
        rect,
        theme::ROUNDING,
        ui.visuals().extreme_bg_color,
        Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
    );

    let (headline, detail, color) = match &status {
        ImageStatus::Ready(url) => (
            format!("{} {}", crate::icons::IMAGE, image.alt.as_deref().unwrap_or("Image")),
            url.clone(),
            ui.visuals().text_color(),
        ),
        ImageStatus::Unavailable { tried } => (
            "Image unavailable.".to_string(),
            match tried {
                Some(tried) => format!("Tried: {}", tried),
                None => "No url or path provided.".to_string(),
            },
            theme::error_color(),
        ),
    };
    painter.text(
        rect.center() - Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        headline,
        FontId::proportional(14.0),
        color,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        detail,
        FontId::monospace(11.0),
        theme::muted_text_color(),
    );

    if let Some(caption) = &image.caption {
        ui.label(RichText::new(caption).italics().color(theme::muted_text_color()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageConfig {
        StorageConfig {
            public_base_url: Some("https://xyz.supabase.co/".into()),
        }
    }

    #[test]
    fn test_image_status() {
        let remote = ImagePayload {
            url: Some("https://cdn.example.com/a.png".into()),
            ..Default::default()
        };
        assert_eq!(
            image_status(&remote, &StorageConfig::default()),
            ImageStatus::Ready("https://cdn.example.com/a.png".into())
        );

        let stored = ImagePayload {
            path: Some("figs/b.png".into()),
            ..Default::default()
        };
        assert_eq!(
            image_status(&stored, &storage()),
            ImageStatus::Ready(
                "https://xyz.supabase.co/storage/v1/object/public/images/figs/b.png".into()
            )
        );
        assert_eq!(
            image_status(&stored, &StorageConfig::default()),
            ImageStatus::Unavailable {
                tried: Some("images/figs/b.png".into())
            }
        );

        assert_eq!(
            image_status(&ImagePayload::default(), &storage()),
            ImageStatus::Unavailable { tried: None }
        );
    }

    #[test]
    fn test_fit_image_size() {
        assert_eq!(fit_image_size(1600.0, 900.0, 800.0), Vec2::new(800.0, 450.0));
        assert_eq!(fit_image_size(400.0, 300.0, 800.0), Vec2::new(400.0, 300.0));
        assert_eq!(fit_image_size(0.0, 0.0, 160.0), Vec2::new(160.0, 90.0));
    }
}
