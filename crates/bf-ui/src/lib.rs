//! egui integration for the BioForge section viewer
//!
//! Bridges egui scroll areas and input into the edge-intent navigator and
//! renders normalized content blocks.

pub mod blocks;
pub mod input;
pub mod surface;
pub mod theme;

/// Re-export commonly used types
pub use blocks::{fit_image_size, image_status, show_block, show_section, ImageStatus};
pub use input::{collect_input, translate_events, NestedScrollRegions};
pub use surface::{ScrollAreaSurface, SurfaceRegistry, PAGE_SURFACE};
pub use theme::{apply_theme, Theme};

// Common icon definitions
pub mod icons {
    pub const SECTION: &str = "📄";
    pub const IMAGE: &str = "🖼";
    pub const CODE: &str = "⌨";
}
