//! Shared plot helpers for the dashboard views
//!
//! Provides stable per-series colors and the common legend configuration
//! used by all egui_plot views.

use egui::Color32;
use egui_plot::{Corner, Legend};

/// Generate a distinct color for a series index.
///
/// Uses the golden ratio to spread hues evenly across the color wheel,
/// with medium saturation and value so the colors read on both light and
/// dark themes. The same index always yields the same color, so series
/// keep their colors across recomputations.
pub fn series_color(index: usize) -> Color32 {
    const GOLDEN_RATIO: f32 = 0.618033988749895;

    let hue = ((index as f32 * GOLDEN_RATIO) % 1.0) * 360.0;
    let saturation = 0.7;
    let value = 0.85;

    let (r, g, b) = hsv_to_rgb(hue, saturation, value);
    Color32::from_rgb(r, g, b)
}

/// Legend placed in the top-right corner, matching all dashboard plots.
pub fn dashboard_legend() -> Legend {
    Legend::default()
        .position(Corner::RightTop)
        .background_alpha(0.8)
}

/// Convert HSV (hue 0-360, saturation 0-1, value 0-1) to RGB bytes
fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (u8, u8, u8) {
    let c = value * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_color_is_deterministic() {
        assert_eq!(series_color(3), series_color(3));
    }

    #[test]
    fn test_adjacent_series_colors_differ() {
        assert_ne!(series_color(0), series_color(1));
        assert_ne!(series_color(1), series_color(2));
    }
}
