use eframe::egui::Color32;
use palette::{FromColor, Hsl, Srgb};

/// Saturation and lightness of plotted series.
pub const SERIES_SATURATION: f32 = 0.75;
pub const SERIES_LIGHTNESS: f32 = 0.55;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// `n` colours of equal saturation and lightness, hues spread evenly around
/// the colour wheel starting at red.
pub fn hue_wheel(n: usize, saturation: f32, lightness: f32) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hsl = Hsl::new(step * i as f32, saturation, lightness);
            let rgb: Srgb<u8> = Srgb::from_color(hsl).into_format();
            Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

/// One colour per series of a PL batch, in legend order.
pub fn series_palette(n: usize) -> Vec<Color32> {
    hue_wheel(n, SERIES_SATURATION, SERIES_LIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(series_palette(0).is_empty());
        assert_eq!(series_palette(5).len(), 5);
    }

    #[test]
    fn palette_colours_are_distinct() {
        let p = series_palette(6);
        for (i, a) in p.iter().enumerate() {
            for b in &p[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn wheel_starts_at_red() {
        assert_eq!(hue_wheel(1, 1.0, 0.5), vec![Color32::from_rgb(255, 0, 0)]);
    }

    #[test]
    fn zero_saturation_is_grey() {
        for c in hue_wheel(4, 0.0, 0.5) {
            assert_eq!(c.r(), c.g());
            assert_eq!(c.g(), c.b());
        }
    }
}
