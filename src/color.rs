use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::OxalateTier;

// ---------------------------------------------------------------------------
// Tier colours
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees) to an egui colour.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Colours used to mark each oxalate tier in the results table.
#[derive(Debug, Clone)]
pub struct TierPalette {
    high: Color32,
    moderate: Color32,
    low: Color32,
    unclassified: Color32,
}

impl Default for TierPalette {
    fn default() -> Self {
        TierPalette {
            high: hsl_color(0.0, 0.75, 0.55),
            moderate: hsl_color(38.0, 0.85, 0.55),
            low: hsl_color(125.0, 0.55, 0.45),
            unclassified: Color32::GRAY,
        }
    }
}

impl TierPalette {
    pub fn color_for(&self, tier: Option<OxalateTier>) -> Color32 {
        match tier {
            Some(OxalateTier::High) => self.high,
            Some(OxalateTier::Moderate) => self.moderate,
            Some(OxalateTier::Low) => self.low,
            None => self.unclassified,
        }
    }

    /// Legend entries (label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        [OxalateTier::High, OxalateTier::Moderate, OxalateTier::Low]
            .into_iter()
            .map(|tier| (tier.to_string(), self.color_for(Some(tier))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_get_distinct_colours() {
        let palette = TierPalette::default();
        let high = palette.color_for(Some(OxalateTier::High));
        let moderate = palette.color_for(Some(OxalateTier::Moderate));
        let low = palette.color_for(Some(OxalateTier::Low));
        assert_ne!(high, moderate);
        assert_ne!(moderate, low);
        assert_ne!(high, low);
        assert_eq!(palette.color_for(None), Color32::GRAY);
    }

    #[test]
    fn red_hue_is_mostly_red() {
        let c = hsl_color(0.0, 0.75, 0.55);
        assert!(c.r() > c.g() && c.r() > c.b());
    }

    #[test]
    fn legend_lists_three_tiers() {
        let labels: Vec<String> = TierPalette::default()
            .legend_entries()
            .into_iter()
            .map(|(label, _)| label)
            .collect();
        assert_eq!(labels, vec!["high", "moderate", "low"]);
    }
}
