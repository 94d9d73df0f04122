use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Gender;

// ---------------------------------------------------------------------------
// Panel colours
// ---------------------------------------------------------------------------

const MALE_HUE: f32 = 220.0;
const FEMALE_HUE: f32 = 0.0;

/// Convert an HSL hue (degrees) at the shared saturation/lightness to egui.
pub fn hue_to_color32(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.5);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Marker colour of a gender's scatter panel: blue for male, red for female.
pub fn gender_color(gender: Gender) -> Color32 {
    match gender {
        Gender::Male => hue_to_color32(MALE_HUE),
        Gender::Female => hue_to_color32(FEMALE_HUE),
    }
}
