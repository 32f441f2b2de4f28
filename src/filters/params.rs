//! Filter Parameter Enumeration and Settings
//!
//! `FilterParam` is the closed set of 23 adjustment keys the engine
//! understands; `FilterSettings` is the complete assignment of a value to
//! every key. The settings struct is never partial by construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LuminaError;

/// The closed set of adjustment parameters.
///
/// The enumeration order is observable through [`FilterParam::ALL`] and
/// fixes the order of the composable descriptor's base operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterParam {
    Brightness,
    Contrast,
    Saturation,
    Sepia,
    Grayscale,
    Lightness,
    Vibrance,
    Warmth,
    Tint,
    Highlights,
    Shadows,
    LightRange,
    DarkRange,
    Curve,
    Posterize,
    Dispersion,
    Denoise,
    Clarity,
    Fade,
    Noise,
    Grain,
    Sharpness,
    Vignette,
}

impl FilterParam {
    /// All parameters in canonical enumeration order.
    pub const ALL: [FilterParam; 23] = [
        FilterParam::Brightness,
        FilterParam::Contrast,
        FilterParam::Saturation,
        FilterParam::Sepia,
        FilterParam::Grayscale,
        FilterParam::Lightness,
        FilterParam::Vibrance,
        FilterParam::Warmth,
        FilterParam::Tint,
        FilterParam::Highlights,
        FilterParam::Shadows,
        FilterParam::LightRange,
        FilterParam::DarkRange,
        FilterParam::Curve,
        FilterParam::Posterize,
        FilterParam::Dispersion,
        FilterParam::Denoise,
        FilterParam::Clarity,
        FilterParam::Fade,
        FilterParam::Noise,
        FilterParam::Grain,
        FilterParam::Sharpness,
        FilterParam::Vignette,
    ];

    /// The serialized key name. Matches the camelCase schema used by
    /// persisted session and gallery documents.
    pub fn key(&self) -> &'static str {
        match self {
            FilterParam::Brightness => "brightness",
            FilterParam::Contrast => "contrast",
            FilterParam::Saturation => "saturation",
            FilterParam::Sepia => "sepia",
            FilterParam::Grayscale => "grayscale",
            FilterParam::Lightness => "lightness",
            FilterParam::Vibrance => "vibrance",
            FilterParam::Warmth => "warmth",
            FilterParam::Tint => "tint",
            FilterParam::Highlights => "highlights",
            FilterParam::Shadows => "shadows",
            FilterParam::LightRange => "lightRange",
            FilterParam::DarkRange => "darkRange",
            FilterParam::Curve => "curve",
            FilterParam::Posterize => "posterize",
            FilterParam::Dispersion => "dispersion",
            FilterParam::Denoise => "denoise",
            FilterParam::Clarity => "clarity",
            FilterParam::Fade => "fade",
            FilterParam::Noise => "noise",
            FilterParam::Grain => "grain",
            FilterParam::Sharpness => "sharpness",
            FilterParam::Vignette => "vignette",
        }
    }

    /// The default value restored by a reset.
    ///
    /// No-op defaults are 100 (percent of identity); additive effects
    /// default to 0.
    pub fn default_value(&self) -> f64 {
        match self {
            FilterParam::Brightness
            | FilterParam::Contrast
            | FilterParam::Saturation
            | FilterParam::Lightness
            | FilterParam::Vibrance
            | FilterParam::Warmth
            | FilterParam::Highlights
            | FilterParam::Shadows
            | FilterParam::LightRange
            | FilterParam::DarkRange
            | FilterParam::Curve => 100.0,
            FilterParam::Sepia
            | FilterParam::Grayscale
            | FilterParam::Tint
            | FilterParam::Posterize
            | FilterParam::Dispersion
            | FilterParam::Denoise
            | FilterParam::Clarity
            | FilterParam::Fade
            | FilterParam::Noise
            | FilterParam::Grain
            | FilterParam::Sharpness
            | FilterParam::Vignette => 0.0,
        }
    }
}

impl fmt::Display for FilterParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterParam {
    type Err = LuminaError;

    /// Parse a parameter key. Keys outside the closed enumeration are
    /// rejected rather than silently growing the parameter mapping.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterParam::ALL
            .iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| LuminaError::InvalidParameterKey { key: s.to_string() })
    }
}

/// The complete current assignment of values to all 23 parameters.
///
/// Values are plain numbers and are not clamped here; out-of-range values
/// are accepted and tolerated by downstream consumers (range checking is a
/// UI/renderer concern).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub sepia: f64,
    pub grayscale: f64,
    pub lightness: f64,
    pub vibrance: f64,
    pub warmth: f64,
    pub tint: f64,
    pub highlights: f64,
    pub shadows: f64,
    pub light_range: f64,
    pub dark_range: f64,
    pub curve: f64,
    pub posterize: f64,
    pub dispersion: f64,
    pub denoise: f64,
    pub clarity: f64,
    pub fade: f64,
    pub noise: f64,
    pub grain: f64,
    pub sharpness: f64,
    pub vignette: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            saturation: 100.0,
            sepia: 0.0,
            grayscale: 0.0,
            lightness: 100.0,
            vibrance: 100.0,
            warmth: 100.0,
            tint: 0.0,
            highlights: 100.0,
            shadows: 100.0,
            light_range: 100.0,
            dark_range: 100.0,
            curve: 100.0,
            posterize: 0.0,
            dispersion: 0.0,
            denoise: 0.0,
            clarity: 0.0,
            fade: 0.0,
            noise: 0.0,
            grain: 0.0,
            sharpness: 0.0,
            vignette: 0.0,
        }
    }
}

impl FilterSettings {
    /// Get the value of a single parameter.
    pub fn get(&self, param: FilterParam) -> f64 {
        match param {
            FilterParam::Brightness => self.brightness,
            FilterParam::Contrast => self.contrast,
            FilterParam::Saturation => self.saturation,
            FilterParam::Sepia => self.sepia,
            FilterParam::Grayscale => self.grayscale,
            FilterParam::Lightness => self.lightness,
            FilterParam::Vibrance => self.vibrance,
            FilterParam::Warmth => self.warmth,
            FilterParam::Tint => self.tint,
            FilterParam::Highlights => self.highlights,
            FilterParam::Shadows => self.shadows,
            FilterParam::LightRange => self.light_range,
            FilterParam::DarkRange => self.dark_range,
            FilterParam::Curve => self.curve,
            FilterParam::Posterize => self.posterize,
            FilterParam::Dispersion => self.dispersion,
            FilterParam::Denoise => self.denoise,
            FilterParam::Clarity => self.clarity,
            FilterParam::Fade => self.fade,
            FilterParam::Noise => self.noise,
            FilterParam::Grain => self.grain,
            FilterParam::Sharpness => self.sharpness,
            FilterParam::Vignette => self.vignette,
        }
    }

    /// Replace the value of a single parameter.
    pub fn set(&mut self, param: FilterParam, value: f64) {
        match param {
            FilterParam::Brightness => self.brightness = value,
            FilterParam::Contrast => self.contrast = value,
            FilterParam::Saturation => self.saturation = value,
            FilterParam::Sepia => self.sepia = value,
            FilterParam::Grayscale => self.grayscale = value,
            FilterParam::Lightness => self.lightness = value,
            FilterParam::Vibrance => self.vibrance = value,
            FilterParam::Warmth => self.warmth = value,
            FilterParam::Tint => self.tint = value,
            FilterParam::Highlights => self.highlights = value,
            FilterParam::Shadows => self.shadows = value,
            FilterParam::LightRange => self.light_range = value,
            FilterParam::DarkRange => self.dark_range = value,
            FilterParam::Curve => self.curve = value,
            FilterParam::Posterize => self.posterize = value,
            FilterParam::Dispersion => self.dispersion = value,
            FilterParam::Denoise => self.denoise = value,
            FilterParam::Clarity => self.clarity = value,
            FilterParam::Fade => self.fade = value,
            FilterParam::Noise => self.noise = value,
            FilterParam::Grain => self.grain = value,
            FilterParam::Sharpness => self.sharpness = value,
            FilterParam::Vignette => self.vignette = value,
        }
    }

    /// Parameters whose value differs from the documented default,
    /// in enumeration order. Used for history display.
    pub fn non_default(&self) -> Vec<(FilterParam, f64)> {
        FilterParam::ALL
            .iter()
            .copied()
            .filter(|p| self.get(*p) != p.default_value())
            .map(|p| (p, self.get(p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LuminaError;

    #[test]
    fn test_all_contains_23_params() {
        assert_eq!(FilterParam::ALL.len(), 23);
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let settings = FilterSettings::default();
        for param in FilterParam::ALL {
            assert_eq!(
                settings.get(param),
                param.default_value(),
                "default mismatch for {}",
                param
            );
        }
        assert_eq!(settings.brightness, 100.0);
        assert_eq!(settings.sepia, 0.0);
        assert_eq!(settings.curve, 100.0);
        assert_eq!(settings.vignette, 0.0);
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut settings = FilterSettings::default();
        for (i, param) in FilterParam::ALL.iter().enumerate() {
            settings.set(*param, i as f64 + 0.5);
        }
        for (i, param) in FilterParam::ALL.iter().enumerate() {
            assert_eq!(settings.get(*param), i as f64 + 0.5);
        }
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        // No clamping at this layer; the renderer tolerates these.
        let mut settings = FilterSettings::default();
        settings.set(FilterParam::Brightness, -500.0);
        settings.set(FilterParam::Tint, 100_000.0);
        assert_eq!(settings.brightness, -500.0);
        assert_eq!(settings.tint, 100_000.0);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!(
            "brightness".parse::<FilterParam>().unwrap(),
            FilterParam::Brightness
        );
        assert_eq!(
            "lightRange".parse::<FilterParam>().unwrap(),
            FilterParam::LightRange
        );
        assert_eq!(
            "darkRange".parse::<FilterParam>().unwrap(),
            FilterParam::DarkRange
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = "exposure".parse::<FilterParam>().unwrap_err();
        match err {
            LuminaError::InvalidParameterKey { key } => assert_eq!(key, "exposure"),
            other => panic!("unexpected error: {}", other),
        }
        // Case matters: the persisted schema is camelCase.
        assert!("lightrange".parse::<FilterParam>().is_err());
    }

    #[test]
    fn test_every_key_parses_back() {
        for param in FilterParam::ALL {
            assert_eq!(param.key().parse::<FilterParam>().unwrap(), param);
        }
    }

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let settings = FilterSettings::default();
        let value = serde_json::to_value(&settings).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 23);
        for param in FilterParam::ALL {
            assert!(
                object.contains_key(param.key()),
                "missing key {}",
                param.key()
            );
        }
        assert_eq!(object["lightRange"], 100.0);
        assert_eq!(object["sharpness"], 0.0);
    }

    #[test]
    fn test_non_default_reports_edits_in_order() {
        let mut settings = FilterSettings::default();
        settings.set(FilterParam::Tint, 45.0);
        settings.set(FilterParam::Brightness, 80.0);

        let edits = settings.non_default();
        assert_eq!(
            edits,
            vec![(FilterParam::Brightness, 80.0), (FilterParam::Tint, 45.0)]
        );
    }
}
