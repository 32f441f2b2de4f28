//! Renderer-Facing Descriptor Projections
//!
//! Pure derivations from `FilterSettings`: a composable filter-pipeline
//! descriptor for operations a standard pipeline can stack, and a raw
//! parameter bag for effects that need bespoke per-pixel processing.
//! Both are recomputed on every call; nothing here caches or mutates state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::params::FilterSettings;

/// Operations expressible in a standard composable filter pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterFunction {
    Brightness,
    Contrast,
    Saturate,
    Sepia,
    Grayscale,
    HueRotate,
}

impl FilterFunction {
    /// The pipeline function name (CSS filter syntax).
    pub fn name(&self) -> &'static str {
        match self {
            FilterFunction::Brightness => "brightness",
            FilterFunction::Contrast => "contrast",
            FilterFunction::Saturate => "saturate",
            FilterFunction::Sepia => "sepia",
            FilterFunction::Grayscale => "grayscale",
            FilterFunction::HueRotate => "hue-rotate",
        }
    }

    /// Unit suffix for the rendered magnitude.
    fn unit(&self) -> &'static str {
        match self {
            FilterFunction::HueRotate => "deg",
            _ => "%",
        }
    }
}

/// One composable operation with its numeric magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterOp {
    pub function: FilterFunction,
    pub amount: f64,
}

impl FilterOp {
    fn new(function: FilterFunction, amount: f64) -> Self {
        Self { function, amount }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}{})",
            self.function.name(),
            self.amount,
            self.function.unit()
        )
    }
}

/// Ordered list of composable operations. Order is significant: the
/// pipeline applies operations left to right.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComposableDescriptor {
    pub ops: Vec<FilterOp>,
}

impl ComposableDescriptor {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Display for ComposableDescriptor {
    /// Renders the full filter string, e.g.
    /// `brightness(100%) contrast(100%) ... hue-rotate(45deg)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Derive the composable pipeline descriptor.
///
/// The five base operations always appear in enumeration order. Sharpness
/// is approximated with an extra contrast boost of `100 + sharpness/10`
/// when positive; tint becomes a hue rotation when non-zero. Both values
/// also appear verbatim in [`raw_descriptor`]: composable engines use the
/// cheap approximation here while custom engines apply the precise version.
pub fn composable_descriptor(settings: &FilterSettings) -> ComposableDescriptor {
    let mut ops = vec![
        FilterOp::new(FilterFunction::Brightness, settings.brightness),
        FilterOp::new(FilterFunction::Contrast, settings.contrast),
        FilterOp::new(FilterFunction::Saturate, settings.saturation),
        FilterOp::new(FilterFunction::Sepia, settings.sepia),
        FilterOp::new(FilterFunction::Grayscale, settings.grayscale),
    ];

    if settings.sharpness > 0.0 {
        ops.push(FilterOp::new(
            FilterFunction::Contrast,
            100.0 + settings.sharpness / 10.0,
        ));
    }

    if settings.tint != 0.0 {
        ops.push(FilterOp::new(FilterFunction::HueRotate, settings.tint));
    }

    ComposableDescriptor { ops }
}

/// Parameter bag for effects applied through custom per-pixel logic,
/// carried verbatim for a renderer outside the composable pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFilterData {
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

/// Derive the raw descriptor: the 18 non-composable parameters, verbatim.
pub fn raw_descriptor(settings: &FilterSettings) -> RawFilterData {
    RawFilterData {
        lightness: settings.lightness,
        vibrance: settings.vibrance,
        warmth: settings.warmth,
        tint: settings.tint,
        highlights: settings.highlights,
        shadows: settings.shadows,
        light_range: settings.light_range,
        dark_range: settings.dark_range,
        curve: settings.curve,
        posterize: settings.posterize,
        dispersion: settings.dispersion,
        denoise: settings.denoise,
        clarity: settings.clarity,
        fade: settings.fade,
        noise: settings.noise,
        grain: settings.grain,
        sharpness: settings.sharpness,
        vignette: settings.vignette,
    }
}
