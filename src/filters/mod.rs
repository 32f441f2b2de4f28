//! Filter Parameter Model
//!
//! The canonical set of image-adjustment parameters and the pure
//! projections that derive renderer-facing descriptors from them.

pub mod descriptor;
pub mod params;

pub use descriptor::{
    composable_descriptor, raw_descriptor, ComposableDescriptor, FilterFunction, FilterOp,
    RawFilterData,
};
pub use params::{FilterParam, FilterSettings};
