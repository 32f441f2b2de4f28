//! Lumina - Filter State & History Engine
//!
//! Lumina is the state-management core of an interactive photo-filter
//! editor. It owns the current set of image-adjustment parameters, derives
//! renderer-facing descriptors from them, and keeps a linear undo/redo
//! history of parameter snapshots.
//!
//! # Architecture
//!
//! - `filters`: the closed parameter set and the pure descriptor projections
//! - `state`: the editing session, its undo/redo ledger, and the gallery
//!   persistence collaborator
//! - `cli`: file-based command surface over a session document
//!
//! Pixel-level filter algorithms and rendering live in external
//! collaborators; this crate only carries the parameters they consume and
//! stores the opaque artifacts they produce.

pub mod cli;
pub mod error;
pub mod filters;
pub mod state;

pub use error::{LuminaError, Result};
pub use filters::{FilterParam, FilterSettings};
pub use state::{EditorSession, HistoryLedger};
