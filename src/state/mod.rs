//! State Management Module
//!
//! The editing session, its undo/redo ledger, and the gallery
//! persistence collaborator.

pub mod gallery;
pub mod history;
pub mod session;

pub use gallery::{GalleryEntry, GalleryStore, SaveRequest};
pub use history::HistoryLedger;
pub use session::{EditorSession, ImageHandle};
