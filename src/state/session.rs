//! Editing Session
//!
//! One session per open document: it owns the live `FilterSettings` and
//! their `HistoryLedger`, and replaces both as a single unit when a new
//! original image is loaded. There is no global store; callers construct
//! and own their sessions, so multiple editors can coexist in one process.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{LuminaError, Result};
use crate::filters::{
    composable_descriptor, raw_descriptor, ComposableDescriptor, FilterParam, FilterSettings,
    RawFilterData,
};
use crate::state::gallery::SaveRequest;
use crate::state::history::HistoryLedger;

/// Opaque descriptor of a loaded original image.
///
/// The engine never inspects pixel data and imposes no format constraints;
/// it keeps just enough to identify the source and verify integrity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Original filename as supplied by the image-load collaborator.
    pub filename: String,

    /// Payload size in bytes.
    pub size_bytes: u64,

    /// SHA-256 hash of the payload for integrity verification.
    pub hash_sha256: String,
}

impl ImageHandle {
    /// Fingerprint opaque image bytes supplied by the load collaborator.
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        let hash = Sha256::digest(bytes);
        Self {
            filename: filename.into(),
            size_bytes: bytes.len() as u64,
            hash_sha256: format!("{:x}", hash),
        }
    }
}

/// An editing session for one document.
///
/// Every mutating operation (`update`, `reset`) records exactly one
/// snapshot in the ledger, synchronously, so each discrete edit is
/// individually undoable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSession {
    /// Timestamp when the session was created.
    pub created_at: DateTime<Utc>,

    /// Timestamp of last modification.
    pub modified_at: DateTime<Utc>,

    /// The loaded original image, if any.
    original_image: Option<ImageHandle>,

    /// Live filter values.
    settings: FilterSettings,

    /// Undo/redo ledger of settings snapshots.
    history: HistoryLedger,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Create an empty session with no image and no history.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            modified_at: now,
            original_image: None,
            settings: FilterSettings::default(),
            history: HistoryLedger::new(),
        }
    }

    /// Load a new original image.
    ///
    /// Settings and ledger are replaced together as one unit: the settings
    /// reset to defaults and a fresh ledger is seeded with that state as
    /// its first snapshot. All prior history is discarded.
    pub fn load_image(&mut self, image: ImageHandle) {
        info!(
            "Loading original image: {} ({} bytes)",
            image.filename, image.size_bytes
        );
        let settings = FilterSettings::default();
        let mut history = HistoryLedger::new();
        history.record(&settings);

        self.original_image = Some(image);
        self.settings = settings;
        self.history = history;
        self.touch();
    }

    /// Set a single parameter and record one undoable step.
    ///
    /// Values are not clamped; out-of-range numbers are passed through to
    /// the renderer untouched.
    pub fn update(&mut self, param: FilterParam, value: f64) {
        debug!("update {} = {}", param, value);
        self.settings.set(param, value);
        self.history.record(&self.settings);
        self.touch();
    }

    /// Restore every parameter to its default and record one undoable step.
    pub fn reset(&mut self) {
        debug!("reset filters to defaults");
        self.settings = FilterSettings::default();
        self.history.record(&self.settings);
        self.touch();
    }

    /// Step back one edit, copying the snapshot into the live settings.
    /// Returns `false` at the boundary (a no-op, never an error).
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.settings = snapshot;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Step forward one undone edit. Returns `false` at the boundary.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.settings = snapshot;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_image(&self) -> bool {
        self.original_image.is_some()
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.original_image.as_ref()
    }

    pub fn settings(&self) -> &FilterSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Composable pipeline descriptor for the current settings,
    /// recomputed on demand.
    pub fn composable_descriptor(&self) -> ComposableDescriptor {
        composable_descriptor(&self.settings)
    }

    /// Raw parameter bag for the custom-effect renderer, recomputed on
    /// demand.
    pub fn raw_descriptor(&self) -> RawFilterData {
        raw_descriptor(&self.settings)
    }

    /// Build a gallery save request from the current settings and an
    /// opaque rendered image supplied by the renderer. Handing the request
    /// to the gallery store is the caller's concern; the session never
    /// blocks on or retries the write.
    pub fn save_request(&self, image: Vec<u8>) -> SaveRequest {
        SaveRequest {
            id: Uuid::new_v4(),
            image,
            filters: self.settings,
            date: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Load a session document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LuminaError::SessionNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| LuminaError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let session: EditorSession = serde_json::from_str(&content)?;
        Ok(session)
    }

    /// Save the session document to disk.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.touch();

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| LuminaError::FileWriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_with_image() -> EditorSession {
        let mut session = EditorSession::new();
        session.load_image(ImageHandle::from_bytes("photo.png", b"not really a png"));
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = EditorSession::new();
        assert!(!session.has_image());
        assert!(session.history().is_empty());
        assert_eq!(*session.settings(), FilterSettings::default());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_image_handle_fingerprint() {
        let handle = ImageHandle::from_bytes("photo.png", b"abc");
        assert_eq!(handle.filename, "photo.png");
        assert_eq!(handle.size_bytes, 3);
        // sha256("abc")
        assert_eq!(
            handle.hash_sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_load_image_seeds_first_snapshot() {
        let session = session_with_image();
        assert!(session.has_image());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().cursor(), Some(0));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_cursor_tracks_last_after_every_edit() {
        let mut session = session_with_image();
        session.update(FilterParam::Brightness, 80.0);
        assert_eq!(session.history().cursor(), Some(session.history().len() - 1));
        session.update(FilterParam::Contrast, 120.0);
        assert_eq!(session.history().cursor(), Some(session.history().len() - 1));
        session.reset();
        assert_eq!(session.history().cursor(), Some(session.history().len() - 1));
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn test_undo_then_redo_restores_settings() {
        let mut session = session_with_image();
        session.update(FilterParam::Brightness, 80.0);
        session.update(FilterParam::Tint, 45.0);
        let before_undo = *session.settings();

        assert!(session.undo());
        assert_eq!(session.settings().tint, 0.0);
        assert!(session.redo());
        assert_eq!(*session.settings(), before_undo);
    }

    #[test]
    fn test_reset_is_one_undoable_step() {
        let mut session = session_with_image();
        session.update(FilterParam::Brightness, 80.0);
        session.update(FilterParam::Sepia, 40.0);
        session.reset();

        assert_eq!(*session.settings(), FilterSettings::default());

        // One undo returns to the state just before the reset.
        assert!(session.undo());
        assert_eq!(session.settings().brightness, 80.0);
        assert_eq!(session.settings().sepia, 40.0);
    }

    #[test]
    fn test_edit_after_undo_discards_redo_branch() {
        let mut session = session_with_image();
        session.update(FilterParam::Brightness, 90.0); // S1
        session.update(FilterParam::Brightness, 80.0); // S2
        session.update(FilterParam::Brightness, 70.0); // S3
        assert_eq!(session.history().len(), 4);

        session.undo();
        session.undo();
        assert_eq!(session.history().cursor(), Some(1));

        session.update(FilterParam::Tint, 45.0); // S4, built on S1's values
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history().cursor(), Some(2));
        assert_eq!(session.settings().brightness, 90.0);
        assert_eq!(session.settings().tint, 45.0);
        assert!(!session.redo());
    }

    #[test]
    fn test_second_image_discards_history() {
        let mut session = session_with_image();
        for i in 0..5 {
            session.update(FilterParam::Brightness, 100.0 - i as f64);
        }
        assert!(session.can_undo());

        session.load_image(ImageHandle::from_bytes("other.png", b"other bytes"));
        assert_eq!(session.history().len(), 1);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(*session.settings(), FilterSettings::default());
        assert_eq!(session.image().unwrap().filename, "other.png");
    }

    #[test]
    fn test_undo_boundary_is_noop() {
        let mut session = session_with_image();
        assert!(!session.undo());
        assert!(!session.redo());

        let mut empty = EditorSession::new();
        assert!(!empty.undo());
        assert!(!empty.redo());
    }

    #[test]
    fn test_descriptors_reflect_live_settings() {
        let mut session = session_with_image();
        session.update(FilterParam::Sharpness, 30.0);

        let composable = session.composable_descriptor();
        assert_eq!(composable.ops.last().unwrap().amount, 103.0);
        assert_eq!(session.raw_descriptor().sharpness, 30.0);

        session.undo();
        assert_eq!(session.composable_descriptor().len(), 5);
        assert_eq!(session.raw_descriptor().sharpness, 0.0);
    }

    #[test]
    fn test_save_request_snapshots_filters() {
        let mut session = session_with_image();
        session.update(FilterParam::Sepia, 60.0);

        let request = session.save_request(vec![1, 2, 3]);
        assert_eq!(request.filters.sepia, 60.0);
        assert_eq!(request.image, vec![1, 2, 3]);

        // The request holds a copy; later edits do not leak into it.
        session.update(FilterParam::Sepia, 10.0);
        assert_eq!(request.filters.sepia, 60.0);
    }

    #[test]
    fn test_session_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = session_with_image();
        session.update(FilterParam::Brightness, 75.0);
        session.undo();
        session.save(&path).unwrap();

        let restored = EditorSession::load(&path).unwrap();
        assert_eq!(restored.settings(), session.settings());
        assert_eq!(restored.history(), session.history());
        assert!(restored.can_redo());
        assert_eq!(restored.image(), session.image());
    }

    #[test]
    fn test_load_missing_session() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditorSession::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LuminaError::SessionNotFound { .. }));
    }
}
