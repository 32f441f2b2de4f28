//! Gallery Persistence
//!
//! The durable-storage collaborator for saved edits. A gallery is a
//! directory holding opaque rendered image payloads plus a `gallery.json`
//! manifest of entries. The editing session hands off a completed
//! [`SaveRequest`] and never blocks on or retries the write; a damaged
//! gallery must never take down an editing session, so loading degrades
//! to an empty list instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LuminaError, Result};
use crate::filters::FilterSettings;

/// Manifest file name inside the gallery directory.
const MANIFEST_FILE: &str = "gallery.json";

/// Extension used for stored image payloads.
const IMAGE_EXT: &str = "png";

/// A completed artifact handed off by the session for storage.
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Unique id for the new entry.
    pub id: Uuid,

    /// Opaque encoded bitmap produced by the renderer.
    pub image: Vec<u8>,

    /// Snapshot of the filters that produced the image.
    pub filters: FilterSettings,

    /// When the save was requested.
    pub date: DateTime<Utc>,
}

/// One saved gallery entry as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: Uuid,

    /// Image payload path, relative to the gallery directory.
    pub image: PathBuf,

    pub filters: FilterSettings,

    pub date: DateTime<Utc>,
}

/// Manages one gallery directory.
pub struct GalleryStore {
    dir: PathBuf,
}

impl GalleryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Load the saved entries.
    ///
    /// A missing gallery is an empty gallery. A manifest that cannot be
    /// read or parsed is logged and treated as empty rather than surfaced
    /// as an error.
    pub fn load(&self) -> Vec<GalleryEntry> {
        let manifest = self.manifest_path();
        if !manifest.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&manifest) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Failed to read gallery manifest {}: {}",
                    manifest.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Malformed gallery manifest {}: {}", manifest.display(), e);
                Vec::new()
            }
        }
    }

    /// Store a save request: write the image payload into the gallery
    /// directory and append the entry to the manifest.
    pub fn add(&self, request: SaveRequest) -> Result<GalleryEntry> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| LuminaError::DirectoryCreateError {
                path: self.dir.clone(),
                source: e,
            })?;
        }

        let image_name = format!("{}.{}", request.id, IMAGE_EXT);
        let image_path = self.dir.join(&image_name);
        fs::write(&image_path, &request.image).map_err(|e| LuminaError::FileWriteError {
            path: image_path,
            source: e,
        })?;

        let entry = GalleryEntry {
            id: request.id,
            image: PathBuf::from(image_name),
            filters: request.filters,
            date: request.date,
        };

        let mut entries = self.load();
        entries.push(entry.clone());
        self.save_manifest(&entries)?;

        Ok(entry)
    }

    /// Remove an entry and its image payload by id.
    pub fn remove(&self, id: Uuid) -> Result<()> {
        let mut entries = self.load();
        let index = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LuminaError::GalleryEntryNotFound { id })?;

        let entry = entries.remove(index);

        let image_path = self.dir.join(&entry.image);
        if image_path.exists() {
            fs::remove_file(&image_path).map_err(|e| LuminaError::FileWriteError {
                path: image_path,
                source: e,
            })?;
        }

        self.save_manifest(&entries)?;
        Ok(())
    }

    fn save_manifest(&self, entries: &[GalleryEntry]) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| LuminaError::DirectoryCreateError {
                path: self.dir.clone(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let manifest = self.manifest_path();
        fs::write(&manifest, content).map_err(|e| LuminaError::FileWriteError {
            path: manifest,
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(image: &[u8]) -> SaveRequest {
        SaveRequest {
            id: Uuid::new_v4(),
            image: image.to_vec(),
            filters: FilterSettings::default(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_missing_gallery_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_add_writes_payload_and_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));

        let entry = store.add(request(b"fake png bytes")).unwrap();

        let payload = store.dir().join(&entry.image);
        assert!(payload.exists());
        assert_eq!(fs::read(&payload).unwrap(), b"fake png bytes");

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], entry);
    }

    #[test]
    fn test_add_appends_to_existing_entries() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));

        let first = store.add(request(b"one")).unwrap();
        let second = store.add(request(b"two")).unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, first.id);
        assert_eq!(entries[1].id, second.id);
    }

    #[test]
    fn test_remove_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));

        let keep = store.add(request(b"keep")).unwrap();
        let doomed = store.add(request(b"drop")).unwrap();

        store.remove(doomed.id).unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, keep.id);
        assert!(!store.dir().join(&doomed.image).exists());
        assert!(store.dir().join(&keep.image).exists());
    }

    #[test]
    fn test_remove_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));

        let err = store.remove(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, LuminaError::GalleryEntryNotFound { .. }));
    }

    #[test]
    fn test_malformed_manifest_treated_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("gallery");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), "{ not json").unwrap();

        let store = GalleryStore::new(&dir);
        assert!(store.load().is_empty());

        // The store stays usable after the damaged manifest is replaced.
        let entry = store.add(request(b"recovered")).unwrap();
        assert_eq!(store.load(), vec![entry]);
    }

    #[test]
    fn test_entry_filters_snapshot_persists() {
        let temp_dir = TempDir::new().unwrap();
        let store = GalleryStore::new(temp_dir.path().join("gallery"));

        let mut req = request(b"img");
        req.filters.sepia = 60.0;
        req.filters.tint = 45.0;
        store.add(req).unwrap();

        let entries = store.load();
        assert_eq!(entries[0].filters.sepia, 60.0);
        assert_eq!(entries[0].filters.tint, 45.0);
    }
}
