//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use log::info;
use uuid::Uuid;

use crate::error::{LuminaError, Result};
use crate::filters::FilterParam;
use crate::state::{EditorSession, GalleryStore, ImageHandle};

/// Create a new session document, optionally loading an original image.
pub fn init(session_path: &Path, image: Option<&Path>) -> Result<()> {
    info!("Creating new session at: {}", session_path.display());

    let mut session = EditorSession::new();
    if let Some(image_path) = image {
        session.load_image(read_image_handle(image_path)?);
    }
    session.save(session_path)?;

    println!("Session created: {}", session_path.display());
    if let Some(image_path) = image {
        println!("Loaded image: {}", image_path.display());
    }

    Ok(())
}

/// Load a new original image into an existing session.
pub fn load_image(session_path: &Path, image_path: &Path) -> Result<()> {
    info!("Loading image into session: {}", session_path.display());

    let mut session = EditorSession::load(session_path)?;
    session.load_image(read_image_handle(image_path)?);
    session.save(session_path)?;

    println!("Loaded image: {}", image_path.display());
    println!("History reset (1 entry).");

    Ok(())
}

/// Set a single filter parameter.
pub fn set(session_path: &Path, key: &str, value: f64) -> Result<()> {
    let param: FilterParam = key.parse()?;

    let mut session = EditorSession::load(session_path)?;
    session.update(param, value);
    session.save(session_path)?;

    println!("{} = {}", param, value);

    Ok(())
}

/// Reset all filters to their defaults.
pub fn reset(session_path: &Path) -> Result<()> {
    let mut session = EditorSession::load(session_path)?;
    session.reset();
    session.save(session_path)?;

    println!("Filters reset to defaults.");

    Ok(())
}

/// Undo the last edit. A no-op at the history boundary.
pub fn undo(session_path: &Path) -> Result<()> {
    let mut session = EditorSession::load(session_path)?;

    if session.undo() {
        session.save(session_path)?;
        println!("Undone.");
    } else {
        println!("Nothing to undo.");
    }

    Ok(())
}

/// Redo the last undone edit. A no-op at the history boundary.
pub fn redo(session_path: &Path) -> Result<()> {
    let mut session = EditorSession::load(session_path)?;

    if session.redo() {
        session.save(session_path)?;
        println!("Redone.");
    } else {
        println!("Nothing to redo.");
    }

    Ok(())
}

/// Show the edit history ledger with a cursor marker.
pub fn show_history(session_path: &Path) -> Result<()> {
    let session = EditorSession::load(session_path)?;
    let history = session.history();

    if history.is_empty() {
        println!("No history.");
        return Ok(());
    }

    println!("Edit History:");
    println!("{:-<60}", "");

    for (i, snapshot) in history.snapshots().iter().enumerate() {
        let marker = if Some(i) == history.cursor() {
            ">>> "
        } else {
            "    "
        };
        let edits = snapshot.non_default();
        if edits.is_empty() {
            println!("{}{}: defaults", marker, i);
        } else {
            let summary: Vec<String> = edits
                .iter()
                .map(|(param, value)| format!("{}={}", param, value))
                .collect();
            println!("{}{}: {}", marker, i, summary.join(" "));
        }
    }

    println!("{:-<60}", "");
    println!(
        "Entries: {} | Can undo: {} | Can redo: {}",
        history.len(),
        session.can_undo(),
        session.can_redo()
    );

    Ok(())
}

/// Print the renderer-facing descriptors for the current settings.
pub fn style(session_path: &Path) -> Result<()> {
    let session = EditorSession::load(session_path)?;

    println!("Composable: {}", session.composable_descriptor());
    println!(
        "Raw: {}",
        serde_json::to_string_pretty(&session.raw_descriptor())?
    );

    Ok(())
}

/// Print the full session state as JSON.
pub fn print_state(session_path: &Path) -> Result<()> {
    let session = EditorSession::load(session_path)?;

    let json = serde_json::to_string_pretty(&session)?;
    println!("{}", json);

    Ok(())
}

/// Save the current edit plus a rendered image into a gallery directory.
pub fn save_to_gallery(session_path: &Path, image_path: &Path, gallery_dir: &Path) -> Result<()> {
    info!("Saving to gallery: {}", gallery_dir.display());

    let session = EditorSession::load(session_path)?;
    if !session.has_image() {
        return Err(LuminaError::NoImageLoaded);
    }

    let image = fs::read(image_path).map_err(|e| LuminaError::FileReadError {
        path: image_path.to_path_buf(),
        source: e,
    })?;

    let store = GalleryStore::new(gallery_dir);
    let entry = store.add(session.save_request(image))?;

    println!(
        "Saved entry {} ({})",
        entry.id,
        entry.date.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}

/// List saved gallery entries.
pub fn gallery_list(gallery_dir: &Path) -> Result<()> {
    let store = GalleryStore::new(gallery_dir);
    let entries = store.load();

    if entries.is_empty() {
        println!("Gallery is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  {}  {}",
            entry.id,
            entry.date.format("%Y-%m-%d %H:%M:%S"),
            entry.image.display()
        );
    }
    println!("{} entries", entries.len());

    Ok(())
}

/// Remove a gallery entry by id.
pub fn gallery_remove(gallery_dir: &Path, id: Uuid) -> Result<()> {
    let store = GalleryStore::new(gallery_dir);
    store.remove(id)?;

    println!("Removed entry {}", id);

    Ok(())
}

/// Read opaque image bytes and fingerprint them into a handle.
fn read_image_handle(path: &Path) -> Result<ImageHandle> {
    if !path.exists() {
        return Err(LuminaError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| LuminaError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let filename = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(ImageHandle::from_bytes(filename, &bytes))
}
