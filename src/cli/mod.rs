//! CLI Module
//!
//! Command-line interface over a session document. Each command loads the
//! session file, applies one operation, and writes the session back.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Lumina Filter Engine - photo filter state and history
#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new editing session document
    #[command(name = "init")]
    Init {
        /// Path for the new session file
        session: PathBuf,

        /// Original image to load (optional)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Load a new original image, discarding prior history
    #[command(name = "load-image")]
    LoadImage {
        /// Path to the session file
        session: PathBuf,

        /// Image file to load
        #[arg(short, long)]
        image: PathBuf,
    },

    /// Set a single filter parameter
    #[command(name = "set")]
    Set {
        /// Path to the session file
        session: PathBuf,

        /// Parameter key (e.g. brightness, tint, lightRange)
        key: String,

        /// New numeric value
        value: f64,
    },

    /// Reset all filters to their defaults
    #[command(name = "reset")]
    Reset {
        /// Path to the session file
        session: PathBuf,
    },

    /// Undo the last edit
    #[command(name = "undo")]
    Undo {
        /// Path to the session file
        session: PathBuf,
    },

    /// Redo the last undone edit
    #[command(name = "redo")]
    Redo {
        /// Path to the session file
        session: PathBuf,
    },

    /// Show the edit history ledger
    #[command(name = "history")]
    History {
        /// Path to the session file
        session: PathBuf,
    },

    /// Print the renderer-facing descriptors
    #[command(name = "style")]
    Style {
        /// Path to the session file
        session: PathBuf,
    },

    /// Print the full session state
    #[command(name = "print-state")]
    PrintState {
        /// Path to the session file
        session: PathBuf,
    },

    /// Save the current edit and a rendered image to a gallery
    #[command(name = "save")]
    Save {
        /// Path to the session file
        session: PathBuf,

        /// Rendered image produced by the renderer
        #[arg(short, long)]
        image: PathBuf,

        /// Gallery directory
        #[arg(short, long)]
        gallery: PathBuf,
    },

    /// List saved gallery entries
    #[command(name = "gallery-list")]
    GalleryList {
        /// Gallery directory
        #[arg(short, long)]
        gallery: PathBuf,
    },

    /// Remove a gallery entry by id
    #[command(name = "gallery-remove")]
    GalleryRemove {
        /// Gallery directory
        #[arg(short, long)]
        gallery: PathBuf,

        /// Entry id to remove
        id: Uuid,
    },
}
