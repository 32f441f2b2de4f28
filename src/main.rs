//! Lumina CLI - Photo Filter State Engine
//!
//! Command-line interface for the Lumina filter state and history engine.

use clap::Parser;
use env_logger::Env;
use log::info;

use lumina::cli::{commands, Cli, Commands};
use lumina::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Lumina Filter Engine v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Lumina Filter Engine v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    };

    if let Err(ref e) = result {
        if let Some(suggestion) = e.recovery_suggestion() {
            eprintln!("{}", suggestion);
        }
    }

    result
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init { session, image } => commands::init(&session, image.as_deref()),
        Commands::LoadImage { session, image } => commands::load_image(&session, &image),
        Commands::Set {
            session,
            key,
            value,
        } => commands::set(&session, &key, value),
        Commands::Reset { session } => commands::reset(&session),
        Commands::Undo { session } => commands::undo(&session),
        Commands::Redo { session } => commands::redo(&session),
        Commands::History { session } => commands::show_history(&session),
        Commands::Style { session } => commands::style(&session),
        Commands::PrintState { session } => commands::print_state(&session),
        Commands::Save {
            session,
            image,
            gallery,
        } => commands::save_to_gallery(&session, &image, &gallery),
        Commands::GalleryList { gallery } => commands::gallery_list(&gallery),
        Commands::GalleryRemove { gallery, id } => commands::gallery_remove(&gallery, id),
    }
}
