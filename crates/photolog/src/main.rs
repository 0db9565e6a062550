//! `plog` - CLI for photolog
//!
//! This binary saves captured images into the journal and renders them
//! back as a gallery.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use photolog::cli::{
    Cli, Command, ConfigCommand, GalleryCommand, OutputFormat, SnapCommand, StatusCommand,
};
use photolog::{
    init_logging, CaptureSession, Config, EntryRepository, Frame, Gallery, RecordStore,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Snap(snap_cmd) => handle_snap(&config, &snap_cmd),
        Command::Gallery(gallery_cmd) => handle_gallery(&config, &gallery_cmd),
        Command::Status(status_cmd) => handle_status(&config, status_cmd.json),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_snap(config: &Config, cmd: &SnapCommand) -> Result<(), Box<dyn std::error::Error>> {
    let image = std::fs::read(&cmd.image)?;

    let store = RecordStore::open(config.database_path())?;
    let repo = EntryRepository::new(&store);

    // Stage the payload the way a live capture would; on failure it stays
    // staged and the error surfaces before any success message
    let mut session = CaptureSession::new(config.capture.default_facing);
    session.stage(Frame::new(image));
    let entry = session.commit(&repo, &cmd.description)?;

    println!(
        "Saved entry #{} ({} bytes): {}",
        entry.id.unwrap_or_default(),
        entry.image_len(),
        entry.description
    );
    Ok(())
}

fn handle_gallery(
    config: &Config,
    cmd: &GalleryCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::open(config.database_path())?;
    let repo = EntryRepository::new(&store);

    let mut entries = repo.list_entries()?;
    let limit = cmd.limit.unwrap_or(config.gallery.page_size);
    entries.truncate(limit);

    let mut gallery = Gallery::with_format(config.gallery.timestamp_format.clone());
    let items = gallery.render(&entries);

    match cmd.format {
        OutputFormat::Plain => {
            for item in items {
                println!("[{}] {}", item.taken_at, item.caption);
            }
        }
        OutputFormat::Table => {
            if items.is_empty() {
                println!("The journal is empty.");
            } else {
                println!("{:<20}  CAPTION", "TAKEN");
                println!("{:<20}  -------", "-----");
                for item in items {
                    println!("{:<20}  {}", item.taken_at, item.caption);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = RecordStore::open(config.database_path())?;
    let stats = store.stats()?;

    if json {
        let status = serde_json::json!({
            "database_path": store.path(),
            "total_entries": stats.total_entries,
            "oldest_entry": stats.oldest_entry,
            "newest_entry": stats.newest_entry,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("plog status");
        println!("-----------");
        println!("Database:      {}", store.path().display());
        println!("Entries:       {}", stats.total_entries);
        match (stats.oldest_entry, stats.newest_entry) {
            (Some(oldest), Some(newest)) => {
                println!("Oldest:        {oldest}");
                println!("Newest:        {newest}");
            }
            _ => println!("Oldest/Newest: (empty journal)"),
        }
        println!("Size on disk:  {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:    {}", config.database_path().display());
                println!();
                println!("[Capture]");
                println!("  Default facing:   {}", config.capture.default_facing);
                println!();
                println!("[Gallery]");
                println!("  Timestamp format: {}", config.gallery.timestamp_format);
                println!("  Page size:        {}", config.gallery.page_size);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
