//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Snap command arguments.
#[derive(Debug, Args)]
pub struct SnapCommand {
    /// Path to the encoded image file to save
    pub image: PathBuf,

    /// Caption for the entry (blank input gets the placeholder)
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Gallery command arguments.
#[derive(Debug, Args)]
pub struct GalleryCommand {
    /// Maximum number of entries to show (defaults to gallery.page_size)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_snap_command_debug() {
        let cmd = SnapCommand {
            image: PathBuf::from("shot.webp"),
            description: "pier".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("shot.webp"));
        assert!(debug_str.contains("pier"));
    }

    #[test]
    fn test_gallery_command_debug() {
        let cmd = GalleryCommand {
            limit: Some(5),
            format: OutputFormat::Json,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("limit"));
        assert!(debug_str.contains("Json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
