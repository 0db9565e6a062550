//! `photolog` - a local-first photo journal
//!
//! This library captures the core of a photo journal: image payloads from
//! a capture source are annotated and persisted to a per-user `SQLite`
//! database, then projected into display-ready gallery items on demand.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod capture;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod repository;
pub mod store;

pub use capture::{CaptureSession, FacingMode, Frame, FrameSource};
pub use config::Config;
pub use entry::{Entry, DEFAULT_DESCRIPTION};
pub use error::{Error, Result};
pub use gallery::{Gallery, GalleryItem};
pub use logging::init_logging;
pub use repository::EntryRepository;
pub use store::{RecordStore, StoreStats};
