//! Capture pipeline session state and the frame-source seam.
//!
//! How a frame gets produced (camera device selection, stream setup,
//! encoding) is outside the journal core; producers implement
//! [`FrameSource`] and deliver encoded frames over a channel. What the
//! core does own is the session state around a capture: which way the
//! camera faces and the one pending frame awaiting a description. A
//! pending frame stays staged until its save commits, so a failed write
//! can be retried without recapturing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::repository::EntryRepository;

/// Which camera the capture pipeline should face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Front-facing (self-facing) camera.
    #[default]
    User,
    /// Rear (world-facing) camera.
    Environment,
}

impl FacingMode {
    /// The opposite facing mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::User => Self::Environment,
            Self::Environment => Self::User,
        }
    }
}

impl std::fmt::Display for FacingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// One encoded frame produced by a frame source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The encoded image payload.
    pub image: Vec<u8>,
    /// When the frame was captured.
    pub captured_at: DateTime<Utc>,
}

impl Frame {
    /// Wrap an encoded payload, stamping the capture time.
    #[must_use]
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image,
            captured_at: Utc::now(),
        }
    }
}

/// A pluggable producer of encoded frames.
///
/// Implementors wrap whatever acquisition mechanism the platform offers
/// and push frames through the provided channel until stopped.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// The name of this frame source (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Which way this source currently faces.
    fn facing(&self) -> FacingMode;

    /// Check if the source is currently delivering frames.
    fn is_running(&self) -> bool;

    /// Start the source and begin sending frames.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameSourceStart`] if the source cannot start,
    /// such as when the device is missing or already claimed.
    async fn start(&mut self, tx: mpsc::Sender<Frame>) -> Result<()>;

    /// Stop the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameSourceStop`] if the source fails to stop
    /// cleanly.
    fn stop(&mut self) -> Result<()>;
}

/// Session state for one capture flow.
///
/// Replaces ambient globals with a value the caller threads through its
/// handlers: the facing mode survives camera switches, and the staged
/// frame survives failed saves.
#[derive(Debug, Default)]
pub struct CaptureSession {
    facing: FacingMode,
    pending: Option<Frame>,
}

impl CaptureSession {
    /// Create a session starting with the given facing mode.
    #[must_use]
    pub fn new(facing: FacingMode) -> Self {
        Self {
            facing,
            pending: None,
        }
    }

    /// The current facing mode.
    #[must_use]
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    /// Flip between the user-facing and environment-facing camera.
    ///
    /// Returns the new mode so callers can restart their source with it.
    pub fn switch_facing(&mut self) -> FacingMode {
        self.facing = self.facing.toggled();
        debug!("Capture session now facing {}", self.facing);
        self.facing
    }

    /// Stage a captured frame, displacing any previous one.
    ///
    /// Returns the displaced frame so the caller can release its display
    /// resources.
    pub fn stage(&mut self, frame: Frame) -> Option<Frame> {
        self.pending.replace(frame)
    }

    /// The frame currently awaiting a description, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&Frame> {
        self.pending.as_ref()
    }

    /// Drop the staged frame without saving it.
    pub fn discard(&mut self) -> Option<Frame> {
        self.pending.take()
    }

    /// Save the staged frame as a journal entry.
    ///
    /// The frame is cleared only once the write has committed; on failure
    /// it stays staged so the user can retry without recapturing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPendingFrame`] when nothing is staged, and
    /// propagates store errors from the save.
    pub fn commit(&mut self, repo: &EntryRepository<'_>, description: &str) -> Result<Entry> {
        let frame = self.pending.as_ref().ok_or(Error::NoPendingFrame)?;
        let entry = repo.save_entry(frame.image.clone(), description)?;
        self.pending = None;
        Ok(entry)
    }
}
