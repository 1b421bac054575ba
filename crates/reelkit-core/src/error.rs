//! Error types for Reelkit Core

use thiserror::Error;

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, Error>;

/// Controller error types.
///
/// None of these escape `PlaybackController::handle_event`; they surface
/// either as an ignored transition or as an error phase.
#[derive(Error, Debug)]
pub enum Error {
    // Source errors
    #[error("Media source is empty")]
    EmptySource,

    #[error("Failed to start loading {uri}: {reason}")]
    LoadFailed { uri: String, reason: String },

    // State errors
    #[error("Invalid playback state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Cannot start playback while {phase}")]
    NotReady { phase: String },
}

impl Error {
    /// Create a load error
    pub fn load(uri: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::LoadFailed {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code reported alongside playback errors
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::EmptySource => "EMPTY_SOURCE",
            Error::LoadFailed { .. } => "LOAD_FAILED",
            Error::InvalidStateTransition { .. } => "INVALID_STATE",
            Error::NotReady { .. } => "NOT_READY",
        }
    }
}
