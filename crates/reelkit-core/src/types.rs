//! Core types for the playback controller

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a controller instance, used to correlate log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerId(pub Uuid);

impl ControllerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ControllerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the media to play (remote URL or local file URI)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceUri(String);

impl SourceUri {
    /// Build a source URI, rejecting blank input
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(Error::EmptySource);
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SourceUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for SourceUri {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

/// Generation token stamped on every load request.
///
/// The controller bumps it whenever the source changes or the controller is
/// unmounted; events carrying an older token are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SourceToken(pub u64);

impl SourceToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SourceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display phase of a single video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No source supplied yet
    #[default]
    Idle,
    /// Native player mounted, waiting for the first successful load
    Loading,
    /// Loaded and showing native controls
    Ready,
    /// Playback failed; only a new source leaves this phase
    Error,
}

impl Phase {
    /// Check if transition to new phase is valid
    pub fn can_transition_to(&self, next: Phase) -> bool {
        matches!(
            (*self, next),
            (Phase::Idle, Phase::Loading)
                | (Phase::Loading, Phase::Loading | Phase::Ready | Phase::Error)
                | (Phase::Ready, Phase::Loading | Phase::Ready | Phase::Error)
                | (Phase::Error, Phase::Loading)
                | (_, Phase::Idle)
        )
    }

    /// Whether the native player is mounted in this phase
    pub fn has_player(&self) -> bool {
        matches!(self, Phase::Loading | Phase::Ready)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Loading => write!(f, "loading"),
            Phase::Ready => write!(f, "ready"),
            Phase::Error => write!(f, "error"),
        }
    }
}

/// Playback status reported by the native player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub is_loaded: bool,
    pub position_millis: u64,
    pub duration_millis: Option<u64>,
    pub playable_duration_millis: Option<u64>,
    pub is_playing: bool,
    pub is_buffering: bool,
    pub did_just_finish: bool,
}

impl StatusSnapshot {
    /// Snapshot for a freshly loaded, paused video
    pub fn loaded(duration_millis: Option<u64>) -> Self {
        Self {
            is_loaded: true,
            duration_millis,
            ..Default::default()
        }
    }

    /// Playback progress in [0, 1], if the duration is known
    pub fn progress(&self) -> Option<f64> {
        match self.duration_millis {
            Some(0) | None => None,
            Some(d) => Some((self.position_millis as f64 / d as f64).clamp(0.0, 1.0)),
        }
    }
}

/// Error payload delivered by the native player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackError {
    /// Platform error code, when the engine provides one
    pub code: Option<String>,
    pub message: String,
}

impl PlaybackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl From<Error> for PlaybackError {
    fn from(err: Error) -> Self {
        Self::new(err.to_string()).with_code(err.error_code())
    }
}

/// Callback payload from the native player
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    LoadStart,
    Loaded(StatusSnapshot),
    StatusUpdate(StatusSnapshot),
    Error(PlaybackError),
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::LoadStart => "load_start",
            EventKind::Loaded(_) => "loaded",
            EventKind::StatusUpdate(_) => "status_update",
            EventKind::Error(_) => "error",
        }
    }
}

/// A native player callback tagged with the token of the load it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent {
    pub token: SourceToken,
    pub kind: EventKind,
}

impl PlaybackEvent {
    pub fn new(token: SourceToken, kind: EventKind) -> Self {
        Self { token, kind }
    }

    pub fn load_start(token: SourceToken) -> Self {
        Self::new(token, EventKind::LoadStart)
    }

    pub fn loaded(token: SourceToken, status: StatusSnapshot) -> Self {
        Self::new(token, EventKind::Loaded(status))
    }

    pub fn status(token: SourceToken, status: StatusSnapshot) -> Self {
        Self::new(token, EventKind::StatusUpdate(status))
    }

    pub fn error(token: SourceToken, error: PlaybackError) -> Self {
        Self::new(token, EventKind::Error(error))
    }
}

/// How the video is scaled inside its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeMode {
    #[default]
    Contain,
    Cover,
    Stretch,
}

/// Properties handed to the native player when it is mounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativePlayerProps {
    pub source: SourceUri,
    pub use_native_controls: bool,
    pub resize_mode: ResizeMode,
    pub is_looping: bool,
    pub should_play: bool,
    pub is_muted: bool,
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Scaling mode for the video surface
    pub resize_mode: ResizeMode,
    /// Show the platform's transport controls
    pub use_native_controls: bool,
    /// Loop at end of media
    pub is_looping: bool,
    /// Title of the fallback alert
    pub alert_title: String,
    /// Body of the fallback alert
    pub alert_message: String,
    /// Label of the single acknowledgement action
    pub alert_action: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            resize_mode: ResizeMode::Contain,
            use_native_controls: true,
            is_looping: false,
            alert_title: "Video Error".to_string(),
            alert_message: "Unable to play this video. Please try again later.".to_string(),
            alert_action: "OK".to_string(),
        }
    }
}

impl PlayerConfig {
    /// Native props for a source. Playback never auto-starts and audio is never muted.
    pub fn native_props(&self, source: &SourceUri) -> NativePlayerProps {
        NativePlayerProps {
            source: source.clone(),
            use_native_controls: self.use_native_controls,
            resize_mode: self.resize_mode,
            is_looping: self.is_looping,
            should_play: false,
            is_muted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_uri_rejects_blank() {
        assert!(matches!(SourceUri::new("  "), Err(Error::EmptySource)));
        assert_eq!(SourceUri::new("file:///clip.mp4").unwrap().as_str(), "file:///clip.mp4");
    }

    #[test]
    fn test_error_phase_only_exits_through_loading() {
        assert!(Phase::Error.can_transition_to(Phase::Loading));
        assert!(!Phase::Error.can_transition_to(Phase::Ready));
        assert!(!Phase::Idle.can_transition_to(Phase::Ready));
    }

    #[test]
    fn test_progress() {
        let mut status = StatusSnapshot::loaded(Some(10_000));
        status.position_millis = 2_500;
        assert_eq!(status.progress(), Some(0.25));
        assert_eq!(StatusSnapshot::loaded(None).progress(), None);
    }

    #[test]
    fn test_native_props_never_autoplay() {
        let config = PlayerConfig::default();
        let props = config.native_props(&SourceUri::new("https://cdn.example.com/a.mp4").unwrap());
        assert!(!props.should_play);
        assert!(!props.is_muted);
        assert!(props.use_native_controls);
        assert_eq!(props.resize_mode, ResizeMode::Contain);
    }
}
