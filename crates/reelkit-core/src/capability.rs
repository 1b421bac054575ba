//! Host-side seams: the native player and the user notification channel.
//!
//! The controller never decodes or draws anything itself. It asks a
//! [`PlaybackCapability`] to load media and receives results back as
//! [`PlaybackEvent`](crate::PlaybackEvent)s, and it raises blocking alerts
//! through a [`Notifier`].

use crate::{NativePlayerProps, Result, SourceToken};
use serde::{Deserialize, Serialize};

/// The native media element wrapped by the controller
pub trait PlaybackCapability: Send {
    /// Begin loading a source. Callbacks for this load must carry `token`.
    fn load(&mut self, props: &NativePlayerProps, token: SourceToken) -> Result<()>;

    /// Start playback of the currently loaded source
    fn play(&mut self) -> Result<()>;

    /// Release the current source. Default is a no-op.
    fn unload(&mut self) {}
}

/// A single button on a blocking alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAction {
    pub text: String,
}

/// Blocking user notification with acknowledgement actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub actions: Vec<AlertAction>,
}

impl Alert {
    /// Alert with a single acknowledgement button
    pub fn acknowledge(
        title: impl Into<String>,
        message: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: vec![AlertAction { text: action.into() }],
        }
    }
}

/// Presents alerts to the user
pub trait Notifier: Send {
    fn alert(&mut self, alert: Alert);
}

/// Notifier that only logs; for headless hosts
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&mut self, alert: Alert) {
        tracing::warn!(title = %alert.title, message = %alert.message, "User alert");
    }
}
