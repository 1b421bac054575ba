//! Reelkit Core - Resilient video playback controller
//!
//! This crate wraps a native media element and reduces its callbacks to a
//! small, guarded state machine:
//! - Loading feedback while the source is being opened
//! - Error containment (caller handler or one fallback alert)
//! - Status pass-through from the native player
//!
//! # Architecture
//!
//! ```text
//!   host UI ──set_source──▶ ┌────────────────────┐ ──load(props, token)──▶ native player
//!                           │ PlaybackController │
//!   host UI ◀──Surface───── │  Idle/Loading/...  │ ◀──PlaybackEvent{token}── native player
//!                           └─────────┬──────────┘
//!                                     │ error
//!                          handler ◀──┴──▶ Notifier (alert)
//! ```
//!
//! # Example
//!
//! ```rust
//! use reelkit_core::{LogNotifier, NativePlayerProps, PlaybackCapability, PlaybackController,
//!     PlaybackEvent, Phase, PlayerConfig, SourceToken, SourceUri, StatusSnapshot};
//!
//! struct Headless;
//!
//! impl PlaybackCapability for Headless {
//!     fn load(&mut self, _: &NativePlayerProps, _: SourceToken) -> reelkit_core::Result<()> { Ok(()) }
//!     fn play(&mut self) -> reelkit_core::Result<()> { Ok(()) }
//! }
//!
//! let mut controller = PlaybackController::new(PlayerConfig::default(), Headless, LogNotifier);
//! controller.set_source(SourceUri::new("https://cdn.example.com/intro.mp4").unwrap());
//! let token = controller.token();
//! controller.handle_event(PlaybackEvent::loaded(token, StatusSnapshot::loaded(Some(42_000))));
//! assert_eq!(controller.phase(), Phase::Ready);
//! ```

pub mod capability;
pub mod controller;
pub mod driver;
pub mod error;
pub mod surface;
pub mod theme;
pub mod types;

pub use capability::{Alert, AlertAction, LogNotifier, Notifier, PlaybackCapability};
pub use controller::{ErrorHandler, IgnoreReason, PlaybackController, PlaybackState, Transition};
pub use driver::{drive, ControllerInput};
pub use error::{Error, Result};
pub use surface::{Frame, LoadingOverlay, Placeholder, Surface};
pub use theme::Theme;
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
