//! Playback Controller - owns the display state of a single video
//!
//! Coordinates:
//! - Source changes and load requests to the native player
//! - Guarded phase transitions driven by native callbacks
//! - Error containment (caller handler or fallback alert)
//! - Surface publication for the host UI

use crate::{
    capability::{Alert, Notifier, PlaybackCapability},
    surface::Surface,
    theme::Theme,
    types::*,
    Error, Result,
};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Caller-supplied error callback
pub type ErrorHandler = Box<dyn FnMut(&PlaybackError) + Send>;

/// Mutable state of one mounted video
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaybackState {
    pub source: Option<SourceUri>,
    pub phase: Phase,
    /// Most recent status from the native player; informational only
    pub last_status: Option<StatusSnapshot>,
    pub last_error: Option<PlaybackError>,
    pub token: SourceToken,
}

/// Why an event or request did not change anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Event belongs to a superseded source
    Stale,
    /// Source is already the current one
    Unchanged,
    /// Native player is not mounted in this phase
    NotMounted(Phase),
    /// Transition table refused the move
    Rejected,
}

/// Outcome of feeding a request or event to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Phase changed (or was re-entered)
    Applied { from: Phase, to: Phase },
    /// Status captured without a phase change
    StatusUpdated,
    Ignored(IgnoreReason),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }
}

/// Playback controller for a single video source
pub struct PlaybackController {
    /// Unique controller ID
    id: ControllerId,
    /// Controller configuration
    config: PlayerConfig,
    /// Surface styling
    theme: Theme,
    /// Current state
    state: PlaybackState,
    /// Native player
    capability: Box<dyn PlaybackCapability>,
    /// Fallback alert channel
    notifier: Box<dyn Notifier>,
    /// Optional caller error handler; replaces the alert when set
    error_handler: Option<ErrorHandler>,
    /// Surface broadcaster
    surface_tx: watch::Sender<Surface>,
}

impl PlaybackController {
    /// Create a new controller in the idle phase
    pub fn new(
        config: PlayerConfig,
        capability: impl PlaybackCapability + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let (surface_tx, _) = watch::channel(Surface::Empty);

        Self {
            id: ControllerId::new(),
            config,
            theme: Theme::default(),
            state: PlaybackState::default(),
            capability: Box::new(capability),
            notifier: Box::new(notifier),
            error_handler: None,
            surface_tx,
        }
    }

    /// Set the error handler
    pub fn with_error_handler(mut self, handler: impl FnMut(&PlaybackError) + Send + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Set the surface theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self.publish();
        self
    }

    /// Replace or remove the error handler
    pub fn set_error_handler(&mut self, handler: Option<ErrorHandler>) {
        self.error_handler = handler;
    }

    /// Get controller ID
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Get current source
    pub fn source(&self) -> Option<&SourceUri> {
        self.state.source.as_ref()
    }

    /// Get the token events must carry to be applied
    pub fn token(&self) -> SourceToken {
        self.state.token
    }

    /// Last status reported by the native player
    pub fn last_status(&self) -> Option<&StatusSnapshot> {
        self.state.last_status.as_ref()
    }

    /// Error that moved the controller into the error phase
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.state.last_error.as_ref()
    }

    /// Copy of the full state
    pub fn state(&self) -> PlaybackState {
        self.state.clone()
    }

    /// Current surface
    pub fn surface(&self) -> Surface {
        let props = self
            .state
            .source
            .as_ref()
            .map(|source| self.config.native_props(source));
        Surface::for_phase(self.state.phase, props.as_ref(), &self.theme)
    }

    /// Subscribe to surface changes
    pub fn subscribe(&self) -> watch::Receiver<Surface> {
        self.surface_tx.subscribe()
    }

    /// Supply a (new) source.
    ///
    /// A different source resets the controller to loading, clears any error
    /// and status, and invalidates callbacks for the previous source.
    #[instrument(skip(self), fields(controller_id = %self.id))]
    pub fn set_source(&mut self, source: SourceUri) -> Transition {
        if self.state.source.as_ref() == Some(&source) {
            debug!(source = %source, "Source unchanged");
            return Transition::Ignored(IgnoreReason::Unchanged);
        }

        self.state.token = self.state.token.next();
        self.state.last_error = None;
        self.state.last_status = None;
        let props = self.config.native_props(&source);
        self.state.source = Some(source);

        info!(source = %props.source, token = %self.state.token, "Loading source");

        let transition = self.transition(Phase::Loading);

        if let Err(e) = self.capability.load(&props, self.state.token) {
            return self.fail(e.into());
        }

        transition
    }

    /// Apply a native player callback
    pub fn handle_event(&mut self, event: PlaybackEvent) -> Transition {
        if event.token != self.state.token {
            debug!(
                controller_id = %self.id,
                event = event.kind.name(),
                event_token = %event.token,
                current_token = %self.state.token,
                "Ignoring stale event"
            );
            return Transition::Ignored(IgnoreReason::Stale);
        }

        let phase = self.state.phase;
        if !phase.has_player() {
            debug!(controller_id = %self.id, event = event.kind.name(), phase = %phase, "Player not mounted");
            return Transition::Ignored(IgnoreReason::NotMounted(phase));
        }

        match event.kind {
            EventKind::LoadStart => {
                self.state.last_error = None;
                self.transition(Phase::Loading)
            }
            EventKind::Loaded(status) => {
                debug!(controller_id = %self.id, duration_ms = ?status.duration_millis, "Source loaded");
                self.state.last_status = Some(status);
                self.transition(Phase::Ready)
            }
            EventKind::StatusUpdate(status) => {
                self.state.last_status = Some(status);
                Transition::StatusUpdated
            }
            EventKind::Error(error) => self.fail(error),
        }
    }

    /// Start playback on the native player
    pub fn play(&mut self) -> Result<()> {
        if self.state.phase != Phase::Ready {
            return Err(Error::NotReady {
                phase: self.state.phase.to_string(),
            });
        }
        self.capability.play()
    }

    /// Tear down; every outstanding callback becomes stale
    #[instrument(skip(self), fields(controller_id = %self.id))]
    pub fn unmount(&mut self) {
        info!("Unmounting");

        self.capability.unload();
        self.state.token = self.state.token.next();
        self.state.source = None;
        self.state.last_status = None;
        self.state.last_error = None;
        let _ = self.transition(Phase::Idle);
    }

    /// Enter the error phase and report the failure once
    fn fail(&mut self, error: PlaybackError) -> Transition {
        warn!(
            controller_id = %self.id,
            source = ?self.state.source.as_ref().map(SourceUri::as_str),
            error = %error,
            "Video playback error"
        );

        self.state.last_error = Some(error.clone());
        let transition = self.transition(Phase::Error);

        match self.error_handler.as_mut() {
            Some(handler) => handler(&error),
            None => self.notifier.alert(Alert::acknowledge(
                self.config.alert_title.clone(),
                self.config.alert_message.clone(),
                self.config.alert_action.clone(),
            )),
        }

        transition
    }

    /// Transition to new phase
    fn transition(&mut self, next: Phase) -> Transition {
        let current = self.state.phase;

        if let Err(e) = Self::check_transition(current, next) {
            warn!(controller_id = %self.id, error = %e, "Rejected transition");
            return Transition::Ignored(IgnoreReason::Rejected);
        }

        self.state.phase = next;
        self.publish();

        if current != next {
            info!(controller_id = %self.id, from = %current, to = %next, "State transition");
        }

        Transition::Applied { from: current, to: next }
    }

    fn check_transition(from: Phase, to: Phase) -> Result<()> {
        if from.can_transition_to(to) {
            Ok(())
        } else {
            Err(Error::InvalidStateTransition {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }

    fn publish(&self) {
        self.surface_tx.send_replace(self.surface());
    }
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("has_error_handler", &self.error_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct FakePlayer {
        loads: Arc<Mutex<Vec<(String, SourceToken)>>>,
        fail_load: bool,
    }

    impl PlaybackCapability for FakePlayer {
        fn load(&mut self, props: &NativePlayerProps, token: SourceToken) -> Result<()> {
            if self.fail_load {
                return Err(Error::load(props.source.as_str(), "decoder unavailable"));
            }
            self.loads.lock().unwrap().push((props.source.to_string(), token));
            Ok(())
        }

        fn play(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct CountingNotifier(Arc<Mutex<usize>>);

    impl Notifier for CountingNotifier {
        fn alert(&mut self, _alert: Alert) {
            *self.0.lock().unwrap() += 1;
        }
    }

    fn uri(s: &str) -> SourceUri {
        SourceUri::new(s).unwrap()
    }

    #[test]
    fn test_controller_creation() {
        let controller = PlaybackController::new(PlayerConfig::default(), FakePlayer::default(), CountingNotifier::default());

        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.surface(), Surface::Empty);
        assert!(controller.source().is_none());
    }

    #[test]
    fn test_state_transitions() {
        let player = FakePlayer::default();
        let mut controller = PlaybackController::new(PlayerConfig::default(), player.clone(), CountingNotifier::default());

        assert!(controller.set_source(uri("https://cdn.example.com/a.mp4")).is_applied());
        assert_eq!(controller.phase(), Phase::Loading);
        assert_eq!(player.loads.lock().unwrap().len(), 1);

        let token = controller.token();
        let loaded = controller.handle_event(PlaybackEvent::loaded(token, StatusSnapshot::loaded(Some(1_000))));
        assert_eq!(loaded, Transition::Applied { from: Phase::Loading, to: Phase::Ready });
        assert_eq!(controller.last_status().and_then(|s| s.duration_millis), Some(1_000));
    }

    #[test]
    fn test_same_source_is_noop() {
        let player = FakePlayer::default();
        let mut controller = PlaybackController::new(PlayerConfig::default(), player.clone(), CountingNotifier::default());

        controller.set_source(uri("file:///a.mp4"));
        let token = controller.token();
        assert_eq!(
            controller.set_source(uri("file:///a.mp4")),
            Transition::Ignored(IgnoreReason::Unchanged)
        );
        assert_eq!(controller.token(), token);
        assert_eq!(player.loads.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_synchronous_load_failure_is_contained() {
        let notifier = CountingNotifier::default();
        let player = FakePlayer { fail_load: true, ..Default::default() };
        let mut controller = PlaybackController::new(PlayerConfig::default(), player, notifier.clone());

        let transition = controller.set_source(uri("file:///broken.mp4"));

        assert_eq!(transition, Transition::Applied { from: Phase::Loading, to: Phase::Error });
        assert_eq!(controller.phase(), Phase::Error);
        assert_eq!(controller.last_error().and_then(|e| e.code.as_deref()), Some("LOAD_FAILED"));
        assert_eq!(*notifier.0.lock().unwrap(), 1);
    }

    #[test]
    fn test_play_requires_ready() {
        let mut controller = PlaybackController::new(PlayerConfig::default(), FakePlayer::default(), CountingNotifier::default());
        controller.set_source(uri("file:///a.mp4"));
        assert!(matches!(controller.play(), Err(Error::NotReady { .. })));

        let token = controller.token();
        controller.handle_event(PlaybackEvent::loaded(token, StatusSnapshot::loaded(None)));
        assert!(controller.play().is_ok());
    }
}
