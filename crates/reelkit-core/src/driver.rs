//! Event loop glue for hosts that deliver native callbacks over a channel

use crate::{PlaybackController, PlaybackEvent, SourceUri, Transition};
use tokio::sync::mpsc;
use tracing::debug;

/// Messages accepted by [`drive`]
#[derive(Debug, Clone)]
pub enum ControllerInput {
    /// Native player callback
    Event(PlaybackEvent),
    /// The host supplied a (possibly new) source
    Source(SourceUri),
    /// The component was unmounted; the loop ends after handling it
    Unmount,
}

impl From<PlaybackEvent> for ControllerInput {
    fn from(event: PlaybackEvent) -> Self {
        ControllerInput::Event(event)
    }
}

/// Apply inputs sequentially until the channel closes or an unmount arrives.
///
/// Returns the controller and the number of inputs that changed state.
pub async fn drive(
    mut controller: PlaybackController,
    mut inputs: mpsc::UnboundedReceiver<ControllerInput>,
) -> (PlaybackController, usize) {
    let mut applied = 0;

    while let Some(input) = inputs.recv().await {
        let transition = match input {
            ControllerInput::Event(event) => controller.handle_event(event),
            ControllerInput::Source(source) => controller.set_source(source),
            ControllerInput::Unmount => {
                controller.unmount();
                applied += 1;
                break;
            }
        };

        if !matches!(transition, Transition::Ignored(_)) {
            applied += 1;
        }
    }

    debug!(controller_id = %controller.id(), applied, "Event loop finished");
    (controller, applied)
}
