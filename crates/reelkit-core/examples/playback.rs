//! Playback lifecycle example
//!
//! Walks a controller through load, status, a source switch with a stale
//! callback, and a playback failure.
//!
//! Run with: cargo run -p reelkit-core --example playback

use reelkit_core::{
    LogNotifier, NativePlayerProps, PlaybackCapability, PlaybackController, PlaybackError,
    PlaybackEvent, PlayerConfig, SourceToken, SourceUri, StatusSnapshot, Surface,
};

/// Prints load requests instead of decoding anything
struct ConsolePlayer;

impl PlaybackCapability for ConsolePlayer {
    fn load(&mut self, props: &NativePlayerProps, token: SourceToken) -> reelkit_core::Result<()> {
        println!("  [native] load {} (token {}, autoplay: {})", props.source, token, props.should_play);
        Ok(())
    }

    fn play(&mut self) -> reelkit_core::Result<()> {
        println!("  [native] play");
        Ok(())
    }
}

fn describe(surface: &Surface) -> String {
    match surface {
        Surface::Empty => "empty".to_string(),
        Surface::Player { overlay: Some(o), .. } => format!("player + overlay ({})", o.backdrop),
        Surface::Player { overlay: None, .. } => "player with native controls".to_string(),
        Surface::Placeholder(p) => format!("placeholder \"{}\"", p.message),
    }
}

fn main() -> reelkit_core::Result<()> {
    println!("Reelkit Core - Playback Example");
    println!("===============================\n");

    let mut controller = PlaybackController::new(PlayerConfig::default(), ConsolePlayer, LogNotifier)
        .with_error_handler(|e| println!("  [handler] {}", e));

    controller.set_source(SourceUri::new("https://cdn.example.com/intro.mp4")?);
    println!("{:>8}: {}", controller.phase().to_string(), describe(&controller.surface()));

    let first = controller.token();
    controller.handle_event(PlaybackEvent::loaded(first, StatusSnapshot::loaded(Some(42_000))));
    println!("{:>8}: {}", controller.phase().to_string(), describe(&controller.surface()));
    controller.play()?;

    controller.set_source(SourceUri::new("https://cdn.example.com/feature.mp4")?);
    let stale = controller.handle_event(PlaybackEvent::loaded(first, StatusSnapshot::loaded(None)));
    println!("stale load for the old source: {:?}", stale);
    println!("{:>8}: {}", controller.phase().to_string(), describe(&controller.surface()));

    let error = PlaybackError::new("Source error: 404").with_code("E_SOURCE");
    controller.handle_event(PlaybackEvent::error(controller.token(), error));
    println!("{:>8}: {}", controller.phase().to_string(), describe(&controller.surface()));

    Ok(())
}
