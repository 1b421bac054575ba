//! Benchmark tests for reelkit-core operations
//!
//! Run with: cargo bench -p reelkit-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use reelkit_core::{
    LogNotifier, NativePlayerProps, PlaybackCapability, PlaybackController, PlaybackEvent,
    PlayerConfig, SourceToken, SourceUri, StatusSnapshot,
};

struct NullPlayer;

impl PlaybackCapability for NullPlayer {
    fn load(&mut self, _: &NativePlayerProps, _: SourceToken) -> reelkit_core::Result<()> {
        Ok(())
    }

    fn play(&mut self) -> reelkit_core::Result<()> {
        Ok(())
    }
}

fn ready_controller() -> PlaybackController {
    let mut controller = PlaybackController::new(PlayerConfig::default(), NullPlayer, LogNotifier);
    controller.set_source(SourceUri::new("https://cdn.example.com/bench.mp4").unwrap());
    let token = controller.token();
    controller.handle_event(PlaybackEvent::loaded(token, StatusSnapshot::loaded(Some(60_000))));
    controller
}

fn bench_status_updates(c: &mut Criterion) {
    let mut controller = ready_controller();
    let token = controller.token();
    let mut position = 0u64;

    c.bench_function("status_update", |b| {
        b.iter(|| {
            position = (position + 250) % 60_000;
            let status = StatusSnapshot {
                position_millis: position,
                is_playing: true,
                ..StatusSnapshot::loaded(Some(60_000))
            };
            black_box(controller.handle_event(PlaybackEvent::status(token, status)))
        })
    });
}

fn bench_stale_rejection(c: &mut Criterion) {
    let mut controller = ready_controller();
    let stale = SourceToken(0);

    c.bench_function("stale_event", |b| {
        b.iter(|| black_box(controller.handle_event(PlaybackEvent::load_start(stale))))
    });
}

fn bench_source_switch(c: &mut Criterion) {
    let mut controller = ready_controller();
    let sources = [
        SourceUri::new("https://cdn.example.com/a.mp4").unwrap(),
        SourceUri::new("https://cdn.example.com/b.mp4").unwrap(),
    ];
    let mut i = 0;

    c.bench_function("source_switch", |b| {
        b.iter(|| {
            i ^= 1;
            black_box(controller.set_source(sources[i].clone()))
        })
    });
}

fn bench_surface(c: &mut Criterion) {
    let controller = ready_controller();

    c.bench_function("surface_derive", |b| b.iter(|| black_box(controller.surface())));
}

criterion_group!(
    benches,
    bench_status_updates,
    bench_stale_rejection,
    bench_source_switch,
    bench_surface
);
criterion_main!(benches);
