// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame drag path.
//!
//! Measures the performance of:
//! - Interpreting one gesture sample (translation, progress, scales)
//! - Stepping a spring to rest
//! - A full drag-and-release cycle through the sheet screen

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_sheet::animation::AnimatedValue;
use iced_sheet::domain::sheet::{
    DragDirections, DragThreshold, GestureSample, Platform, ResizeType, ScaleFactor, SpringConfig,
};
use iced_sheet::gesture::interpreter;
use iced_sheet::gesture::{ScrollGate, ThresholdTracker};
use iced_sheet::ui::provider::{ProviderSettings, SheetProvider};
use iced_sheet::ui::screen::{Message, ScreenSettings, SheetScreen};
use std::hint::black_box;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const VIEWPORT: Size = Size::new(390.0, 844.0);

/// Benchmark interpreting a single gesture sample.
fn bench_interpret_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_interpreter");

    let directions = DragDirections {
        to_top: true,
        to_bottom: true,
        to_left: true,
        to_right: true,
    };
    let threshold = DragThreshold::default();
    let scale_factor = ScaleFactor::default();

    group.bench_function("interpret_sample", |b| {
        let mut tracker = ThresholdTracker::default();
        let mut y = 0.0_f32;
        b.iter(|| {
            y = (y + 7.0) % 400.0;
            let sample = GestureSample::translation(3.0, y);
            let translation =
                interpreter::permitted_translation(&sample, directions, ScrollGate::OPEN);
            let crossing = tracker.update(translation.distance(), threshold);
            let progress = interpreter::progress(translation, VIEWPORT);
            let scale =
                interpreter::background_scale(ResizeType::Decremental, scale_factor, progress);
            black_box((crossing, scale, interpreter::gesture_opacity(progress)));
        });
    });

    group.finish();
}

/// Benchmark settling a spring from a released drag.
fn bench_spring_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_interpreter");

    group.bench_function("spring_settle", |b| {
        b.iter(|| {
            let mut value = AnimatedValue::new(240.0);
            value.animate_to(0.0, SpringConfig::SCREEN.with_velocity(-900.0));
            while value.tick(FRAME) {}
            black_box(value.value());
        });
    });

    group.finish();
}

/// Benchmark a full drag cycle: 30 move frames, release, settle.
fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_interpreter");

    group.bench_function("drag_cycle", |b| {
        b.iter(|| {
            let mut provider = SheetProvider::new(ProviderSettings::default(), Platform::Ios);
            let mut screen = SheetScreen::new(ScreenSettings::default());
            screen.mount(&mut provider.context());
            screen.handle(Message::Resized(VIEWPORT), &mut provider.context());

            screen.handle(Message::GestureBegan, &mut provider.context());
            for step in 1..=30 {
                let sample = GestureSample::translation(0.0, step as f32 * 4.0);
                screen.handle(Message::GestureMoved(sample), &mut provider.context());
            }
            screen.handle(
                Message::GestureEnded(GestureSample::translation(0.0, 120.0)),
                &mut provider.context(),
            );
            while screen.is_animating() || provider.is_animating() {
                screen.tick(FRAME, &mut provider.context());
                provider.tick(FRAME);
            }
            black_box(screen.phase());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_interpret_sample,
    bench_spring_settle,
    bench_drag_cycle
);
criterion_main!(benches);
