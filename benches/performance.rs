use baseball_live::config::DisplayConfig;
use baseball_live::fixtures::{create_mock_feed, feed_with_events, pitch_event, MOCK_LIVE_GAME};
use baseball_live::model::{GameSnapshot, LiveUpdate};
use baseball_live::tui::{render_frame, TerminalFrame, ViewMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratatui::{buffer::Buffer, layout::Rect};

const PITCH_TYPES: [&str; 8] = ["FF", "SL", "CU", "CH", "FS", "FC", "SI", "FT"];

/// Feed for a long at-bat: a 14-pitch battle with every pitch type
fn create_long_at_bat_feed() -> serde_json::Value {
    let events = (0..14)
        .map(|i| {
            let offset = i as f64 / 10.0;
            pitch_event(
                PITCH_TYPES[i % PITCH_TYPES.len()],
                80.0 + i as f64,
                -0.9 + offset,
                1.2 + offset * 1.5,
                3.45,
                1.58,
            )
        })
        .collect();
    feed_with_events(events)
}

fn live_update(feed: &serde_json::Value) -> LiveUpdate {
    LiveUpdate {
        snapshot: GameSnapshot::from_feed(feed).expect("bench feed is well-formed"),
        batter_stats: None,
        pitcher_stats: None,
    }
}

/// Benchmark snapshot extraction from a raw feed
fn bench_snapshot_extraction(c: &mut Criterion) {
    let short = create_mock_feed(MOCK_LIVE_GAME);
    let long = create_long_at_bat_feed();

    let mut group = c.benchmark_group("snapshot");

    group.bench_function("mock_feed", |b| {
        b.iter(|| GameSnapshot::from_feed(black_box(&short)))
    });

    group.bench_function("long_at_bat", |b| {
        b.iter(|| GameSnapshot::from_feed(black_box(&long)))
    });

    group.finish();
}

/// Benchmark the per-frame coordinate transform
fn bench_transform(c: &mut Criterion) {
    let update = live_update(&create_long_at_bat_feed());
    let history = update.snapshot.pitch_history.clone().expect("pitches present");
    let zone = history.strike_zone().expect("zone present");

    let mut group = c.benchmark_group("transform");

    group.bench_function("frame_and_cells_80x24", |b| {
        b.iter(|| {
            let frame = TerminalFrame::new(black_box(24), black_box(80), zone);
            frame.pitch_cells(black_box(&history))
        })
    });

    group.finish();
}

/// Benchmark rendering a full frame into a buffer
fn bench_render(c: &mut Criterion) {
    let update = live_update(&create_long_at_bat_feed());
    let config = DisplayConfig::default();

    let mut group = c.benchmark_group("render");

    for (name, width, height, mode) in [
        ("live_80x24", 80, 24, ViewMode::Live),
        ("live_250x70", 250, 70, ViewMode::Live),
        ("stats_120x40", 120, 40, ViewMode::Stats),
    ] {
        let area = Rect::new(0, 0, width, height);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut buf = Buffer::empty(area);
                render_frame(&mut buf, area, black_box(Some(&update)), mode, &config);
                buf
            })
        });
    }

    group.bench_function("waiting_80x24", |b| {
        let area = Rect::new(0, 0, 80, 24);
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            render_frame(&mut buf, area, black_box(None), ViewMode::Live, &config);
            buf
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_snapshot_extraction,
    bench_transform,
    bench_render
);
criterion_main!(benches);
