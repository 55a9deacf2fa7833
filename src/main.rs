//! Replays a recorded touch trace against the timeline chart and logs how
//! each interaction was classified.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};

use timeline_gestures::{Config, GestureState, Screen, TouchEvent};

/// Timeline gesture replay
#[derive(Parser, Debug)]
#[command(name = "timeline-gestures")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON touch trace to replay (a built-in demo trace if omitted)
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Contents of the row-insertion field, submitted before the replay
    #[arg(short, long)]
    rows: Option<String>,

    /// Seed for the random data rows
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    let events = match &cli.trace {
        Some(path) => load_trace(path)?,
        None => demo_trace(),
    };

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut screen = Screen::new(&config, &mut rng);
    if let Some(text) = cli.rows {
        screen.set_row_input(text);
        if let Ok(n) = screen.insert_rows(&mut rng) {
            info!("inserted {} rows", n);
        }
    }

    screen.press_play();
    let mut last_timestamp = events.first().map(|e| e.timestamp()).unwrap_or_default();
    let mut last_state = GestureState::Ready;
    for event in &events {
        let now = event.timestamp();
        if now > last_timestamp {
            screen.tick(now - last_timestamp);
            last_timestamp = now;
        }
        let state = screen.handle_touch(event);
        if state != last_state {
            info!(
                "{:>6}ms {:<5} {} -> {}",
                now.as_millis(),
                event.name(),
                last_state,
                state,
            );
            last_state = state;
        }
    }

    let timeline = &screen.timeline;
    let viewport = timeline.viewport();
    info!("window {} of {}", viewport.window(), viewport.bounds());
    info!("chart {:.0}px wide", viewport.width());
    info!(
        "playback {} at {}",
        timeline.transport().state(),
        timeline.transport().label(),
    );
    info!(
        "page {}..{}: {}",
        timeline.page().first,
        timeline.page().last,
        timeline
            .visible_rows()
            .map(|r| format!("#{} {:.1}+{:.1}", r.block_id, r.delay, r.duration))
            .join(", "),
    );
    Ok(())
}

fn load_trace(path: &Path) -> anyhow::Result<Vec<TouchEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;
    let events: Vec<TouchEvent> = serde_json::from_str(&text)
        .with_context(|| format!("parsing trace {}", path.display()))?;
    info!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// A tap, a cursor drag, a pinch zoom and a two-finger pan.
fn demo_trace() -> Vec<TouchEvent> {
    let mut events = vec![
        TouchEvent::start(0, &[(50.0, 20.0)]),
        TouchEvent::end(60, &[]).with_changed(&[(50.0, 20.0)]),
        TouchEvent::start(200, &[(30.0, 20.0)]),
    ];
    for i in 1..=6 {
        let x = 30.0 + 25.0 * i as f64;
        events.push(TouchEvent::move_to(200 + 40 * i, &[(x, 20.0)]));
    }
    events.extend(vec![
        TouchEvent::end(500, &[]),
        TouchEvent::start(1000, &[(100.0, 20.0)]),
        TouchEvent::pinch(1040, &[(100.0, 20.0), (200.0, 20.0)]),
        TouchEvent::pinch(1080, &[(80.0, 20.0), (220.0, 20.0)]),
        TouchEvent::pinch(1120, &[(50.0, 20.0), (250.0, 20.0)]),
        TouchEvent::end(1160, &[]),
        TouchEvent::start(2000, &[(100.0, 20.0)]),
        TouchEvent::pinch(2040, &[(100.0, 20.0), (200.0, 20.0)]),
        TouchEvent::pinch(2080, &[(130.0, 20.0), (230.0, 20.0)]),
        TouchEvent::pinch(2120, &[(160.0, 20.0), (260.0, 20.0)]),
        TouchEvent::end(2160, &[]),
    ]);
    events
}
