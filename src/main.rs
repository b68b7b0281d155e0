//! Terminal Klingon clock (default binary).
//!
//! Samples the wall clock once per tick and redraws the clock face through a
//! framebuffer renderer. With `KLINGON_CLOCK_HEADLESS` set, prints a single
//! reading instead and exits.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use klingon_clock::clock::{until_next_tick, SystemClock, WallClock};
use klingon_clock::config::{ClockConfig, HeadlessFormat};
use klingon_clock::core::{ClockSnapshot, SnapshotOptions};
use klingon_clock::headless;
use klingon_clock::input::handle_key_event;
use klingon_clock::logging;
use klingon_clock::term::{ClockView, FrameBuffer, FrameThrottle, TerminalSession, Viewport};
use klingon_clock::types::{SessionAction, MIN_REDRAW_INTERVAL_MS};

fn main() -> Result<()> {
    let config = ClockConfig::from_env();
    logging::init(config.log_path.as_deref())?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(
        tick_ms = config.tick_ms,
        utc = config.utc,
        analog = config.analog,
        "starting klingon clock"
    );

    let clock = SystemClock::new(config.utc);
    let options = SnapshotOptions {
        owner: config.owner.clone(),
    };

    if let Some(format) = config.headless {
        return print_once(&clock, &options, format);
    }

    let mut session = TerminalSession::open()?;
    let result = run(&mut session, &clock, &options, &config);

    // Always try to restore terminal state.
    let closed = session.close();
    tracing::info!(ok = result.is_ok(), "klingon clock stopped");
    result.and(closed)
}

fn print_once(
    clock: &impl WallClock,
    options: &SnapshotOptions,
    format: HeadlessFormat,
) -> Result<()> {
    let sample = clock.sample();
    let snap = ClockSnapshot::from_reading(&sample.reading, options);
    println!("{}", headless::render(&snap, format)?);
    Ok(())
}

fn run(
    session: &mut TerminalSession,
    clock: &impl WallClock,
    options: &SnapshotOptions,
    config: &ClockConfig,
) -> Result<()> {
    let view = ClockView::default().with_dial(config.analog);
    let mut throttle = FrameThrottle::new(MIN_REDRAW_INTERVAL_MS);
    let mut fb = FrameBuffer::new(0, 0);

    let mut sample = clock.sample();
    let mut snap = ClockSnapshot::from_reading(&sample.reading, options);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        if throttle.should_render(sample.epoch_ms, snap.fingerprint, (w, h)) {
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            session.renderer().draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = until_next_tick(sample.epoch_ms, config.tick_ms);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match handle_key_event(key) {
                    Some(SessionAction::Quit) => return Ok(()),
                    Some(SessionAction::Redraw) => {
                        session.renderer().invalidate();
                        throttle.reset();
                    }
                    None => {}
                },
                Event::Resize(w, h) => {
                    tracing::debug!(width = w, height = h, "terminal resized");
                    session.renderer().invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        let next = clock.sample();
        if next.reading != sample.reading {
            snap = ClockSnapshot::from_reading(&next.reading, options);
        }
        sample = next;
    }
}
