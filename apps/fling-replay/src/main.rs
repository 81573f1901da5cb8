//! Replays a pointer trace through a kinetic scroll view and prints where the
//! surface came to rest.
//!
//! ```text
//! fling-replay traces/flick_left.trace --kinetic --width 4000 --start 1000
//! ```

mod trace;

use anyhow::Result;
use clap::Parser;
use kinetic_core::{Axis, Clock, SystemClock};
use kinetic_testing::{Adjustment, TestSurface};
use kinetic_ui::{KineticEvent, KineticParameters, KineticScrollView};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

/// Upper bound on the ticks delivered after the trace ends.
const DRAIN_LIMIT_MS: u64 = 60_000;

#[derive(Debug, Parser)]
#[command(name = "fling-replay")]
#[command(about = "Replays a pointer trace through a kinetic scroll view")]
#[command(after_help = "A zero width or height leaves that axis out.")]
struct Cli {
    /// Trace file, one event per line.
    trace: PathBuf,
    /// Decelerate after release instead of settling straight away.
    #[arg(long)]
    kinetic: bool,
    /// Per-frame velocity divisor, greater than one.
    #[arg(long)]
    decel_rate: Option<f64>,
    /// Motion samples kept for the release velocity.
    #[arg(long = "buffer", value_parser = clap::value_parser!(u16).range(1..))]
    buffer_capacity: Option<u16>,
    /// Length of the ticks delivered after the trace ends.
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    frame_ms: u64,
    #[arg(long, default_value_t = 4_000.0)]
    width: f64,
    #[arg(long, default_value_t = 4_000.0)]
    height: f64,
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    #[arg(long, default_value_t = 400.0)]
    page: f64,
    /// Initial value of both axes.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,
    /// Let both axes overscroll and bounce back.
    #[arg(long)]
    elastic: bool,
}

impl Cli {
    fn parameters(&self) -> Result<KineticParameters> {
        let mut parameters = KineticParameters::default().with_kinetic(self.kinetic);
        if let Some(decel_rate) = self.decel_rate {
            parameters.set_decel_rate(decel_rate)?;
        }
        if let Some(capacity) = self.buffer_capacity {
            parameters.set_buffer_capacity(usize::from(capacity))?;
        }
        Ok(parameters)
    }

    fn surface(&self) -> TestSurface {
        let adjustment = |upper: f64| {
            (upper > 0.0).then(|| {
                let adjustment =
                    Adjustment::new(0.0, upper, self.step, self.page).with_value(self.start);
                if self.elastic {
                    adjustment.elastic()
                } else {
                    adjustment
                }
            })
        };
        TestSurface::new(adjustment(self.width), adjustment(self.height))
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let parameters = cli.parameters()?;
    let trace = trace::load(&cli.trace)?;
    log::info!("replaying {} events from {}", trace.len(), cli.trace.display());

    let clock = SystemClock;
    let started = clock.now();

    let mut view = KineticScrollView::with_surface(cli.surface(), parameters);
    let completions = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&completions);
    view.add_panning_completed_listener(move || counter.set(counter.get() + 1));

    println!("event,line,outcome,horizontal,vertical");
    for line in &trace {
        let outcome = view.handle_event(line.event);
        if let KineticEvent::Tick { .. } = line.event {
            if let Some(surface) = view.surface_mut() {
                surface.advance_frame();
            }
        }
        println!(
            "event,{},{:?},{},{}",
            line.line_no,
            outcome,
            format_value(&view, Axis::Horizontal),
            format_value(&view, Axis::Vertical)
        );
    }

    let mut drained_ms = 0;
    while is_busy(&view) && drained_ms < DRAIN_LIMIT_MS {
        view.tick(cli.frame_ms);
        if let Some(surface) = view.surface_mut() {
            surface.advance_frame();
        }
        drained_ms += cli.frame_ms;
    }
    if is_busy(&view) {
        log::warn!("still moving after {DRAIN_LIMIT_MS} ms of extra ticks");
    }
    log::info!("replay took {} us", clock.micros_since(started));

    println!("final,horizontal,{}", format_value(&view, Axis::Horizontal));
    println!("final,vertical,{}", format_value(&view, Axis::Vertical));
    println!("final,drained_ms,{drained_ms}");
    println!("final,completed_sessions,{}", completions.get());
    Ok(())
}

fn is_busy(view: &KineticScrollView<TestSurface>) -> bool {
    view.is_decelerating() || view.surface().is_some_and(TestSurface::is_animating)
}

fn format_value(view: &KineticScrollView<TestSurface>, axis: Axis) -> String {
    view.surface()
        .and_then(|surface| surface.value(axis))
        .map(|value| format!("{value:.3}"))
        .unwrap_or_else(|| "-".to_string())
}
