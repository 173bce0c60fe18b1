//! Drill Path headless runner
//!
//! Drives a session with the autopilot at a fixed frame rate and prints the
//! end-of-run report.

use std::path::PathBuf;

use clap::Parser;

use drill_path::platform::Autopilot;
use drill_path::sim::{Orientation, RunReport};
use drill_path::{Session, SessionEvent, Settings};

#[derive(Parser, Debug)]
#[command(name = "drill-path")]
#[command(about = "Run a directional drilling session on autopilot", long_about = None)]
struct Args {
    /// Master seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Drill vertically instead of horizontally
    #[arg(long, default_value_t = false)]
    vertical: bool,
    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// Give up after this much simulated time
    #[arg(long, default_value_t = 60.0)]
    max_seconds: f64,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if args.vertical {
        settings.start_mode = Orientation::Vertical;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let fps = if args.fps.is_finite() && args.fps > 0.0 {
        args.fps
    } else {
        log::warn!("Invalid fps {}, using 60", args.fps);
        60.0
    };
    let dt = 1.0 / fps;

    log::info!("Drill Path starting (seed {}, {} fps)", seed, fps);

    let mut session = Session::new(seed, &settings);
    let mut pilot = Autopilot::default();
    session.start();

    let mut elapsed = 0.0;
    let mut report = None;
    while session.is_running() && elapsed < args.max_seconds {
        if let Some(snap) = session.frame(dt, &mut pilot) {
            log::debug!(
                "{:7.1} / {:.0}  dev {:5.2}  {:?}",
                snap.forward,
                snap.end_of_hole,
                snap.deviation,
                snap.zone
            );
        }
        elapsed += dt;

        for event in session.drain_events() {
            match event {
                SessionEvent::Finished(r) | SessionEvent::Failed(r) => {
                    report = Some(r);
                    session.stop();
                }
                SessionEvent::Started { plan_seed, mode } => {
                    log::info!("Drilling {} on plan {}", mode.as_str(), plan_seed);
                }
                _ => {}
            }
        }
    }

    let report = report.unwrap_or_else(|| {
        log::warn!("Time limit reached after {:.1}s", elapsed);
        RunReport::from_state(session.state())
    });

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Could not serialize report: {}", e),
        }
    } else {
        for line in report.lines() {
            println!("{}", line);
        }
    }
}
