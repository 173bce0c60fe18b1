//! Drill Path - a directional drilling simulator
//!
//! Core modules:
//! - `sim`: Deterministic simulation (path plan, drill state, per-frame step)
//! - `platform`: Input sources (keyboard state, autopilot)
//! - `session`: Frame-driven run loop (restart, mode toggle, lifecycle events)
//! - `settings`: Runtime preferences

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{Session, SessionEvent};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// World bounds (meters-ish)
    pub const X_START: f64 = 0.0;
    pub const X_END: f64 = 800.0;
    pub const Y_START: f64 = 0.0;
    pub const Y_END: f64 = 800.0;

    /// Drill motion
    pub const FORWARD_SPEED: f64 = 60.0; // units/sec, constant
    pub const TURN_RATE: f64 = 1.35; // rad/sec of heading target per unit steer
    pub const HEADING_INERTIA: f64 = 8.0; // first-order lag rate (tool response)
    /// Max drill-string deflection either side of the forward axis (~31.5°)
    pub const HEADING_LIMIT: f64 = 0.55;

    /// Tolerance corridor half-widths
    pub const TOL_TIGHT: f64 = 4.0;
    pub const TOL_OK: f64 = 10.0;
    /// Staying outside the OK corridor this long fails the hole
    pub const MAX_OUTSIDE_SECONDS: f64 = 3.5;
    /// Outside-time forgiveness per second while back inside the corridor
    pub const OUTSIDE_DECAY_RATE: f64 = 1.8;

    /// Legacy score rates (points/sec)
    pub const PTS_TIGHT: f64 = 25.0;
    pub const PTS_OK: f64 = 10.0;
    pub const PTS_OUTSIDE: f64 = -30.0;

    /// Revenue / cost rates ($/sec)
    pub const REVENUE_TIGHT: f64 = 500.0;
    pub const REVENUE_OK: f64 = 200.0;
    pub const COST_OUTSIDE: f64 = 800.0;

    /// Schedule impact
    pub const SCHEDULE_DELAY_MULTIPLIER: f64 = 2.0; // 1s outside = 2s delay
    pub const SCHEDULE_RECOVERY_RATE: f64 = 0.5; // tight drilling recovers 0.5 s/s
    pub const DOWNSTREAM_COST_PER_SEC: f64 = 100.0;

    /// Completion adjustments (applied once at the end of a run)
    pub const BONUS_EXCELLENT: f64 = 5000.0; // accuracy >= 90%
    pub const BONUS_GOOD: f64 = 2000.0; // accuracy >= 75%
    pub const PENALTY_POOR: f64 = -10000.0; // accuracy < 50%
    pub const PENALTY_FAIL: f64 = -25000.0; // abandon & redrill

    /// Plan shape
    pub const STRAIGHT_SECTION: f64 = 100.0; // linear-only run before the curves begin
    pub const SLOPE_SPAN: f64 = 200.0; // slope coefficient is lateral units per this distance
    /// Plan seeds are drawn from [0, PLAN_SEED_RANGE)
    pub const PLAN_SEED_RANGE: u32 = 1_000_000;

    /// View
    pub const CAMERA_LOOKAHEAD: f64 = 160.0;
    pub const CAMERA_TRAIL: f64 = 40.0;
    pub const CORRIDOR_STEP: f64 = 4.0;
    pub const TRAIL_WINDOW: usize = 4000;
    pub const TRAIL_MARGIN: f64 = 20.0;
}
