//! Per-frame simulation step
//!
//! Heading lag, kinematic advance, corridor scoring and end-of-run checks.
//! `dt` is taken as given: a long stall arrives as one long step.

use super::state::{DrillState, Economics, RunStatus, Zone};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Steering intent, -1 (turn toward negative lateral) to +1
    pub steer: f64,
}

impl TickInput {
    pub fn steer(steer: f64) -> Self {
        Self { steer }
    }
}

/// Advance the run by `dt` seconds. No-op once the run has ended.
pub fn tick(state: &mut DrillState, input: &TickInput, dt: f64) {
    if state.is_over() {
        return;
    }
    if !(dt.is_finite() && dt >= 0.0) {
        log::warn!("Ignoring tick with invalid dt: {}", dt);
        return;
    }

    let steer = if input.steer.is_nan() {
        0.0
    } else {
        input.steer.clamp(-1.0, 1.0)
    };

    // Target follows the steering input, bounded by max deflection
    state.heading_target = (state.heading_target + steer * TURN_RATE * dt)
        .clamp(-HEADING_LIMIT, HEADING_LIMIT);

    // Drill string lag: exponential approach, exact for any dt
    let alpha = 1.0 - (-HEADING_INERTIA * dt).exp();
    state.heading = (1.0 - alpha) * state.heading + alpha * state.heading_target;

    // Constant forward speed, lateral drift from heading
    let (forward, lateral) = state.mode.split(state.pos);
    let step = FORWARD_SPEED * dt;
    let forward = forward + step;
    let lateral = lateral + state.heading.tan() * step;
    state.pos = state.mode.join(forward, lateral);
    state.actual_path.push(state.pos);

    let deviation = (lateral - state.plan.lateral_offset(state.mode, forward)).abs();
    let zone = Zone::classify(deviation);
    accrue(state, zone, dt);

    if zone.is_inside() {
        state.outside_time = (state.outside_time - OUTSIDE_DECAY_RATE * dt).max(0.0);
    }

    if state.outside_time >= MAX_OUTSIDE_SECONDS {
        end_run(state, RunStatus::Failed);
        return;
    }

    if forward >= state.end_of_hole() {
        end_run(state, RunStatus::Finished);
    }
}

/// Score and economics for one tick spent in `zone`
fn accrue(state: &mut DrillState, zone: Zone, dt: f64) {
    let econ = &mut state.economics;
    econ.total_time += dt;

    match zone {
        Zone::Tight => {
            state.score += PTS_TIGHT * dt;
            econ.time_in_tight += dt;
            econ.gross_revenue += REVENUE_TIGHT * dt;
            econ.schedule_variance =
                (econ.schedule_variance - SCHEDULE_RECOVERY_RATE * dt).max(0.0);
        }
        Zone::Ok => {
            state.score += PTS_OK * dt;
            econ.time_in_ok += dt;
            econ.gross_revenue += REVENUE_OK * dt;
        }
        Zone::Outside => {
            state.score += PTS_OUTSIDE * dt;
            econ.time_outside += dt;
            econ.remediation_costs += COST_OUTSIDE * dt;
            econ.schedule_variance += SCHEDULE_DELAY_MULTIPLIER * dt;
            state.outside_time += dt;
        }
    }

    econ.downstream_penalty = econ.schedule_variance * DOWNSTREAM_COST_PER_SEC;
}

/// Terminal transition; settles the completion bonus exactly once
fn end_run(state: &mut DrillState, status: RunStatus) {
    debug_assert_ne!(status, RunStatus::Running);
    state.status = status;
    state.economics.completion_bonus = completion_bonus(&state.economics, status);

    log::info!(
        "Run {:?} (plan {}, accuracy {:.1}%, net ${:.0})",
        status,
        state.plan.seed,
        state.economics.accuracy_percent(),
        state.economics.net_profit()
    );
}

/// End-of-run bonus or penalty for the given outcome
pub fn completion_bonus(econ: &Economics, status: RunStatus) -> f64 {
    if status == RunStatus::Failed {
        return PENALTY_FAIL;
    }

    let accuracy = econ.accuracy_percent();
    if accuracy >= 90.0 {
        BONUS_EXCELLENT
    } else if accuracy >= 75.0 {
        BONUS_GOOD
    } else if accuracy < 50.0 {
        PENALTY_POOR
    } else {
        0.0
    }
}
