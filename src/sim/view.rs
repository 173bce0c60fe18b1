//! Read-only views of a run for presentation
//!
//! Nothing here mutates `DrillState`. A renderer or HUD takes a `Snapshot`
//! each frame; the geometry helpers give it the corridor and trail to draw.

use glam::DVec2;
use serde::Serialize;

use super::state::{DrillState, Economics, Orientation, RunStatus, Zone};
use crate::consts::*;

/// Per-frame HUD data
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub mode: Orientation,
    pub plan_seed: u32,
    pub pos: DVec2,
    pub heading_deg: f64,
    pub deviation: f64,
    pub zone: Zone,
    pub outside_time: f64,
    pub outside_limit: f64,
    pub status: RunStatus,
    pub banner: &'static str,
    pub forward: f64,
    pub end_of_hole: f64,
    pub accuracy: f64,
    pub net_profit: f64,
    pub score: f64,
    pub economics: Economics,
}

impl Snapshot {
    pub fn capture(state: &DrillState) -> Self {
        let deviation = state.deviation();
        let zone = Zone::classify(deviation);
        Self {
            mode: state.mode,
            plan_seed: state.plan_seed(),
            pos: state.pos,
            heading_deg: state.heading.to_degrees(),
            deviation,
            zone,
            outside_time: state.outside_time,
            outside_limit: MAX_OUTSIDE_SECONDS,
            status: state.status,
            banner: banner(state.status, zone),
            forward: state.forward(),
            end_of_hole: state.end_of_hole(),
            accuracy: state.accuracy_percent(),
            net_profit: state.net_profit(),
            score: state.score,
            economics: state.economics.clone(),
        }
    }
}

/// Status line shown under the playfield
pub fn banner(status: RunStatus, zone: Zone) -> &'static str {
    match status {
        RunStatus::Failed => "FAILED - too far off plan (press R)",
        RunStatus::Finished => "COMPLETE - nice drilling (press R)",
        RunStatus::Running if zone.is_inside() => "ON TRACK",
        RunStatus::Running => "OFF PLAN",
    }
}

/// Time spent in one corridor zone
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ZoneTime {
    pub seconds: f64,
    pub percent: f64,
}

/// End-of-run drilling operations report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Orientation,
    pub plan_seed: u32,
    pub status: RunStatus,
    pub tight: ZoneTime,
    pub ok: ZoneTime,
    pub outside: ZoneTime,
    pub total_time: f64,
    pub accuracy: f64,
    pub gross_revenue: f64,
    pub remediation_costs: f64,
    pub schedule_delay: f64,
    pub downstream_penalty: f64,
    pub completion_bonus: f64,
    pub net_profit: f64,
}

impl RunReport {
    pub fn from_state(state: &DrillState) -> Self {
        let econ = &state.economics;
        let zone_time = |seconds: f64| ZoneTime {
            seconds,
            percent: econ.share_of_time(seconds),
        };

        Self {
            mode: state.mode,
            plan_seed: state.plan_seed(),
            status: state.status,
            tight: zone_time(econ.time_in_tight),
            ok: zone_time(econ.time_in_ok),
            outside: zone_time(econ.time_outside),
            total_time: econ.total_time,
            accuracy: econ.accuracy_percent(),
            gross_revenue: econ.gross_revenue,
            remediation_costs: econ.remediation_costs,
            schedule_delay: econ.schedule_variance,
            downstream_penalty: econ.downstream_penalty,
            completion_bonus: econ.completion_bonus,
            net_profit: econ.net_profit(),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self.status {
            RunStatus::Failed => "HOLE ABANDONED - REDRILL REQUIRED",
            RunStatus::Finished => "DRILLING COMPLETE",
            RunStatus::Running => "DRILLING IN PROGRESS",
        }
    }

    /// Plain-text report, one line per entry
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            "DRILLING OPERATIONS REPORT".to_string(),
            self.headline().to_string(),
            format!("Mode:               {}", self.mode.as_str()),
            format!("Plan seed:          {}", self.plan_seed),
            format!(
                "Time in Tight:      {:.1} sec ({:.0}%)",
                self.tight.seconds, self.tight.percent
            ),
            format!("Time in OK:         {:.1} sec ({:.0}%)", self.ok.seconds, self.ok.percent),
            format!(
                "Time Outside:       {:.1} sec ({:.0}%)",
                self.outside.seconds, self.outside.percent
            ),
            format!("Total Time:         {:.1} sec", self.total_time),
            format!("Accuracy:           {:.1}%", self.accuracy),
            format!("Gross Revenue:      {}", format_money(self.gross_revenue)),
            format!("Remediation Costs:  {}", format_money(-self.remediation_costs)),
            format!("Schedule Delay:     {:.1} sec", self.schedule_delay),
            format!("Downstream Penalty: {}", format_money(-self.downstream_penalty)),
        ];
        if self.completion_bonus > 0.0 {
            lines.push(format!("Completion Bonus:   {}", format_money(self.completion_bonus)));
        } else if self.completion_bonus < 0.0 {
            lines.push(format!("Completion Penalty: {}", format_money(self.completion_bonus)));
        }
        lines.push(format!("NET PROFIT:         {}", format_money(self.net_profit)));
        lines
    }
}

/// Whole dollars with thousands separators, e.g. `-$25,000`
pub fn format_money(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

/// Visible stretch of the forward axis; the camera trails the drill head
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewWindow {
    pub mode: Orientation,
    pub camera: f64,
    pub min: f64,
    pub max: f64,
}

impl ViewWindow {
    pub fn follow(state: &DrillState, lookahead: f64) -> Self {
        let mode = state.mode;
        let camera = state.forward() - CAMERA_TRAIL;
        Self {
            mode,
            camera,
            min: mode.axis_start().max(camera - CAMERA_TRAIL),
            max: mode.axis_end().min(camera + lookahead),
        }
    }

    pub fn contains(&self, forward: f64, margin: f64) -> bool {
        forward >= self.min - margin && forward <= self.max + margin
    }
}

/// Plan centre line and corridor edges at one forward coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorridorSample {
    pub forward: f64,
    pub center: f64,
    pub tight: (f64, f64),
    pub ok: (f64, f64),
}

/// Sample the plan and both corridors across the window
pub fn corridor(state: &DrillState, window: &ViewWindow) -> Vec<CorridorSample> {
    let mut samples = Vec::new();
    let mut i = 0u32;
    loop {
        let forward = window.min + f64::from(i) * CORRIDOR_STEP;
        if forward > window.max {
            break;
        }
        let center = state.plan.lateral_offset(window.mode, forward);
        samples.push(CorridorSample {
            forward,
            center,
            tight: (center - TOL_TIGHT, center + TOL_TIGHT),
            ok: (center - TOL_OK, center + TOL_OK),
        });
        i += 1;
    }
    samples
}

/// Recent trail points inside the window, oldest first
pub fn visible_trail(state: &DrillState, window: &ViewWindow, limit: usize) -> Vec<DVec2> {
    let skip = state.actual_path.len().saturating_sub(limit);
    state.actual_path[skip..]
        .iter()
        .copied()
        .filter(|p| window.contains(window.mode.split(*p).0, TRAIL_MARGIN))
        .collect()
}
