//! Drill state and run accounting
//!
//! One `DrillState` per run. It is created on the plan, mutated only by
//! `tick`, and replaced wholesale on restart or mode toggle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::plan::PathPlan;
use crate::consts::*;

/// Which world axis the drill advances along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Forward is +x, lateral is y
    #[default]
    Horizontal,
    /// Forward is +y (down the hole), lateral is x
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "HORIZONTAL",
            Orientation::Vertical => "VERTICAL",
        }
    }

    pub fn axis_start(self) -> f64 {
        match self {
            Orientation::Horizontal => X_START,
            Orientation::Vertical => Y_START,
        }
    }

    pub fn axis_end(self) -> f64 {
        match self {
            Orientation::Horizontal => X_END,
            Orientation::Vertical => Y_END,
        }
    }

    /// Split a point into (forward, lateral)
    #[inline]
    pub fn split(self, p: DVec2) -> (f64, f64) {
        match self {
            Orientation::Horizontal => (p.x, p.y),
            Orientation::Vertical => (p.y, p.x),
        }
    }

    /// Build a point from (forward, lateral)
    #[inline]
    pub fn join(self, forward: f64, lateral: f64) -> DVec2 {
        match self {
            Orientation::Horizontal => DVec2::new(forward, lateral),
            Orientation::Vertical => DVec2::new(lateral, forward),
        }
    }
}

/// Lifecycle of a run. Finished and Failed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Running,
    /// Reached the end of the hole
    Finished,
    /// Stayed outside the corridor too long
    Failed,
}

/// Corridor zone by deviation from plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    Tight,
    Ok,
    Outside,
}

impl Zone {
    pub fn classify(deviation: f64) -> Self {
        if deviation <= TOL_TIGHT {
            Zone::Tight
        } else if deviation <= TOL_OK {
            Zone::Ok
        } else {
            Zone::Outside
        }
    }

    /// Inside the acceptable corridor (tight or ok)
    pub fn is_inside(self) -> bool {
        self != Zone::Outside
    }
}

/// Running financial and schedule totals for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    pub gross_revenue: f64,
    pub remediation_costs: f64,
    /// Accumulated delay in seconds; tight drilling works it back down
    pub schedule_variance: f64,
    /// Derived from `schedule_variance` every tick
    pub downstream_penalty: f64,
    pub time_in_tight: f64,
    pub time_in_ok: f64,
    pub time_outside: f64,
    pub total_time: f64,
    /// Set once, when the run ends
    pub completion_bonus: f64,
}

impl Economics {
    /// Share of drilling time spent inside the corridor, 0-100
    pub fn accuracy_percent(&self) -> f64 {
        if self.total_time == 0.0 {
            return 100.0;
        }
        100.0 * (self.time_in_tight + self.time_in_ok) / self.total_time
    }

    pub fn net_profit(&self) -> f64 {
        self.gross_revenue - self.remediation_costs - self.downstream_penalty
            + self.completion_bonus
    }

    /// Percentage of total time spent in `secs`, 0 before any time has passed
    pub fn share_of_time(&self, secs: f64) -> f64 {
        if self.total_time > 0.0 {
            secs / self.total_time * 100.0
        } else {
            0.0
        }
    }
}

/// Complete run state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillState {
    pub plan: PathPlan,
    pub mode: Orientation,
    /// Drill head position in world coordinates
    pub pos: DVec2,
    /// Current heading relative to the forward axis (radians)
    pub heading: f64,
    /// Steering-driven heading the drill string is bending toward
    pub heading_target: f64,
    /// Legacy per-second score
    pub score: f64,
    /// Time budget spent outside the corridor (decays while back inside)
    pub outside_time: f64,
    pub status: RunStatus,
    /// Every position visited, oldest first
    pub actual_path: Vec<DVec2>,
    pub economics: Economics,
}

impl DrillState {
    /// Start a run on a plan generated from `seed`
    pub fn new(seed: u32, mode: Orientation) -> Self {
        Self::with_plan(PathPlan::from_seed(seed), mode)
    }

    /// Start a run on the given plan, head placed on the plan at the axis start
    pub fn with_plan(plan: PathPlan, mode: Orientation) -> Self {
        let forward = mode.axis_start();
        let pos = mode.join(forward, plan.lateral_offset(mode, forward));

        Self {
            plan,
            mode,
            pos,
            heading: 0.0,
            heading_target: 0.0,
            score: 0.0,
            outside_time: 0.0,
            status: RunStatus::Running,
            actual_path: vec![pos],
            economics: Economics::default(),
        }
    }

    pub fn plan_seed(&self) -> u32 {
        self.plan.seed
    }

    pub fn is_finished(&self) -> bool {
        self.status == RunStatus::Finished
    }

    pub fn is_failed(&self) -> bool {
        self.status == RunStatus::Failed
    }

    /// True once the run has reached either terminal state
    pub fn is_over(&self) -> bool {
        self.status != RunStatus::Running
    }

    /// Coordinate along the mode's forward axis
    pub fn forward(&self) -> f64 {
        self.mode.split(self.pos).0
    }

    /// Coordinate along the mode's lateral axis
    pub fn lateral(&self) -> f64 {
        self.mode.split(self.pos).1
    }

    /// Planned lateral coordinate at the current forward coordinate
    pub fn planned_lateral(&self) -> f64 {
        self.plan.lateral_offset(self.mode, self.forward())
    }

    /// Lateral distance from the plan at the current forward coordinate
    pub fn deviation(&self) -> f64 {
        (self.lateral() - self.planned_lateral()).abs()
    }

    pub fn zone(&self) -> Zone {
        Zone::classify(self.deviation())
    }

    pub fn end_of_hole(&self) -> f64 {
        self.mode.axis_end()
    }

    /// Fraction of the hole drilled, 0-1
    pub fn progress(&self) -> f64 {
        let start = self.mode.axis_start();
        ((self.forward() - start) / (self.end_of_hole() - start)).clamp(0.0, 1.0)
    }

    pub fn accuracy_percent(&self) -> f64 {
        self.economics.accuracy_percent()
    }

    pub fn net_profit(&self) -> f64 {
        self.economics.net_profit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_plan() {
        for mode in [Orientation::Horizontal, Orientation::Vertical] {
            let state = DrillState::new(4242, mode);
            assert_eq!(state.forward(), mode.axis_start());
            assert_eq!(state.deviation(), 0.0);
            assert_eq!(state.heading, 0.0);
            assert_eq!(state.heading_target, 0.0);
            assert_eq!(state.status, RunStatus::Running);
            assert_eq!(state.actual_path, vec![state.pos]);
            assert_eq!(state.economics, Economics::default());
        }
    }

    #[test]
    fn test_vertical_start_uses_inverse_query() {
        let plan = PathPlan::from_seed(9);
        let state = DrillState::with_plan(plan.clone(), Orientation::Vertical);
        assert_eq!(state.pos.y, Y_START);
        assert_eq!(state.pos.x, plan.x_at(Y_START));
    }

    #[test]
    fn test_orientation_split_join() {
        let p = DVec2::new(3.0, 7.0);
        assert_eq!(Orientation::Horizontal.split(p), (3.0, 7.0));
        assert_eq!(Orientation::Vertical.split(p), (7.0, 3.0));
        assert_eq!(Orientation::Vertical.join(7.0, 3.0), p);
        assert_eq!(Orientation::Horizontal.toggled(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.toggled().as_str(), "HORIZONTAL");
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(Zone::classify(0.0), Zone::Tight);
        assert_eq!(Zone::classify(TOL_TIGHT), Zone::Tight);
        assert_eq!(Zone::classify(TOL_TIGHT + 0.001), Zone::Ok);
        assert_eq!(Zone::classify(TOL_OK), Zone::Ok);
        assert_eq!(Zone::classify(TOL_OK + 0.001), Zone::Outside);
        assert!(!Zone::Outside.is_inside());
    }

    #[test]
    fn test_accuracy_and_profit() {
        let mut econ = Economics::default();
        assert_eq!(econ.accuracy_percent(), 100.0);
        assert_eq!(econ.share_of_time(5.0), 0.0);

        econ.time_in_tight = 6.0;
        econ.time_in_ok = 2.0;
        econ.time_outside = 2.0;
        econ.total_time = 10.0;
        assert_eq!(econ.accuracy_percent(), 80.0);
        assert_eq!(econ.share_of_time(econ.time_outside), 20.0);

        econ.gross_revenue = 3400.0;
        econ.remediation_costs = 1600.0;
        econ.downstream_penalty = 400.0;
        econ.completion_bonus = 2000.0;
        assert_eq!(econ.net_profit(), 3400.0);
    }

    #[test]
    fn test_progress() {
        let mut state = DrillState::with_plan(PathPlan::flat(), Orientation::Horizontal);
        assert_eq!(state.progress(), 0.0);
        state.pos.x = 400.0;
        assert_eq!(state.progress(), 0.5);
        state.pos.x = 900.0;
        assert_eq!(state.progress(), 1.0);
    }
}
