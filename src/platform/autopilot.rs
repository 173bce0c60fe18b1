//! Autopilot - demo driver that follows the plan
//!
//! Aims at the plan a fixed distance ahead and steers the heading target
//! toward that bearing. Good enough to keep inside the tight corridor on
//! any generated plan; used by the headless runner and tests.

use super::input::{Commands, InputSource};
use crate::consts::HEADING_LIMIT;
use crate::sim::DrillState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Forward distance to the aim point
    pub lookahead: f64,
    /// Steer per radian of heading-target error
    pub gain: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lookahead: 30.0,
            gain: 8.0,
        }
    }
}

impl Autopilot {
    pub fn new(lookahead: f64, gain: f64) -> Self {
        Self { lookahead, gain }
    }

    /// Heading that points at the plan `lookahead` units ahead
    pub fn desired_heading(&self, state: &DrillState) -> f64 {
        let aim = state
            .plan
            .lateral_offset(state.mode, state.forward() + self.lookahead);
        (aim - state.lateral())
            .atan2(self.lookahead)
            .clamp(-HEADING_LIMIT, HEADING_LIMIT)
    }
}

impl InputSource for Autopilot {
    fn commands(&mut self) -> Commands {
        Commands::default()
    }

    fn steer(&self, state: &DrillState) -> f64 {
        let error = self.desired_heading(state) - state.heading_target;
        (error * self.gain).clamp(-1.0, 1.0)
    }
}
