//! Planned well path
//!
//! The plan is a lateral offset as a function of forward distance: a straight
//! (sloped) lead-in, then two superimposed sine bends. Both bends start at
//! zero where the lead-in ends, so the curve has no step at the junction.

use serde::{Deserialize, Serialize};

use super::rng::Mulberry32;
use super::state::Orientation;
use crate::consts::*;

/// Starting phase of a bend, restricted so the bend is zero at the junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Zero,
    /// Half-turn: the bend starts out going the other way
    Pi,
}

impl Phase {
    /// `sin(angle + phase)`, exact at `angle == 0` for both phases
    #[inline]
    pub fn sin(self, angle: f64) -> f64 {
        match self {
            Phase::Zero => angle.sin(),
            Phase::Pi => -angle.sin(),
        }
    }

    pub fn radians(self) -> f64 {
        match self {
            Phase::Zero => 0.0,
            Phase::Pi => std::f64::consts::PI,
        }
    }

    fn draw(rng: &mut Mulberry32) -> Self {
        if rng.coin() { Phase::Zero } else { Phase::Pi }
    }
}

/// Reference curve the drill is scored against. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPlan {
    pub seed: u32,
    /// Bend amplitudes
    pub a1: f64,
    pub a2: f64,
    /// Bend angular frequencies (rad per unit distance)
    pub w1: f64,
    pub w2: f64,
    pub phase1: Phase,
    pub phase2: Phase,
    /// Lateral drift per `SLOPE_SPAN` of forward distance
    pub slope: f64,
}

impl PathPlan {
    /// Build a plan from a seed. Draw order is fixed:
    /// a1, a2, w1, w2, phase1, phase2, slope.
    pub fn from_seed(seed: u32) -> Self {
        let mut rng = Mulberry32::new(seed);
        let a1 = rng.uniform(8.0, 18.0);
        let a2 = rng.uniform(3.0, 10.0);
        let w1 = rng.uniform(0.010, 0.018);
        let w2 = rng.uniform(0.020, 0.035);
        let phase1 = Phase::draw(&mut rng);
        let phase2 = Phase::draw(&mut rng);
        let slope = rng.uniform(-8.0, 8.0);

        Self {
            seed,
            a1,
            a2,
            w1,
            w2,
            phase1,
            phase2,
            slope,
        }
    }

    /// A dead-straight plan along the forward axis
    pub fn flat() -> Self {
        Self {
            seed: 0,
            a1: 0.0,
            a2: 0.0,
            w1: 0.0,
            w2: 0.0,
            phase1: Phase::Zero,
            phase2: Phase::Zero,
            slope: 0.0,
        }
    }

    /// Offset at `along` units past the axis start
    fn offset(&self, along: f64) -> f64 {
        let linear = self.slope * along / SLOPE_SPAN;
        let u = along - STRAIGHT_SECTION;
        if u < 0.0 {
            return linear;
        }
        linear + self.a1 * self.phase1.sin(self.w1 * u) + self.a2 * self.phase2.sin(self.w2 * u)
    }

    /// Horizontal mode: planned y at x
    pub fn y_at(&self, x: f64) -> f64 {
        self.offset(x - X_START)
    }

    /// Vertical mode: planned x at y
    pub fn x_at(&self, y: f64) -> f64 {
        self.offset(y - Y_START)
    }

    /// Planned lateral coordinate at a forward coordinate for the given mode
    #[inline]
    pub fn lateral_offset(&self, mode: Orientation, forward: f64) -> f64 {
        match mode {
            Orientation::Horizontal => self.y_at(forward),
            Orientation::Vertical => self.x_at(forward),
        }
    }
}
