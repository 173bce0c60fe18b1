//! Deterministic simulation module
//!
//! All drilling logic lives here. This module must be pure and deterministic:
//! - Seeded plan generation only
//! - State mutated only through `tick`
//! - No rendering or platform dependencies

pub mod plan;
pub mod rng;
pub mod state;
pub mod tick;
pub mod view;

pub use plan::{PathPlan, Phase};
pub use rng::Mulberry32;
pub use state::{DrillState, Economics, Orientation, RunStatus, Zone};
pub use tick::{TickInput, completion_bonus, tick};
pub use view::{CorridorSample, RunReport, Snapshot, ViewWindow, corridor, visible_trail};
