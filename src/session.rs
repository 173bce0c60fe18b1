//! Run loop
//!
//! Owns the current `DrillState` and replaces it wholesale on restart or
//! mode toggle. The host calls `frame` once per animation frame with the
//! elapsed time; nothing else touches the state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::PLAN_SEED_RANGE;
use crate::platform::InputSource;
use crate::settings::Settings;
use crate::sim::{DrillState, Orientation, RunReport, RunStatus, Snapshot, TickInput, tick};

/// Lifecycle notifications for UI chrome
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A new run began on the given plan
    Started { plan_seed: u32, mode: Orientation },
    ModeChanged(Orientation),
    Restarted { plan_seed: u32 },
    Finished(RunReport),
    Failed(RunReport),
}

pub struct Session {
    state: DrillState,
    settings: Settings,
    /// Source of plan seeds; a session replays exactly from its master seed
    seeds: Pcg32,
    running: bool,
    frames: u64,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new(master_seed: u64, settings: &Settings) -> Self {
        let mut seeds = Pcg32::seed_from_u64(master_seed);
        let plan_seed = seeds.random_range(0..PLAN_SEED_RANGE);
        let mode = settings.start_mode;

        log::info!(
            "Session created (master seed {}, plan {}, {})",
            master_seed,
            plan_seed,
            mode.as_str()
        );

        Self {
            state: DrillState::new(plan_seed, mode),
            settings: settings.clone(),
            seeds,
            running: false,
            frames: 0,
            events: vec![SessionEvent::Started { plan_seed, mode }],
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop scheduling frames. The current run is left as-is.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &DrillState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Orientation {
        self.state.mode
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Events since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn new_run(&mut self, mode: Orientation) -> u32 {
        let plan_seed = self.seeds.random_range(0..PLAN_SEED_RANGE);
        self.state = DrillState::new(plan_seed, mode);
        self.events.push(SessionEvent::Started { plan_seed, mode });
        plan_seed
    }

    /// Switch orientation; starts a fresh run on a new plan
    pub fn toggle_mode(&mut self) -> Orientation {
        let mode = self.state.mode.toggled();
        let plan_seed = self.new_run(mode);
        self.events.push(SessionEvent::ModeChanged(mode));
        log::info!("Mode toggled to {} (plan {})", mode.as_str(), plan_seed);
        mode
    }

    /// Fresh run on a new plan, same orientation
    pub fn restart(&mut self) {
        let plan_seed = self.new_run(self.state.mode);
        self.events.push(SessionEvent::Restarted { plan_seed });
        log::info!("Run restarted (plan {})", plan_seed);
    }

    /// Advance one frame. Returns `None` while stopped.
    pub fn frame<I: InputSource + ?Sized>(&mut self, dt: f64, input: &mut I) -> Option<Snapshot> {
        if !self.running {
            return None;
        }
        self.frames += 1;

        let commands = input.commands();
        if commands.toggle_mode {
            self.toggle_mode();
        }
        if commands.restart {
            self.restart();
        }

        let dt = self.settings.frame_dt(dt);
        let steer = input.steer(&self.state);
        let before = self.state.status;
        tick(&mut self.state, &TickInput::steer(steer), dt);

        if before == RunStatus::Running {
            match self.state.status {
                RunStatus::Finished => self
                    .events
                    .push(SessionEvent::Finished(RunReport::from_state(&self.state))),
                RunStatus::Failed => self
                    .events
                    .push(SessionEvent::Failed(RunReport::from_state(&self.state))),
                RunStatus::Running => {}
            }
        }

        Some(Snapshot::capture(&self.state))
    }
}
