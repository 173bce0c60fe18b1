use drill_path::consts::*;
use drill_path::platform::{Autopilot, Commands, InputSource, Key, KeyboardState};
use drill_path::sim::{DrillState, Orientation, RunStatus};
use drill_path::{Session, SessionEvent, Settings};

const DT: f64 = 1.0 / 60.0;

/// Replays a fixed steering script, one value per frame
struct Scripted {
    steer: Vec<f64>,
    frame: usize,
}

impl InputSource for Scripted {
    fn commands(&mut self) -> Commands {
        self.frame += 1;
        Commands::default()
    }

    fn steer(&self, _state: &DrillState) -> f64 {
        self.steer.get(self.frame - 1).copied().unwrap_or(0.0)
    }
}

fn run_to_end<I: InputSource>(session: &mut Session, input: &mut I, max_frames: usize) {
    for _ in 0..max_frames {
        session.frame(DT, input);
        if session.state().is_over() {
            break;
        }
    }
}

#[test]
fn autopilot_completes_both_orientations() {
    for mode in [Orientation::Horizontal, Orientation::Vertical] {
        let settings = Settings {
            start_mode: mode,
            ..Default::default()
        };
        let mut session = Session::new(2024, &settings);
        session.start();
        run_to_end(&mut session, &mut Autopilot::default(), 5_000);

        let state = session.state();
        assert_eq!(state.status, RunStatus::Finished);
        assert!(state.forward() >= mode.axis_end());
        assert_eq!(state.economics.completion_bonus, BONUS_EXCELLENT);
        let net_profit = state.net_profit();

        let report = session
            .drain_events()
            .into_iter()
            .find_map(|e| match e {
                SessionEvent::Finished(r) => Some(r),
                _ => None,
            })
            .expect("finished event");
        assert_eq!(report.net_profit, net_profit);
        assert_eq!(report.mode, mode);
    }
}

#[test]
fn holding_one_key_runs_off_plan_and_fails() {
    let mut session = Session::new(11, &Settings::default());
    session.start();
    let mut keys = KeyboardState::new();
    keys.key_down(Key::ArrowUp);
    run_to_end(&mut session, &mut keys, 5_000);

    let state = session.state();
    assert_eq!(state.status, RunStatus::Failed);
    assert_eq!(state.heading_target, HEADING_LIMIT);
    assert!(state.forward() < X_END);
    assert_eq!(state.economics.completion_bonus, PENALTY_FAIL);
    assert!(state.net_profit() < 0.0);

    // Frozen afterwards, but R starts over
    let frozen = state.pos;
    session.frame(DT, &mut keys);
    assert_eq!(session.state().pos, frozen);

    keys.key_down(Key::R);
    session.frame(DT, &mut keys);
    assert_eq!(session.state().status, RunStatus::Running);
    assert_eq!(session.state().mode, Orientation::Horizontal);
}

#[test]
fn session_replays_from_master_seed() {
    let script: Vec<f64> = (0..900)
        .map(|i| match (i / 45) % 4 {
            0 => 1.0,
            2 => -1.0,
            _ => 0.0,
        })
        .collect();

    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let mut session = Session::new(314, &Settings::default());
        session.start();
        let mut input = Scripted {
            steer: script.clone(),
            frame: 0,
        };
        let mut trace = Vec::new();
        for _ in 0..script.len() {
            if let Some(snap) = session.frame(DT, &mut input) {
                trace.push((snap.pos.x.to_bits(), snap.pos.y.to_bits(), snap.net_profit.to_bits()));
            }
        }
        snapshots.push(trace);
    }
    assert_eq!(snapshots[0], snapshots[1]);
}

#[test]
fn toggle_mid_run_switches_steering_keys() {
    let mut session = Session::new(5, &Settings::default());
    session.start();
    let mut keys = KeyboardState::new();
    for _ in 0..20 {
        session.frame(DT, &mut keys);
    }

    keys.key_down(Key::T);
    keys.key_down(Key::ArrowRight);
    for _ in 0..20 {
        session.frame(DT, &mut keys);
    }

    let state = session.state();
    assert_eq!(state.mode, Orientation::Vertical);
    assert!(state.heading_target > 0.0);
    assert!(state.pos.x > state.actual_path[0].x);
}

#[test]
fn stall_passes_through_as_one_long_step() {
    let mut session = Session::new(8, &Settings::default());
    session.start();
    let mut keys = KeyboardState::new();
    session.frame(DT, &mut keys);
    let before = session.state().forward();

    session.frame(20.0, &mut keys);
    let state = session.state();
    // 20 s at full speed overshoots the hole in a single step
    assert!(state.forward() >= before + 20.0 * FORWARD_SPEED - 1e-9);
    assert!(state.is_over());
}
