//! Telemark entry point
//!
//! Headless demo host: drives one scripted attempt through the full phase
//! machine at the fixed timestep and prints the scorecard as JSON. Rendering
//! and UI hosts drive the same `tick` the same way.

use std::error::Error;

use serde::Serialize;

use telemark::consts::SIM_DT;
use telemark::sim::{GamePhase, GameState, Track, tick};
use telemark::{Action, Command, Hill, InputMapper};

/// Final attempt summary, printed as JSON
#[derive(Serialize)]
struct Scorecard<'a> {
    hill: &'a str,
    seed: u64,
    wind_speed_ms: f32,
    wind_direction: &'a str,
    jump_distance_m: f32,
    distance_points: f32,
    style_scores: [f32; 5],
    total_style_points: f32,
    wind_compensation: f32,
    total_score: f32,
    medal: Option<&'a str>,
}

impl<'a> Scorecard<'a> {
    fn from_state(state: &'a GameState) -> Self {
        Self {
            hill: state.hill.name(),
            seed: state.seed,
            wind_speed_ms: state.wind_speed,
            wind_direction: state.wind_direction.as_str(),
            jump_distance_m: state.jump_distance,
            distance_points: state.distance_points,
            style_scores: state.style_scores,
            total_style_points: state.total_style_points,
            wind_compensation: state.wind_compensation,
            total_score: state.total_score,
            medal: state.medal.map(|m| m.as_str()),
        }
    }
}

fn parse_hill(name: &str) -> Option<Hill> {
    match name.to_lowercase().as_str() {
        "normal" => Some(Hill::NormalHill),
        "large" => Some(Hill::LargeHill),
        "flying" => Some(Hill::SkiFlying),
        _ => None,
    }
}

/// Scripted pilot: jumps just before the edge, trims lean toward the ideal
/// 0.5, braces for the landing once the ground gets close
fn drive(state: &GameState, track: &Track, mapper: &mut InputMapper) {
    match state.phase {
        GamePhase::Ready => mapper.queue(Command::Start),
        GamePhase::Inrun => {
            if state.position.z > track.takeoff_edge_z - 0.8 {
                mapper.queue(Command::Jump);
            }
        }
        GamePhase::Flight => {
            if state.lean_angle < 0.5 {
                mapper.press(Action::LeanForward);
            } else {
                mapper.release(Action::LeanForward);
            }
            let clearance = state.position.y - track.height_at(state.position.z);
            if clearance < 12.0 {
                mapper.queue(Command::PrepareLanding);
            }
        }
        GamePhase::Landed | GamePhase::Finished => {}
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let hill = args
        .next()
        .and_then(|s| parse_hill(&s))
        .unwrap_or(Hill::LargeHill);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("{} (K{}), seed {}", hill.name(), hill.k_point(), seed);

    let mut state = GameState::new(hill, seed);
    let track = Track::new(hill);
    let mut mapper = InputMapper::new();
    let mut last_message: Option<String> = None;

    // Two minutes of sim time is far more than any attempt needs
    let max_ticks = 120 * 60;
    for _ in 0..max_ticks {
        drive(&state, &track, &mut mapper);
        let input = mapper.take_tick_input();
        tick(&mut state, &input, SIM_DT);

        if state.message != last_message {
            if let Some(message) = &state.message {
                log::info!("[{}] {}", state.jump_distance.round(), message);
            }
            last_message = state.message.clone();
        }

        if state.phase == GamePhase::Finished {
            break;
        }
    }

    if state.phase != GamePhase::Finished {
        log::warn!("attempt did not finish within {max_ticks} ticks");
    }

    let card = Scorecard::from_state(&state);
    println!("{}", serde_json::to_string_pretty(&card)?);
    Ok(())
}
