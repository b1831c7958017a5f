//! Fixed timestep simulation tick
//!
//! Advances one attempt deterministically through the phase machine:
//! Ready → Inrun → Flight → Landed → Finished. The host calls `tick` at
//! ~60 Hz; nothing here blocks or depends on how the host schedules that.

use crate::consts::*;
use crate::mps_to_kmh;

use super::score;
use super::state::{GamePhase, GameState, WindDirection};
use super::track::Track;

/// Input for a single tick: one-shot commands plus the held control state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Leave the gate (Ready only)
    pub start: bool,
    /// Take off (Inrun only, near the table edge)
    pub jump: bool,
    /// Prepare the telemark landing (Flight only, idempotent)
    pub prepare_landing: bool,
    /// Abort to Ready, re-initializing the whole attempt
    pub reset: bool,
    /// Held: lean forward
    pub lean_forward: bool,
    /// Held: lean backward
    pub lean_backward: bool,
    /// Held: shift balance left
    pub balance_left: bool,
    /// Held: shift balance right
    pub balance_right: bool,
}

/// Advance the attempt by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Reset is the only external interrupt, applied whole at the tick boundary
    if input.reset {
        log::info!("reset to gate");
        state.reset();
        return;
    }

    state.time_ticks += 1;

    process_controls(state, input, dt);

    let track = Track::new(state.hill);

    match state.phase {
        GamePhase::Ready => {
            if input.start {
                state.place_at_gate();
                state.phase = GamePhase::Inrun;
                state.show_message("GO!", 1.0);
                log::info!(
                    "inrun start on {} (wind {:.1} m/s {})",
                    state.hill.name(),
                    state.wind_speed,
                    state.wind_direction.as_str()
                );
            }
        }

        GamePhase::Inrun => {
            update_inrun(state, &track, dt);

            // Jump window opens near the table edge; past the edge the
            // takeoff fires on its own.
            if input.jump && state.position.z > track.takeoff_edge_z - 5.0 {
                initiate_jump(state, &track);
            } else if state.position.z > track.takeoff_edge_z + 2.0 {
                initiate_jump(state, &track);
            }
        }

        GamePhase::Flight => {
            if input.prepare_landing {
                state.is_preparing_landing = true;
            }
            update_flight(state, &track, dt);
        }

        GamePhase::Landed => {
            update_outrun(state, &track, dt);
        }

        GamePhase::Finished => {}
    }

    state.current_speed = mps_to_kmh(state.velocity.length());
    state.expire_message();
}

/// Lean/balance ramp toward the held direction, decay toward neutral
/// otherwise. Opposite holds apply both deltas and cancel.
fn process_controls(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.lean_forward {
        state.lean_angle = (state.lean_angle + CONTROL_RATE * dt).min(1.0);
    }
    if input.lean_backward {
        state.lean_angle = (state.lean_angle - CONTROL_RATE * dt).max(-1.0);
    }
    if !input.lean_forward && !input.lean_backward {
        state.lean_angle *= CONTROL_DECAY;
    }

    if input.balance_right {
        state.balance_offset = (state.balance_offset + CONTROL_RATE * dt).min(1.0);
    }
    if input.balance_left {
        state.balance_offset = (state.balance_offset - CONTROL_RATE * dt).max(-1.0);
    }
    if !input.balance_left && !input.balance_right {
        state.balance_offset *= CONTROL_DECAY;
    }
}

/// Accelerate down the inrun, capped at track speed, riding the rail exactly
fn update_inrun(state: &mut GameState, track: &Track, dt: f32) {
    let angle = track.inrun_angle();
    let accel = GRAVITY * angle.sin() * INRUN_FRICTION;
    state.velocity.z += accel * dt * angle.cos();
    state.velocity.y -= accel * dt * angle.sin() * 0.5;

    let speed = (state.velocity.y * state.velocity.y + state.velocity.z * state.velocity.z).sqrt();
    if speed > MAX_INRUN_SPEED {
        let scale = MAX_INRUN_SPEED / speed;
        state.velocity.y *= scale;
        state.velocity.z *= scale;
    }

    state.position.y += state.velocity.y * dt;
    state.position.z += state.velocity.z * dt;

    // Track constraint: no bounce, the rail height is exact
    state.position.y = track.height_at(state.position.z) + EYE_HEIGHT;
}

/// Leave the table: grade the timing from the distance to the edge, apply
/// the boost, and go airborne
fn initiate_jump(state: &mut GameState, track: &Track) {
    let from_edge = (state.position.z - track.takeoff_edge_z).abs();
    let (timing, message) = if from_edge < 1.0 {
        (0.0, "PERFECT!")
    } else if from_edge < 2.5 {
        (0.3, "GOOD!")
    } else {
        ((from_edge / 5.0).min(1.0), "LATE!")
    };

    state.takeoff_timing = timing;
    state.velocity.y += JUMP_BOOST * (1.0 - timing * 0.3);
    state.jump_start_z = state.position.z;
    state.phase = GamePhase::Flight;
    state.show_message(message, 1.0);
    log::debug!(
        "takeoff {:.2} m from edge, timing {:.2}, speed {:.1} km/h",
        from_edge,
        timing,
        mps_to_kmh(state.velocity.length())
    );
}

/// Ballistic flight with lift, drag, wind and lateral balance input
fn update_flight(state: &mut GameState, track: &Track, dt: f32) {
    const DRAG: f32 = 0.001;

    state.velocity.y -= GRAVITY * dt;

    // Lift grows with the square of airspeed; leaning forward flattens the
    // glide, leaning back stalls it
    let speed = state.velocity.length();
    let lift_coeff = 0.15 + state.lean_angle * 0.08;
    state.velocity.y += lift_coeff * speed * speed * 0.001 * dt * 60.0;

    state.velocity.x *= 1.0 - DRAG;
    state.velocity.z *= 1.0 - DRAG;
    state.velocity.y *= 1.0 - DRAG * 0.5;

    match state.wind_direction {
        WindDirection::Head => state.velocity.z -= state.wind_speed * 0.1 * dt,
        WindDirection::Tail => state.velocity.z += state.wind_speed * 0.1 * dt,
        WindDirection::CrossLeft | WindDirection::CrossRight => {}
    }

    state.velocity.x += state.balance_offset * dt * 2.0;

    state.position += state.velocity * dt;

    state.flight_form_quality = (1.0
        - state.balance_offset.abs() * 0.3
        - (state.lean_angle - 0.5).abs() * 0.2)
        .max(0.0);

    state.jump_distance = (state.position.z - state.jump_start_z) * DISTANCE_SCALE;

    if state.position.y <= track.height_at(state.position.z) + EYE_HEIGHT {
        land(state);
    }
}

/// Landing-quality tiers from vertical speed and lateral balance at contact
fn classify_landing(
    preparing: bool,
    vertical_speed: f32,
    balance: f32,
) -> (f32, &'static str) {
    if preparing && vertical_speed < 15.0 && balance < 0.3 {
        (1.0, "TELEMARK!")
    } else if vertical_speed < 20.0 && balance < 0.5 {
        (0.7, "Good Landing!")
    } else {
        (0.4, "Rough Landing")
    }
}

/// Ground contact: classify the landing, damp the impact, start the outrun
fn land(state: &mut GameState) {
    let vertical_speed = state.velocity.y.abs();
    let balance = state.balance_offset.abs();
    let (quality, message) = classify_landing(state.is_preparing_landing, vertical_speed, balance);

    state.landing_quality = quality;
    state.phase = GamePhase::Landed;
    state.show_message(message, 1.5);
    log::debug!(
        "landed at {:.1} m, vertical {:.1} m/s, quality {:.1}",
        state.jump_distance,
        vertical_speed,
        quality
    );

    state.velocity.y = 0.0;
    state.velocity.x *= 0.5;
    state.velocity.z *= 0.7;
}

/// Slide out on the landing hill until nearly stopped, then score
fn update_outrun(state: &mut GameState, track: &Track, dt: f32) {
    state.velocity.x *= OUTRUN_FRICTION;
    state.velocity.z *= OUTRUN_FRICTION;

    state.position.x += state.velocity.x * dt;
    state.position.z += state.velocity.z * dt;
    state.position.y = track.height_at(state.position.z) + EYE_HEIGHT;

    let speed = (state.velocity.x * state.velocity.x + state.velocity.z * state.velocity.z).sqrt();
    if speed < STOP_SPEED {
        score::calculate_score(state);
        state.phase = GamePhase::Finished;
        log::info!(
            "attempt finished: {:.1} m, {:.1} pts{}",
            state.jump_distance,
            state.total_score,
            state
                .medal
                .map(|m| format!(" ({})", m.as_str()))
                .unwrap_or_default()
        );
    }
}
