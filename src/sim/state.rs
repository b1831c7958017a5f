//! Competition state for a single attempt
//!
//! Everything the tick mutates and the renderer/HUD reads lives here. The
//! state is exclusively owned by the tick driver; external layers take
//! read-only snapshots between ticks.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::{EYE_HEIGHT, MAX_WIND_SPEED, SIM_DT};
use crate::hill::{Hill, Medal};

use super::track::Track;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// At the gate, waiting for the start command
    Ready,
    /// Riding the inrun track down to the takeoff table
    Inrun,
    /// Airborne between takeoff and ground contact
    Flight,
    /// On the landing slope, decelerating
    Landed,
    /// Attempt complete, score published
    Finished,
}

/// Wind direction, drawn once per attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WindDirection {
    Head,
    Tail,
    CrossLeft,
    CrossRight,
}

impl WindDirection {
    /// HUD label, arrow-first like a stadium wind board
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::Head => "↑ Head",
            WindDirection::Tail => "↓ Tail",
            WindDirection::CrossLeft => "← Cross",
            WindDirection::CrossRight => "→ Cross",
        }
    }
}

/// Complete state of one attempt (deterministic for a fixed seed)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Attempt seed for reproducibility
    pub seed: u64,
    /// Seeded RNG: wind at reset, judge variation at scoring
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Venue in play
    pub hill: Hill,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Skier position (x lateral, y up, z downrange; meters)
    pub position: Vec3,
    /// Skier velocity (m/s)
    pub velocity: Vec3,
    /// Forward/backward lean, -1..1
    pub lean_angle: f32,
    /// Left/right balance, -1..1
    pub balance_offset: f32,
    /// Telemark preparation flag, set during flight
    pub is_preparing_landing: bool,
    /// Wind speed (m/s)
    pub wind_speed: f32,
    /// Wind direction for this attempt
    pub wind_direction: WindDirection,
    /// Takeoff timing, -1..1 with 0 perfect
    pub takeoff_timing: f32,
    /// Flight form quality, 0..1, recomputed every flight tick
    pub flight_form_quality: f32,
    /// Landing quality tier, 0..1, classified at ground contact
    pub landing_quality: f32,
    /// Downrange coordinate where the jump started
    pub jump_start_z: f32,
    /// Measured jump distance (m), published continuously during flight
    pub jump_distance: f32,
    /// Display speed (km/h)
    pub current_speed: f32,
    /// Distance component of the score
    pub distance_points: f32,
    /// Individual judge scores (max 20 each)
    pub style_scores: [f32; 5],
    /// Sum of the three middle judge scores
    pub total_style_points: f32,
    /// Wind compensation applied to the total
    pub wind_compensation: f32,
    /// Final score
    pub total_score: f32,
    /// Medal tier, if the score reaches one
    pub medal: Option<Medal>,
    /// Transient HUD message
    pub message: Option<String>,
    /// Tick at which the current message expires
    message_expires: u64,
}

impl GameState {
    /// Create the state for a fresh attempt on the given hill
    pub fn new(hill: Hill, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            hill,
            phase: GamePhase::Ready,
            time_ticks: 0,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            lean_angle: 0.0,
            balance_offset: 0.0,
            is_preparing_landing: false,
            wind_speed: 0.0,
            wind_direction: WindDirection::CrossRight,
            takeoff_timing: 0.0,
            flight_form_quality: 1.0,
            landing_quality: 1.0,
            jump_start_z: 0.0,
            jump_distance: 0.0,
            current_speed: 0.0,
            distance_points: 0.0,
            style_scores: [0.0; 5],
            total_style_points: 0.0,
            wind_compensation: 0.0,
            total_score: 0.0,
            medal: None,
            message: None,
            message_expires: 0,
        };
        state.generate_wind();
        state.place_at_gate();
        state
    }

    /// Re-initialize for the next attempt. The RNG stream continues, so a
    /// run of attempts is still reproducible from the original seed.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Ready;
        self.velocity = Vec3::ZERO;
        self.lean_angle = 0.0;
        self.balance_offset = 0.0;
        self.is_preparing_landing = false;
        self.takeoff_timing = 0.0;
        self.flight_form_quality = 1.0;
        self.landing_quality = 1.0;
        self.jump_start_z = 0.0;
        self.jump_distance = 0.0;
        self.current_speed = 0.0;
        self.distance_points = 0.0;
        self.style_scores = [0.0; 5];
        self.total_style_points = 0.0;
        self.wind_compensation = 0.0;
        self.total_score = 0.0;
        self.medal = None;
        self.message = None;
        self.message_expires = 0;
        self.generate_wind();
        self.place_at_gate();
    }

    /// Draw wind conditions for this attempt
    fn generate_wind(&mut self) {
        self.wind_speed = self.rng.random_range(0.0..=MAX_WIND_SPEED);
        self.wind_direction = match self.rng.random_range(0..4u8) {
            0 => WindDirection::Head,
            1 => WindDirection::Tail,
            2 => WindDirection::CrossLeft,
            _ => WindDirection::CrossRight,
        };
    }

    /// Put the skier at the top of the inrun, at rest
    pub(crate) fn place_at_gate(&mut self) {
        let track = Track::new(self.hill);
        let inrun_angle = track.inrun_angle();
        let start_height = self.hill.inrun_length() * inrun_angle.sin();
        let start_z = -self.hill.inrun_length() * inrun_angle.cos();
        self.position = Vec3::new(0.0, start_height + EYE_HEIGHT, start_z - 5.0);
        self.velocity = Vec3::ZERO;
    }

    /// Post a transient HUD message that auto-clears after `duration_secs`
    pub fn show_message(&mut self, text: &str, duration_secs: f32) {
        self.message = Some(text.to_string());
        self.message_expires = self.time_ticks + (duration_secs / SIM_DT) as u64;
    }

    /// Clear the message once its expiry tick has passed. Posting a new
    /// message resets the expiry, so only a stale message ever clears.
    pub(crate) fn expire_message(&mut self) {
        if self.message.is_some() && self.time_ticks >= self.message_expires {
            self.message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_gate() {
        let state = GameState::new(Hill::NormalHill, 7);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.velocity, Vec3::ZERO);
        let angle = 35.0_f32.to_radians();
        assert!((state.position.y - (80.0 * angle.sin() + 1.5)).abs() < 1e-3);
        assert!((state.position.z - (-80.0 * angle.cos() - 5.0)).abs() < 1e-3);
        assert!(state.wind_speed >= 0.0 && state.wind_speed <= MAX_WIND_SPEED);
    }

    #[test]
    fn test_wind_reproducible_per_seed() {
        let a = GameState::new(Hill::LargeHill, 42);
        let b = GameState::new(Hill::LargeHill, 42);
        assert_eq!(a.wind_speed, b.wind_speed);
        assert_eq!(a.wind_direction, b.wind_direction);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = GameState::new(Hill::NormalHill, 1);
        state.show_message("GO!", 1.0);
        assert_eq!(state.message.as_deref(), Some("GO!"));

        state.time_ticks += 59;
        state.expire_message();
        assert!(state.message.is_some());

        state.time_ticks += 1;
        state.expire_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_message_repost_refreshes_expiry() {
        let mut state = GameState::new(Hill::NormalHill, 1);
        state.show_message("GO!", 1.0);
        state.time_ticks += 50;
        state.show_message("PERFECT!", 1.0);
        state.time_ticks += 30;
        state.expire_message();
        assert_eq!(state.message.as_deref(), Some("PERFECT!"));
    }

    #[test]
    fn test_reset_clears_scores() {
        let mut state = GameState::new(Hill::LargeHill, 5);
        state.total_score = 123.0;
        state.jump_distance = 115.0;
        state.phase = GamePhase::Finished;
        state.reset();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.total_score, 0.0);
        assert_eq!(state.jump_distance, 0.0);
        assert!(state.medal.is_none());
    }
}
