//! Telemark - a first-person ski jumping simulation core
//!
//! Core modules:
//! - `hill`: static venue profiles (geometry and scoring parameters)
//! - `sim`: deterministic simulation (physics, phase machine, scoring)
//! - `input`: logical action set bridging host key events to the tick

pub mod hill;
pub mod input;
pub mod sim;

pub use hill::{Hill, Medal};
pub use input::{Action, Command, InputMapper};
pub use sim::{GamePhase, GameState, TickInput, WindDirection, tick};

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f32 = 9.81;

    /// Skier eye height above the track surface (m). The camera and all
    /// track-following snaps ride the rail at exactly this offset.
    pub const EYE_HEIGHT: f32 = 1.5;

    /// Takeoff table length (m), fixed for every venue
    pub const TABLE_LENGTH: f32 = 8.0;

    /// Flat transition zone between table edge and landing-hill start (m)
    pub const LANDING_GAP: f32 = 5.0;

    /// Inrun friction factor applied to the downslope acceleration
    pub const INRUN_FRICTION: f32 = 0.95;

    /// Speed cap on the inrun (m/s)
    pub const MAX_INRUN_SPEED: f32 = 30.0;

    /// Upward velocity boost at a perfectly timed takeoff (m/s)
    pub const JUMP_BOOST: f32 = 8.0;

    /// Measured-distance scale factor applied to downrange travel
    pub const DISTANCE_SCALE: f32 = 1.2;

    /// Maximum wind speed drawn per attempt (m/s)
    pub const MAX_WIND_SPEED: f32 = 3.5;

    /// Lean/balance ramp rate while a control key is held (units/s)
    pub const CONTROL_RATE: f32 = 2.0;

    /// Per-tick decay factor toward neutral when no control key is held
    pub const CONTROL_DECAY: f32 = 0.95;

    /// Per-tick horizontal velocity decay while sliding out after landing
    pub const OUTRUN_FRICTION: f32 = 0.98;

    /// Horizontal speed below which the attempt is finished (m/s)
    pub const STOP_SPEED: f32 = 1.0;
}

/// Convert meters/second to km/h for display
#[inline]
pub fn mps_to_kmh(v: f32) -> f32 {
    v * 3.6
}
