//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (wind and judge variation)
//! - No rendering or platform dependencies

pub mod score;
pub mod state;
pub mod tick;
pub mod track;

pub use score::{calculate_score, distance_points, trimmed_style_total, wind_compensation};
pub use state::{GamePhase, GameState, WindDirection};
pub use tick::{TickInput, tick};
pub use track::Track;
