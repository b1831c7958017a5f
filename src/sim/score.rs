//! Olympic-style scoring
//!
//! Distance points around the K-point, five judged style scores with the
//! lowest and highest discarded, and a wind compensation on the total.
//! Judge variation is the one non-deterministic-looking input; it comes
//! from the attempt's seeded RNG, so a fixed seed reproduces full scores.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::hill::Hill;

use super::state::{GameState, WindDirection};

/// Base style score before jump-quality bonuses
const BASE_STYLE: f32 = 15.0;

/// Points subtracted (headwind) or added (tailwind) per m/s of wind
const WIND_FACTOR: f32 = 1.5;

/// Distance component: base points at the K-point, linear beyond it,
/// floored at zero
pub fn distance_points(hill: Hill, jump_distance: f32) -> f32 {
    let from_k = jump_distance - hill.k_point();
    (hill.base_points() + from_k * hill.points_per_meter()).max(0.0)
}

/// Five judge scores from the jump-quality metrics, each clamped to [0, 20]
pub fn judge_scores(
    takeoff_timing: f32,
    flight_form: f32,
    landing_quality: f32,
    rng: &mut Pcg32,
) -> [f32; 5] {
    let base = BASE_STYLE
        + (1.0 - takeoff_timing.abs()) * 2.0
        + flight_form * 2.0
        + landing_quality * 2.0;
    std::array::from_fn(|_| {
        let variation = rng.random_range(-0.5..=0.5);
        (base + variation).clamp(0.0, 20.0)
    })
}

/// Trimmed judging: sum of the three middle scores
pub fn trimmed_style_total(scores: &[f32; 5]) -> f32 {
    let mut sorted = *scores;
    sorted.sort_by(f32::total_cmp);
    sorted[1..4].iter().sum()
}

/// Wind compensation on the total score. A headwind assists distance, so it
/// is penalized; a tailwind hurts distance, so it is compensated.
pub fn wind_compensation(direction: WindDirection, speed: f32) -> f32 {
    match direction {
        WindDirection::Head => -speed * WIND_FACTOR,
        WindDirection::Tail => speed * WIND_FACTOR,
        WindDirection::CrossLeft | WindDirection::CrossRight => 0.0,
    }
}

/// Populate all score fields from the finished attempt
pub fn calculate_score(state: &mut GameState) {
    state.distance_points = distance_points(state.hill, state.jump_distance);

    let timing = state.takeoff_timing;
    let form = state.flight_form_quality;
    let landing = state.landing_quality;
    state.style_scores = judge_scores(timing, form, landing, &mut state.rng);
    state.total_style_points = trimmed_style_total(&state.style_scores);

    state.wind_compensation = wind_compensation(state.wind_direction, state.wind_speed);
    state.total_score =
        state.distance_points + state.total_style_points + state.wind_compensation;
    state.medal = state.hill.medal(state.total_score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_distance_points_floor() {
        // Normal hill: K90, 2.0 points/m, 60 base
        assert_eq!(distance_points(Hill::NormalHill, 80.0), 40.0);
        assert_eq!(distance_points(Hill::NormalHill, 95.0), 70.0);
        // Far short of K the floor kicks in
        assert_eq!(distance_points(Hill::NormalHill, 30.0), 0.0);
    }

    #[test]
    fn test_trimmed_style_total() {
        let scores = [12.0, 15.0, 18.0, 19.0, 20.0];
        assert_eq!(trimmed_style_total(&scores), 52.0);
        // Order of the input must not matter
        let shuffled = [20.0, 12.0, 19.0, 15.0, 18.0];
        assert_eq!(trimmed_style_total(&shuffled), 52.0);
    }

    #[test]
    fn test_wind_compensation_sign() {
        assert_eq!(wind_compensation(WindDirection::Head, 2.0), -3.0);
        assert_eq!(wind_compensation(WindDirection::Tail, 2.0), 3.0);
        assert_eq!(wind_compensation(WindDirection::CrossLeft, 2.0), 0.0);
        assert_eq!(wind_compensation(WindDirection::CrossRight, 2.0), 0.0);
    }

    #[test]
    fn test_judge_scores_band() {
        // Perfect jump: base = 15 + 2 + 2 + 2 = 21, always clamps to 20
        let mut rng = Pcg32::seed_from_u64(3);
        let scores = judge_scores(0.0, 1.0, 1.0, &mut rng);
        for s in scores {
            assert_eq!(s, 20.0);
        }

        // Middling jump: variation is a +/-0.5 band around the base
        let base = 15.0 + (1.0 - 0.3) * 2.0 + 0.8 * 2.0 + 0.7 * 2.0;
        let scores = judge_scores(0.3, 0.8, 0.7, &mut rng);
        for s in scores {
            assert!(s >= base - 0.5 - 1e-4 && s <= base + 0.5 + 1e-4);
        }
    }

    #[test]
    fn test_calculate_score_composes() {
        let mut state = GameState::new(Hill::NormalHill, 11);
        state.jump_distance = 95.0;
        state.takeoff_timing = 0.0;
        state.flight_form_quality = 1.0;
        state.landing_quality = 1.0;
        state.wind_speed = 2.0;
        state.wind_direction = WindDirection::Head;

        calculate_score(&mut state);

        assert_eq!(state.distance_points, 70.0);
        assert_eq!(state.wind_compensation, -3.0);
        let expected = state.distance_points + state.total_style_points - 3.0;
        assert!((state.total_score - expected).abs() < 1e-4);
        // Trimmed total is bounded by three perfect judges
        assert!(state.total_style_points <= 60.0);
    }
}
