//! Venue profiles
//!
//! Each hill is a fixed bundle of geometry and scoring parameters, selected
//! once at session start and never mutated. Angles are stored in degrees (as
//! certified hill data is published) and converted where the physics needs
//! radians.

use serde::{Deserialize, Serialize};

/// A ski-jumping venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Hill {
    /// Beginner friendly, K90
    NormalHill,
    /// Standard Olympic event, K120
    #[default]
    LargeHill,
    /// Extreme distances, K185
    SkiFlying,
}

/// Medal tier awarded from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "GOLD",
            Medal::Silver => "SILVER",
            Medal::Bronze => "BRONZE",
        }
    }
}

impl Hill {
    pub const ALL: [Hill; 3] = [Hill::NormalHill, Hill::LargeHill, Hill::SkiFlying];

    pub fn name(&self) -> &'static str {
        match self {
            Hill::NormalHill => "Normal Hill",
            Hill::LargeHill => "Large Hill",
            Hill::SkiFlying => "Ski Flying Hill",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Hill::NormalHill => "Beginner friendly - Perfect for learning",
            Hill::LargeHill => "Standard Olympic event",
            Hill::SkiFlying => "Extreme distances - For experts only",
        }
    }

    pub fn difficulty(&self) -> &'static str {
        match self {
            Hill::NormalHill => "BEGINNER",
            Hill::LargeHill => "INTERMEDIATE",
            Hill::SkiFlying => "EXPERT",
        }
    }

    /// K-point: reference distance the scoring is centered on (m)
    pub fn k_point(&self) -> f32 {
        match self {
            Hill::NormalHill => 90.0,
            Hill::LargeHill => 120.0,
            Hill::SkiFlying => 185.0,
        }
    }

    /// Hill size: maximum certified jumping distance (m)
    pub fn hill_size(&self) -> f32 {
        match self {
            Hill::NormalHill => 100.0,
            Hill::LargeHill => 140.0,
            Hill::SkiFlying => 225.0,
        }
    }

    /// Inrun (approach) length (m)
    pub fn inrun_length(&self) -> f32 {
        match self {
            Hill::NormalHill => 80.0,
            Hill::LargeHill => 100.0,
            Hill::SkiFlying => 130.0,
        }
    }

    /// Inrun slope (degrees)
    pub fn inrun_angle_deg(&self) -> f32 {
        match self {
            Hill::NormalHill | Hill::LargeHill => 35.0,
            Hill::SkiFlying => 37.0,
        }
    }

    /// Takeoff table slope (degrees)
    pub fn takeoff_angle_deg(&self) -> f32 {
        match self {
            Hill::NormalHill | Hill::LargeHill => 11.0,
            Hill::SkiFlying => 10.5,
        }
    }

    /// Landing hill slope (degrees)
    pub fn landing_angle_deg(&self) -> f32 {
        match self {
            Hill::NormalHill | Hill::LargeHill => 35.0,
            Hill::SkiFlying => 38.0,
        }
    }

    /// Starting gate height (m); larger gates mean more approach speed
    pub fn starting_gate_height(&self) -> f32 {
        match self {
            Hill::NormalHill => 2.5,
            Hill::LargeHill => 3.0,
            Hill::SkiFlying => 3.5,
        }
    }

    /// Distance points per meter beyond (or short of) the K-point
    pub fn points_per_meter(&self) -> f32 {
        match self {
            Hill::NormalHill => 2.0,
            Hill::LargeHill => 1.8,
            Hill::SkiFlying => 1.2,
        }
    }

    /// Base distance points awarded exactly at the K-point
    pub fn base_points(&self) -> f32 {
        60.0
    }

    /// Medal tier for a total score, if any
    pub fn medal(&self, total_score: f32) -> Option<Medal> {
        let (gold, silver, bronze) = match self {
            Hill::NormalHill => (130.0, 120.0, 110.0),
            Hill::LargeHill => (140.0, 130.0, 120.0),
            Hill::SkiFlying => (200.0, 180.0, 160.0),
        };
        if total_score >= gold {
            Some(Medal::Gold)
        } else if total_score >= silver {
            Some(Medal::Silver)
        } else if total_score >= bronze {
            Some(Medal::Bronze)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup() {
        assert_eq!(Hill::NormalHill.k_point(), 90.0);
        assert_eq!(Hill::NormalHill.points_per_meter(), 2.0);
        assert_eq!(Hill::LargeHill.k_point(), 120.0);
        assert_eq!(Hill::SkiFlying.hill_size(), 225.0);
        for hill in Hill::ALL {
            assert_eq!(hill.base_points(), 60.0);
            assert!(hill.hill_size() > hill.k_point());
        }
    }

    #[test]
    fn test_medal_tiers() {
        assert_eq!(Hill::NormalHill.medal(130.0), Some(Medal::Gold));
        assert_eq!(Hill::NormalHill.medal(125.0), Some(Medal::Silver));
        assert_eq!(Hill::NormalHill.medal(110.0), Some(Medal::Bronze));
        assert_eq!(Hill::NormalHill.medal(109.9), None);
        assert_eq!(Hill::SkiFlying.medal(199.0), Some(Medal::Silver));
    }
}
