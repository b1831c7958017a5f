//! Hill surface geometry
//!
//! Pure piecewise height query over the downrange coordinate. The same
//! profile the renderer builds its meshes from, so the physics constraint
//! and the visible track never disagree.
//!
//! The downrange axis `z` has its origin at the base of the takeoff table:
//! negative on the inrun, positive past the table, with a short flat
//! transition zone before the landing slope begins.

use crate::consts::{LANDING_GAP, TABLE_LENGTH};
use crate::hill::Hill;

/// Precomputed track geometry for one venue
#[derive(Debug, Clone, Copy)]
pub struct Track {
    inrun_angle: f32,
    takeoff_angle: f32,
    landing_angle: f32,
    /// Downrange coordinate of the takeoff table edge
    pub takeoff_edge_z: f32,
    /// Downrange coordinate where the landing slope begins
    pub landing_start_z: f32,
}

impl Track {
    pub fn new(hill: Hill) -> Self {
        let inrun_angle = hill.inrun_angle_deg().to_radians();
        let takeoff_angle = hill.takeoff_angle_deg().to_radians();
        let landing_angle = hill.landing_angle_deg().to_radians();
        let takeoff_edge_z = TABLE_LENGTH * takeoff_angle.cos();
        Self {
            inrun_angle,
            takeoff_angle,
            landing_angle,
            takeoff_edge_z,
            landing_start_z: takeoff_edge_z + LANDING_GAP,
        }
    }

    /// Inrun slope in radians
    pub fn inrun_angle(&self) -> f32 {
        self.inrun_angle
    }

    /// Surface height at downrange coordinate `z`
    pub fn height_at(&self, z: f32) -> f32 {
        if z < 0.0 {
            // Climbing back up the inrun
            -z * self.inrun_angle.tan()
        } else if z < self.takeoff_edge_z {
            // On the takeoff table
            z * self.takeoff_angle.tan()
        } else if z < self.landing_start_z {
            // Flat transition zone between table edge and landing slope
            0.0
        } else {
            -(z - self.landing_start_z) * self.landing_angle.tan() - 5.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inrun_slope() {
        let track = Track::new(Hill::NormalHill);
        let tan = 35.0_f32.to_radians().tan();
        assert!((track.height_at(-10.0) - 10.0 * tan).abs() < 1e-4);
        assert_eq!(track.height_at(0.0), 0.0);
        // Height increases going back up the inrun
        assert!(track.height_at(-80.0) > track.height_at(-40.0));
    }

    #[test]
    fn test_takeoff_table() {
        let track = Track::new(Hill::LargeHill);
        let takeoff = 11.0_f32.to_radians();
        assert!((track.takeoff_edge_z - 8.0 * takeoff.cos()).abs() < 1e-5);
        let mid = track.takeoff_edge_z / 2.0;
        assert!((track.height_at(mid) - mid * takeoff.tan()).abs() < 1e-4);
    }

    #[test]
    fn test_flat_transition_zone() {
        let track = Track::new(Hill::SkiFlying);
        assert_eq!(track.height_at(track.takeoff_edge_z + 0.1), 0.0);
        assert_eq!(track.height_at(track.landing_start_z - 0.1), 0.0);
    }

    #[test]
    fn test_landing_slope() {
        let track = Track::new(Hill::NormalHill);
        let tan = 35.0_f32.to_radians().tan();
        let z = track.landing_start_z + 20.0;
        assert!((track.height_at(z) - (-20.0 * tan - 5.0)).abs() < 1e-4);
        // Strictly downhill past the landing start
        assert!(track.height_at(z + 50.0) < track.height_at(z));
    }
}
