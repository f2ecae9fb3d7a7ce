//! Array orientation model
//!
//! An orientation is the pair of per-axis angles the array points at.
//! The hill-climbing search walks between orientations along the four
//! axis-aligned neighbor offsets.

use core::fmt;

/// Where the array points: one integer angle per axis, in degrees
///
/// X is the circular azimuth axis, Y the bounded elevation axis.
/// Equality and hashing are structural. Orientations are created fresh
/// and never mutated in place; angles may lie outside an axis's natural
/// range, in which case the axis controller projects them in when
/// moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Orientation {
    /// X axis (azimuth) angle in degrees
    pub angle_x_deg: i32,
    /// Y axis (elevation) angle in degrees
    pub angle_y_deg: i32,
}

impl Orientation {
    /// Create an orientation from per-axis angles in degrees
    pub const fn new(angle_x_deg: i32, angle_y_deg: i32) -> Self {
        Self {
            angle_x_deg,
            angle_y_deg,
        }
    }

    /// The four axis-aligned neighbors at `step_deg` distance
    ///
    /// Order is fixed: +X, +Y, -X, -Y. No deduplication and no bounds
    /// clamping happen at this layer.
    pub fn neighbors(self, step_deg: i32) -> [Orientation; 4] {
        [
            Orientation::new(self.angle_x_deg + step_deg, self.angle_y_deg),
            Orientation::new(self.angle_x_deg, self.angle_y_deg + step_deg),
            Orientation::new(self.angle_x_deg - step_deg, self.angle_y_deg),
            Orientation::new(self.angle_x_deg, self.angle_y_deg - step_deg),
        ]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{}°, Y:{}°", self.angle_x_deg, self.angle_y_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use proptest::prelude::*;

    #[test]
    fn test_neighbor_order_and_offsets() {
        let base = Orientation::new(10, 5);
        assert_eq!(
            base.neighbors(15),
            [
                Orientation::new(25, 5),
                Orientation::new(10, 20),
                Orientation::new(-5, 5),
                Orientation::new(10, -10),
            ]
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Orientation::new(180, -45), Orientation::new(180, -45));
        assert_ne!(Orientation::new(180, -45), Orientation::new(180, 45));
        assert_ne!(Orientation::new(180, -45), Orientation::new(-45, 180));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Orientation::new(100, 20).to_string(), "X:100°, Y:20°");
        assert_eq!(Orientation::new(-5, 0).to_string(), "X:-5°, Y:0°");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_neighbors_shift_exactly_one_axis(
            x in -10_000..=10_000i32,
            y in -10_000..=10_000i32,
            s in 1..=360i32,
        ) {
            let base = Orientation::new(x, y);
            assert_eq!(
                base.neighbors(s),
                [
                    Orientation::new(x + s, y),
                    Orientation::new(x, y + s),
                    Orientation::new(x - s, y),
                    Orientation::new(x, y - s),
                ]
            );
        }
    }
}
