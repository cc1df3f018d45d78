//! Data-Oriented Cuboid
//!
//! Pure functions over axis-aligned boxes in block-local coordinates.
//! Pile collision boxes are normalized: every coordinate lies in 0..=1.

use serde::{Deserialize, Serialize};

/// Axis-aligned box - pure data structure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Cuboidf {
    pub x1: f32,
    pub y1: f32,
    pub z1: f32,
    pub x2: f32,
    pub y2: f32,
    pub z2: f32,
}

impl Cuboidf {
    /// Build a box from its min corner and max corner
    pub const fn new(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> Self {
        Self {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        }
    }
}

impl Default for Cuboidf {
    /// Full block
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0)
    }
}

/// Height of the box
/// Pure function - extent along the vertical axis
pub fn cuboid_height(cuboid: &Cuboidf) -> f32 {
    cuboid.y2 - cuboid.y1
}

/// Test if the box fits inside one block and is not inverted
/// Pure function - checks every coordinate against 0..=1 and min <= max
pub fn cuboid_is_normalized(cuboid: &Cuboidf) -> bool {
    let in_unit = |v: f32| (0.0..=1.0).contains(&v);
    [cuboid.x1, cuboid.y1, cuboid.z1, cuboid.x2, cuboid.y2, cuboid.z2]
        .into_iter()
        .all(in_unit)
        && cuboid.x1 <= cuboid.x2
        && cuboid.y1 <= cuboid.y2
        && cuboid.z1 <= cuboid.z2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height() {
        let flat = Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.0625, 1.0);
        assert_eq!(cuboid_height(&flat), 0.0625);
    }

    #[test]
    fn test_normalized() {
        assert!(cuboid_is_normalized(&Cuboidf::default()));
        assert!(cuboid_is_normalized(&Cuboidf::new(
            0.2941, 0.0, 0.2941, 0.75, 0.125, 0.75
        )));
        assert!(!cuboid_is_normalized(&Cuboidf::new(0.0, 0.0, 0.0, 1.5, 0.1, 1.0)));
        assert!(!cuboid_is_normalized(&Cuboidf::new(0.8, 0.0, 0.0, 0.2, 0.1, 1.0)));
        assert!(!cuboid_is_normalized(&Cuboidf::new(
            0.0,
            0.0,
            0.0,
            1.0,
            f32::NAN,
            1.0
        )));
    }

    #[test]
    fn test_serializes_pascal_case() {
        let json = serde_json::to_value(Cuboidf::new(0.0, 0.0, 0.0, 1.0, 0.125, 1.0))
            .expect("serialize in test");
        assert_eq!(json["Y2"], serde_json::json!(0.125));
        assert_eq!(json["X2"], serde_json::json!(1.0));
    }
}
