//! Bounded arena extents on the warehouse ground plane.
//!
//! The core does not do collision detection — walls are reported by the
//! external collider as `Wall` collision events.  `Arena` exists for spawn
//! placement (scatter robots and boxes inside the floor rectangle) and for
//! cheap containment queries by observers.

use glam::Vec3;

use crate::{CoreError, CoreResult, SimRng};

/// An axis-aligned floor rectangle centred on the origin.
///
/// Extents are half-widths: a `20 × 20` warehouse is
/// `Arena::new(10.0, 10.0)`.  The vertical axis is unbounded — stacked cargo
/// may rise above any wall height.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    /// Half-extent along the X axis, metres.
    pub half_x: f32,
    /// Half-extent along the Z axis, metres.
    pub half_z: f32,
}

impl Arena {
    /// Create an arena with the given half-extents.
    ///
    /// Fails with [`CoreError::InvalidArena`] unless both extents are
    /// positive and finite.
    pub fn new(half_x: f32, half_z: f32) -> CoreResult<Self> {
        if !half_x.is_finite() || !half_z.is_finite() || half_x <= 0.0 || half_z <= 0.0 {
            return Err(CoreError::InvalidArena(half_x, half_z));
        }
        Ok(Self { half_x, half_z })
    }

    /// `true` if `point` lies inside the floor rectangle (Y is ignored).
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.x.abs() <= self.half_x && point.z.abs() <= self.half_z
    }

    /// A uniformly distributed floor point (`y = 0`) inside the arena.
    pub fn random_point(&self, rng: &mut SimRng) -> Vec3 {
        let x = rng.gen_range(-self.half_x..=self.half_x);
        let z = rng.gen_range(-self.half_z..=self.half_z);
        Vec3::new(x, 0.0, z)
    }
}

impl std::fmt::Display for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{} m", self.half_x * 2.0, self.half_z * 2.0)
    }
}
