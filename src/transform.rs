//! Rigid 2-D placement of the figure: rotation about a pivot plus translation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Rotates `point` counter-clockwise by `angle` radians about `pivot`.
///
/// Pure and total for all finite inputs. This is the standard 2-D rotation,
/// expressed with glam's complex-number convention (`from_angle` + `rotate`).
pub fn rotate_about(point: DVec2, pivot: DVec2, angle: f64) -> DVec2 {
    DVec2::from_angle(angle).rotate(point - pivot) + pivot
}

/// The figure's current rigid placement relative to its pivot.
///
/// Owned by the [`AnimationController`](crate::AnimationController); written
/// only by the active gesture's per-tick rule and reset to identity when that
/// gesture completes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Screen-space offset applied after rotation.
    pub translation: DVec2,

    /// Counter-clockwise rotation in radians about the figure's pivot.
    pub rotation: f64,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self {
            translation: DVec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl RigidTransform {
    /// Maps a rest-frame point to its placed position: rotate about `pivot`,
    /// then translate.
    ///
    /// Every drawable anchor passes through this single function, so rotation
    /// and translation compose identically across the whole figure.
    pub fn apply(&self, point: DVec2, pivot: DVec2) -> DVec2 {
        rotate_about(point, pivot, self.rotation) + self.translation
    }

    /// True when the transform leaves every point where it started.
    pub fn is_identity(&self) -> bool {
        self.translation == DVec2::ZERO && self.rotation == 0.0
    }
}
