//! Generation parameters
//!
//! Pose is single-select; angles are a non-empty ordered multi-select. The
//! angle selection can never be emptied: toggling off the sole remaining
//! angle is a no-op.

use serde::{Deserialize, Serialize};

/// Body pose for a try-on generation (exactly one active)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pose {
    /// Standing straight
    Standing,
    /// Seated
    Sitting,
    /// Mid-stride walk
    Walking,
    /// Running
    Running,
    /// Editorial fashion pose
    FashionPose,
}

impl Pose {
    /// All poses in display order
    pub const ALL: [Pose; 5] = [
        Pose::Standing,
        Pose::Sitting,
        Pose::Walking,
        Pose::Running,
        Pose::FashionPose,
    ];

    /// Stable lowercase label, as used at the service boundary
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Pose::Standing => "standing",
            Pose::Sitting => "sitting",
            Pose::Walking => "walking",
            Pose::Running => "running",
            Pose::FashionPose => "fashion-pose",
        }
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera angle for a try-on generation (one or more active)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Angle {
    /// Straight-on front view
    Front,
    /// Side profile
    Side,
    /// From behind
    Back,
    /// 45-degree view
    ThreeQuarter,
}

impl Angle {
    /// All angles in display order
    pub const ALL: [Angle; 4] = [Angle::Front, Angle::Side, Angle::Back, Angle::ThreeQuarter];

    /// Stable lowercase label, as used at the service boundary
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Angle::Front => "front",
            Angle::Side => "side",
            Angle::Back => "back",
            Angle::ThreeQuarter => "three-quarter",
        }
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty ordered set of selected angles
///
/// Order is toggle order and is the order batch requests are issued in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleSelection {
    angles: Vec<Angle>,
}

impl AngleSelection {
    /// Start from a single selected angle
    #[must_use]
    pub fn single(angle: Angle) -> Self {
        Self {
            angles: vec![angle],
        }
    }

    /// Toggle an angle on or off
    ///
    /// Returns `false` when the toggle was refused because it would have
    /// emptied the selection.
    pub fn toggle(&mut self, angle: Angle) -> bool {
        if let Some(index) = self.angles.iter().position(|&a| a == angle) {
            if self.angles.len() == 1 {
                return false;
            }
            self.angles.remove(index);
        } else {
            self.angles.push(angle);
        }
        true
    }

    /// Whether an angle is currently selected
    #[must_use]
    pub fn contains(&self, angle: Angle) -> bool {
        self.angles.contains(&angle)
    }

    /// Selected angles in toggle order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Angle] {
        &self.angles
    }

    /// Number of selected angles (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false: the selection cannot be emptied
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for AngleSelection {
    fn default() -> Self {
        Self::single(Angle::Front)
    }
}
