//! Vocal coordinates (the XY pad)
//!
//! X runs from masculine (-100) to feminine (+100), Y from low/deep (-100)
//! to high/soprano (+100). Values beyond +/-30 on either axis are strong
//! enough to name in the style prompt.

use serde::{Deserialize, Serialize};

pub const AXIS_MIN: f64 = -100.0;
pub const AXIS_MAX: f64 = 100.0;

/// Distance from center before an axis is described
pub const DESCRIBE_THRESHOLD: f64 = 30.0;

/// Position on the vocal pad
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct VocalCoordinates {
    pub x: f64,
    pub y: f64,
}

impl VocalCoordinates {
    /// Create coordinates, clamping both axes into range
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_axis(x),
            y: clamp_axis(y),
        }
    }

    /// Clamp a deserialized (possibly out of range) value
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y)
    }
}

/// NaN maps to center
fn clamp_axis(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(AXIS_MIN, AXIS_MAX)
    }
}

/// Describe the vocal position in words, e.g. "Female vocals, High pitch/Soprano"
pub fn vocal_descriptor(coords: VocalCoordinates) -> String {
    let mut desc = String::from(if coords.x < -DESCRIBE_THRESHOLD {
        "Male vocals"
    } else if coords.x > DESCRIBE_THRESHOLD {
        "Female vocals"
    } else {
        "Androgynous/Neutral vocals"
    });

    if coords.y < -DESCRIBE_THRESHOLD {
        desc.push_str(", Low pitch/Deep");
    } else if coords.y > DESCRIBE_THRESHOLD {
        desc.push_str(", High pitch/Soprano");
    }

    desc
}
