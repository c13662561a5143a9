//! Customer mood.

use std::fmt;

/// A satisfaction score that can never leave `[0, 100]`.
///
/// Every mutation goes through a clamping method, so the bound holds no
/// matter how large a penalty or decay step is.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32", into = "f32"))]
pub struct Mood(f32);

impl Mood {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    /// A fully happy customer.
    pub const FULL: Mood = Mood(Self::MAX);

    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::FULL;
        }
        Mood(value.clamp(Self::MIN, Self::MAX))
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Subtract a fixed number of points.
    pub fn penalize(&mut self, points: f32) {
        *self = Mood::new(self.0 - points);
    }

    /// Subtract `rate_per_sec * dt`.
    pub fn decay(&mut self, rate_per_sec: f32, dt: f32) {
        self.penalize(rate_per_sec * dt);
    }

    pub fn band(self) -> MoodBand {
        MoodBand::of(self.0)
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f32> for Mood {
    /// Clamps, like [`Mood::new`].
    fn from(value: f32) -> Self {
        Mood::new(value)
    }
}

impl From<Mood> for f32 {
    fn from(mood: Mood) -> f32 {
        mood.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

/// Coarse mood bucket used by the stats table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoodBand {
    /// Above 70.
    Content,
    /// Above 40.
    Neutral,
    Upset,
}

impl MoodBand {
    pub fn of(value: f32) -> Self {
        if value > 70.0 {
            MoodBand::Content
        } else if value > 40.0 {
            MoodBand::Neutral
        } else {
            MoodBand::Upset
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodBand::Content => "content",
            MoodBand::Neutral => "neutral",
            MoodBand::Upset   => "upset",
        }
    }
}
