//! Piecewise-linear level curves.
//!
//! Content data describes per-level bonus growth as a handful of keyframes;
//! evaluation linearly interpolates between them and clamps at the ends.

/// A single keyframe of a [`LevelCurve`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub level: f32,
    pub value: f32,
}

/// Keyframed curve mapping a level to a bonus magnitude.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelCurve {
    points: Vec<CurvePoint>,
}

impl LevelCurve {
    /// Builds a curve from `(level, value)` pairs. Points are sorted by
    /// level; an empty curve evaluates to 0.
    pub fn from_points(points: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut points: Vec<CurvePoint> = points
            .into_iter()
            .map(|(level, value)| CurvePoint { level, value })
            .collect();
        points.sort_by(|a, b| a.level.total_cmp(&b.level));
        Self { points }
    }

    /// A curve that returns `value` at every level.
    pub fn constant(value: f32) -> Self {
        Self::from_points([(1.0, value)])
    }

    /// Evaluates the curve at `level`, clamping outside the keyframe range.
    pub fn evaluate(&self, level: f32) -> f32 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if level <= first.level {
            return first.value;
        }

        let last = self.points.last().expect("non-empty checked above");
        if level >= last.level {
            return last.value;
        }

        let upper = self
            .points
            .iter()
            .position(|p| p.level >= level)
            .expect("level is inside the keyframe range");
        let (a, b) = (self.points[upper - 1], self.points[upper]);

        let span = b.level - a.level;
        if span <= 0.0 {
            return b.value;
        }
        let t = (level - a.level) / span;
        a.value + (b.value - a.value) * t
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::constant(1.0)
    }
}
