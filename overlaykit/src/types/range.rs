use crate::error::RangeError;

/// A numeric range with `min < max`, as used by sliders and progress bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
}

impl ValueRange {
    pub fn new(min: f32, max: f32) -> Result<Self, RangeError> {
        // The span has to be finite as well as the bounds.
        if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
            return Err(RangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Position of `value` within the range, in `[0, 1]`.
    pub fn fraction(&self, value: f32) -> f32 {
        (self.clamp(value) - self.min) / self.span()
    }
}
