//! Range-bounded progress value with clamping and normalization.

use crate::types::{ConfigError, FractionError};
use log::{debug, warn};

/// Inclusive bounds a progress value is held within.
///
/// Always satisfies `minimum < maximum` with both bounds finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValueRange {
    minimum: f32,
    maximum: f32,
}

impl ValueRange {
    /// Creates a validated range.
    ///
    /// # Errors
    /// * `InvalidRange` - `minimum >= maximum`, or a bound is NaN or infinite
    pub fn new(minimum: f32, maximum: f32) -> Result<Self, ConfigError> {
        if !minimum.is_finite() || !maximum.is_finite() || minimum >= maximum {
            return Err(ConfigError::InvalidRange);
        }
        Ok(Self { minimum, maximum })
    }

    /// Lower bound.
    #[inline]
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    /// Upper bound.
    #[inline]
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    /// Distance between the bounds.
    ///
    /// Saturates to infinity for ranges wider than `f32::MAX`; normalization
    /// works on the exact `f64` width instead.
    #[inline]
    pub fn span(&self) -> f32 {
        self.maximum - self.minimum
    }

    #[inline]
    fn wide_span(&self) -> f64 {
        self.maximum as f64 - self.minimum as f64
    }

    /// Maps a 0.0..=1.0 fraction back to a value in the range.
    ///
    /// Fractions outside 0.0..=1.0 map outside the range; callers clamp.
    pub fn value_at(&self, fraction: f32) -> f32 {
        (self.minimum as f64 + self.wide_span() * fraction as f64) as f32
    }

    /// Clamps `value` into the range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.minimum, self.maximum)
    }

    /// Returns true if `value` lies within the bounds.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    /// Normalizes `value` to 0.0..=1.0 relative to the range.
    ///
    /// # Errors
    /// * `DivisionByZero` - the bounds are equal
    pub fn fraction_of(&self, value: f32) -> Result<f32, FractionError> {
        let span = self.wide_span();
        if span == 0.0 {
            return Err(FractionError::DivisionByZero);
        }
        // f64 keeps both the width and the offset finite for any finite bounds.
        let fraction = (value as f64 - self.minimum as f64) / span;
        Ok(fraction.clamp(0.0, 1.0) as f32)
    }
}

impl Default for ValueRange {
    /// The 0..=100 range.
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
        }
    }
}

/// The current value of a progress bar together with its range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgressValue {
    range: ValueRange,
    value: f32,
}

impl ProgressValue {
    /// Creates a value, clamping `initial` into `range`.
    ///
    /// A NaN `initial` starts at the range minimum.
    pub fn new(range: ValueRange, initial: f32) -> Self {
        let value = if initial.is_nan() {
            range.minimum()
        } else {
            range.clamp(initial)
        };
        Self { range, value }
    }

    /// Sets the value, clamping it into the range.
    ///
    /// Returns `true` if clamping changed the value, i.e. `value` was outside
    /// the range. NaN is ignored and returns `false`.
    pub fn set_value(&mut self, value: f32) -> bool {
        if value.is_nan() {
            warn!("ignoring NaN progress value");
            return false;
        }

        let clamped = self.range.clamp(value);
        self.value = clamped;

        let was_clamped = clamped != value;
        if was_clamped {
            debug!(
                "value {} clamped to {} (range {}..={})",
                value,
                clamped,
                self.range.minimum(),
                self.range.maximum()
            );
        }
        was_clamped
    }

    /// Sets the value from a percentage of the range.
    ///
    /// `0.0` maps to the minimum and `100.0` to the maximum; percentages
    /// outside 0..=100 are clamped like any other value.
    pub fn set_progress(&mut self, percent: f32) -> bool {
        self.set_value(self.range.value_at(percent / 100.0))
    }

    /// Returns the value normalized to 0.0..=1.0.
    ///
    /// # Errors
    /// * `DivisionByZero` - the range has zero width
    #[inline]
    pub fn fraction(&self) -> Result<f32, FractionError> {
        self.range.fraction_of(self.value)
    }

    /// Returns the value as a percentage of the range.
    pub fn progress(&self) -> f32 {
        self.fraction().unwrap_or(0.0) * 100.0
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Range lower bound.
    #[inline]
    pub fn minimum(&self) -> f32 {
        self.range.minimum()
    }

    /// Range upper bound.
    #[inline]
    pub fn maximum(&self) -> f32 {
        self.range.maximum()
    }

    /// The value's range.
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.range
    }
}
