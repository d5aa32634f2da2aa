use crate::types::{ConfigError, ScaleMode};
use heapless::Vec;
use palette::{Mix, Srgb};

/// A point on a color scale: the color shown from `threshold` upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Fraction (0.0-1.0) at which this color starts.
    pub threshold: f32,

    /// Color at and above the threshold.
    pub color: Srgb,
}

impl ColorStop {
    /// Creates a new color stop.
    #[inline]
    pub fn new(threshold: f32, color: Srgb) -> Self {
        Self { threshold, color }
    }
}

/// Maps a progress fraction to a bar color.
///
/// Stops are kept in insertion order with non-decreasing thresholds. In
/// [`ScaleMode::Banded`] the color of the last stop whose threshold has been
/// reached is used; in [`ScaleMode::Interpolated`] the color is blended
/// linearly in RGB between the two stops that bracket the fraction.
///
/// # Type Parameters
/// * `N` - Maximum number of stops this scale can hold
#[derive(Debug, Clone)]
pub struct ColorScale<const N: usize> {
    stops: Vec<ColorStop, N>,
    mode: ScaleMode,
}

impl<const N: usize> ColorScale<N> {
    /// Creates a new color scale builder.
    pub fn builder() -> ColorScaleBuilder<N> {
        ColorScaleBuilder::new()
    }

    /// Creates a scale that always yields `color`.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is zero
    pub fn solid(color: Srgb) -> Result<Self, ConfigError> {
        Self::builder().stop(0.0, color)?.build()
    }

    /// Returns the color for `fraction`.
    ///
    /// Fractions below the first threshold (and NaN) get the first stop's
    /// color; fractions past the last threshold get the last stop's color.
    pub fn color_for(&self, fraction: f32) -> Srgb {
        // Non-empty by construction.
        let first = self.stops[0];

        let Some(index) = self.stops.iter().rposition(|stop| stop.threshold <= fraction) else {
            return first.color;
        };
        let lower = self.stops[index];

        match (self.mode, self.stops.get(index + 1)) {
            (ScaleMode::Interpolated, Some(upper)) => {
                let width = upper.threshold - lower.threshold;
                if width <= 0.0 {
                    return lower.color;
                }
                let t = ((fraction - lower.threshold) / width).clamp(0.0, 1.0);
                lower.color.mix(upper.color, t)
            }
            _ => lower.color,
        }
    }

    /// Returns the number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns a reference to the stop at the given index.
    pub fn get_stop(&self, index: usize) -> Option<&ColorStop> {
        self.stops.get(index)
    }

    /// Returns the stops in insertion order.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns how colors between stops are chosen.
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }
}

/// Builder for constructing validated color scales.
#[derive(Debug)]
pub struct ColorScaleBuilder<const N: usize> {
    stops: Vec<ColorStop, N>,
    mode: ScaleMode,
}

impl<const N: usize> ColorScaleBuilder<N> {
    /// Creates a new empty builder using banded colors.
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            mode: ScaleMode::default(),
        }
    }

    /// Appends a stop.
    ///
    /// # Errors
    /// * `ThresholdOutOfRange` - `threshold` is NaN or outside 0.0..=1.0
    /// * `CapacityExceeded` - the scale already holds `N` stops
    pub fn stop(mut self, threshold: f32, color: Srgb) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange);
        }
        self.stops
            .push(ColorStop::new(threshold, color))
            .map_err(|_| ConfigError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets how colors between stops are chosen.
    ///
    /// Default is `ScaleMode::Banded`.
    pub fn mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Shorthand for `mode(ScaleMode::Interpolated)`.
    pub fn interpolated(self) -> Self {
        self.mode(ScaleMode::Interpolated)
    }

    /// Builds and validates the scale.
    ///
    /// # Errors
    /// * `EmptyColorScale` - No stops were added
    /// * `UnorderedStops` - A threshold is lower than the one before it
    pub fn build(self) -> Result<ColorScale<N>, ConfigError> {
        if self.stops.is_empty() {
            return Err(ConfigError::EmptyColorScale);
        }

        if self
            .stops
            .windows(2)
            .any(|pair| pair[1].threshold < pair[0].threshold)
        {
            return Err(ConfigError::UnorderedStops);
        }

        Ok(ColorScale {
            stops: self.stops,
            mode: self.mode,
        })
    }
}

impl<const N: usize> Default for ColorScaleBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
