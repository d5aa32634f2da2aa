//! Core types shared by the value model, the fill renderer and the widget.

use embedded_graphics::geometry::Size;

/// Axis along which a bar fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Fills along the x axis.
    #[default]
    Horizontal,

    /// Fills along the y axis.
    Vertical,
}

impl Orientation {
    /// Returns the length of `size` along this axis.
    #[inline]
    pub fn span(self, size: Size) -> u32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Returns the default fill direction for this axis.
    #[inline]
    pub fn default_direction(self) -> FillDirection {
        match self {
            Orientation::Horizontal => FillDirection::LeftToRight,
            Orientation::Vertical => FillDirection::BottomUp,
        }
    }
}

/// Edge the fill starts from and the direction it grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FillDirection {
    /// Horizontal, grows from the left edge.
    #[default]
    LeftToRight,

    /// Horizontal, grows from the right edge.
    RightToLeft,

    /// Vertical, grows from the bottom edge.
    BottomUp,

    /// Vertical, grows from the top edge.
    TopDown,
}

impl FillDirection {
    /// Returns the axis this direction fills along.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            FillDirection::LeftToRight | FillDirection::RightToLeft => Orientation::Horizontal,
            FillDirection::BottomUp | FillDirection::TopDown => Orientation::Vertical,
        }
    }
}

impl From<Orientation> for FillDirection {
    fn from(orientation: Orientation) -> Self {
        orientation.default_direction()
    }
}

/// How a color scale picks colors between stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleMode {
    /// Discrete bands: the color of the last stop reached.
    #[default]
    Banded,

    /// Linear RGB interpolation between the two bracketing stops.
    Interpolated,
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum is not strictly less than maximum, or a bound is not finite.
    InvalidRange,

    /// Color scaling enabled without any stops.
    EmptyColorScale,

    /// Color scale capacity exceeded.
    CapacityExceeded,

    /// A stop threshold lies outside 0.0..=1.0.
    ThresholdOutOfRange,

    /// Stop thresholds decrease in insertion order.
    UnorderedStops,

    /// Width or height is zero.
    ZeroSize,

    /// Border and margin leave no room for the bar.
    EdgesTooLarge {
        /// Combined border and margin on both sides, in pixels.
        edges: u32,
        /// The smaller of width and height.
        available: u32,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidRange => {
                write!(f, "minimum must be finite and less than maximum")
            }
            ConfigError::EmptyColorScale => {
                write!(f, "color scale must have at least one stop")
            }
            ConfigError::CapacityExceeded => {
                write!(f, "color scale capacity exceeded")
            }
            ConfigError::ThresholdOutOfRange => {
                write!(f, "color stop threshold must be between 0.0 and 1.0")
            }
            ConfigError::UnorderedStops => {
                write!(f, "color stop thresholds must not decrease")
            }
            ConfigError::ZeroSize => {
                write!(f, "width and height must be greater than zero")
            }
            ConfigError::EdgesTooLarge { edges, available } => {
                write!(
                    f,
                    "border and margin ({} px) must be less than the widget's width and height ({} px)",
                    edges, available
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors from normalizing a value against its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FractionError {
    /// Minimum equals maximum.
    DivisionByZero,
}

impl core::fmt::Display for FractionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FractionError::DivisionByZero => write!(f, "range has zero width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_map_to_axes() {
        assert_eq!(FillDirection::LeftToRight.orientation(), Orientation::Horizontal);
        assert_eq!(FillDirection::RightToLeft.orientation(), Orientation::Horizontal);
        assert_eq!(FillDirection::BottomUp.orientation(), Orientation::Vertical);
        assert_eq!(FillDirection::TopDown.orientation(), Orientation::Vertical);
    }

    #[test]
    fn vertical_defaults_to_bottom_up() {
        assert_eq!(FillDirection::from(Orientation::Vertical), FillDirection::BottomUp);
        assert_eq!(FillDirection::from(Orientation::Horizontal), FillDirection::LeftToRight);
    }

    #[test]
    fn span_picks_axis() {
        let size = Size::new(200, 30);
        assert_eq!(Orientation::Horizontal.span(size), 200);
        assert_eq!(Orientation::Vertical.span(size), 30);
    }
}
