//! Immutable widget configuration.

use crate::colors::{self, BLACK, WHITE};
use crate::fill::FillRenderer;
use crate::scale::ColorScale;
use crate::types::{ConfigError, FillDirection, Orientation};
use crate::value::ValueRange;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use palette::Srgb;

/// Default bar color, solid green.
pub const DEFAULT_BAR_COLOR: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// How the filled part of the bar is colored.
#[derive(Debug, Clone)]
pub enum BarStyle<const N: usize> {
    /// One color regardless of progress.
    Solid(Srgb),

    /// Color picked from a scale by the current fraction.
    Scaled(ColorScale<N>),
}

impl<const N: usize> BarStyle<N> {
    /// Returns the bar color at `fraction`.
    #[inline]
    pub fn color_for(&self, fraction: f32) -> Srgb {
        match self {
            BarStyle::Solid(color) => *color,
            BarStyle::Scaled(scale) => scale.color_for(fraction),
        }
    }
}

/// Everything needed to build a [`ProgressBar`](crate::ProgressBar).
///
/// Assembled with consuming setters and validated once by
/// [`ProgressBar::new`](crate::ProgressBar::new). Nothing here changes after
/// the widget is built.
///
/// # Type Parameters
/// * `N` - Maximum number of color stops when using a [`ColorScale`]
/// * `R` - Fill placement, [`FillDirection`] unless a custom renderer is set
///
/// # Examples
/// ```
/// use embedded_graphics::prelude::*;
/// use embedded_progressbar::{FillDirection, ProgressBar, ProgressBarConfig};
///
/// let config = ProgressBarConfig::<0>::new(Point::new(10, 10), Size::new(20, 100))
///     .range(0.0, 1.0)
///     .direction(FillDirection::BottomUp);
/// let bar = ProgressBar::new(config).unwrap();
/// assert_eq!(bar.fill_size(), 96);
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBarConfig<const N: usize, R: FillRenderer = FillDirection> {
    pub(crate) position: Point,
    pub(crate) size: Size,
    pub(crate) range: Result<ValueRange, ConfigError>,
    pub(crate) value: f32,
    pub(crate) renderer: R,
    pub(crate) bar_style: BarStyle<N>,
    pub(crate) border_color: Option<Srgb>,
    pub(crate) background_color: Option<Srgb>,
    pub(crate) border_thickness: u32,
    pub(crate) margin_size: u32,
    pub(crate) mark_partial_progress: bool,
}

impl<const N: usize> ProgressBarConfig<N> {
    /// Creates a horizontal, left-to-right configuration with defaults:
    /// range 0..=100, value 0, green bar, white 1 px border, black
    /// background and a 1 px margin.
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            range: Ok(ValueRange::default()),
            value: 0.0,
            renderer: FillDirection::LeftToRight,
            bar_style: BarStyle::Solid(DEFAULT_BAR_COLOR),
            border_color: Some(WHITE),
            background_color: Some(BLACK),
            border_thickness: 1,
            margin_size: 1,
            mark_partial_progress: false,
        }
    }

    /// Sets the fill direction.
    pub fn direction(mut self, direction: FillDirection) -> Self {
        self.renderer = direction;
        self
    }

    /// Sets the fill axis using its default direction (vertical fills
    /// bottom-up).
    pub fn orientation(self, orientation: Orientation) -> Self {
        self.direction(orientation.default_direction())
    }
}

impl<const N: usize, R: FillRenderer> ProgressBarConfig<N, R> {
    /// Replaces the fill placement with a custom renderer.
    pub fn renderer<R2: FillRenderer>(self, renderer: R2) -> ProgressBarConfig<N, R2> {
        ProgressBarConfig {
            position: self.position,
            size: self.size,
            range: self.range,
            value: self.value,
            renderer,
            bar_style: self.bar_style,
            border_color: self.border_color,
            background_color: self.background_color,
            border_thickness: self.border_thickness,
            margin_size: self.margin_size,
            mark_partial_progress: self.mark_partial_progress,
        }
    }

    /// Sets the top-left corner.
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the outer size, border included.
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the value range. Validated when the widget is built.
    pub fn range(mut self, minimum: f32, maximum: f32) -> Self {
        self.range = ValueRange::new(minimum, maximum);
        self
    }

    /// Sets the initial value. Clamped into the range when the widget is built.
    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    /// Uses one bar color regardless of progress.
    pub fn bar_color(mut self, color: Srgb) -> Self {
        self.bar_style = BarStyle::Solid(color);
        self
    }

    /// Same as [`bar_color`](Self::bar_color) with a packed `0xRRGGBB` value.
    pub fn bar_hex(self, rgb: u32) -> Self {
        self.bar_color(colors::hex(rgb))
    }

    /// Picks the bar color from `scale` by the current fraction.
    pub fn color_scale(mut self, scale: ColorScale<N>) -> Self {
        self.bar_style = BarStyle::Scaled(scale);
        self
    }

    /// Sets the border color, `None` leaves the border undrawn.
    pub fn border_color(mut self, color: Option<Srgb>) -> Self {
        self.border_color = color;
        self
    }

    /// Sets the color of the unfilled area, `None` leaves it undrawn.
    ///
    /// With a transparent background a shrinking bar cannot erase itself;
    /// the host must repaint beneath the widget and call
    /// [`invalidate`](crate::ProgressBar::invalidate).
    pub fn background_color(mut self, color: Option<Srgb>) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the border thickness in pixels. Default is 1.
    pub fn border_thickness(mut self, thickness: u32) -> Self {
        self.border_thickness = thickness;
        self
    }

    /// Sets the gap between border and bar in pixels. Default is 1.
    pub fn margin_size(mut self, margin: u32) -> Self {
        self.margin_size = margin;
        self
    }

    /// When enabled, any value above the minimum shows at least one pixel
    /// and any value below the maximum leaves at least one pixel unfilled.
    pub fn mark_partial_progress(mut self, enabled: bool) -> Self {
        self.mark_partial_progress = enabled;
        self
    }

    /// Outer bounds, border included.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }

    /// Space reserved on each side for the border and margin.
    #[inline]
    pub fn edge_size(&self) -> u32 {
        self.border_thickness.saturating_add(self.margin_size)
    }

    /// Bar style in use.
    pub fn bar_style(&self) -> &BarStyle<N> {
        &self.bar_style
    }

    /// Border color, `None` when transparent.
    pub fn get_border_color(&self) -> Option<Srgb> {
        self.border_color
    }

    /// Background color, `None` when transparent.
    pub fn get_background_color(&self) -> Option<Srgb> {
        self.background_color
    }

    /// Border thickness in pixels.
    pub fn get_border_thickness(&self) -> u32 {
        self.border_thickness
    }

    /// Margin between border and bar in pixels.
    pub fn get_margin_size(&self) -> u32 {
        self.margin_size
    }

    /// Fill placement.
    pub fn get_renderer(&self) -> &R {
        &self.renderer
    }

    /// Checks geometry and range.
    ///
    /// # Errors
    /// * `InvalidRange` - the configured range is invalid
    /// * `ZeroSize` - width or height is zero
    /// * `EdgesTooLarge` - border and margin on both sides leave no room for the bar
    pub fn validate(&self) -> Result<ValueRange, ConfigError> {
        let range = self.range?;

        if self.size.width == 0 || self.size.height == 0 {
            return Err(ConfigError::ZeroSize);
        }

        let edges = self.edge_size().saturating_mul(2);
        let available = self.size.width.min(self.size.height);
        if edges >= available {
            return Err(ConfigError::EdgesTooLarge { edges, available });
        }

        Ok(range)
    }
}
