//! Progress bar widget with deferred, incremental rendering.
//!
//! Provides [`ProgressBar`], which owns the progress value and configuration
//! of one bar. Host input goes through [`ProgressBar::update`] and only marks
//! the widget dirty; all drawing happens in [`ProgressBar::render`], so input
//! rate and refresh rate stay decoupled.

use crate::colors;
use crate::command::BarAction;
use crate::config::ProgressBarConfig;
use crate::fill::{FillRenderer, offset};
use crate::input::ValueSource;
use crate::types::{ConfigError, FillDirection};
use crate::value::{ProgressValue, ValueRange};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use log::{debug, trace};
use palette::Srgb;

/// What the last successful render left on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DrawnBar {
    extent: u32,
    color: Rgb888,
}

/// A horizontal or vertical progress bar.
///
/// The bar is made of an optional border drawn inside its bounds, an optional
/// background, and the filled segment whose length follows the current value.
/// After the first full draw only the part of the bar that changed is
/// repainted.
///
/// # Type Parameters
/// * `N` - Maximum number of color stops in the bar's color scale
/// * `R` - Fill placement, [`FillDirection`] by default
///
/// # Examples
/// ```
/// use embedded_graphics::mock_display::MockDisplay;
/// use embedded_graphics::pixelcolor::Rgb888;
/// use embedded_graphics::prelude::*;
/// use embedded_progressbar::{ProgressBar, ProgressBarConfig};
///
/// let config = ProgressBarConfig::<0>::new(Point::zero(), Size::new(40, 10)).value(25.0);
/// let mut bar = ProgressBar::new(config).unwrap();
///
/// let mut display = MockDisplay::<Rgb888>::new();
/// display.set_allow_overdraw(true);
/// assert!(bar.render(&mut display).unwrap());
/// assert!(!bar.render(&mut display).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar<const N: usize, R: FillRenderer = FillDirection> {
    config: ProgressBarConfig<N, R>,
    value: ProgressValue,
    dirty: bool,
    drawn: Option<DrawnBar>,
}

impl<const N: usize, R: FillRenderer> ProgressBar<N, R> {
    /// Builds a widget from a configuration.
    ///
    /// The initial value is clamped into the range. The widget starts dirty
    /// so the first [`render`](Self::render) draws it completely.
    ///
    /// # Errors
    /// * `InvalidRange` - minimum is not less than maximum
    /// * `ZeroSize` - width or height is zero
    /// * `EdgesTooLarge` - border and margin leave no room for the bar
    pub fn new(config: ProgressBarConfig<N, R>) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        let value = ProgressValue::new(range, config.value);

        Ok(Self {
            config,
            value,
            dirty: true,
            drawn: None,
        })
    }

    /// Sets a new value and marks the widget dirty.
    ///
    /// Out-of-range values are clamped. Returns `true` if clamping occurred.
    /// The surface is not touched until the next [`render`](Self::render).
    pub fn update(&mut self, value: f32) -> bool {
        let clamped = self.value.set_value(value);
        self.dirty = true;
        clamped
    }

    /// Sets the value from a percentage (0-100) of the range.
    ///
    /// Returns `true` if clamping occurred.
    pub fn set_progress(&mut self, percent: f32) -> bool {
        let clamped = self.value.set_progress(percent);
        self.dirty = true;
        clamped
    }

    /// Dispatches a control action.
    ///
    /// Returns `true` if the action's value was clamped.
    pub fn handle_action(&mut self, action: BarAction) -> bool {
        match action {
            BarAction::Update(value) => self.update(value),
            BarAction::SetProgress(percent) => self.set_progress(percent),
            BarAction::Invalidate => {
                self.invalidate();
                false
            }
        }
    }

    /// Reads one value from `source` and applies it with [`update`](Self::update).
    ///
    /// Returns `None` if the source had no reading, otherwise whether the
    /// reading was clamped.
    pub fn poll<S: ValueSource>(&mut self, source: &mut S) -> Option<bool> {
        source.read_value().map(|value| self.update(value))
    }

    /// Forces the next render to redraw border, background and bar.
    ///
    /// Use after the host has painted over the widget's area.
    pub fn invalidate(&mut self) {
        self.drawn = None;
        self.dirty = true;
    }

    /// Draws pending changes to `target`.
    ///
    /// Returns `Ok(false)` without drawing anything if nothing changed since
    /// the last render. Otherwise recomputes fraction, extent and color,
    /// draws, clears the dirty flag and returns `Ok(true)`.
    ///
    /// # Errors
    /// Propagates the surface's drawing error. The widget stays dirty and
    /// the next render redraws it completely.
    pub fn render<D>(&mut self, target: &mut D) -> Result<bool, D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        if !self.dirty {
            return Ok(false);
        }

        let extent = self.extent();
        let color = colors::to_rgb888(self.bar_color());
        trace!(
            "rendering progress bar at {:?}: value {}, extent {}/{}, color {:?}",
            self.config.position,
            self.value.value(),
            extent,
            self.fill_size(),
            color
        );

        let result = match self.drawn {
            None => self.draw_full(target, extent, color),
            Some(previous) => self.draw_changes(target, previous, extent, color),
        };
        if let Err(err) = result {
            self.drawn = None;
            return Err(err);
        }

        self.drawn = Some(DrawnBar { extent, color });
        self.dirty = false;
        Ok(true)
    }

    fn draw_full<D>(&self, target: &mut D, extent: u32, color: Rgb888) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        debug!("full redraw of progress bar at {:?}", self.config.position);
        let bounds = self.bounds();
        let border = self.config.border_thickness;

        if let Some(border_color) = self.config.border_color
            && border > 0
        {
            let style = PrimitiveStyleBuilder::new()
                .stroke_color(colors::to_pixel::<D::Color>(border_color))
                .stroke_width(border)
                .stroke_alignment(StrokeAlignment::Inside)
                .build();
            bounds.into_styled(style).draw(target)?;
        }

        if let Some(background) = self.config.background_color {
            let area = shrink(bounds, border);
            fill(target, &area, colors::to_rgb888(background))?;
        }

        let bar = self.config.renderer.bar_area(self.inner_area(), extent);
        fill(target, &bar, color)
    }

    fn draw_changes<D>(
        &self,
        target: &mut D,
        previous: DrawnBar,
        extent: u32,
        color: Rgb888,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let inner = self.inner_area();
        let renderer = &self.config.renderer;

        if color != previous.color {
            fill(target, &renderer.bar_area(inner, extent), color)?;
        } else if extent > previous.extent {
            fill(target, &renderer.segment(inner, previous.extent, extent), color)?;
        }

        if extent < previous.extent {
            let vacated = renderer.segment(inner, extent, previous.extent);
            match self.config.background_color {
                Some(background) => fill(target, &vacated, colors::to_rgb888(background))?,
                None => trace!("transparent background, leaving {:?} as drawn", vacated),
            }
        }
        Ok(())
    }

    /// Returns true if the next render will draw.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value.value()
    }

    /// Range lower bound.
    #[inline]
    pub fn minimum(&self) -> f32 {
        self.value.minimum()
    }

    /// Range upper bound.
    #[inline]
    pub fn maximum(&self) -> f32 {
        self.value.maximum()
    }

    /// The value's range.
    #[inline]
    pub fn range(&self) -> ValueRange {
        self.value.range()
    }

    /// Current value normalized to 0.0..=1.0.
    #[inline]
    pub fn fraction(&self) -> f32 {
        // Construction guarantees a non-empty range.
        self.value.fraction().unwrap_or(0.0)
    }

    /// Current value as a percentage of the range.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.value.progress()
    }

    /// Bar color for the current value.
    pub fn bar_color(&self) -> Srgb {
        self.config.bar_style.color_for(self.fraction())
    }

    /// Filled pixels along the fill axis for the current value.
    pub fn extent(&self) -> u32 {
        let span = self.fill_size();
        let mut extent = self.config.renderer.extent(self.fraction(), self.inner_area().size);

        if self.config.mark_partial_progress && span > 0 {
            let value = self.value.value();
            if extent == 0 && value > self.value.minimum() {
                extent = 1;
            }
            if extent == span && value < self.value.maximum() {
                extent -= 1;
            }
        }
        extent
    }

    /// Pixels available to the fill along its axis.
    #[inline]
    pub fn fill_size(&self) -> u32 {
        self.config.renderer.orientation().span(self.inner_area().size)
    }

    /// Outer bounds, border included.
    #[inline]
    pub fn bounds(&self) -> Rectangle {
        self.config.bounds()
    }

    /// Area inside border and margin that the bar fills.
    #[inline]
    pub fn inner_area(&self) -> Rectangle {
        shrink(self.bounds(), self.config.edge_size())
    }

    /// The configuration the widget was built from.
    #[inline]
    pub fn config(&self) -> &ProgressBarConfig<N, R> {
        &self.config
    }
}

/// Shrinks `area` by `amount` pixels on every side.
fn shrink(area: Rectangle, amount: u32) -> Rectangle {
    Rectangle::new(
        Point::new(
            offset(area.top_left.x, amount),
            offset(area.top_left.y, amount),
        ),
        Size::new(
            area.size.width.saturating_sub(amount.saturating_mul(2)),
            area.size.height.saturating_sub(amount.saturating_mul(2)),
        ),
    )
}

fn fill<D>(target: &mut D, area: &Rectangle, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    if area.size.width == 0 || area.size.height == 0 {
        return Ok(());
    }
    target.fill_solid(area, D::Color::from(color))
}
