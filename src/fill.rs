//! Fraction-to-extent mapping and placement of the filled segment.
//!
//! The extent is the number of pixels along the fill axis that represent the
//! current progress. [`FillRenderer`] decides where those pixels sit inside
//! the bar's inner area, so one widget type covers every orientation.

use crate::types::{FillDirection, Orientation};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Maps `fraction` to a pixel count in `0..=total_size`, rounding down.
///
/// The fraction is clamped to 0.0..=1.0 first; NaN maps to 0.
#[inline]
pub fn compute_extent(fraction: f32, total_size: u32) -> u32 {
    if fraction.is_nan() {
        return 0;
    }
    if fraction >= 1.0 {
        return total_size;
    }
    let fraction = fraction.max(0.0);
    // f64 holds every u32 exactly; truncation is floor for non-negative products.
    let extent = (fraction as f64 * total_size as f64) as u32;
    extent.min(total_size)
}

/// Moves `base` by `by` pixels, saturating at the edge of the coordinate space.
#[inline]
pub(crate) fn offset(base: i32, by: u32) -> i32 {
    base.saturating_add(i32::try_from(by).unwrap_or(i32::MAX))
}

/// Places a bar's filled segment inside its inner area.
///
/// Offsets passed to [`segment`](FillRenderer::segment) are measured from the
/// fill origin (for example the bottom edge of a bottom-up bar) along the
/// renderer's orientation.
pub trait FillRenderer {
    /// Axis the fill grows along.
    fn orientation(&self) -> Orientation;

    /// Returns the rectangle covering fill offsets `start..end`.
    ///
    /// Offsets past the inner area are clipped to it. `end <= start` yields
    /// a zero-sized rectangle.
    fn segment(&self, inner: Rectangle, start: u32, end: u32) -> Rectangle;

    /// Filled pixel count for `fraction` within an inner area of `inner` size.
    #[inline]
    fn extent(&self, fraction: f32, inner: Size) -> u32 {
        compute_extent(fraction, self.orientation().span(inner))
    }

    /// Returns the rectangle covered by a fill of `extent` pixels.
    #[inline]
    fn bar_area(&self, inner: Rectangle, extent: u32) -> Rectangle {
        self.segment(inner, 0, extent)
    }
}

impl FillRenderer for FillDirection {
    #[inline]
    fn orientation(&self) -> Orientation {
        FillDirection::orientation(*self)
    }

    fn segment(&self, inner: Rectangle, start: u32, end: u32) -> Rectangle {
        let span = self.orientation().span(inner.size);
        let start = start.min(span);
        let end = end.clamp(start, span);
        let length = end - start;
        let origin = inner.top_left;

        match self {
            FillDirection::LeftToRight => Rectangle::new(
                Point::new(offset(origin.x, start), origin.y),
                Size::new(length, inner.size.height),
            ),
            FillDirection::RightToLeft => Rectangle::new(
                Point::new(offset(origin.x, span - end), origin.y),
                Size::new(length, inner.size.height),
            ),
            FillDirection::BottomUp => Rectangle::new(
                Point::new(origin.x, offset(origin.y, span - end)),
                Size::new(inner.size.width, length),
            ),
            FillDirection::TopDown => Rectangle::new(
                Point::new(origin.x, offset(origin.y, start)),
                Size::new(inner.size.width, length),
            ),
        }
    }
}
