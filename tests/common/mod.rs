//! Shared test infrastructure for embedded-progressbar integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_progressbar::Srgb;

// ============================================================================
// Mock Surface
// ============================================================================

pub const SURFACE_WIDTH: usize = 256;
pub const SURFACE_HEIGHT: usize = 256;

/// Pixel-grid draw target that records every `fill_solid` call.
///
/// Unpainted pixels read as `None`, so tests can tell "drawn black" from
/// "never drawn".
pub struct MockSurface {
    pixels: Vec<Option<Rgb888>>,
    fills: Vec<(Rectangle, Rgb888)>,
    pixel_writes: usize,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            pixels: vec![None; SURFACE_WIDTH * SURFACE_HEIGHT],
            fills: Vec::new(),
            pixel_writes: 0,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        if x < 0 || y < 0 || x as usize >= SURFACE_WIDTH || y as usize >= SURFACE_HEIGHT {
            return None;
        }
        self.pixels[y as usize * SURFACE_WIDTH + x as usize]
    }

    /// Every `fill_solid` call so far, in order.
    pub fn fills(&self) -> &[(Rectangle, Rgb888)] {
        &self.fills
    }

    /// Total pixels written through any drawing method.
    pub fn pixel_writes(&self) -> usize {
        self.pixel_writes
    }

    /// Forgets recorded calls, keeping the pixels.
    pub fn reset_log(&mut self) {
        self.fills.clear();
        self.pixel_writes = 0;
    }

    /// Number of pixels inside `area` that have `color`.
    pub fn count_in(&self, area: &Rectangle, color: Rgb888) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == Some(color))
            .count()
    }

    /// True if every pixel in `area` has `color`.
    pub fn all_in(&self, area: &Rectangle, color: Rgb888) -> bool {
        area.points().all(|p| self.pixel(p.x, p.y) == Some(color))
    }

    fn set(&mut self, point: Point, color: Rgb888) {
        self.pixel_writes += 1;
        if point.x >= 0
            && point.y >= 0
            && (point.x as usize) < SURFACE_WIDTH
            && (point.y as usize) < SURFACE_HEIGHT
        {
            self.pixels[point.y as usize * SURFACE_WIDTH + point.x as usize] = Some(color);
        }
    }
}

impl OriginDimensions for MockSurface {
    fn size(&self) -> Size {
        Size::new(SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32)
    }
}

impl DrawTarget for MockSurface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fills.push((*area, color));
        for point in area.points() {
            self.set(point, color);
        }
        Ok(())
    }
}

/// Draw target whose every operation fails.
pub struct FailingSurface;

#[derive(Debug, PartialEq, Eq)]
pub struct SurfaceFault;

impl OriginDimensions for FailingSurface {
    fn size(&self) -> Size {
        Size::new(SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32)
    }
}

impl DrawTarget for FailingSurface {
    type Color = Rgb888;
    type Error = SurfaceFault;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        Err(SurfaceFault)
    }

    fn fill_solid(&mut self, _area: &Rectangle, _color: Self::Color) -> Result<(), Self::Error> {
        Err(SurfaceFault)
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use embedded_progressbar::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};

pub const RGB_BLACK: Rgb888 = Rgb888::new(0, 0, 0);
pub const RGB_WHITE: Rgb888 = Rgb888::new(255, 255, 255);
pub const RGB_GREEN: Rgb888 = Rgb888::new(0, 255, 0);
pub const RGB_RED: Rgb888 = Rgb888::new(255, 0, 0);

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
