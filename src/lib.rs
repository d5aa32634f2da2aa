#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ProgressBar`**: A single bar; `update` records a value, `render` draws what changed
//! - **`ProgressBarConfig`**: Immutable geometry, range, colors and fill direction
//! - **`ProgressValue`** / **`ValueRange`**: Clamped value and its normalization to a fraction
//! - **`FillDirection`** / **`Orientation`**: Which axis fills, and from which edge
//! - **`FillRenderer`**: Trait placing the filled segment; implement it for custom layouts
//! - **`ColorScale`**: Color stops mapping the fraction to a bar color, banded or interpolated
//! - **`ProgressBarGroup`**: Several bars addressed by `BarId` and rendered together
//! - **`BarAction`** / **`BarCommand`**: Commands for channel-driven control
//! - **`ValueSource`**: Trait to implement for the input feeding a bar
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all color operations and
//! converts to the surface's pixel format through `Rgb888` when drawing, so any
//! `DrawTarget` whose color implements `From<Rgb888>` works.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod command;
pub mod config;
pub mod fill;
pub mod group;
pub mod input;
pub mod scale;
pub mod types;
pub mod value;
pub mod widget;

pub use colors::{BLACK, BLUE, GREEN, ORANGE, RED, WHITE, YELLOW};
pub use command::{BarAction, BarCommand};
pub use config::{BarStyle, ProgressBarConfig};
pub use fill::{FillRenderer, compute_extent};
pub use group::{BarId, GroupError, ProgressBarGroup};
pub use input::ValueSource;
pub use scale::{ColorScale, ColorScaleBuilder, ColorStop};
pub use types::{ConfigError, FillDirection, FractionError, Orientation, ScaleMode};
pub use value::{ProgressValue, ValueRange};
pub use widget::ProgressBar;
