//! Input abstraction for values fed to progress bars.

/// Trait for abstracting the host's value producer (a sensor, a download
/// counter, a battery gauge).
///
/// Implement this for your input so a bar can pull readings with
/// [`ProgressBar::poll`](crate::ProgressBar::poll).
pub trait ValueSource {
    /// Returns the next reading, or `None` if none is available.
    fn read_value(&mut self) -> Option<f32>;
}

impl<F: FnMut() -> Option<f32>> ValueSource for F {
    fn read_value(&mut self) -> Option<f32> {
        self()
    }
}
