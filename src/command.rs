//! Command-based control for progress bars.

/// Actions for controlling a progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BarAction {
    /// Set the value.
    Update(f32),
    /// Set the value as a percentage of the range.
    SetProgress(f32),
    /// Force a full redraw.
    Invalidate,
}

/// Command targeting a specific bar.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarCommand<Id> {
    pub bar_id: Id,
    pub action: BarAction,
}

impl<Id> BarCommand<Id> {
    /// Creates command.
    pub fn new(bar_id: Id, action: BarAction) -> Self {
        Self { bar_id, action }
    }
}
