use crate::command::{BarAction, BarCommand};
use crate::fill::FillRenderer;
use crate::types::FillDirection;
use crate::widget::ProgressBar;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// An identifier for a bar within a [`ProgressBarGroup`].
///
/// The ID doubles as the bar's slot index, so it must be below the group's
/// capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BarId(pub usize);

impl From<usize> for BarId {
    fn from(id: usize) -> Self {
        BarId(id)
    }
}

impl From<BarId> for usize {
    fn from(id: BarId) -> Self {
        id.0
    }
}

/// Errors that can occur during group operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GroupError {
    /// The specified bar ID does not exist in the group.
    InvalidBarId(BarId),

    /// Attempted to add a bar with an ID that already exists.
    DuplicateBarId(BarId),

    /// The bar ID exceeds the group's capacity.
    BarIdOutOfBounds { id: BarId, capacity: usize },
}

impl core::fmt::Display for GroupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GroupError::InvalidBarId(id) => {
                write!(f, "bar ID {} does not exist in group", id.0)
            }
            GroupError::DuplicateBarId(id) => {
                write!(f, "bar ID {} already exists in group", id.0)
            }
            GroupError::BarIdOutOfBounds { id, capacity } => {
                write!(f, "bar ID {} exceeds group capacity of {}", id.0, capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GroupError {}

/// A fixed-capacity set of progress bars drawn onto one surface.
///
/// Useful when several readings are shown side by side, such as the three
/// axes of an accelerometer. Bars are addressed by [`BarId`] and rendered
/// together with [`render_all`](Self::render_all).
///
/// # Type Parameters
/// * `N` - Maximum number of color stops per bar
/// * `MAX_BARS` - Maximum number of bars this group can hold
/// * `R` - Fill placement shared by all bars
pub struct ProgressBarGroup<const N: usize, const MAX_BARS: usize, R: FillRenderer = FillDirection> {
    bars: [Option<ProgressBar<N, R>>; MAX_BARS],
}

impl<const N: usize, const MAX_BARS: usize, R: FillRenderer> ProgressBarGroup<N, MAX_BARS, R> {
    /// Creates a new empty group.
    pub fn new() -> Self {
        Self {
            bars: core::array::from_fn(|_| None),
        }
    }

    /// Adds a bar under the given ID.
    ///
    /// # Errors
    /// * `DuplicateBarId` - A bar with this ID already exists
    /// * `BarIdOutOfBounds` - The ID exceeds the group's capacity
    pub fn add(&mut self, id: BarId, bar: ProgressBar<N, R>) -> Result<(), GroupError> {
        let slot = self.bars.get_mut(id.0).ok_or(GroupError::BarIdOutOfBounds {
            id,
            capacity: MAX_BARS,
        })?;

        if slot.is_some() {
            return Err(GroupError::DuplicateBarId(id));
        }

        *slot = Some(bar);
        Ok(())
    }

    /// Removes and returns the bar with the given ID.
    pub fn remove(&mut self, id: BarId) -> Option<ProgressBar<N, R>> {
        self.bars.get_mut(id.0).and_then(Option::take)
    }

    /// Returns the bar with the given ID.
    pub fn get(&self, id: BarId) -> Option<&ProgressBar<N, R>> {
        self.bars.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the bar with the given ID mutably.
    pub fn get_mut(&mut self, id: BarId) -> Option<&mut ProgressBar<N, R>> {
        self.bars.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Updates the value of the specified bar.
    ///
    /// Returns whether the value was clamped.
    ///
    /// # Errors
    /// Returns `InvalidBarId` if the bar does not exist in the group.
    pub fn update(&mut self, id: BarId, value: f32) -> Result<bool, GroupError> {
        self.handle_command(BarCommand::new(id, BarAction::Update(value)))
    }

    /// Routes a command to the specified bar.
    ///
    /// Returns whether the action's value was clamped.
    ///
    /// # Errors
    /// Returns `InvalidBarId` if the bar does not exist in the group.
    pub fn handle_command(&mut self, command: BarCommand<BarId>) -> Result<bool, GroupError> {
        let bar = self
            .get_mut(command.bar_id)
            .ok_or(GroupError::InvalidBarId(command.bar_id))?;

        Ok(bar.handle_action(command.action))
    }

    /// Renders every dirty bar onto `target`.
    ///
    /// Returns the number of bars that drew.
    ///
    /// # Errors
    /// Stops at the first drawing error. Bars not yet rendered stay dirty.
    pub fn render_all<D>(&mut self, target: &mut D) -> Result<usize, D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let mut drawn = 0;
        for bar in self.bars.iter_mut().flatten() {
            if bar.render(target)? {
                drawn += 1;
            }
        }
        Ok(drawn)
    }

    /// Forces every bar to redraw completely on the next render.
    pub fn invalidate_all(&mut self) {
        for bar in self.bars.iter_mut().flatten() {
            bar.invalidate();
        }
    }

    /// Returns true if any bar has changes waiting to be drawn.
    pub fn any_dirty(&self) -> bool {
        self.bars.iter().flatten().any(|bar| bar.is_dirty())
    }

    /// Returns the number of bars currently in the group.
    pub fn len(&self) -> usize {
        self.bars.iter().filter(|b| b.is_some()).count()
    }

    /// Returns true if the group contains no bars.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the group contains a bar with the given ID.
    pub fn contains(&self, id: BarId) -> bool {
        self.get(id).is_some()
    }
}

impl<const N: usize, const MAX_BARS: usize, R: FillRenderer> Default
    for ProgressBarGroup<N, MAX_BARS, R>
{
    fn default() -> Self {
        Self::new()
    }
}
