//! Integration tests for ProgressBarGroup

mod common;
use common::*;

use embedded_graphics::prelude::*;
use embedded_progressbar::{
    BarAction, BarCommand, BarId, GroupError, Orientation, ProgressBar, ProgressBarConfig,
    ProgressBarGroup,
};

type AxisGroup = ProgressBarGroup<0, 3>;

// Three vertical bars side by side, one per accelerometer axis, range -10..=10.
fn axis_bar(index: i32) -> ProgressBar<0> {
    let config = ProgressBarConfig::new(Point::new(index * 30, 0), Size::new(20, 100))
        .orientation(Orientation::Vertical)
        .range(-10.0, 10.0);
    ProgressBar::new(config).unwrap()
}

fn full_group() -> AxisGroup {
    let mut group = AxisGroup::new();
    for i in 0..3 {
        group.add(BarId(i), axis_bar(i as i32)).unwrap();
    }
    group
}

#[test]
fn add_rejects_duplicate_id() {
    let mut group = AxisGroup::new();
    group.add(BarId(1), axis_bar(1)).unwrap();
    assert_eq!(
        group.add(BarId(1), axis_bar(1)),
        Err(GroupError::DuplicateBarId(BarId(1)))
    );
    assert_eq!(group.len(), 1);
}

#[test]
fn add_rejects_id_beyond_capacity() {
    let mut group = AxisGroup::new();
    assert_eq!(
        group.add(BarId(3), axis_bar(0)),
        Err(GroupError::BarIdOutOfBounds {
            id: BarId(3),
            capacity: 3
        })
    );
    assert!(group.is_empty());
}

#[test]
fn commands_to_missing_bars_fail() {
    let mut group = AxisGroup::new();
    group.add(BarId(0), axis_bar(0)).unwrap();
    assert_eq!(group.update(BarId(2), 1.0), Err(GroupError::InvalidBarId(BarId(2))));
    assert_eq!(group.update(BarId(9), 1.0), Err(GroupError::InvalidBarId(BarId(9))));
}

#[test]
fn update_routes_to_the_right_bar() {
    let mut group = full_group();
    assert_eq!(group.update(BarId(1), 5.0), Ok(false));
    assert_eq!(group.update(BarId(2), 25.0), Ok(true));

    assert_eq!(group.get(BarId(0)).unwrap().value(), 0.0);
    assert_eq!(group.get(BarId(1)).unwrap().value(), 5.0);
    assert_eq!(group.get(BarId(2)).unwrap().value(), 10.0);
}

#[test]
fn handle_command_dispatches_actions() {
    let mut group = full_group();
    let command = BarCommand::new(BarId(0), BarAction::SetProgress(75.0));
    assert_eq!(group.handle_command(command), Ok(false));
    assert_eq!(group.get(BarId(0)).unwrap().value(), 5.0);
}

#[test]
fn render_all_draws_only_dirty_bars() {
    let mut group = full_group();
    let mut surface = MockSurface::new();

    assert!(group.any_dirty());
    assert_eq!(group.render_all(&mut surface), Ok(3));
    assert!(!group.any_dirty());
    assert_eq!(group.render_all(&mut surface), Ok(0));

    // Every bar starts at 0, half filled from the bottom of its 16x96 inner area
    assert_eq!(surface.pixel(70, 50), Some(RGB_GREEN));
    assert_eq!(surface.pixel(70, 49), Some(RGB_BLACK));

    group.update(BarId(2), 10.0).unwrap();
    assert_eq!(group.render_all(&mut surface), Ok(1));

    // Bar 2 sits at x 60..80 and is now full
    assert_eq!(surface.pixel(70, 2), Some(RGB_GREEN));
    assert_eq!(surface.pixel(70, 97), Some(RGB_GREEN));
    // Bar 1 untouched
    assert_eq!(surface.pixel(40, 49), Some(RGB_BLACK));
    assert_eq!(surface.pixel(40, 50), Some(RGB_GREEN));
}

#[test]
fn invalidate_all_marks_every_bar() {
    let mut group = full_group();
    let mut surface = MockSurface::new();
    group.render_all(&mut surface).unwrap();

    group.invalidate_all();
    assert_eq!(group.render_all(&mut surface), Ok(3));
}

#[test]
fn remove_frees_the_slot() {
    let mut group = full_group();
    let bar = group.remove(BarId(1));
    assert!(bar.is_some());
    assert!(!group.contains(BarId(1)));
    assert_eq!(group.len(), 2);
    assert!(group.remove(BarId(1)).is_none());
    group.add(BarId(1), axis_bar(1)).unwrap();
    assert_eq!(group.len(), 3);
}

#[test]
fn get_mut_allows_direct_updates() {
    let mut group = full_group();
    group.get_mut(BarId(0)).unwrap().update(-20.0);
    assert_eq!(group.get(BarId(0)).unwrap().value(), -10.0);
}

#[test]
fn bar_id_converts_from_usize() {
    let id: BarId = 2usize.into();
    assert_eq!(id, BarId(2));
    assert_eq!(usize::from(id), 2);
}
