// Host-side tests for click/drag discrimination.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod gesture {
    include!("../src/core/gesture.rs");
}

use gesture::*;
use glam::Vec2;

#[test]
fn press_and_release_in_place_is_a_click() {
    let mut p = PointerTracker::new(4.0);
    p.press(Vec2::new(10.0, 10.0));
    assert!(p.is_down());
    assert_eq!(p.move_to(Vec2::new(12.0, 11.0)), None);
    assert_eq!(
        p.release(Vec2::new(12.0, 11.0)),
        Some(Gesture::Click(Vec2::new(12.0, 11.0)))
    );
    assert!(!p.is_down());
}

#[test]
fn travel_past_threshold_becomes_a_drag() {
    let mut p = PointerTracker::new(4.0);
    p.press(Vec2::ZERO);
    assert_eq!(p.move_to(Vec2::new(2.0, 0.0)), None);
    // First drag step reports the whole travel since the press.
    assert_eq!(p.move_to(Vec2::new(6.0, 0.0)), Some(Vec2::new(6.0, 0.0)));
    assert!(p.is_dragging());
    assert_eq!(p.move_to(Vec2::new(9.0, 1.0)), Some(Vec2::new(3.0, 1.0)));
    // Coming back near the origin does not turn it into a click.
    assert_eq!(p.release(Vec2::new(1.0, 0.0)), Some(Gesture::DragEnd));
    assert!(!p.is_dragging());
}

#[test]
fn release_far_away_without_moves_is_a_drag() {
    let mut p = PointerTracker::new(4.0);
    p.press(Vec2::ZERO);
    assert_eq!(p.release(Vec2::new(50.0, 0.0)), Some(Gesture::DragEnd));
}

#[test]
fn hover_moves_report_no_drag() {
    let mut p = PointerTracker::new(4.0);
    assert_eq!(p.move_to(Vec2::new(100.0, 100.0)), None);
    assert_eq!(p.position, Vec2::new(100.0, 100.0));
    assert_eq!(p.release(Vec2::new(100.0, 100.0)), None);
}

#[test]
fn cancel_forgets_the_press() {
    let mut p = PointerTracker::new(4.0);
    p.press(Vec2::ZERO);
    p.move_to(Vec2::new(20.0, 0.0));
    p.cancel();
    assert!(!p.is_down() && !p.is_dragging());
    assert_eq!(p.release(Vec2::ZERO), None);
}

#[test]
fn zero_threshold_still_allows_a_perfect_click() {
    let mut p = PointerTracker::new(0.0);
    p.press(Vec2::new(3.0, 3.0));
    assert_eq!(
        p.release(Vec2::new(3.0, 3.0)),
        Some(Gesture::Click(Vec2::new(3.0, 3.0)))
    );
}
