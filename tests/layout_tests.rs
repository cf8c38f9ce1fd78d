// Host-side tests for the sphere layout and look-at math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}
mod transform {
    include!("../src/core/transform.rs");
}
mod layout {
    include!("../src/core/layout.rs");
}

use glam::{DVec3, Vec3};
use layout::*;
use transform::*;

#[test]
fn layout_has_one_point_per_item_on_the_sphere() {
    for n in 1..=40 {
        let points = sphere_layout(n, 200.0);
        assert_eq!(points.len(), n);
        for (i, p) in points.iter().enumerate() {
            let r = p.position.length();
            assert!((r - 200.0).abs() < 1e-2, "n={n} i={i} radius {r}");
        }
    }
}

#[test]
fn empty_catalog_yields_empty_layout() {
    assert!(sphere_layout(0, 200.0).is_empty());
    assert_eq!(
        checked_sphere_layout(0, 200.0),
        Err(error::ConfiguratorError::InvalidCatalogSize { count: 0 })
    );
}

#[test]
fn layout_is_reproducible() {
    for i in 0..12 {
        assert_eq!(sphere_point(i, 12, 200.0), sphere_point(i, 12, 200.0));
    }
    assert_eq!(sphere_layout(12, 200.0), sphere_layout(12, 200.0));
}

#[test]
fn twelve_items_have_distinct_positions() {
    let points = sphere_layout(12, 200.0);
    for a in 0..points.len() {
        for b in (a + 1)..points.len() {
            let d = points[a].position.distance(points[b].position);
            assert!(d > 1.0, "items {a} and {b} overlap ({d})");
        }
    }
}

#[test]
fn first_item_sits_at_the_south_pole() {
    let p = sphere_point(0, 12, 200.0);
    assert!((p.position.y + 200.0).abs() < 1e-3);
    assert!(p.position.x.abs() < 1e-2 && p.position.z.abs() < 1e-2);
    assert!(p.rotation.is_finite());
}

#[test]
fn spherical_conversion_matches_axes() {
    let north = spherical_to_cartesian(10.0, 0.0, 0.0);
    assert!((north - DVec3::new(0.0, 10.0, 0.0)).length() < 1e-12);
    let front = spherical_to_cartesian(10.0, std::f64::consts::FRAC_PI_2, 0.0);
    assert!((front - DVec3::new(0.0, 0.0, 10.0)).length() < 1e-12);
}

#[test]
fn items_face_away_from_the_center() {
    // Local +Z of every item points radially outward.
    for p in sphere_layout(12, 200.0) {
        let facing = rotation_matrix(p.rotation).z_axis;
        let outward = p.position.normalize();
        assert!(
            facing.dot(outward) > 0.999,
            "facing {facing:?} vs outward {outward:?}"
        );
    }
}

#[test]
fn look_at_along_plus_z_is_identity() {
    let r = look_at_rotation(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0), DVec3::Y);
    assert!(r.length() < 1e-6, "{r:?}");
}

#[test]
fn look_at_straight_down_the_up_axis_is_nudged() {
    let r = look_at_rotation(DVec3::ZERO, DVec3::new(0.0, -5.0, 0.0), DVec3::Y);
    assert!(r.is_finite());
    let facing = rotation_matrix(r).z_axis;
    assert!(facing.dot(Vec3::NEG_Y) > 0.999, "{facing:?}");
}

fn assert_rotation_near(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).abs().max_element() < 1e-3,
        "rotation {actual:?}, expected {expected:?}"
    );
}

#[test]
fn south_pole_keeps_its_spiral_heading() {
    // The pole sits a rounding error off the up axis; that offset decides the
    // heading rather than the parallel-up nudge.
    let p = sphere_point(0, 12, 200.0);
    assert_rotation_near(p.rotation, Vec3::new(1.5708, 0.0, -0.4397));
}

#[test]
fn twelve_item_headings_are_pinned() {
    let points = sphere_layout(12, 200.0);
    assert_rotation_near(points[3].rotation, Vec3::new(0.5427, 0.2529, -0.1498));
    assert_rotation_near(points[9].rotation, Vec3::new(-0.5283, 0.1268, 0.0737));
    // Item 6 sits on the equator facing -Z; both rolls resolve to -pi.
    let equator = points[6].rotation;
    assert_rotation_near(
        equator,
        Vec3::new(-std::f32::consts::PI, -0.2198, -std::f32::consts::PI),
    );
    assert!(equator.x < 0.0 && equator.z < 0.0, "{equator:?}");
}

#[test]
fn euler_round_trips_through_basis() {
    let euler = Vec3::new(0.3, -0.7, 1.1);
    let m = rotation_matrix(euler);
    let back = euler_xyz_from_basis(m.x_axis, m.y_axis, m.z_axis);
    assert!((back - euler).length() < 1e-4, "{back:?}");
}

#[test]
fn transform_lerp_is_componentwise() {
    let a = Transform::new(Vec3::ZERO, Vec3::ZERO, 1.0);
    let b = Transform::new(Vec3::new(10.0, -4.0, 2.0), Vec3::new(1.0, 2.0, 3.0), 3.0);
    let mid = a.lerp(&b, 0.5);
    assert_eq!(mid.position, Vec3::new(5.0, -2.0, 1.0));
    assert_eq!(mid.rotation, Vec3::new(0.5, 1.0, 1.5));
    assert_eq!(mid.scale, 2.0);
}

#[test]
fn raw_transform_packs_eight_floats() {
    let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0), 7.0);
    let raws = [TransformRaw::new(&t, true), TransformRaw::new(&t, false)];
    let floats: &[f32] = bytemuck::cast_slice(&raws[..]);
    assert_eq!(floats.len(), 2 * TransformRaw::FLOATS);
    assert_eq!(&floats[..8], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 1.0]);
    assert_eq!(floats[15], 0.0);
}
