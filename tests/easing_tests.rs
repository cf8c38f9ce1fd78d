// Host-side tests for easing curves.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod easing {
    include!("../src/core/easing.rs");
}

use easing::*;

const ALL: [Easing; 4] = [
    Easing::Linear,
    Easing::EaseOutExpo,
    Easing::EaseOutCubic,
    Easing::EaseInOutCubic,
];

#[test]
fn ease_out_expo_matches_reference_points() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
    assert!((ease_out_expo(0.5) - 0.96875).abs() < 1e-6);
}

#[test]
fn default_easing_is_ease_out_expo() {
    assert_eq!(Easing::default(), Easing::EaseOutExpo);
    assert_eq!(Easing::default().apply(0.5), ease_out_expo(0.5));
}

#[test]
fn all_curves_pin_endpoints() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
    }
}

#[test]
fn all_curves_are_monotonic_on_unit_interval() {
    for e in ALL {
        let mut prev = e.apply(0.0);
        for step in 1..=1000 {
            let v = e.apply(step as f32 / 1000.0);
            assert!(v >= prev, "{e:?} decreased at step {step}: {prev} -> {v}");
            prev = v;
        }
    }
}

#[test]
fn easing_names_use_kebab_case() {
    let e: Easing = easing_named("ease-out-expo");
    assert_eq!(e, Easing::EaseOutExpo);
    let e: Easing = easing_named("ease-in-out-cubic");
    assert_eq!(e, Easing::EaseInOutCubic);
}

// Deserialize a unit variant from its string name without pulling in a format crate.
fn easing_named(name: &str) -> Easing {
    use serde::de::value::{Error, StrDeserializer};
    use serde::de::IntoDeserializer;
    use serde::Deserialize;
    let de: StrDeserializer<'_, Error> = name.into_deserializer();
    Easing::deserialize(de).expect("known easing name")
}
