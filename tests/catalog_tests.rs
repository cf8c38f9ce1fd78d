// Host-side tests for the catalog and selection state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod error {
    include!("../src/core/error.rs");
}
mod catalog {
    include!("../src/core/catalog.rs");
}
mod selection {
    include!("../src/core/selection.rs");
}

use catalog::*;
use error::ConfiguratorError;
use selection::SelectionState;

fn two_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("oak", "Chêne", "oak.jpg"),
        CatalogItem::new("ash", "Frêne", "ash.jpg"),
    ]
}

#[test]
fn builtin_catalog_has_twelve_unique_woods() {
    let c = wood_catalog();
    assert_eq!(c.len(), 12);
    for (i, item) in c.iter().enumerate() {
        assert_eq!(c.index_of(&item.id), Ok(i));
        assert!(!item.image.is_empty());
        assert_eq!(item.gallery.len(), 3);
    }
    assert_eq!(c.get(0).map(|i| i.id.as_str()), Some("oak"));
    assert_eq!(c.by_id("walnut").map(|i| i.name.as_str()), Ok("Noyer"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut items = two_items();
    items.push(CatalogItem::new("oak", "Other", "x.jpg"));
    assert_eq!(
        Catalog::new(items).map(|c| c.len()),
        Err(ConfiguratorError::DuplicateItemId("oak".into()))
    );
}

#[test]
fn unknown_id_is_reported() {
    let c = Catalog::new(two_items()).expect("unique ids");
    assert_eq!(
        c.index_of("ebony"),
        Err(ConfiguratorError::UnknownItemReference("ebony".into()))
    );
    assert!(c.get(2).is_none());
}

#[test]
fn empty_catalog_is_allowed() {
    let c = Catalog::new(Vec::new()).expect("empty");
    assert!(c.is_empty());
}

#[test]
fn gallery_falls_back_to_the_thumbnail() {
    let plain = CatalogItem::new("oak", "Chêne", "oak.jpg");
    assert_eq!(plain.gallery_len(), 1);
    assert_eq!(plain.gallery_image(0), "oak.jpg");

    let rich = plain.with_gallery(vec!["a.jpg".into(), "b.jpg".into()]);
    assert_eq!(rich.gallery_len(), 2);
    assert_eq!(rich.gallery_image(1), "b.jpg");
    assert_eq!(rich.gallery_image(5), "oak.jpg");
}

#[test]
fn confirm_sets_selected_and_confirmed() {
    let mut s = SelectionState::default();
    s.inspect("oak");
    s.confirm("oak");
    assert_eq!(s.selected.as_deref(), Some("oak"));
    assert_eq!(s.confirmed.as_deref(), Some("oak"));
    assert!(s.is_confirmed("oak"));
    assert!(!s.is_confirmed("ash"));
    assert_eq!(s.close_inspection().as_deref(), Some("oak"));
    assert_eq!(s.inspected, None);
}

#[test]
fn gallery_steps_wrap_both_ways() {
    let mut s = SelectionState::default();
    s.step_gallery(-1, 3);
    assert_eq!(s.gallery_index, 2);
    s.step_gallery(1, 3);
    assert_eq!(s.gallery_index, 0);
    s.step_gallery(4, 3);
    assert_eq!(s.gallery_index, 1);
    s.step_gallery(1, 0);
    assert_eq!(s.gallery_index, 0);
}

#[test]
fn inspecting_resets_the_gallery() {
    let mut s = SelectionState::default();
    s.inspect("oak");
    s.step_gallery(2, 3);
    s.inspect("ash");
    assert_eq!(s.gallery_index, 0);
    assert_eq!(s.inspected.as_deref(), Some("ash"));
}

#[test]
fn builtin_woods_carry_detail_sheets() {
    let c = wood_catalog();
    let oak = c
        .by_id("oak")
        .ok()
        .and_then(|i| i.details.as_ref())
        .expect("oak details");
    assert_eq!(oak.characteristics.density, "0.75 g/cm³");
    assert_eq!(oak.characteristics.hardness, "Très dur");
    assert_eq!(oak.applications.len(), 4);
    assert_eq!(oak.recommendations[1], "Résiste bien à l'humidité");
    assert!(oak.description.starts_with("Le chêne"));

    let teak = c.by_id("teak").ok().and_then(|i| i.details.as_ref());
    assert_eq!(
        teak.map(|d| d.characteristics.durability.as_str()),
        Some("Exceptionnelle")
    );

    for item in c.iter() {
        let d = item.details.as_ref().expect("every wood has details");
        assert!(!d.characteristics.density.is_empty(), "{}", item.id);
        assert!(!d.applications.is_empty() && !d.recommendations.is_empty());
        assert!(!d.description.is_empty());
    }
}

#[test]
fn custom_items_have_no_details_by_default() {
    let c = Catalog::new(two_items()).expect("unique ids");
    assert!(c.iter().all(|i| i.details.is_none()));
}
