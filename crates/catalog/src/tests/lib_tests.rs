use super::*;

#[test]
fn seeded_catalog_has_full_inventory() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.artworks().len(), 8);
    assert_eq!(catalog.collections().len(), 8);
    assert_eq!(catalog.rooms().len(), 4);
    assert_eq!(catalog.frames().len(), 5);
    assert_eq!(catalog.hero_slides().len(), 2);
}

#[test]
fn option_lists_are_distinct_in_first_seen_order() {
    let catalog = Catalog::seeded();
    assert_eq!(
        catalog.categories(),
        &[Category::Abstract, Category::Landscape, Category::Urban]
    );
    assert_eq!(
        catalog.mediums(),
        &[Medium::OilOnCanvas, Medium::AcrylicOnCanvas, Medium::MixedMedia]
    );
}

#[test]
fn lookups_return_none_for_unknown_ids() {
    let catalog = Catalog::seeded();
    assert_eq!(catalog.artwork(ArtworkId(1)).map(|a| a.title.as_str()), Some("Ocean Dreams"));
    assert!(catalog.artwork(ArtworkId(99)).is_none());
    assert!(catalog.collection(CollectionId(0)).is_none());
    assert!(catalog.room(RoomId(5)).is_none());
    assert!(catalog.frame(FrameId::ClassicGold).is_some());
}

#[test]
fn related_skips_missing_ids_and_keeps_order() {
    let mut parts = CatalogParts::default();
    let mut first = Catalog::seeded().artworks()[0].clone();
    first.related = vec![ArtworkId(42), ArtworkId(2)];
    let second = Catalog::seeded().artworks()[1].clone();
    parts.artworks = vec![first, second];
    let catalog = Catalog::from_parts(parts);

    let base = catalog.artwork(ArtworkId(1)).expect("artwork");
    let related: Vec<_> = catalog.related(base).iter().map(|a| a.id).collect();
    assert_eq!(related, vec![ArtworkId(2)]);
}

#[test]
fn only_city_lights_is_sold() {
    let catalog = Catalog::seeded();
    let sold: Vec<_> = catalog
        .artworks()
        .iter()
        .filter(|a| !a.available)
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(sold, vec!["City Lights"]);
}

#[test]
fn frames_use_their_option_labels() {
    let catalog = Catalog::seeded();
    let none = catalog.frame(FrameId::None).expect("none frame");
    assert_eq!(none.name, "No Frame");
    assert_eq!(none.border_width, 0);
    let gold = catalog.frame(FrameId::ClassicGold).expect("gold frame");
    assert_eq!((gold.border_width, gold.padding), (20, 5));
}
