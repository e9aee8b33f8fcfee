use culture_map::catalog::{PlaceCatalog, PlaceFilter};
use culture_map::domain::category::{Category, CategoryFilter};
use culture_map::domain::PlaceId;
use culture_map::i18n::Locale;

fn ids(places: &[&culture_map::domain::Place]) -> Vec<PlaceId> {
    places.iter().map(|place| place.id).collect()
}

#[test]
fn test_empty_filter_returns_the_whole_catalog_in_order() {
    let catalog = PlaceCatalog::builtin();
    let visible = catalog.filter(&PlaceFilter::all(Locale::Ru));

    assert_eq!(visible.len(), 30);
    let catalog_order: Vec<PlaceId> = catalog.iter().map(|place| place.id).collect();
    assert_eq!(ids(&visible), catalog_order);
}

#[test]
fn test_category_selections_partition_the_catalog() {
    let catalog = PlaceCatalog::builtin();

    let mut total = 0;
    for &category in Category::ALL {
        let filter = PlaceFilter::new(CategoryFilter::Only(category), "", Locale::Ru);
        let visible = catalog.filter(&filter);
        assert!(!visible.is_empty(), "no places for {}", category.key());
        assert!(visible.iter().all(|place| place.category == category));
        total += visible.len();
    }
    assert_eq!(total, catalog.len());
}

#[test]
fn test_search_is_case_insensitive() {
    let catalog = PlaceCatalog::builtin();

    let upper = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "АРСЕНАЛ", Locale::Ru));
    let lower = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "арсенал", Locale::Ru));

    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].id, PlaceId(3));
}

#[test]
fn test_search_narrows_without_reordering() {
    let catalog = PlaceCatalog::builtin();
    let everything = ids(&catalog.filter(&PlaceFilter::all(Locale::Ru)));

    let narrowed = ids(&catalog.filter(&PlaceFilter::new(
        CategoryFilter::All,
        "библиотека",
        Locale::Ru,
    )));
    assert!(!narrowed.is_empty());

    // The narrowed list must be a subsequence of the full catalog order
    let mut remaining = everything.iter();
    for id in &narrowed {
        assert!(
            remaining.any(|candidate| candidate == id),
            "{id} out of order or missing"
        );
    }
}

#[test]
fn test_filtering_its_own_result_changes_nothing() {
    let catalog = PlaceCatalog::builtin();
    let filter = PlaceFilter::new(CategoryFilter::Only(Category::Theater), "театр", Locale::Ru);

    let once = catalog.filter(&filter);
    let again_catalog = PlaceCatalog::new(once.iter().map(|place| (*place).clone()).collect());
    let twice = again_catalog.filter(&filter);

    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn test_default_names_match_under_every_locale() {
    let catalog = PlaceCatalog::builtin();

    // Cyrillic search text keeps matching the default names even when the
    // UI is switched to English
    let filter = PlaceFilter::new(CategoryFilter::All, "дворец", Locale::En);
    let visible = catalog.filter(&filter);
    assert_eq!(ids(&visible), vec![PlaceId(6), PlaceId(7), PlaceId(9)]);
}

#[test]
fn test_override_names_match_only_under_their_locale() {
    let catalog = PlaceCatalog::builtin();

    let en = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "arsenal", Locale::En));
    assert_eq!(ids(&en), vec![PlaceId(3)]);

    // Under ru the Latin text matches neither the default names nor any
    // override, so nothing comes back
    let ru = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "arsenal", Locale::Ru));
    assert!(ru.is_empty());
}

#[test]
fn test_chinese_overrides_are_searchable_under_zh() {
    let catalog = PlaceCatalog::builtin();

    let zh = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "艺术", Locale::Zh));
    assert_eq!(ids(&zh), vec![PlaceId(1), PlaceId(3)]);

    let combined = catalog.filter(&PlaceFilter::new(
        CategoryFilter::Only(Category::HouseOfCulture),
        "艺术",
        Locale::Zh,
    ));
    assert!(combined.is_empty());
}

#[test]
fn test_unmatched_search_yields_nothing() {
    let catalog = PlaceCatalog::builtin();
    let visible = catalog.filter(&PlaceFilter::new(CategoryFilter::All, "zzz", Locale::Ru));
    assert!(visible.is_empty());
}
