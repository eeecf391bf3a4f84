use catalog::{gallery, Catalog};
use shared::domain::{Availability, Category, FilterState, Medium};

fn subsets<T: Copy>(values: &[T]) -> Vec<Vec<T>> {
    (0..1u32 << values.len())
        .map(|mask| {
            values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect()
        })
        .collect()
}

fn all_filter_states(catalog: &Catalog) -> Vec<FilterState> {
    let prices = [(0, 2000), (0, 1000), (900, 1200), (1300, 1300), (1500, 900)];
    let availabilities = [Availability::All, Availability::Available, Availability::Sold];
    let mut states = Vec::new();
    for categories in subsets(catalog.categories()) {
        for mediums in subsets(catalog.mediums()) {
            for (min, max) in prices {
                for availability in availabilities {
                    let mut state = FilterState {
                        categories: categories.clone(),
                        mediums: mediums.clone(),
                        availability,
                        ..FilterState::default()
                    };
                    state.set_price(min, max);
                    states.push(state);
                }
            }
        }
    }
    states
}

fn satisfies(state: &FilterState, category: Category, medium: Medium, price: u64, available: bool) -> bool {
    let category_ok = state.categories.is_empty() || state.categories.contains(&category);
    let medium_ok = state.mediums.is_empty() || state.mediums.contains(&medium);
    let price_ok = price >= state.price.min && price <= state.price.max;
    let availability_ok = match state.availability {
        Availability::All => true,
        Availability::Available => available,
        Availability::Sold => !available,
    };
    category_ok && medium_ok && price_ok && availability_ok
}

#[test]
fn filtered_view_is_exactly_the_matching_subset() {
    let catalog = Catalog::seeded();
    for state in all_filter_states(&catalog) {
        let items = gallery::filter(catalog.artworks(), &state);
        for artwork in catalog.artworks() {
            let included = items.iter().any(|a| a.id == artwork.id);
            let expected = satisfies(&state, artwork.category, artwork.medium, artwork.price, artwork.available);
            assert_eq!(included, expected, "artwork {} under {state:?}", artwork.id);
        }
        assert!(items.iter().all(|a| catalog.artwork(a.id).is_some()));
    }
}

#[test]
fn filtering_is_deterministic() {
    let catalog = Catalog::seeded();
    for state in all_filter_states(&catalog) {
        let first: Vec<_> = gallery::filter(catalog.artworks(), &state).iter().map(|a| a.id).collect();
        let second: Vec<_> = gallery::filter(catalog.artworks(), &state).iter().map(|a| a.id).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn clearing_restores_the_unrestricted_view() {
    let catalog = Catalog::seeded();
    for mut state in all_filter_states(&catalog) {
        state.clear();
        assert_eq!(gallery::filter(catalog.artworks(), &state).len(), catalog.artworks().len());
    }
}
