//! Gallery filtering and sorting. Every view is a pure function of the catalog,
//! the filter state and the sort order.

use shared::{
    domain::{
        Artwork, Availability, CollectionId, FilterState, PriceRange, SortOrder, UnknownVariant,
        DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN,
    },
    protocol::{ArtworkSummary, GalleryQuery, GalleryView},
};
use thiserror::Error;
use tracing::debug;

use crate::Catalog;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryQueryError {
    #[error(transparent)]
    UnknownOption(#[from] UnknownVariant),
}

/// A fully parsed gallery request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GallerySelection {
    pub filter: FilterState,
    pub sort: SortOrder,
    /// Collection whose category seeded the filter, if any.
    pub collection: Option<CollectionId>,
}

impl GallerySelection {
    pub fn from_query(catalog: &Catalog, query: &GalleryQuery) -> Result<Self, GalleryQueryError> {
        let mut filter = FilterState {
            categories: parse_list(query.category.as_deref())?,
            mediums: parse_list(query.medium.as_deref())?,
            price: PriceRange {
                min: query.min_price.unwrap_or(DEFAULT_PRICE_MIN),
                max: query.max_price.unwrap_or(DEFAULT_PRICE_MAX),
            },
            availability: match query.availability.as_deref() {
                Some(raw) => raw.parse()?,
                None => Availability::All,
            },
        };
        let sort = match query.sort.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortOrder::Featured,
        };

        let mut collection = None;
        if let Some(raw_id) = query.collection {
            let id = CollectionId(raw_id);
            match catalog.collection(id).and_then(|c| c.category) {
                Some(category) => {
                    if !filter.categories.contains(&category) {
                        filter.categories.push(category);
                    }
                    collection = Some(id);
                }
                None => debug!(collection_id = raw_id, "collection has no gallery category; ignoring"),
            }
        }

        Ok(Self {
            filter,
            sort,
            collection,
        })
    }
}

fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, UnknownVariant>
where
    T: std::str::FromStr<Err = UnknownVariant> + PartialEq,
{
    let mut values = Vec::new();
    for part in raw.unwrap_or_default().split(',') {
        if part.trim().is_empty() {
            continue;
        }
        let value = part.parse::<T>()?;
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Ok(values)
}

/// Artworks satisfying every active predicate, in catalog order.
pub fn filter<'a>(artworks: &'a [Artwork], state: &FilterState) -> Vec<&'a Artwork> {
    artworks.iter().filter(|a| state.matches(a)).collect()
}

/// Stable sort; `Featured` keeps catalog order.
pub fn sort(items: &mut [&Artwork], order: SortOrder) {
    match order {
        SortOrder::Featured => {}
        SortOrder::Newest => items.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::PriceLow => items.sort_by_key(|a| a.price),
        SortOrder::PriceHigh => items.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

pub fn browse(catalog: &Catalog, selection: &GallerySelection) -> GalleryView {
    let mut items = filter(catalog.artworks(), &selection.filter);
    sort(&mut items, selection.sort);
    GalleryView {
        items: items.into_iter().map(ArtworkSummary::from).collect(),
        categories: catalog.categories().to_vec(),
        mediums: catalog.mediums().to_vec(),
        filter: selection.filter.clone(),
        sort: selection.sort,
        active_filter_count: selection.filter.active_filter_count(),
        collection: selection.collection,
    }
}

#[cfg(test)]
#[path = "tests/gallery_tests.rs"]
mod tests;
