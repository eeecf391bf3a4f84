//! Read-only, in-memory catalog of the storefront and the gallery engine over it.

use std::sync::Arc;

use shared::domain::{
    Artwork, ArtworkId, Category, Collection, CollectionId, FrameId, FrameOption, HeroSlide,
    Medium, RoomId, RoomTemplate,
};

pub mod gallery;
mod seed;

pub use seed::HERO_INTERVAL_MS;

/// Everything a [`Catalog`] is built from.
#[derive(Debug, Clone, Default)]
pub struct CatalogParts {
    pub artworks: Vec<Artwork>,
    pub collections: Vec<Collection>,
    pub rooms: Vec<RoomTemplate>,
    pub frames: Vec<FrameOption>,
    pub hero_slides: Vec<HeroSlide>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Arc<CatalogParts>,
    categories: Arc<[Category]>,
    mediums: Arc<[Medium]>,
}

impl Catalog {
    /// The storefront's built-in inventory.
    pub fn seeded() -> Self {
        Self::from_parts(seed::parts())
    }

    pub fn from_parts(parts: CatalogParts) -> Self {
        let categories = distinct(parts.artworks.iter().map(|a| a.category));
        let mediums = distinct(parts.artworks.iter().map(|a| a.medium));
        Self {
            parts: Arc::new(parts),
            categories: categories.into(),
            mediums: mediums.into(),
        }
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.parts.artworks
    }

    pub fn artwork(&self, id: ArtworkId) -> Option<&Artwork> {
        self.parts.artworks.iter().find(|a| a.id == id)
    }

    /// Related pieces in their listed order; ids missing from the catalog are skipped.
    pub fn related(&self, artwork: &Artwork) -> Vec<&Artwork> {
        artwork
            .related
            .iter()
            .filter_map(|id| self.artwork(*id))
            .collect()
    }

    /// Distinct categories in first-seen catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Distinct mediums in first-seen catalog order.
    pub fn mediums(&self) -> &[Medium] {
        &self.mediums
    }

    pub fn collections(&self) -> &[Collection] {
        &self.parts.collections
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.parts.collections.iter().find(|c| c.id == id)
    }

    pub fn rooms(&self) -> &[RoomTemplate] {
        &self.parts.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&RoomTemplate> {
        self.parts.rooms.iter().find(|r| r.id == id)
    }

    pub fn frames(&self) -> &[FrameOption] {
        &self.parts.frames
    }

    pub fn frame(&self, id: FrameId) -> Option<&FrameOption> {
        self.parts.frames.iter().find(|f| f.id == id)
    }

    pub fn hero_slides(&self) -> &[HeroSlide] {
        &self.parts.hero_slides
    }
}

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
