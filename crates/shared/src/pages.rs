//! Navigable page routes of the storefront and the links between them.

use crate::domain::{ArtworkId, CollectionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Gallery,
    ArtworkDetail,
    Collections,
    About,
    Contact,
    Custom,
    Cart,
    Visualize,
    VisualizeArt,
    TermsPrivacy,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Home,
        Page::Gallery,
        Page::ArtworkDetail,
        Page::Collections,
        Page::About,
        Page::Contact,
        Page::Custom,
        Page::Cart,
        Page::Visualize,
        Page::VisualizeArt,
        Page::TermsPrivacy,
    ];

    /// Route pattern in the router's path syntax.
    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Gallery => "/gallery",
            Page::ArtworkDetail => "/gallery/:id",
            Page::Collections => "/collections",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Custom => "/custom",
            Page::Cart => "/cart",
            Page::Visualize => "/visualize",
            Page::VisualizeArt => "/visualize-art",
            Page::TermsPrivacy => "/terms-privacy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Gallery => "Art Gallery",
            Page::ArtworkDetail => "Artwork",
            Page::Collections => "Collections",
            Page::About => "About the Artist",
            Page::Contact => "Contact Us",
            Page::Custom => "Custom Artwork",
            Page::Cart => "Your Shopping Cart",
            Page::Visualize => "Visualize Art in Your Space",
            Page::VisualizeArt => "Room Visualizer",
            Page::TermsPrivacy => "Terms & Privacy",
        }
    }

    /// Resolves a request path (query string and trailing slash ignored) to the
    /// page that serves it.
    pub fn resolve(path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(Page::Home);
        }

        if let Some(rest) = trimmed.strip_prefix("/gallery/") {
            return (!rest.is_empty() && !rest.contains('/')).then_some(Page::ArtworkDetail);
        }

        Page::ALL
            .iter()
            .copied()
            .filter(|page| *page != Page::Home && *page != Page::ArtworkDetail)
            .find(|page| page.route() == trimmed)
    }
}

pub fn artwork_href(id: ArtworkId) -> String {
    format!("/gallery/{}", id.0)
}

pub fn gallery_collection_href(id: CollectionId) -> String {
    format!("/gallery?collection={}", id.0)
}
