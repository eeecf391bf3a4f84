//! The storefront's fixed inventory.

use shared::domain::{
    ArtAnchor, Artwork, ArtworkId, Category, Collection, CollectionId, FrameId, FrameOption,
    HeroSlide, Medium, RoomId, RoomTemplate,
};

use crate::CatalogParts;

pub const HERO_INTERVAL_MS: u64 = 7000;

struct ArtworkSeed {
    id: i64,
    title: &'static str,
    category: Category,
    medium: Medium,
    dimensions: &'static str,
    price: u64,
    available: bool,
    year: u16,
    description: &'static str,
    details: &'static [&'static str],
    related: &'static [i64],
}

const OIL_DETAILS: &[&str] = &[
    "Original oil painting on gallery-wrapped canvas",
    "Sides are painted (no framing required)",
    "Signed on the front and back",
    "Includes certificate of authenticity",
    "Ready to hang with wire backing",
];

const ACRYLIC_DETAILS: &[&str] = &[
    "Original acrylic painting on gallery-wrapped canvas",
    "Sides are painted (no framing required)",
    "Signed on the front and back",
    "Includes certificate of authenticity",
    "Ready to hang with wire backing",
];

const MIXED_MEDIA_DETAILS: &[&str] = &[
    "Original mixed media painting on gallery-wrapped canvas",
    "Incorporates acrylic paint, metallic leaf, and oil pastel",
    "Sides are painted (no framing required)",
    "Signed on the front and back",
    "Includes certificate of authenticity",
];

const ARTWORKS: &[ArtworkSeed] = &[
    ArtworkSeed {
        id: 1,
        title: "Ocean Dreams",
        category: Category::Abstract,
        medium: Medium::OilOnCanvas,
        dimensions: "36\" x 48\"",
        price: 1200,
        available: true,
        year: 2023,
        description: "Ocean Dreams captures the serene yet powerful essence of the sea. Layers of deep blues and turquoise blend with soft whites to evoke the feeling of waves crashing against the shore.",
        details: OIL_DETAILS,
        related: &[2, 4, 7],
    },
    ArtworkSeed {
        id: 2,
        title: "Mountain Sunset",
        category: Category::Landscape,
        medium: Medium::AcrylicOnCanvas,
        dimensions: "24\" x 36\"",
        price: 850,
        available: true,
        year: 2022,
        description: "Mountain Sunset captures the moment when the day's last light bathes the peaks in golden hues, in a palette of oranges, purples, and blues.",
        details: ACRYLIC_DETAILS,
        related: &[4, 6, 8],
    },
    ArtworkSeed {
        id: 3,
        title: "City Lights",
        category: Category::Urban,
        medium: Medium::MixedMedia,
        dimensions: "30\" x 40\"",
        price: 1100,
        available: false,
        year: 2023,
        description: "City Lights is an abstract interpretation of an urban landscape at night, where bright lights against a dark ground reflect the pulse of city life.",
        details: MIXED_MEDIA_DETAILS,
        related: &[5, 7, 8],
    },
    ArtworkSeed {
        id: 4,
        title: "Tranquil Forest",
        category: Category::Landscape,
        medium: Medium::OilOnCanvas,
        dimensions: "24\" x 30\"",
        price: 950,
        available: true,
        year: 2023,
        description: "Tranquil Forest invites viewers into a peaceful woodland dappled with sunlight, the composition leading the eye along a winding path through the trees.",
        details: OIL_DETAILS,
        related: &[2, 6, 8],
    },
    ArtworkSeed {
        id: 5,
        title: "Abstract Emotions",
        category: Category::Abstract,
        medium: Medium::AcrylicOnCanvas,
        dimensions: "36\" x 36\"",
        price: 1300,
        available: true,
        year: 2024,
        description: "Abstract Emotions layers bold gestural strokes over fields of warm color, recording a single afternoon of feeling in paint.",
        details: ACRYLIC_DETAILS,
        related: &[1, 3, 7],
    },
    ArtworkSeed {
        id: 6,
        title: "Desert Bloom",
        category: Category::Landscape,
        medium: Medium::OilOnCanvas,
        dimensions: "24\" x 36\"",
        price: 900,
        available: true,
        year: 2022,
        description: "Desert Bloom finds color in an arid landscape: a brief spring flowering set against sunbaked sand and a wide pale sky.",
        details: OIL_DETAILS,
        related: &[2, 4, 8],
    },
    ArtworkSeed {
        id: 7,
        title: "Abstract Composition IV",
        category: Category::Abstract,
        medium: Medium::MixedMedia,
        dimensions: "30\" x 30\"",
        price: 1050,
        available: true,
        year: 2024,
        description: "The fourth study in an ongoing series, balancing geometric blocks of color against loose, layered textures.",
        details: MIXED_MEDIA_DETAILS,
        related: &[1, 3, 5],
    },
    ArtworkSeed {
        id: 8,
        title: "Summer Reflections",
        category: Category::Landscape,
        medium: Medium::OilOnCanvas,
        dimensions: "40\" x 60\"",
        price: 1800,
        available: true,
        year: 2021,
        description: "Summer Reflections mirrors a lakeside afternoon in still water, the largest canvas in the current body of work.",
        details: OIL_DETAILS,
        related: &[2, 4, 6],
    },
];

fn artworks() -> Vec<Artwork> {
    ARTWORKS
        .iter()
        .map(|seed| Artwork {
            id: ArtworkId(seed.id),
            title: seed.title.to_string(),
            category: seed.category,
            medium: seed.medium,
            dimensions: seed.dimensions.to_string(),
            price: seed.price,
            images: vec![
                format!("/images/collections/collection-{}.png", seed.id),
                format!("/images/placeholder-{}-detail.jpg", seed.id),
                format!("/images/placeholder-{}-room.jpg", seed.id),
            ],
            available: seed.available,
            year: seed.year,
            description: seed.description.to_string(),
            details: seed.details.iter().map(|d| d.to_string()).collect(),
            related: seed.related.iter().copied().map(ArtworkId).collect(),
        })
        .collect()
}

fn collections() -> Vec<Collection> {
    [
        (1, "Abstract Collection", "Vibrant abstract works that evoke emotion through color and form.", 12, Some(Category::Abstract)),
        (2, "Landscape Collection", "Serene landscapes capturing the beauty of nature in various settings.", 9, Some(Category::Landscape)),
        (3, "Portrait Collection", "Expressive portraits that capture the essence of the human spirit.", 8, None),
        (4, "Impressionist Collection", "Works inspired by the impressionist movement, focusing on light and movement.", 10, None),
        (5, "Modern Collection", "Contemporary pieces that push boundaries and challenge perceptions.", 7, None),
        (6, "Expressionist Collection", "Bold expressions of inner emotions and experiences.", 6, None),
        (7, "Surrealist Collection", "Dreamlike scenes that blur the line between reality and imagination.", 5, None),
        (8, "Minimalist Collection", "Elegant simplicity with focus on essential elements and negative space.", 8, None),
    ]
    .into_iter()
    .map(|(id, title, description, item_count, category)| Collection {
        id: CollectionId(id),
        title: title.to_string(),
        description: description.to_string(),
        image: format!("/images/collections/collection-{id}.png"),
        item_count,
        category,
    })
    .collect()
}

fn rooms() -> Vec<RoomTemplate> {
    [
        (1, "Modern Living Room", "living-room", 38.0, 50.0, 40.0),
        (2, "Cozy Bedroom", "bedroom", 40.0, 50.0, 35.0),
        (3, "Home Office", "office", 35.0, 52.0, 38.0),
        (4, "Elegant Dining Room", "dining", 40.0, 50.0, 36.0),
    ]
    .into_iter()
    .map(|(id, name, file, top, left, width)| RoomTemplate {
        id: RoomId(id),
        name: name.to_string(),
        image: format!("/images/rooms/{file}.jpg"),
        anchor: ArtAnchor {
            top_percent: top,
            left_percent: left,
            width_percent: width,
        },
    })
    .collect()
}

fn frames() -> Vec<FrameOption> {
    [
        (FrameId::None, 0, "transparent", 0),
        (FrameId::ThinBlack, 10, "#000000", 2),
        (FrameId::ModernWhite, 15, "#ffffff", 3),
        (FrameId::ClassicGold, 20, "#D4AF37", 5),
        (FrameId::WoodBrown, 18, "#8B4513", 4),
    ]
    .into_iter()
    .map(|(id, border_width, border_color, padding)| FrameOption {
        id,
        name: id.label().to_string(),
        border_width,
        border_color: border_color.to_string(),
        padding,
    })
    .collect()
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            src: "/images/new-hero.jpg".into(),
            alt: "Brushes and Palettes - Featured Artwork".into(),
            width: 612,
            height: 612,
        },
        HeroSlide {
            src: "/images/hero.png".into(),
            alt: "Brushes and Palettes - Original Paintings".into(),
            width: 2852,
            height: 870,
        },
    ]
}

pub(crate) fn parts() -> CatalogParts {
    CatalogParts {
        artworks: artworks(),
        collections: collections(),
        rooms: rooms(),
        frames: frames(),
        hero_slides: hero_slides(),
    }
}
