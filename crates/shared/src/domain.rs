use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                raw.trim().parse::<i64>().map(Self)
            }
        }
    };
}

id_newtype!(ArtworkId);
id_newtype!(CollectionId);
id_newtype!(RoomId);

/// Opaque handle for one visitor's session-scoped state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(raw.trim()).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Closed option set with a wire slug and a display label. Parsing accepts
/// either, case-insensitively.
macro_rules! labeled_enum {
    ($name:ident { $($variant:ident => ($slug:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $slug)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn slug(self) -> &'static str {
                match self {
                    $($name::$variant => $slug),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.slug().eq_ignore_ascii_case(raw) || v.label().eq_ignore_ascii_case(raw))
                    .ok_or_else(|| UnknownVariant {
                        kind: stringify!($name),
                        value: raw.to_string(),
                    })
            }
        }
    };
}

labeled_enum!(Category {
    Abstract => ("abstract", "Abstract"),
    Landscape => ("landscape", "Landscape"),
    Urban => ("urban", "Urban"),
});

labeled_enum!(Medium {
    OilOnCanvas => ("oil-on-canvas", "Oil on Canvas"),
    AcrylicOnCanvas => ("acrylic-on-canvas", "Acrylic on Canvas"),
    MixedMedia => ("mixed-media", "Mixed Media"),
});

labeled_enum!(Availability {
    All => ("all", "All"),
    Available => ("available", "Available"),
    Sold => ("sold", "Sold"),
});

impl Default for Availability {
    fn default() -> Self {
        Self::All
    }
}

labeled_enum!(SortOrder {
    Featured => ("featured", "Featured"),
    Newest => ("newest", "Newest"),
    PriceLow => ("price-low", "Price: Low to High"),
    PriceHigh => ("price-high", "Price: High to Low"),
});

impl Default for SortOrder {
    fn default() -> Self {
        Self::Featured
    }
}

labeled_enum!(FrameId {
    None => ("none", "No Frame"),
    ThinBlack => ("thin-black", "Thin Black"),
    ModernWhite => ("modern-white", "Modern White"),
    ClassicGold => ("classic-gold", "Classic Gold"),
    WoodBrown => ("wood-brown", "Wood Brown"),
});

impl Default for FrameId {
    fn default() -> Self {
        Self::None
    }
}

labeled_enum!(NudgeDirection {
    Up => ("up", "Up"),
    Down => ("down", "Down"),
    Left => ("left", "Left"),
    Right => ("right", "Right"),
});

labeled_enum!(ArtType {
    Landscape => ("landscape", "Landscape"),
    Abstract => ("abstract", "Abstract"),
    Portrait => ("portrait", "Portrait"),
    StillLife => ("still-life", "Still Life"),
    Conceptual => ("conceptual", "Conceptual"),
    Other => ("other", "Other (specify in description)"),
});

labeled_enum!(CanvasSize {
    Small => ("small", "Small (up to 18\" x 24\")"),
    Medium => ("medium", "Medium (24\" x 36\")"),
    Large => ("large", "Large (36\" x 48\")"),
    ExtraLarge => ("extra-large", "Extra Large (48\"+ dimension)"),
    Custom => ("custom", "Custom (specify in description)"),
});

labeled_enum!(BudgetRange {
    Under500 => ("under-500", "Under $500"),
    From500To1000 => ("500-1000", "$500 - $1,000"),
    From1000To2000 => ("1000-2000", "$1,000 - $2,000"),
    From2000To3000 => ("2000-3000", "$2,000 - $3,000"),
    Over3000 => ("3000-plus", "$3,000+"),
});

labeled_enum!(Timeline {
    Flexible => ("flexible", "Flexible"),
    OneToTwoMonths => ("1-2-months", "1-2 months"),
    ThreeToFourMonths => ("3-4-months", "3-4 months"),
    Asap => ("asap", "As soon as possible"),
});

labeled_enum!(ColorPreference {
    Blues => ("blues", "Blues"),
    Greens => ("greens", "Greens"),
    Reds => ("reds", "Reds"),
    Yellows => ("yellows", "Yellows"),
    Purples => ("purples", "Purples"),
    Neutrals => ("neutrals", "Neutrals"),
    Bright => ("bright-colors", "Bright colors"),
    Muted => ("muted-colors", "Muted colors"),
    Monochromatic => ("monochromatic", "Monochromatic"),
});

labeled_enum!(ContactSubject {
    General => ("general", "General Inquiry"),
    Purchase => ("purchase", "Artwork Purchase"),
    Commission => ("commission", "Commission Information"),
    Exhibition => ("exhibition", "Exhibition Opportunity"),
    Other => ("other", "Other"),
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub category: Category,
    pub medium: Medium,
    pub dimensions: String,
    pub price: u64,
    pub images: Vec<String>,
    pub available: bool,
    pub year: u16,
    pub description: String,
    pub details: Vec<String>,
    pub related: Vec<ArtworkId>,
}

impl Artwork {
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub item_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Where artwork is hung on a room template, as percentages of the room image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtAnchor {
    pub top_percent: f64,
    pub left_percent: f64,
    pub width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub id: RoomId,
    pub name: String,
    pub image: String,
    pub anchor: ArtAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameOption {
    pub id: FrameId,
    pub name: String,
    pub border_width: u32,
    pub border_color: String,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ArtworkId,
    pub title: String,
    pub image: String,
    pub price: u64,
    pub size: String,
    pub medium: Medium,
}

impl From<&Artwork> for CartItem {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            image: artwork.primary_image().to_string(),
            price: artwork.price,
            size: artwork.dimensions.clone(),
            medium: artwork.medium,
        }
    }
}

pub const DEFAULT_PRICE_MIN: u64 = 0;
pub const DEFAULT_PRICE_MAX: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl PriceRange {
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Gallery filter selections. Empty sets and `Availability::All` impose no
/// restriction; the two price bounds move independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub mediums: Vec<Medium>,
    #[serde(default)]
    pub price: PriceRange,
    #[serde(default)]
    pub availability: Availability,
}

impl FilterState {
    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_medium(&mut self, medium: Medium) {
        toggle(&mut self.mediums, medium);
    }

    pub fn set_price(&mut self, min: u64, max: u64) {
        self.price = PriceRange { min, max };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + self.mediums.len()
            + usize::from(self.availability != Availability::All)
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&artwork.category) {
            return false;
        }
        if !self.mediums.is_empty() && !self.mediums.contains(&artwork.medium) {
            return false;
        }
        if !self.price.contains(artwork.price) {
            return false;
        }
        match self.availability {
            Availability::All => true,
            Availability::Available => artwork.available,
            Availability::Sold => !artwork.available,
        }
    }
}

/// Adds `value` when absent, removes it when present. Keeps insertion order.
pub fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}
