use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        ArtType, Artwork, ArtworkId, BudgetRange, CanvasSize, CartItem, Category, Collection,
        CollectionId, ColorPreference, ContactSubject, FilterState, FrameId, FrameOption,
        HeroSlide, Medium, NudgeDirection, RoomId, RoomTemplate, SessionId, SortOrder, Timeline,
    },
    pages::{artwork_href, gallery_collection_href},
};

/// Raw `/gallery` query string. List values are comma-separated slugs or labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
    pub medium: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub availability: Option<String>,
    pub sort: Option<String>,
    pub collection: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSummary {
    pub id: ArtworkId,
    pub title: String,
    pub category: Category,
    pub medium: Medium,
    pub dimensions: String,
    pub price: u64,
    pub image: String,
    pub available: bool,
    pub href: String,
}

impl From<&Artwork> for ArtworkSummary {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            category: artwork.category,
            medium: artwork.medium,
            dimensions: artwork.dimensions.clone(),
            price: artwork.price,
            image: artwork.primary_image().to_string(),
            available: artwork.available,
            href: artwork_href(artwork.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryView {
    pub items: Vec<ArtworkSummary>,
    pub categories: Vec<Category>,
    pub mediums: Vec<Medium>,
    pub filter: FilterState,
    pub sort: SortOrder,
    pub active_filter_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkDetailView {
    pub artwork: Artwork,
    pub related: Vec<ArtworkSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCard {
    #[serde(flatten)]
    pub collection: Collection,
    pub href: String,
}

impl From<&Collection> for CollectionCard {
    fn from(collection: &Collection) -> Self {
        Self {
            collection: collection.clone(),
            href: gallery_collection_href(collection.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroFrame {
    pub active_index: usize,
    pub next_index: usize,
    pub transitioning: bool,
    pub active: HeroSlide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<HeroSlide>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub hero: Option<HeroFrame>,
    pub featured_collections: Vec<CollectionCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticPageView {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizeLandingView {
    pub title: String,
    pub summary: String,
    pub rooms: Vec<RoomTemplate>,
    pub visualizer_href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: SessionId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    Cart,
    Checkout,
    Confirmation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub artwork_id: ArtworkId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoRequest {
    pub code: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: u64,
    pub discount: u64,
    pub shipping: u64,
    pub tax: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub card_name: String,
    pub card_number: String,
    pub exp_date: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub email: String,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub step: CheckoutStep,
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub promo_applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<OrderConfirmation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    ArtworkDetails,
    Review,
    Success,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkDetails {
    pub art_type: Option<ArtType>,
    pub size: Option<CanvasSize>,
    pub theme: String,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRequest {
    pub personal: PersonalInfo,
    pub details: ArtworkDetails,
    pub colors: Vec<ColorPreference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardView {
    pub step: WizardStep,
    pub request: CommissionRequest,
    pub can_go_back: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<ContactSubject>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionAccepted {
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSelection {
    pub room_id: RoomId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkSelection {
    pub artwork_id: ArtworkId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSelection {
    pub frame: FrameId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeSelection {
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NudgeRequest {
    pub direction: NudgeDirection,
}

/// Pixel delta from a room's anchor point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameEnvelope {
    pub border_width: u32,
    pub border_color: String,
    pub padding: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matte: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayout {
    pub top_percent: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    pub offset: Offset,
    pub envelope: FrameEnvelope,
    pub css: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizerView {
    pub room: RoomTemplate,
    pub artwork: ArtworkSummary,
    pub frame: FrameOption,
    pub size_percent: u32,
    pub offset: Offset,
    pub layout: OverlayLayout,
    pub rooms: Vec<RoomTemplate>,
    pub frames: Vec<FrameOption>,
}
