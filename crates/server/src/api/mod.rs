use std::sync::Arc;

use catalog::{
    gallery::{self, GallerySelection},
    Catalog,
};
use shared::{
    domain::{
        ArtworkId, ColorPreference, FrameId, NudgeDirection, RoomId, SessionId, UnknownVariant,
    },
    error::{ApiError, ErrorCode},
    pages::Page,
    protocol::{
        ArtworkDetailView, ArtworkDetails, ArtworkSummary, CartView, CheckoutForm, CollectionCard,
        ContactMessage, GalleryQuery, GalleryView, HeroFrame, HomeView, PersonalInfo,
        SessionCreated, StaticPageView, SubmissionAccepted, VisualizeLandingView, VisualizerView,
        WizardView,
    },
};
use storefront::{contact, FlowError, OrderIntake, Session, Sessions};
use tracing::{debug, warn};

pub const FEATURED_COLLECTIONS: usize = 3;

#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Catalog,
    pub sessions: Sessions,
    pub intake: Arc<dyn OrderIntake>,
}

impl ApiContext {
    pub fn new(catalog: Catalog, intake: Arc<dyn OrderIntake>) -> Self {
        Self {
            catalog,
            sessions: Sessions::new(),
            intake,
        }
    }
}

fn rejected(err: FlowError) -> ApiError {
    match err.code() {
        ErrorCode::Upstream | ErrorCode::Internal => warn!(error = %err, "request failed"),
        _ => debug!(error = %err, "request rejected"),
    }
    err.into()
}

pub fn parse_session_id(raw: &str) -> Result<SessionId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::validation(format!("invalid session id '{raw}'")))
}

async fn with_session<T>(
    ctx: &ApiContext,
    id: SessionId,
    action: impl FnOnce(&mut Session, &Catalog) -> Result<T, FlowError>,
) -> Result<T, ApiError> {
    let session = ctx.sessions.get(id).await.map_err(rejected)?;
    let mut session = session.lock().await;
    action(&mut *session, &ctx.catalog).map_err(rejected)
}

pub fn home(ctx: &ApiContext, hero: Option<HeroFrame>) -> HomeView {
    HomeView {
        hero,
        featured_collections: ctx
            .catalog
            .collections()
            .iter()
            .take(FEATURED_COLLECTIONS)
            .map(CollectionCard::from)
            .collect(),
    }
}

pub fn gallery(ctx: &ApiContext, query: &GalleryQuery) -> Result<GalleryView, ApiError> {
    let selection = GallerySelection::from_query(&ctx.catalog, query)
        .map_err(|e| ApiError::validation(e.to_string()))?;
    Ok(gallery::browse(&ctx.catalog, &selection))
}

pub fn artwork_detail(ctx: &ApiContext, raw_id: &str) -> Result<ArtworkDetailView, ApiError> {
    let artwork = raw_id
        .parse::<ArtworkId>()
        .ok()
        .and_then(|id| ctx.catalog.artwork(id))
        .ok_or_else(|| ApiError::not_found("artwork not found"))?;
    Ok(ArtworkDetailView {
        artwork: artwork.clone(),
        related: ctx
            .catalog
            .related(artwork)
            .into_iter()
            .map(ArtworkSummary::from)
            .collect(),
    })
}

pub fn collections(ctx: &ApiContext) -> Vec<CollectionCard> {
    ctx.catalog
        .collections()
        .iter()
        .map(CollectionCard::from)
        .collect()
}

pub fn static_page(page: Page) -> StaticPageView {
    let summary = match page {
        Page::About => "The artist's story, studio practice and exhibition history.",
        Page::TermsPrivacy => "Terms of sale, shipping and returns, and how customer data is handled.",
        Page::Contact => "Questions about a piece, a commission or an exhibition.",
        _ => "",
    };
    StaticPageView {
        title: page.title().to_string(),
        summary: summary.to_string(),
    }
}

pub fn visualize_landing(ctx: &ApiContext) -> VisualizeLandingView {
    VisualizeLandingView {
        title: Page::Visualize.title().to_string(),
        summary: "Preview any piece on one of our room templates before you buy.".to_string(),
        rooms: ctx.catalog.rooms().to_vec(),
        visualizer_href: Page::VisualizeArt.route().to_string(),
    }
}

pub async fn create_session(ctx: &ApiContext) -> Result<SessionCreated, ApiError> {
    let session_id = ctx.sessions.create(&ctx.catalog).await.map_err(rejected)?;
    Ok(SessionCreated { session_id })
}

pub async fn end_session(ctx: &ApiContext, id: SessionId) -> Result<(), ApiError> {
    if ctx.sessions.remove(id).await {
        Ok(())
    } else {
        Err(rejected(FlowError::UnknownSession(id)))
    }
}

pub async fn cart(ctx: &ApiContext, id: SessionId) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, _| Ok(s.cart.view())).await
}

pub async fn add_to_cart(ctx: &ApiContext, id: SessionId, artwork_id: ArtworkId) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        let artwork = catalog
            .artwork(artwork_id)
            .ok_or(FlowError::UnknownArtwork(artwork_id))?;
        s.cart.add(artwork)?;
        Ok(s.cart.view())
    })
    .await
}

pub async fn remove_from_cart(
    ctx: &ApiContext,
    id: SessionId,
    artwork_id: ArtworkId,
) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.cart.remove(artwork_id)?;
        Ok(s.cart.view())
    })
    .await
}

pub async fn apply_promo(ctx: &ApiContext, id: SessionId, code: &str) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.cart.apply_promo(code)?;
        Ok(s.cart.view())
    })
    .await
}

pub async fn proceed_to_checkout(ctx: &ApiContext, id: SessionId) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.cart.proceed_to_checkout()?;
        Ok(s.cart.view())
    })
    .await
}

pub async fn return_to_cart(ctx: &ApiContext, id: SessionId) -> Result<CartView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.cart.return_to_cart()?;
        Ok(s.cart.view())
    })
    .await
}

/// The session stays locked across the intake call, so a visitor cannot
/// change the cart while their order is in flight.
pub async fn place_order(ctx: &ApiContext, id: SessionId, form: CheckoutForm) -> Result<CartView, ApiError> {
    let session = ctx.sessions.get(id).await.map_err(rejected)?;
    let mut session = session.lock().await;
    session
        .cart
        .place_order(form, ctx.intake.as_ref())
        .await
        .map_err(rejected)?;
    Ok(session.cart.view())
}

pub async fn wizard(ctx: &ApiContext, id: SessionId) -> Result<WizardView, ApiError> {
    with_session(ctx, id, |s, _| Ok(s.wizard.view())).await
}

pub async fn set_personal(ctx: &ApiContext, id: SessionId, info: PersonalInfo) -> Result<WizardView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.wizard.set_personal(info)?;
        Ok(s.wizard.view())
    })
    .await
}

pub async fn set_details(ctx: &ApiContext, id: SessionId, details: ArtworkDetails) -> Result<WizardView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.wizard.set_details(details)?;
        Ok(s.wizard.view())
    })
    .await
}

pub async fn toggle_color(ctx: &ApiContext, id: SessionId, raw_color: &str) -> Result<WizardView, ApiError> {
    let color: ColorPreference = raw_color
        .parse()
        .map_err(|e: UnknownVariant| ApiError::validation(e.to_string()))?;
    with_session(ctx, id, |s, _| {
        s.wizard.toggle_color(color)?;
        Ok(s.wizard.view())
    })
    .await
}

pub async fn wizard_next(ctx: &ApiContext, id: SessionId) -> Result<WizardView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.wizard.next()?;
        Ok(s.wizard.view())
    })
    .await
}

pub async fn wizard_back(ctx: &ApiContext, id: SessionId) -> Result<WizardView, ApiError> {
    with_session(ctx, id, |s, _| {
        s.wizard.back()?;
        Ok(s.wizard.view())
    })
    .await
}

pub async fn submit_commission(ctx: &ApiContext, id: SessionId) -> Result<WizardView, ApiError> {
    let session = ctx.sessions.get(id).await.map_err(rejected)?;
    let mut session = session.lock().await;
    session
        .wizard
        .submit(ctx.intake.as_ref())
        .await
        .map_err(rejected)?;
    Ok(session.wizard.view())
}

pub async fn visualizer(ctx: &ApiContext, id: SessionId) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| Ok(s.visualizer.view(catalog))).await
}

pub async fn select_room(ctx: &ApiContext, id: SessionId, room_id: RoomId) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.select_room(catalog, room_id)?;
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn select_artwork(
    ctx: &ApiContext,
    id: SessionId,
    artwork_id: ArtworkId,
) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.select_artwork(catalog, artwork_id)?;
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn select_frame(ctx: &ApiContext, id: SessionId, frame: FrameId) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.select_frame(catalog, frame)?;
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn set_size(ctx: &ApiContext, id: SessionId, percent: u32) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.set_size(percent)?;
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn nudge(
    ctx: &ApiContext,
    id: SessionId,
    direction: NudgeDirection,
) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.nudge(direction);
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn reset_position(ctx: &ApiContext, id: SessionId) -> Result<VisualizerView, ApiError> {
    with_session(ctx, id, |s, catalog| {
        s.visualizer.reset_position();
        Ok(s.visualizer.view(catalog))
    })
    .await
}

pub async fn submit_contact(ctx: &ApiContext, message: ContactMessage) -> Result<SubmissionAccepted, ApiError> {
    let submitted_at = contact::submit_contact(&message, ctx.intake.as_ref())
        .await
        .map_err(rejected)?;
    Ok(SubmissionAccepted { submitted_at })
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
