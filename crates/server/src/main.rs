use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use catalog::Catalog;
use serde::Deserialize;
use shared::{
    domain::{ArtworkId, SessionId},
    error::{ApiError, ErrorCode},
    pages::Page,
    protocol::{
        AddToCartRequest, ArtworkDetailView, ArtworkDetails, ArtworkSelection, CartView,
        CheckoutForm, CollectionCard, ContactMessage, FrameSelection, GalleryQuery, GalleryView,
        HomeView, NudgeRequest, PersonalInfo, PromoRequest, RoomSelection, SessionCreated,
        SizeSelection, StaticPageView, SubmissionAccepted, VisualizeLandingView, VisualizerView,
        WizardView,
    },
};
use storefront::{HeroRotator, LoggingIntake};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use api::ApiContext;
use app_state::AppState;
use config::load_settings;

type Rejection = (StatusCode, Json<ApiError>);
type HttpResult<T> = Result<Json<T>, Rejection>;

/// Extractor failures rendered with the same `{code, message}` body as
/// every other error.
struct ExtractRejection(Rejection);

impl IntoResponse for ExtractRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<QueryRejection> for ExtractRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self((rejection.status(), Json(ApiError::validation(rejection.body_text()))))
    }
}

impl From<JsonRejection> for ExtractRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self((rejection.status(), Json(ApiError::validation(rejection.body_text()))))
    }
}

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ExtractRejection))]
struct ApiQuery<T>(T);

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ExtractRejection))]
struct ApiJson<T>(T);

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session_id: String,
}

impl SessionQuery {
    fn id(&self) -> Result<SessionId, Rejection> {
        api::parse_session_id(&self.session_id).map_err(reject)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    settings.validate()?;

    let catalog = Catalog::seeded();
    let hero = HeroRotator::start(
        catalog.hero_slides().to_vec(),
        settings.hero_interval(),
        settings.hero_fade(),
    )?;
    let api = ApiContext::new(catalog, Arc::new(LoggingIntake));
    let session_sweeper = api
        .sessions
        .spawn_sweeper(settings.session_idle(), settings.session_sweep_period());
    let state = AppState {
        api,
        hero,
        session_sweeper,
        body_limit: settings.max_body_bytes,
    };
    let app = build_router(Arc::new(state));

    let addr = settings.socket_addr()?;
    info!(%addr, "storefront listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("storefront stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
    }
}

fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/healthz", get(healthz))
        .route(Page::Home.route(), get(home))
        .route(Page::Gallery.route(), get(gallery))
        .route(Page::ArtworkDetail.route(), get(artwork_detail))
        .route(Page::Collections.route(), get(collections))
        .route(Page::About.route(), get(about))
        .route(Page::Contact.route(), get(contact_page).post(submit_contact))
        .route(Page::TermsPrivacy.route(), get(terms_privacy))
        .route(Page::Visualize.route(), get(visualize_landing))
        .route("/sessions", post(create_session))
        .route("/sessions/:id", delete(end_session))
        .route(Page::Cart.route(), get(cart))
        .route("/cart/items", post(add_to_cart))
        .route("/cart/items/:id", delete(remove_from_cart))
        .route("/cart/promo", post(apply_promo))
        .route("/cart/checkout", post(proceed_to_checkout))
        .route("/cart/return", post(return_to_cart))
        .route("/cart/order", post(place_order))
        .route(Page::Custom.route(), get(wizard))
        .route("/custom/personal", put(set_personal))
        .route("/custom/details", put(set_details))
        .route("/custom/colors/:color", post(toggle_color))
        .route("/custom/next", post(wizard_next))
        .route("/custom/back", post(wizard_back))
        .route("/custom/submit", post(submit_commission))
        .route(Page::VisualizeArt.route(), get(visualizer))
        .route("/visualize-art/room", post(select_room))
        .route("/visualize-art/artwork", post(select_artwork))
        .route("/visualize-art/frame", post(select_frame))
        .route("/visualize-art/size", post(set_size))
        .route("/visualize-art/nudge", post(nudge))
        .route("/visualize-art/reset", post(reset_position))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Validation | ErrorCode::InvalidPromoCode => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidState => StatusCode::CONFLICT,
        ErrorCode::Upstream => StatusCode::BAD_GATEWAY,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ApiError) -> Rejection {
    (status_for(err.code), Json(err))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(State(state): State<Arc<AppState>>) -> Json<HomeView> {
    Json(api::home(&state.api, state.hero.current()))
}

async fn gallery(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<GalleryQuery>,
) -> HttpResult<GalleryView> {
    api::gallery(&state.api, &query).map(Json).map_err(reject)
}

async fn artwork_detail(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> HttpResult<ArtworkDetailView> {
    api::artwork_detail(&state.api, &raw_id)
        .map(Json)
        .map_err(reject)
}

async fn collections(State(state): State<Arc<AppState>>) -> Json<Vec<CollectionCard>> {
    Json(api::collections(&state.api))
}

async fn about() -> Json<StaticPageView> {
    Json(api::static_page(Page::About))
}

async fn contact_page() -> Json<StaticPageView> {
    Json(api::static_page(Page::Contact))
}

async fn terms_privacy() -> Json<StaticPageView> {
    Json(api::static_page(Page::TermsPrivacy))
}

async fn visualize_landing(State(state): State<Arc<AppState>>) -> Json<VisualizeLandingView> {
    Json(api::visualize_landing(&state.api))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    ApiJson(message): ApiJson<ContactMessage>,
) -> HttpResult<SubmissionAccepted> {
    api::submit_contact(&state.api, message)
        .await
        .map(Json)
        .map_err(reject)
}

async fn create_session(State(state): State<Arc<AppState>>) -> HttpResult<SessionCreated> {
    api::create_session(&state.api)
        .await
        .map(Json)
        .map_err(reject)
}

async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, Rejection> {
    let id = api::parse_session_id(&raw_id).map_err(reject)?;
    api::end_session(&state.api, id).await.map_err(reject)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn cart(State(state): State<Arc<AppState>>, ApiQuery(q): ApiQuery<SessionQuery>) -> HttpResult<CartView> {
    api::cart(&state.api, q.id()?).await.map(Json).map_err(reject)
}

async fn add_to_cart(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<AddToCartRequest>,
) -> HttpResult<CartView> {
    api::add_to_cart(&state.api, q.id()?, req.artwork_id)
        .await
        .map(Json)
        .map_err(reject)
}

async fn remove_from_cart(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    Path(raw_id): Path<String>,
) -> HttpResult<CartView> {
    let artwork_id: ArtworkId = raw_id
        .parse()
        .map_err(|_| reject(ApiError::not_found("artwork is not in the cart")))?;
    api::remove_from_cart(&state.api, q.id()?, artwork_id)
        .await
        .map(Json)
        .map_err(reject)
}

async fn apply_promo(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<PromoRequest>,
) -> HttpResult<CartView> {
    api::apply_promo(&state.api, q.id()?, &req.code)
        .await
        .map(Json)
        .map_err(reject)
}

async fn proceed_to_checkout(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<CartView> {
    api::proceed_to_checkout(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn return_to_cart(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<CartView> {
    api::return_to_cart(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn place_order(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(form): ApiJson<CheckoutForm>,
) -> HttpResult<CartView> {
    api::place_order(&state.api, q.id()?, form)
        .await
        .map(Json)
        .map_err(reject)
}

async fn wizard(State(state): State<Arc<AppState>>, ApiQuery(q): ApiQuery<SessionQuery>) -> HttpResult<WizardView> {
    api::wizard(&state.api, q.id()?).await.map(Json).map_err(reject)
}

async fn set_personal(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(info): ApiJson<PersonalInfo>,
) -> HttpResult<WizardView> {
    api::set_personal(&state.api, q.id()?, info)
        .await
        .map(Json)
        .map_err(reject)
}

async fn set_details(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(details): ApiJson<ArtworkDetails>,
) -> HttpResult<WizardView> {
    api::set_details(&state.api, q.id()?, details)
        .await
        .map(Json)
        .map_err(reject)
}

async fn toggle_color(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    Path(color): Path<String>,
) -> HttpResult<WizardView> {
    api::toggle_color(&state.api, q.id()?, &color)
        .await
        .map(Json)
        .map_err(reject)
}

async fn wizard_next(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<WizardView> {
    api::wizard_next(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn wizard_back(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<WizardView> {
    api::wizard_back(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn submit_commission(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<WizardView> {
    api::submit_commission(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn visualizer(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<VisualizerView> {
    api::visualizer(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

async fn select_room(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<RoomSelection>,
) -> HttpResult<VisualizerView> {
    api::select_room(&state.api, q.id()?, req.room_id)
        .await
        .map(Json)
        .map_err(reject)
}

async fn select_artwork(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<ArtworkSelection>,
) -> HttpResult<VisualizerView> {
    api::select_artwork(&state.api, q.id()?, req.artwork_id)
        .await
        .map(Json)
        .map_err(reject)
}

async fn select_frame(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<FrameSelection>,
) -> HttpResult<VisualizerView> {
    api::select_frame(&state.api, q.id()?, req.frame)
        .await
        .map(Json)
        .map_err(reject)
}

async fn set_size(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<SizeSelection>,
) -> HttpResult<VisualizerView> {
    api::set_size(&state.api, q.id()?, req.percent)
        .await
        .map(Json)
        .map_err(reject)
}

async fn nudge(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
    ApiJson(req): ApiJson<NudgeRequest>,
) -> HttpResult<VisualizerView> {
    api::nudge(&state.api, q.id()?, req.direction)
        .await
        .map(Json)
        .map_err(reject)
}

async fn reset_position(
    State(state): State<Arc<AppState>>,
    ApiQuery(q): ApiQuery<SessionQuery>,
) -> HttpResult<VisualizerView> {
    api::reset_position(&state.api, q.id()?)
        .await
        .map(Json)
        .map_err(reject)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
