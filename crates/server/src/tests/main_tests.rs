use super::*;
use async_trait::async_trait;
use axum::{body, body::Body, http::Request};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use shared::protocol::CommissionRequest;
use storefront::{OrderIntake, OrderReceipt, OrderSubmission};
use tower::ServiceExt;

struct UnavailableIntake;

#[async_trait]
impl OrderIntake for UnavailableIntake {
    async fn submit_order(&self, _order: &OrderSubmission) -> anyhow::Result<OrderReceipt> {
        anyhow::bail!("order desk offline")
    }

    async fn submit_commission(&self, _request: &CommissionRequest) -> anyhow::Result<DateTime<Utc>> {
        anyhow::bail!("order desk offline")
    }

    async fn submit_contact(&self, _message: &ContactMessage) -> anyhow::Result<DateTime<Utc>> {
        anyhow::bail!("order desk offline")
    }
}

fn test_app_with(intake: Arc<dyn storefront::OrderIntake>, body_limit: usize) -> Router {
    let catalog = Catalog::seeded();
    let hero = HeroRotator::start(
        catalog.hero_slides().to_vec(),
        std::time::Duration::from_millis(7000),
        std::time::Duration::from_millis(1000),
    )
    .expect("hero");
    let api = ApiContext::new(catalog, intake);
    let session_sweeper = api
        .sessions
        .spawn_sweeper(std::time::Duration::from_secs(1800), std::time::Duration::from_secs(60));
    build_router(Arc::new(AppState {
        api,
        hero,
        session_sweeper,
        body_limit,
    }))
}

fn test_app() -> Router {
    test_app_with(Arc::new(LoggingIntake), 64 * 1024)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).expect("request")).await
}

async fn post_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    send(app, request).await
}

async fn put_json(app: &Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    send(app, request).await
}

async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::post(uri).body(Body::empty()).expect("request")).await
}

async fn new_session(app: &Router) -> String {
    let (status, body) = post_empty(app, "/sessions").await;
    assert_eq!(status, StatusCode::OK);
    body["session_id"].as_str().expect("session id").to_string()
}

fn checkout_form() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "ada@example.com",
        "phone": "505-555-0100",
        "address": "12 Gallery Row",
        "city": "Santa Fe",
        "state": "NM",
        "zip": "87501",
        "country": "US",
        "card_name": "Ada Lovelace",
        "card_number": "4242424242424242",
        "exp_date": "12/29",
        "cvv": "123"
    })
}

fn ids(items: &Value) -> Vec<i64> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app();
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn home_shows_first_hero_slide_and_featured_collections() {
    let app = test_app();
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hero"]["active_index"], 0);
    assert_eq!(body["hero"]["transitioning"], false);
    assert_eq!(body["featured_collections"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn static_pages_return_titles() {
    let app = test_app();
    for (uri, title) in [
        ("/about", "About the Artist"),
        ("/terms-privacy", "Terms & Privacy"),
        ("/contact", "Contact Us"),
        ("/visualize", "Visualize Art in Your Space"),
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["title"], title);
    }
    let (status, body) = get_json(&app, "/collections").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn gallery_filters_and_sorts_from_query() {
    let app = test_app();
    let (status, body) = get_json(&app, "/gallery?category=landscape&sort=price-low").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["items"]), vec![2, 6, 4, 8]);
    assert_eq!(body["active_filter_count"], 1);

    let (status, body) = get_json(&app, "/gallery?max_price=1000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["items"]), vec![2, 4, 6]);

    let (status, body) = get_json(&app, "/gallery?collection=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collection"], 1);

    let (status, body) = get_json(&app, "/gallery?medium=watercolor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");
}

#[tokio::test]
async fn unknown_artwork_is_not_found() {
    let app = test_app();
    for uri in ["/gallery/999", "/gallery/not-a-number"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], "artwork not found");
    }
    let (status, body) = get_json(&app, "/gallery/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["artwork"]["title"], "Tranquil Forest");
}

#[tokio::test]
async fn session_routes_require_a_known_session() {
    let app = test_app();
    let (status, body) = get_json(&app, "/cart").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");

    let (status, body) = get_json(&app, "/cart?session_id=nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");

    let unknown = SessionId::new();
    let (status, body) = get_json(&app, &format!("/cart?session_id={unknown}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[tokio::test]
async fn malformed_queries_and_bodies_get_api_errors() {
    let app = test_app();
    let (status, body) = get_json(&app, "/gallery?min_price=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");

    let (status, body) = get_json(&app, "/gallery?collection=summer").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");

    let sid = new_session(&app).await;
    let request = Request::post(format!("/cart/items?session_id={sid}"))
        .header("content-type", "application/json")
        .body(Body::from("{\"artwork_id\":"))
        .expect("request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn ended_sessions_are_forgotten() {
    let app = test_app();
    let sid = new_session(&app).await;
    let uri = format!("/sessions/{sid}");

    let (status, _) = send(&app, Request::delete(uri.as_str()).body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get_json(&app, &format!("/cart?session_id={sid}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");

    let (status, _) = send(&app, Request::delete(uri.as_str()).body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Request::delete("/sessions/nope").body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_over_http_confirms_the_order() {
    let app = test_app();
    let sid = new_session(&app).await;

    for artwork_id in [1, 4] {
        let (status, _) = post_json(&app, &format!("/cart/items?session_id={sid}"), json!({ "artwork_id": artwork_id })).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = get_json(&app, &format!("/cart?session_id={sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["total"], 2351);

    let (status, body) = post_json(&app, &format!("/cart/promo?session_id={sid}"), json!({ "code": "WRONG" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_promo_code");

    let (status, body) = post_json(&app, &format!("/cart/promo?session_id={sid}"), json!({ "code": "art10" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["total"], 2120);

    let (status, body) = post_empty(&app, &format!("/cart/checkout?session_id={sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "checkout");

    let (status, body) = post_json(&app, &format!("/cart/order?session_id={sid}"), json!({ "email": "ada@example.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["fields"].as_array().expect("fields").contains(&json!("first_name")));

    let (status, body) = post_json(&app, &format!("/cart/order?session_id={sid}"), checkout_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "confirmation");
    assert_eq!(body["confirmation"]["totals"]["total"], 2120);
    assert!(body["confirmation"]["order_number"]
        .as_str()
        .expect("order number")
        .starts_with("ART-"));

    let (status, body) = post_json(&app, &format!("/cart/items?session_id={sid}"), json!({ "artwork_id": 2 })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "invalid_state");
}

#[tokio::test]
async fn cart_item_removal_keeps_order() {
    let app = test_app();
    let sid = new_session(&app).await;
    for artwork_id in [1, 2, 4] {
        post_json(&app, &format!("/cart/items?session_id={sid}"), json!({ "artwork_id": artwork_id })).await;
    }
    let request = Request::delete(format!("/cart/items/2?session_id={sid}"))
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["items"]), vec![1, 4]);

    let request = Request::delete(format!("/cart/items/2?session_id={sid}"))
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_cart_cannot_check_out() {
    let app = test_app();
    let sid = new_session(&app).await;
    let (status, body) = post_empty(&app, &format!("/cart/checkout?session_id={sid}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "cart is empty");
}

#[tokio::test]
async fn intake_failure_is_a_bad_gateway_and_keeps_checkout() {
    let app = test_app_with(Arc::new(UnavailableIntake), 64 * 1024);
    let sid = new_session(&app).await;
    post_json(&app, &format!("/cart/items?session_id={sid}"), json!({ "artwork_id": 6 })).await;
    post_empty(&app, &format!("/cart/checkout?session_id={sid}")).await;

    let (status, body) = post_json(&app, &format!("/cart/order?session_id={sid}"), checkout_form()).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "upstream");

    let (_, body) = get_json(&app, &format!("/cart?session_id={sid}")).await;
    assert_eq!(body["step"], "checkout");
}

#[tokio::test]
async fn wizard_walks_to_success() {
    let app = test_app();
    let sid = new_session(&app).await;

    let (status, body) = post_empty(&app, &format!("/custom/next?session_id={sid}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["name", "email"]));

    put_json(&app, &format!("/custom/personal?session_id={sid}"), json!({ "name": "Grace", "email": "grace@example.com" })).await;
    let (_, body) = post_empty(&app, &format!("/custom/next?session_id={sid}")).await;
    assert_eq!(body["step"], "artwork_details");
    assert_eq!(body["can_go_back"], true);

    let (status, body) = put_json(
        &app,
        &format!("/custom/details?session_id={sid}"),
        json!({
            "art_type": "abstract",
            "size": "large",
            "theme": "Tides",
            "budget": "1000-2000",
            "timeline": "flexible",
            "description": "Layered blues"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let (status, body) = post_empty(&app, &format!("/custom/colors/blues?session_id={sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["request"]["colors"], json!(["blues"]));

    let (_, body) = post_empty(&app, &format!("/custom/next?session_id={sid}")).await;
    assert_eq!(body["step"], "review");
    let (status, body) = post_empty(&app, &format!("/custom/submit?session_id={sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["step"], "success");

    let (status, _) = post_empty(&app, &format!("/custom/back?session_id={sid}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn visualizer_nudges_and_resets_on_room_change() {
    let app = test_app();
    let sid = new_session(&app).await;

    for _ in 0..4 {
        post_json(&app, &format!("/visualize-art/nudge?session_id={sid}"), json!({ "direction": "right" })).await;
    }
    let (status, body) = get_json(&app, &format!("/visualize-art?session_id={sid}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offset"], json!({ "x": 20, "y": 0 }));

    post_json(&app, &format!("/visualize-art/artwork?session_id={sid}"), json!({ "artwork_id": 4 })).await;
    post_json(&app, &format!("/visualize-art/frame?session_id={sid}"), json!({ "frame": "classic-gold" })).await;
    post_json(&app, &format!("/visualize-art/size?session_id={sid}"), json!({ "percent": 130 })).await;

    let (status, body) = post_json(&app, &format!("/visualize-art/room?session_id={sid}"), json!({ "room_id": 2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offset"], json!({ "x": 0, "y": 0 }));
    assert_eq!(body["artwork"]["id"], 4);
    assert_eq!(body["frame"]["id"], "classic-gold");
    assert_eq!(body["size_percent"], 130);

    let (status, body) = post_json(&app, &format!("/visualize-art/frame?session_id={sid}"), json!({ "frame": "modern-white" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"]["envelope"]["matte"], "#f8f8f8");

    let (status, _) = post_json(&app, &format!("/visualize-art/size?session_id={sid}"), json!({ "percent": 200 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, &format!("/visualize-art/artwork?session_id={sid}"), json!({ "artwork_id": 404 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_form_validates_and_accepts() {
    let app = test_app();
    let (status, body) = post_json(&app, "/contact", json!({ "name": "Ada" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"], json!(["email", "subject", "message"]));

    let (status, body) = post_json(
        &app,
        "/contact",
        json!({ "name": "Ada", "email": "ada@example.com", "subject": "purchase", "message": "Is Ocean Dreams framed?" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["submitted_at"].is_string());
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let app = test_app_with(Arc::new(LoggingIntake), 32);
    let payload = json!({ "name": "Ada", "email": "ada@example.com", "subject": "other", "message": "x".repeat(256) }).to_string();
    let request = Request::post("/contact")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .expect("request");
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
