use actix_web::{http::StatusCode, test, web, App};

use profile_site::{routes::configure_routes, settings::AppConfig, AppState};

fn app_state_with(config: &AppConfig) -> web::Data<AppState> {
    web::Data::new(AppState::new(config))
}

#[actix_web::test]
async fn profile_json_exposes_the_content_record() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_with(&AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/profile").to_request();
    let profile: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(profile["name"], "Michal Sousedík");
    assert_eq!(profile["timeline"].as_array().map(|t| t.len()), Some(3));
    assert_eq!(
        profile["education"][0]["images"].as_array().map(|i| i.len()),
        Some(3)
    );
    assert_eq!(profile["email"], serde_json::Value::Null);
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_with(&AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn asset_requests_cannot_escape_the_assets_dir() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_with(&AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/assets/../Cargo.toml")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_assets_return_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(app_state_with(&AppConfig::default()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/assets/not-there.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn assets_are_served_with_a_detected_content_type() {
    let dir = std::env::temp_dir().join("profile_site_assets_test");
    std::fs::create_dir_all(&dir).expect("create temp assets dir");
    std::fs::write(dir.join("styles.css"), "body { margin: 0; }").expect("write stylesheet");

    let config = AppConfig {
        assets_dir: dir.to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    let app = test::init_service(
        App::new()
            .app_data(app_state_with(&config))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/assets/styles.css").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/css")
    );
}
