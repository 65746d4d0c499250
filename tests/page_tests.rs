use actix_web::{test, web, App};

use profile_site::{routes::configure_routes, settings::AppConfig, AppState};

fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(&AppConfig::default()))
}

#[actix_web::test]
async fn profile_page_serves_html_with_stable_anchors() {
    let app =
        test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = test::read_body(resp).await;
    let body = std::str::from_utf8(&body).expect("page is valid UTF-8");

    // the three anchors are a stable contract for external navigation
    for anchor in [
        r#"<section id="timeline""#,
        r#"<section id="education""#,
        r#"<section id="contact""#,
    ] {
        assert!(body.contains(anchor), "missing {anchor}");
    }
    for nav_link in [r##"href="#timeline""##, r##"href="#education""##, r##"href="#contact""##] {
        assert!(body.contains(nav_link), "missing nav link {nav_link}");
    }
}

#[actix_web::test]
async fn page_renders_content_and_derivations() {
    let app =
        test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = std::str::from_utf8(&body).expect("page is valid UTF-8");

    assert!(body.contains("Michal Sousedík"));
    assert!(body.contains(r#"<div class="avatar-badge">MS</div>"#));

    // only the ongoing role carries the emphasis badge
    assert_eq!(body.matches("badge-current").count(), 1);
    assert!(body.contains("Oct 2020 → Present"));

    // description prose split into bullets, trailing periods stripped
    assert!(body.contains("<li>Co-created an engine for generating dynamic forms</li>"));

    // education details render uniformly without their authored markers
    assert!(!body.contains("<li>•"));
    assert!(body.contains("View Thesis"));
}

#[actix_web::test]
async fn page_emits_one_modal_surface_wired_to_gallery_tiles() {
    let app =
        test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = std::str::from_utf8(&body).expect("page is valid UTF-8");

    assert_eq!(body.matches(r#"id="image-modal""#).count(), 1);
    assert_eq!(body.matches("data-modal-src=").count(), 3);
    assert!(body.contains(r#"data-modal-alt="Thesis documentation 1""#));

    // server rendering has no visibility primitive: every block fails open
    assert!(body.contains(r#"id="timeline-0""#));
    assert!(!body.contains(r#"data-reveal="pending""#));
}
