use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};

use crate::AppState;

/// The profile page itself. Rendered once at startup from the static
/// content record; every request serves the same document.
#[get("/")]
pub async fn profile_page(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(state.page_html.clone())
}
