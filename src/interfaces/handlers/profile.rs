use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

/// Read-only JSON view of the content record.
#[get("/profile")]
pub async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.profile)
}
