use actix_web::{get, web, HttpResponse};

use crate::{errors::AppError, utils::assets::read_asset, AppState};

/// Serves static assets (profile photo, thesis images, stylesheet) from the
/// configured assets directory. Remote image URLs in the content record
/// never reach this handler.
#[get("/assets/{path:.*}")]
pub async fn serve_asset(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let asset = read_asset(&state.assets_dir, &path).await?;

    Ok(HttpResponse::Ok()
        .content_type(asset.content_type)
        .body(asset.bytes))
}
