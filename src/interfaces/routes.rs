use actix_web::web;

use crate::handlers::{
    assets::serve_asset, page::profile_page, profile::get_profile, system::health_check,
};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(profile_page);
    cfg.service(health_check);
    cfg.service(serve_asset);

    cfg.service(web::scope("/api/v1").service(get_profile));
}
