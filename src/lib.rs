use std::path::PathBuf;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{content, entities, view};
pub use interfaces::{handlers, render, routes};
pub use infrastructure::utils;

use entities::profile::Profile;
use settings::AppConfig;

pub struct AppState {
    pub profile: &'static Profile,
    pub page_html: String,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let profile: &'static Profile = &*content::PROFILE;
        let page_html = render::page::render_page(profile);

        tracing::info!("Rendered profile page ({} bytes)", page_html.len());

        AppState {
            profile,
            page_html,
            assets_dir: PathBuf::from(&config.assets_dir),
        }
    }
}
