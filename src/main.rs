#[macro_use]
extern crate rocket;

mod api;
mod auth;
mod cache;
mod config;
mod content;
mod env;
mod error;
mod loader;
mod models;
mod routes;
mod sections;
mod telemetry;
#[cfg(test)]
mod test;

use std::sync::Arc;

use api::{api_content, api_page, api_pr_board, health, not_found_api};
use auth::studio_challenge;
use cache::PageCache;
use config::SiteConfig;
use content::{ContentStore, SanityClient};
use error::AppError;
use loader::PageLoader;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;
use routes::{index, studio};
use telemetry::{TelemetryFairing, init_tracing, shutdown_telemetry};
use tracing::{error, info, warn};

#[launch]
async fn rocket() -> _ {
    let env_result = env::load_environment();
    init_tracing();

    match env_result {
        Ok(report) => {
            info!(profile = %report.profile, files = ?report.loaded, "Loaded environment");
            for path in report.missing {
                warn!("Environment file {} not found, skipping", path);
            }
        }
        Err(e) => warn!("Failed to load environment files: {:#}", e),
    }

    match build_rocket(SiteConfig::from_env()) {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Failed to start site: {}", e);
            panic!("Startup failed: {}", e);
        }
    }
}

fn build_rocket(config: SiteConfig) -> Result<Rocket<Build>, AppError> {
    let client = SanityClient::new(&config.content)?;

    match config.content.valid_project_id() {
        Some(project_id) => info!(
            project_id = %project_id,
            dataset = %config.content.dataset,
            endpoint = %client.endpoint(),
            "Content store configured"
        ),
        None => warn!("No valid SANITY_PROJECT_ID set, every section will render its empty state"),
    }

    if config.studio.is_default() {
        warn!("STUDIO_USERNAME/STUDIO_PASSWORD not set, studio is using the fallback credentials");
    }

    Ok(init_rocket(config, Arc::new(client)))
}

pub fn init_rocket(config: SiteConfig, store: Arc<dyn ContentStore>) -> Rocket<Build> {
    info!("Starting barbell club site");

    let loader = PageLoader::new(config.content.clone(), store);
    let cache = PageCache::new(loader, config.revalidate);

    rocket::build()
        .manage(cache)
        .manage(config.content)
        .manage(config.studio)
        .mount("/", routes![index, studio])
        .register("/studio", catchers![studio_challenge])
        .mount("/api", routes![health, api_content, api_page, api_pr_board])
        .register("/api", catchers![not_found_api])
        .attach(Template::fairing())
        .attach(TelemetryFairing)
        .attach(AdHoc::on_shutdown("Telemetry shutdown", |_| {
            Box::pin(async { shutdown_telemetry() })
        }))
}
