//! HTTP handlers and route configuration.

mod community;
mod health;
mod observations;
mod profile;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query string: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid path: {}", err)).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/categories", web::get().to(community::list_categories))
            // Feed
            .service(
                web::scope("/observations")
                    .route("", web::get().to(observations::list_observations))
                    .route("", web::post().to(observations::create_observation))
                    .route("/{id}", web::get().to(observations::get_observation))
                    .route("/{id}", web::patch().to(observations::update_observation))
                    .route("/{id}", web::delete().to(observations::delete_observation))
                    .route("/{id}/like", web::post().to(observations::toggle_like))
                    .route("/{id}/like", web::put().to(observations::like))
                    .route("/{id}/like", web::delete().to(observations::unlike)),
            )
            // Profile page
            .service(
                web::scope("/profile")
                    .route("", web::get().to(profile::get_profile))
                    .route("", web::patch().to(profile::update_profile))
                    .route("/stats", web::get().to(profile::profile_stats))
                    .route(
                        "/observations",
                        web::get().to(observations::list_profile_observations),
                    ),
            )
            // Community sidebar
            .service(
                web::scope("/community")
                    .route("/stats", web::get().to(community::stats))
                    .route("/contributors", web::get().to(community::contributors))
                    .route("/activity", web::get().to(community::activity)),
            ),
    );
}
