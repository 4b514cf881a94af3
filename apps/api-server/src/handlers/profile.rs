//! Profile page: the current user's details and achievements.

use actix_web::{HttpResponse, web};

use stargaze_core::domain::{Profile, ProfilePatch, ProfileStats};
use stargaze_shared::ApiResponse;
use stargaze_shared::dto::{
    AchievementResponse, ProfileResponse, ProfileStatsResponse, UpdateProfileRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profile = state.profile.get().await?;
    Ok(HttpResponse::Ok().json(profile_response(&profile)))
}

/// PATCH /api/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = ProfilePatch {
        name: req.name,
        email: req.email,
        location: req.location,
        bio: req.bio,
    };
    let edit = patch
        .validate()
        .inspect_err(|e| tracing::info!(error = %e, "Profile edit rejected"))?;

    let current = state.profile.get().await?;
    if let Some(name) = edit.name().filter(|name| *name != current.name) {
        let wanted = name.to_lowercase();
        let observations = state.observations.list().await?;
        if observations
            .iter()
            .any(|o| o.author.name != current.name && o.author.name.to_lowercase() == wanted)
        {
            return Err(AppError::Conflict(format!(
                "The name '{name}' is already used by another observer"
            )));
        }
    }

    let (before, after) = state.profile.update(edit).await?;
    if before.name != after.name {
        let moved = state
            .observations
            .rename_author(&before.name, after.author())
            .await?;
        tracing::info!(
            from = %before.name,
            to = %after.name,
            observations = moved,
            "Observations re-attributed"
        );
    }

    tracing::info!(name = %after.name, "Profile updated");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        profile_response(&after),
        "Your profile information has been saved successfully.",
    )))
}

/// GET /api/profile/stats
pub async fn profile_stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let profile = state.profile.get().await?;
    let observations = state.observations.list().await?;
    let stats = ProfileStats::compute(&observations, &profile.name);

    let achievements = stats
        .achievements
        .iter()
        .map(|a| AchievementResponse {
            kind: a.kind.as_str().to_string(),
            name: a.kind.title().to_string(),
            description: a.kind.description().to_string(),
            earned_at: a.earned_at.to_rfc3339(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ProfileStatsResponse {
        observations: stats.observations,
        total_likes: stats.total_likes,
        rank: stats.rank,
        achievements,
    }))
}

fn profile_response(profile: &Profile) -> ProfileResponse {
    ProfileResponse {
        name: profile.name.clone(),
        avatar: profile.avatar.clone(),
        email: profile.email.clone(),
        location: profile.location.clone(),
        bio: profile.bio.clone(),
        joined_at: profile.joined_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;
    use stargaze_shared::dto::FeedPageResponse;

    use super::*;
    use crate::config::AppConfig;
    use crate::handlers::configure_routes;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    fn edit(body: UpdateProfileRequest) -> test::TestRequest {
        test::TestRequest::patch()
            .uri("/api/profile")
            .set_json(body)
    }

    #[actix_web::test]
    async fn profile_shows_seeded_owner() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let profile: ProfileResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.email, "alex@example.com");
        assert_eq!(profile.location.as_deref(), Some("Colorado, USA"));
        assert!(profile.bio.is_some());
    }

    #[actix_web::test]
    async fn rename_keeps_profile_observations() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = edit(UpdateProfileRequest {
            name: Some("Alex J.".to_string()),
            bio: Some(String::new()),
            ..Default::default()
        })
        .to_request();
        let body: ApiResponse<ProfileResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body.message.as_deref(),
            Some("Your profile information has been saved successfully.")
        );
        let profile = body.data.expect("updated profile");
        assert_eq!(profile.name, "Alex J.");
        assert_eq!(profile.bio, None);

        let req = test::TestRequest::get()
            .uri("/api/profile/observations")
            .to_request();
        let page: FeedPageResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|o| o.author.name == "Alex J."));

        let req = test::TestRequest::get()
            .uri("/api/community/contributors")
            .to_request();
        let top: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(top[0]["name"], "Alex J.");
    }

    #[actix_web::test]
    async fn invalid_edits_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = edit(UpdateProfileRequest {
            email: Some("alex.example.com".to_string()),
            ..Default::default()
        })
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let problem: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            problem["errors"],
            json!(["email 'alex.example.com' is not a valid address"])
        );

        let req = edit(UpdateProfileRequest::default()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let profile: ProfileResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(profile.email, "alex@example.com");
    }

    #[actix_web::test]
    async fn taking_another_observers_name_conflicts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = edit(UpdateProfileRequest {
            name: Some("Sarah Chen".to_string()),
            ..Default::default()
        })
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = edit(UpdateProfileRequest {
            name: Some("SARAH CHEN".to_string()),
            ..Default::default()
        })
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let req = edit(UpdateProfileRequest {
            name: Some("Alex Johnson".to_string()),
            ..Default::default()
        })
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn stats_rank_the_owner_first() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/profile/stats")
            .to_request();
        let stats: ProfileStatsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(stats.observations, 2);
        assert_eq!(stats.total_likes, 45 + 78);
        assert_eq!(stats.rank, Some(1));
        let kinds: Vec<&str> = stats.achievements.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, vec!["first_observer"]);
        assert_eq!(stats.achievements[0].name, "First Observer");
    }
}
