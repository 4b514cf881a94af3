//! Community sidebar: categories, stats, top contributors, recent activity.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use stargaze_core::domain::{Category, CommunityStats, top_contributors};
use stargaze_shared::dto::{
    ActivityResponse, CategoryResponse, ContributorResponse, LimitParams, StatsResponse,
};

use crate::middleware::error::AppResult;
use crate::state::AppState;

const DEFAULT_CONTRIBUTORS: usize = 4;
const MAX_CONTRIBUTORS: usize = 20;
const DEFAULT_ACTIVITY: usize = 10;
const MAX_ACTIVITY: usize = 50;

/// GET /api/categories
pub async fn list_categories() -> HttpResponse {
    let categories: Vec<CategoryResponse> = Category::ALL
        .iter()
        .map(|c| CategoryResponse {
            name: c.as_str().to_string(),
            badge: c.badge().as_str().to_string(),
        })
        .collect();
    HttpResponse::Ok().json(categories)
}

/// GET /api/community/stats
pub async fn stats(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let observations = state.observations.list().await?;
    let stats = CommunityStats::compute(&observations, Utc::now());

    Ok(HttpResponse::Ok().json(StatsResponse {
        total_observations: stats.total_observations,
        active_observers: stats.active_observers,
        total_likes: stats.total_likes,
        locations: stats.locations,
        this_month: stats.this_month,
    }))
}

/// GET /api/community/contributors?limit=
pub async fn contributors(
    state: web::Data<AppState>,
    params: web::Query<LimitParams>,
) -> AppResult<HttpResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_CONTRIBUTORS)
        .clamp(1, MAX_CONTRIBUTORS);
    let observations = state.observations.list().await?;

    let body: Vec<ContributorResponse> = top_contributors(&observations, limit)
        .into_iter()
        .map(|c| ContributorResponse {
            name: c.name,
            avatar: c.avatar,
            observation_count: c.observation_count,
            total_likes: c.total_likes,
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/community/activity?limit=
pub async fn activity(state: web::Data<AppState>, params: web::Query<LimitParams>) -> HttpResponse {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_ACTIVITY)
        .clamp(1, MAX_ACTIVITY);

    let body: Vec<ActivityResponse> = state
        .activity
        .recent(limit)
        .await
        .into_iter()
        .map(|e| ActivityResponse {
            kind: e.kind.as_str().to_string(),
            observation_id: e.observation_id.to_string(),
            observation_title: e.observation_title,
            actor: e.actor,
            at: e.at.to_rfc3339(),
        })
        .collect();
    HttpResponse::Ok().json(body)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use uuid::Uuid;

    use super::*;
    use crate::config::AppConfig;
    use crate::handlers::configure_routes;

    fn state() -> AppState {
        AppState::new(&AppConfig::default())
    }

    #[actix_web::test]
    async fn categories_carry_badge_tones() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let categories: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(categories.len(), 8);
        let meteor = categories
            .iter()
            .find(|c| c.name == "Meteor")
            .expect("meteor");
        assert_eq!(meteor.badge, "orange");
        let comet = categories
            .iter()
            .find(|c| c.name == "Comet")
            .expect("comet");
        assert_eq!(comet.badge, "gray");
    }

    #[actix_web::test]
    async fn stats_summarize_seeded_feed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/community/stats")
            .to_request();
        let stats: StatsResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(stats.total_observations, 7);
        assert_eq!(stats.active_observers, 6);
        assert_eq!(stats.total_likes, 502);
        assert_eq!(stats.locations, 5);
        // The newest three fixtures are under two days old.
        assert!((3..=7).contains(&stats.this_month));
    }

    #[actix_web::test]
    async fn contributors_are_limited() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/community/contributors")
            .to_request();
        let top: Vec<ContributorResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(top.len(), 4);
        assert_eq!(top[0].name, "Alex Johnson");
        assert_eq!(top[0].observation_count, 2);

        let req = test::TestRequest::get()
            .uri("/api/community/contributors?limit=0")
            .to_request();
        let one: Vec<ContributorResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(one.len(), 1);
    }

    #[actix_web::test]
    async fn likes_show_up_in_activity() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/community/activity")
            .to_request();
        let empty: Vec<ActivityResponse> = test::call_and_read_body_json(&app, req).await;
        assert!(empty.is_empty());

        let andromeda = Uuid::from_u128(3);
        let uri = format!("/api/observations/{andromeda}/like");
        for req in [
            test::TestRequest::put().uri(&uri).to_request(),
            test::TestRequest::put().uri(&uri).to_request(),
            test::TestRequest::delete().uri(&uri).to_request(),
        ] {
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/community/activity")
            .to_request();
        let events: Vec<ActivityResponse> = test::call_and_read_body_json(&app, req).await;
        let kinds: Vec<&str> = events.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["unliked", "liked"]);
        let andromeda_id = andromeda.to_string();
        assert!(events.iter().all(|e| e.observation_id == andromeda_id));
        assert_eq!(events[0].actor, "Alex Johnson");
    }
}
