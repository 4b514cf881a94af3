//! Observation feed handlers.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use stargaze_core::DomainError;
use stargaze_core::domain::{
    ImageAttachment, LikeChange, Observation, ObservationDraft, ObservationPatch,
};
use stargaze_core::feed::{CategoryFilter, FeedQuery, Page, PageRequest, SortMode};
use stargaze_core::ports::{ActivityEvent, ActivityKind};
use stargaze_shared::ApiResponse;
use stargaze_shared::dto::{
    AuthorResponse, CreateObservationRequest, FeedPageResponse, LikeResponse,
    ListObservationsParams, ObservationResponse, UpdateObservationRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/observations
pub async fn list_observations(
    state: web::Data<AppState>,
    params: web::Query<ListObservationsParams>,
) -> AppResult<HttpResponse> {
    let query = feed_query(params.into_inner(), state.feed_page_size)?;
    run_feed(&state, &query).await
}

/// GET /api/profile/observations - the current user's observations.
pub async fn list_profile_observations(
    state: web::Data<AppState>,
    params: web::Query<ListObservationsParams>,
) -> AppResult<HttpResponse> {
    let mut query = feed_query(params.into_inner(), state.feed_page_size)?;
    query.author = Some(state.current_author().await?.name);
    run_feed(&state, &query).await
}

/// GET /api/observations/{id}
pub async fn get_observation(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let observation = state
        .observations
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Observation",
            id,
        })?;

    Ok(HttpResponse::Ok().json(observation_response(&observation)))
}

/// POST /api/observations
pub async fn create_observation(
    state: web::Data<AppState>,
    body: web::Json<CreateObservationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = ObservationDraft {
        title: req.title,
        description: req.description,
        category: req.category,
        location: req.location,
        date: req.date,
        image: req.image.map(|image| ImageAttachment {
            file_name: image.file_name,
            content_type: image.content_type,
            url: image.url,
        }),
    };

    let actor = state.current_author().await?;
    let now = Utc::now();
    let observation = draft
        .into_observation(actor.clone(), now)
        .inspect_err(|e| tracing::info!(error = %e, "Observation draft rejected"))?;
    let saved = state.observations.insert(observation).await?;

    tracing::info!(
        observation_id = %saved.id,
        category = %saved.category,
        author = %saved.author.name,
        "Observation shared"
    );
    record(&state, ActivityKind::Shared, &saved, &actor.name, now).await;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        observation_response(&saved),
        "Your observation has been shared with the community.",
    )))
}

/// PATCH /api/observations/{id}
pub async fn update_observation(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateObservationRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();
    let patch = ObservationPatch {
        title: req.title,
        description: req.description,
        category: req.category,
        location: req.location,
    };

    let edit = patch.validate()?;
    let actor = state.current_author().await?;

    let now = Utc::now();
    let saved = state
        .observations
        .update(id, edit, now)
        .await
        .map_err(AppError::from_repo(id))?;

    tracing::info!(observation_id = %id, "Observation updated");
    record(&state, ActivityKind::Updated, &saved, &actor.name, now).await;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        observation_response(&saved),
        "Observation updated",
    )))
}

/// DELETE /api/observations/{id}
pub async fn delete_observation(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let actor = state.current_author().await?;
    let removed = state
        .observations
        .delete(id)
        .await
        .map_err(AppError::from_repo(id))?;

    tracing::info!(observation_id = %id, "Observation deleted");
    record(
        &state,
        ActivityKind::Removed,
        &removed,
        &actor.name,
        Utc::now(),
    )
    .await;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/observations/{id}/like - flip the like flag.
pub async fn toggle_like(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (observation, change) = state
        .observations
        .toggle_like(id)
        .await
        .map_err(AppError::from_repo(id))?;
    like_response(&state, &observation, change).await
}

/// PUT /api/observations/{id}/like - like; repeating is a no-op.
pub async fn like(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (observation, change) = state
        .observations
        .set_liked(id, true)
        .await
        .map_err(AppError::from_repo(id))?;
    like_response(&state, &observation, change).await
}

/// DELETE /api/observations/{id}/like - unlike; repeating is a no-op.
pub async fn unlike(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let (observation, change) = state
        .observations
        .set_liked(id, false)
        .await
        .map_err(AppError::from_repo(id))?;
    like_response(&state, &observation, change).await
}

async fn like_response(
    state: &AppState,
    observation: &Observation,
    change: LikeChange,
) -> AppResult<HttpResponse> {
    if change.changed() {
        let kind = if change.after.liked {
            ActivityKind::Liked
        } else {
            ActivityKind::Unliked
        };
        tracing::debug!(observation_id = %observation.id, kind = kind.as_str(), "Like changed");
        let actor = state.current_author().await?;
        record(state, kind, observation, &actor.name, Utc::now()).await;
    }

    Ok(HttpResponse::Ok().json(LikeResponse {
        id: observation.id.to_string(),
        liked: change.after.liked,
        like_count: change.after.count,
    }))
}

async fn run_feed(state: &AppState, query: &FeedQuery) -> AppResult<HttpResponse> {
    let observations = state.observations.list().await?;
    let page = query.run(&observations, Utc::now());

    tracing::debug!(
        search = %query.search,
        category = ?query.category,
        sort = %query.sort,
        total = page.total,
        "Feed queried"
    );

    Ok(HttpResponse::Ok().json(feed_page_response(page)))
}

async fn record(
    state: &AppState,
    kind: ActivityKind,
    observation: &Observation,
    actor: &str,
    at: DateTime<Utc>,
) {
    state
        .activity
        .record(ActivityEvent {
            kind,
            observation_id: observation.id,
            observation_title: observation.title.clone(),
            actor: actor.to_string(),
            at,
        })
        .await;
}

fn feed_query(params: ListObservationsParams, default_per_page: u32) -> AppResult<FeedQuery> {
    let category = params
        .category
        .as_deref()
        .unwrap_or_default()
        .parse::<CategoryFilter>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let sort = params
        .sort
        .as_deref()
        .unwrap_or_default()
        .parse::<SortMode>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(FeedQuery {
        search: params.search.unwrap_or_default(),
        category,
        sort,
        author: params.author.filter(|a| !a.trim().is_empty()),
        page: PageRequest::new(
            params.page.unwrap_or(1),
            params.per_page.unwrap_or(default_per_page),
        ),
    })
}

fn feed_page_response(page: Page<&Observation>) -> FeedPageResponse {
    let has_more = page.has_more();
    let page = page.map(observation_response);
    FeedPageResponse {
        items: page.items,
        page: page.page,
        per_page: page.per_page,
        total: page.total,
        has_more,
    }
}

pub(crate) fn observation_response(observation: &Observation) -> ObservationResponse {
    ObservationResponse {
        id: observation.id.to_string(),
        title: observation.title.clone(),
        description: observation.description.clone(),
        image: observation.image.clone(),
        category: observation.category.to_string(),
        badge: observation.category.badge().as_str().to_string(),
        location: observation.location.clone(),
        observed_at: observation.observed_at.map(|d| d.to_rfc3339()),
        created_at: observation.created_at.to_rfc3339(),
        updated_at: observation.updated_at.to_rfc3339(),
        author: AuthorResponse {
            name: observation.author.name.clone(),
            avatar: observation.author.avatar.clone(),
        },
        like_count: observation.like_count,
        comment_count: observation.comment_count,
        liked_by_current_user: observation.liked_by_current_user,
    }
}
