use crate::core::{shaping, MatchEngine};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchSummary,
};
use crate::services::ProfileStore;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Result-shaping knobs carried from configuration
#[derive(Debug, Clone, Copy)]
pub struct MatchLimits {
    pub default_limit: usize,
    pub max_limit: usize,
    pub min_score: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            default_limit: shaping::DEFAULT_TOP_COUNT,
            max_limit: 50,
            min_score: shaping::DEFAULT_MIN_SCORE,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub engine: Arc<MatchEngine>,
    pub limits: MatchLimits,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/reverse", web::post().to(find_reverse_matches));
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Reverse,
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find forward matches for a profile
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "profileId": "string",
///   "limit": 5,
///   "minScore": 1
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    run_matching(&state, &req, Direction::Forward)
}

/// Find reverse matches for a profile (its gives vs. others' asks)
///
/// POST /api/v1/matches/reverse
async fn find_reverse_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    run_matching(&state, &req, Direction::Reverse)
}

fn run_matching(
    state: &AppState,
    req: &FindMatchesRequest,
    direction: Direction,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let caller = match state.store.get(&req.profile_id) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!("Match request for unknown profile {}: {}", req.profile_id, e);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Profile not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
    };

    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.limits.default_limit)
        .min(state.limits.max_limit);
    let min_score = req.min_score.unwrap_or(state.limits.min_score);

    let candidates = state.store.candidates_for(&req.profile_id);

    let result = match direction {
        Direction::Forward => state.engine.find_matches(&caller.asks, &candidates),
        Direction::Reverse => state.engine.find_reverse_matches(&caller.gives, &candidates),
    };
    let total_candidates = result.total_candidates;

    let ranked = shaping::top_matches(
        shaping::filter_by_minimum_score(result.matches, min_score),
        limit,
    );
    let matches: Vec<MatchSummary> = ranked.iter().map(MatchSummary::from).collect();

    tracing::info!(
        "Returning {} matches for profile {} (from {} candidates)",
        matches.len(),
        req.profile_id,
        total_candidates
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        total_candidates,
    })
}
