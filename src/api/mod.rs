pub mod lenient;
pub mod types;

use axum::{
    body::Bytes,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::model::{estimate_win_probability, project_score, revised_target};
use crate::reference::ReferenceData;
use types::{
    ScoreProjectionRequest, ScoreProjectionResponse, StatusResponse, TargetRequest,
    TargetResponse, VenuesResponse, WinProbabilityRequest, WinProbabilityResponse,
};

pub struct AppState {
    pub tables: ReferenceData,
}

/// Build the Axum router for the prediction API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/venues", get(venues_handler))
        .route("/api/predict_score", post(predict_score_handler))
        .route("/api/win_probability", post(win_probability_handler))
        .route("/api/dls_calculate", post(dls_calculate_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Decode a request body, falling back to all defaults when it is empty,
/// not JSON, or not a JSON object. Content type is ignored.
fn parse_body<T: DeserializeOwned + Default>(endpoint: &str, body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(v @ Value::Object(_)) => v,
        Ok(other) => {
            warn!(
                endpoint,
                kind = json_kind(&other),
                "Request body is not an object, using defaults"
            );
            return T::default();
        }
        Err(e) => {
            warn!(endpoint, error = %e, "Request body is not JSON, using defaults");
            return T::default();
        }
    };
    // Field decoders never fail, so this only trips on impossible shapes.
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(endpoint, error = %e, "Request body rejected, using defaults");
        T::default()
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// GET /api/status
async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}

/// GET /api/venues
async fn venues_handler(State(state): State<Arc<AppState>>) -> Json<VenuesResponse> {
    Json(VenuesResponse {
        venues: state.tables.venue_summaries(),
    })
}

/// POST /api/predict_score
async fn predict_score_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<ScoreProjectionResponse> {
    let req: ScoreProjectionRequest = parse_body("predict_score", &body);
    let match_state = req.match_state();
    let projection = project_score(&match_state, &state.tables);
    debug!(
        score = match_state.score,
        wickets = match_state.wickets,
        overs = match_state.overs,
        venue = match_state.venue,
        realistic = ?projection.realistic,
        usual = ?projection.usual,
        "Projected final score"
    );
    Json(ScoreProjectionResponse::new(&match_state, &projection))
}

/// POST /api/win_probability
async fn win_probability_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Json<WinProbabilityResponse> {
    let req: WinProbabilityRequest = parse_body("win_probability", &body);
    let chase = req.chase_state();
    let outlook = estimate_win_probability(&chase, &state.tables);
    debug!(
        target = chase.target,
        score = chase.score,
        wickets = chase.wickets,
        overs = chase.overs,
        win_prob = outlook.win_prob,
        "Estimated chase win probability"
    );
    Json(WinProbabilityResponse::from(&outlook))
}

/// POST /api/dls_calculate
async fn dls_calculate_handler(body: Bytes) -> Json<TargetResponse> {
    let req: TargetRequest = parse_body("dls_calculate", &body);
    let revised = revised_target(
        req.team1_score(),
        req.team1_overs(),
        req.team2_overs(),
        req.team2_wickets_lost(),
    );
    debug!(
        team1_score = req.team1_score(),
        r1 = revised.team1_resources,
        r2 = revised.team2_resources,
        target = revised.target,
        "Revised chase target"
    );
    Json(TargetResponse::from(&revised))
}
