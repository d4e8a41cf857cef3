//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::model::resources::ALL_OUT;
use crate::model::{
    round_to, ChaseOutlook, ChaseState, MatchState, Projection, RevisedTarget, T20_OVERS,
};
use crate::reference::models::VenueSummary;
use crate::reference::tables::{DEFAULT_PITCH, DEFAULT_WEATHER};

use super::lenient;

// ── Requests ─────────────────────────────────────────────────────────────────

/// POST /api/predict_score
#[derive(Debug, Default, Deserialize)]
pub struct ScoreProjectionRequest {
    #[serde(default, deserialize_with = "lenient::int")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub wickets: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub overs: Option<f64>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub pitch: Option<String>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub weather: Option<String>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub team_form_factor: Option<f64>,
}

impl ScoreProjectionRequest {
    pub fn match_state(&self) -> MatchState<'_> {
        MatchState {
            score: runs(self.score),
            wickets: wickets(self.wickets),
            overs: self.overs.unwrap_or(0.0),
            venue: self.venue.as_deref().unwrap_or(""),
            pitch: self.pitch.as_deref().unwrap_or(DEFAULT_PITCH),
            weather: self.weather.as_deref().unwrap_or(DEFAULT_WEATHER),
            team_form: self.team_form_factor.filter(|f| *f > 0.0).unwrap_or(1.0),
        }
    }
}

/// POST /api/win_probability
#[derive(Debug, Default, Deserialize)]
pub struct WinProbabilityRequest {
    #[serde(default, deserialize_with = "lenient::int")]
    pub target: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub wickets: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub overs: Option<f64>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub pitch: Option<String>,
    #[serde(default, deserialize_with = "lenient::label")]
    pub weather: Option<String>,
}

impl WinProbabilityRequest {
    pub fn chase_state(&self) -> ChaseState<'_> {
        ChaseState {
            target: runs(self.target),
            score: runs(self.score),
            wickets: wickets(self.wickets),
            overs: self.overs.unwrap_or(0.0),
            pitch: self.pitch.as_deref().unwrap_or(DEFAULT_PITCH),
            weather: self.weather.as_deref().unwrap_or(DEFAULT_WEATHER),
        }
    }
}

/// POST /api/dls_calculate
#[derive(Debug, Default, Deserialize)]
pub struct TargetRequest {
    #[serde(default, deserialize_with = "lenient::int")]
    pub team1_score: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub team1_overs: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub team2_overs: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub team2_wickets_lost: Option<i64>,
}

impl TargetRequest {
    pub fn team1_score(&self) -> u32 {
        runs(self.team1_score)
    }

    pub fn team1_overs(&self) -> f64 {
        self.team1_overs.unwrap_or(T20_OVERS)
    }

    pub fn team2_overs(&self) -> f64 {
        self.team2_overs.unwrap_or(0.0)
    }

    pub fn team2_wickets_lost(&self) -> u32 {
        wickets(self.team2_wickets_lost)
    }
}

fn runs(value: Option<i64>) -> u32 {
    value.unwrap_or(0).clamp(0, u32::MAX as i64) as u32
}

fn wickets(value: Option<i64>) -> u32 {
    value.unwrap_or(0).clamp(0, ALL_OUT as i64) as u32
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VenuesResponse {
    pub venues: Vec<VenueSummary>,
}

/// Legacy `low`/`avg`/`high` mirror the realistic band.
#[derive(Debug, Serialize)]
pub struct ScoreProjectionResponse {
    pub low: u32,
    pub avg: u32,
    pub high: u32,
    pub realistic_low: u32,
    pub realistic_avg: u32,
    pub realistic_high: u32,
    pub usual_low: u32,
    pub usual_avg: u32,
    pub usual_high: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProjectionMeta>,
}

#[derive(Debug, Serialize)]
pub struct ProjectionMeta {
    pub score: u32,
    pub wickets: u32,
    pub overs: f64,
    pub venue_avg: u32,
    pub current_rate: f64,
    pub adjusted_rate_real: f64,
    pub adjusted_rate_usual: f64,
    pub pitch_impact: f64,
    pub weather_impact: f64,
}

impl ScoreProjectionResponse {
    pub fn new(state: &MatchState<'_>, projection: &Projection) -> Self {
        let r = projection.realistic;
        let u = projection.usual;
        ScoreProjectionResponse {
            low: r.low,
            avg: r.avg,
            high: r.high,
            realistic_low: r.low,
            realistic_avg: r.avg,
            realistic_high: r.high,
            usual_low: u.low,
            usual_avg: u.avg,
            usual_high: u.high,
            meta: projection.details.as_ref().map(|d| ProjectionMeta {
                score: state.score,
                wickets: state.wickets,
                overs: state.overs,
                venue_avg: d.venue_avg,
                current_rate: round_to(d.current_rate, 3),
                adjusted_rate_real: round_to(d.adjusted_rate_realistic, 3),
                adjusted_rate_usual: round_to(d.adjusted_rate_usual, 3),
                pitch_impact: d.pitch_impact,
                weather_impact: d.weather_impact,
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WinProbabilityResponse {
    pub win_prob: u32,
    /// `null` once the chase can no longer be won
    pub rrr: Option<f64>,
    pub runs_needed: u32,
    pub balls_left: u32,
    pub crr: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<WinProbabilityMeta>,
}

#[derive(Debug, Serialize)]
pub struct WinProbabilityMeta {
    pub pitch_impact: f64,
    pub weather_impact: f64,
    pub wickets_factor: f64,
    pub momentum: f64,
    pub pressure: f64,
}

impl From<&ChaseOutlook> for WinProbabilityResponse {
    fn from(o: &ChaseOutlook) -> Self {
        WinProbabilityResponse {
            win_prob: o.win_prob,
            rrr: o.required_rate.map(|r| round_to(r, 2)),
            runs_needed: o.runs_needed,
            balls_left: o.balls_left,
            crr: round_to(o.current_rate, 2),
            meta: o.details.as_ref().map(|d| WinProbabilityMeta {
                pitch_impact: d.pitch_impact,
                weather_impact: d.weather_impact,
                wickets_factor: round_to(d.wickets_fraction, 2),
                momentum: round_to(d.momentum, 3),
                pressure: round_to(d.pressure, 3),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TargetResponse {
    pub target: u32,
    pub meta: TargetMeta,
}

#[derive(Debug, Serialize)]
pub struct TargetMeta {
    pub r1: f64,
    pub r2: f64,
}

impl From<&RevisedTarget> for TargetResponse {
    fn from(t: &RevisedTarget) -> Self {
        TargetResponse {
            target: t.target,
            meta: TargetMeta {
                r1: t.team1_resources,
                r2: t.team2_resources,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_request_defaults() {
        let req: ScoreProjectionRequest = serde_json::from_value(json!({})).unwrap();
        let s = req.match_state();
        assert_eq!(s.score, 0);
        assert_eq!(s.wickets, 0);
        assert_eq!(s.overs, 0.0);
        assert_eq!(s.venue, "");
        assert_eq!(s.pitch, DEFAULT_PITCH);
        assert_eq!(s.weather, DEFAULT_WEATHER);
        assert_eq!(s.team_form, 1.0);
    }

    #[test]
    fn projection_request_coerces_out_of_range_values() {
        let req: ScoreProjectionRequest = serde_json::from_value(json!({
            "score": -20,
            "wickets": "14",
            "overs": "7.2",
            "pitch": "",
            "team_form_factor": 0
        }))
        .unwrap();
        let s = req.match_state();
        assert_eq!(s.score, 0);
        assert_eq!(s.wickets, 10);
        assert_eq!(s.overs, 7.2);
        assert_eq!(s.pitch, DEFAULT_PITCH);
        assert_eq!(s.team_form, 1.0);
    }

    #[test]
    fn target_request_defaults_to_full_first_innings() {
        let req: TargetRequest = serde_json::from_value(json!({"team1_score": "165"})).unwrap();
        assert_eq!(req.team1_score(), 165);
        assert_eq!(req.team1_overs(), 20.0);
        assert_eq!(req.team2_overs(), 0.0);
        assert_eq!(req.team2_wickets_lost(), 0);

        let req: TargetRequest = serde_json::from_value(json!({
            "team1_overs": "junk",
            "team2_wickets_lost": -1
        }))
        .unwrap();
        assert_eq!(req.team1_overs(), 20.0);
        assert_eq!(req.team2_wickets_lost(), 0);
    }

    #[test]
    fn unreachable_required_rate_serializes_as_null() {
        let outlook = ChaseOutlook {
            win_prob: 0,
            required_rate: None,
            runs_needed: 12,
            balls_left: 0,
            current_rate: 8.333333,
            details: None,
        };
        let body = serde_json::to_value(WinProbabilityResponse::from(&outlook)).unwrap();
        assert_eq!(
            body,
            json!({"win_prob": 0, "rrr": null, "runs_needed": 12, "balls_left": 0, "crr": 8.33})
        );
    }
}
