//! Final-innings score projection.
//!
//! Two bands are produced from the same pipeline with different calibrations:
//! a "realistic" band that follows the current scoring rate more closely, and
//! a narrower "usual" band that leans on the venue's historical average.

use crate::reference::ReferenceData;

use super::resources::ALL_OUT;
use super::T20_OVERS;

/// Lowest total any band will report.
const MIN_TOTAL: i64 = 30;

/// A live first-innings position.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState<'a> {
    pub score: u32,
    pub wickets: u32,
    /// Overs completed, read as a plain decimal (10.3 = 10.3 overs)
    pub overs: f64,
    pub venue: &'a str,
    pub pitch: &'a str,
    pub weather: &'a str,
    /// Relative team strength; 1.0 is neutral, 1.05 slightly stronger
    pub team_form: f64,
}

/// Projected final total range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub low: u32,
    pub avg: u32,
    pub high: u32,
}

impl ScoreBand {
    fn flat(score: u32) -> Self {
        ScoreBand {
            low: score,
            avg: score,
            high: score,
        }
    }
}

/// Intermediate values surfaced alongside a projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionDetails {
    pub venue_avg: u32,
    pub current_rate: f64,
    pub adjusted_rate_realistic: f64,
    pub adjusted_rate_usual: f64,
    pub pitch_impact: f64,
    pub weather_impact: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub realistic: ScoreBand,
    pub usual: ScoreBand,
    /// `None` when no projection was possible and both bands echo the score
    pub details: Option<ProjectionDetails>,
}

/// Which value the low/high spreads are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpreadBasis {
    /// The venue-anchored total before flooring
    Anchored,
    /// The floored mid value
    Mid,
}

#[derive(Debug, Clone, Copy)]
struct BandCalibration {
    /// Multiplier for (>=7, 4..=6, <4) wickets in hand
    wickets_factors: [f64; 3],
    /// Weight of the current run rate against the venue rate
    current_rate_weight: f64,
    /// Scale applied to the summed pitch and weather deltas
    impact_amplifier: f64,
    form_base: f64,
    form_sensitivity: f64,
    /// Weight of the raw projection against the venue average
    anchor_weight: f64,
    low_spread: f64,
    high_spread: f64,
    spread_basis: SpreadBasis,
    /// Upper clamp for (low, avg, high)
    ceilings: [i64; 3],
}

const REALISTIC: BandCalibration = BandCalibration {
    wickets_factors: [1.07, 1.00, 0.86],
    current_rate_weight: 0.6,
    impact_amplifier: 3.0,
    form_base: 1.0,
    form_sensitivity: 1.0,
    anchor_weight: 0.85,
    low_spread: 0.90,
    high_spread: 1.08,
    spread_basis: SpreadBasis::Anchored,
    ceilings: [300, 300, 350],
};

const USUAL: BandCalibration = BandCalibration {
    wickets_factors: [1.04, 0.98, 0.85],
    current_rate_weight: 0.5,
    impact_amplifier: 2.0,
    form_base: 0.97,
    form_sensitivity: 0.4,
    anchor_weight: 0.78,
    low_spread: 0.94,
    high_spread: 1.06,
    spread_basis: SpreadBasis::Mid,
    ceilings: [300, 300, 300],
};

/// Inputs shared by both bands.
struct Baseline {
    score: f64,
    wickets_in_hand: u32,
    current_rate: f64,
    venue_avg: f64,
    venue_rate: f64,
    impact: f64,
    remaining_overs: f64,
    team_form: f64,
}

/// Project the final total for the batting side.
///
/// With no overs bowled or the side all out there is nothing to extrapolate,
/// so both bands simply echo the current score.
pub fn project_score(state: &MatchState<'_>, tables: &ReferenceData) -> Projection {
    // `!(x > 0)` also catches NaN
    if !(state.overs > 0.0) || state.wickets >= ALL_OUT {
        return Projection {
            realistic: ScoreBand::flat(state.score),
            usual: ScoreBand::flat(state.score),
            details: None,
        };
    }

    let venue_avg = tables.venue_avg(state.venue);
    let pitch_impact = tables.pitch_impact(state.pitch);
    let weather_impact = tables.weather_impact(state.weather);

    let base = Baseline {
        score: state.score as f64,
        wickets_in_hand: ALL_OUT - state.wickets,
        current_rate: state.score as f64 / state.overs,
        venue_avg: venue_avg as f64,
        venue_rate: venue_avg as f64 / T20_OVERS,
        impact: pitch_impact + weather_impact,
        remaining_overs: (T20_OVERS - state.overs).max(0.0),
        team_form: state.team_form,
    };

    let (realistic, adjusted_rate_realistic) = project_band(&REALISTIC, &base);
    let (usual, adjusted_rate_usual) = project_band(&USUAL, &base);

    Projection {
        realistic,
        usual,
        details: Some(ProjectionDetails {
            venue_avg,
            current_rate: base.current_rate,
            adjusted_rate_realistic,
            adjusted_rate_usual,
            pitch_impact,
            weather_impact,
        }),
    }
}

/// Returns the band and the adjusted run rate it was built from.
fn project_band(cal: &BandCalibration, base: &Baseline) -> (ScoreBand, f64) {
    let wickets_factor = match base.wickets_in_hand {
        w if w >= 7 => cal.wickets_factors[0],
        w if w >= 4 => cal.wickets_factors[1],
        _ => cal.wickets_factors[2],
    };

    // Blend with the venue rate so a hot start doesn't run away
    let blended = cal.current_rate_weight * base.current_rate
        + (1.0 - cal.current_rate_weight) * base.venue_rate;
    let impact_multiplier = 1.0 + base.impact * cal.impact_amplifier;
    let form = cal.form_base + (base.team_form - 1.0) * cal.form_sensitivity;
    let adjusted_rate = blended * wickets_factor * impact_multiplier * form;

    let projected = base.score + adjusted_rate * base.remaining_overs;
    let anchored =
        cal.anchor_weight * projected + (1.0 - cal.anchor_weight) * base.venue_avg;

    let mid = anchored.floor();
    let spread_from = match cal.spread_basis {
        SpreadBasis::Anchored => anchored,
        SpreadBasis::Mid => mid,
    };
    let mut triple = [
        (spread_from * cal.low_spread).floor() as i64,
        mid as i64,
        (spread_from * cal.high_spread).ceil() as i64,
    ];
    triple.sort_unstable();

    let clamp = |v: i64, ceiling: i64| v.clamp(MIN_TOTAL, ceiling) as u32;
    let band = ScoreBand {
        low: clamp(triple[0], cal.ceilings[0]),
        avg: clamp(triple[1], cal.ceilings[1]),
        high: clamp(triple[2], cal.ceilings[2]),
    };
    (band, adjusted_rate)
}
