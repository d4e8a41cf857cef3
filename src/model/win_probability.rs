//! Second-innings chase win probability.
//!
//! Starts from an even contest and nudges the estimate with additive terms,
//! strongest first:
//! - **Momentum**: current run rate against required run rate
//! - **Wickets in hand**: neutral at five down
//! - **Rate penalty**: extra drag when the asking rate is above the scoring rate
//! - **Conditions**: pitch and weather deltas
//! - **Pressure**: how much of the innings has gone
//!
//! A few late-chase heuristics and an early-innings smoothing step follow.

use crate::reference::ReferenceData;

use super::overs::{total_balls, BALLS_PER_OVER};
use super::resources::ALL_OUT;
use super::T20_OVERS;

const BASELINE: f64 = 50.0;

const MOMENTUM_WEIGHT: f64 = 9.0;
const WICKETS_WEIGHT: f64 = 28.0;
const RATE_PENALTY_WEIGHT: f64 = 4.0;
const CONDITIONS_WEIGHT: f64 = 55.0;
const PRESSURE_WEIGHT: f64 = 8.0;
/// Share of the innings gone at which pressure is neutral.
const PRESSURE_PIVOT: f64 = 0.45;

/// Small chase, few balls: a side with wickets usually gets there.
const FINISH_RUNS: u32 = 12;
const FINISH_BALLS: u32 = 18;
const FINISH_BONUS: f64 = 6.0;

/// Asking rate above which chases start to collapse.
const STEEP_RATE: f64 = 15.0;
const STEEP_RATE_SLOPE: f64 = 1.6;
const STEEP_RATE_MAX_PENALTY: f64 = 20.0;

/// Runs needed beyond which a T20 chase is capped.
const BIG_CHASE_RUNS: u32 = 160;
const BIG_CHASE_CEILING: f64 = 12.0;

/// Early-innings damping toward 50 for evenly poised chases.
const SMOOTH_MIN_BALLS_LEFT: u32 = 60;
const SMOOTH_MAX_RATE_GAP: f64 = 1.2;
const SMOOTH_MIN_WICKETS: u32 = 5;
const SMOOTH_RUNS: (u32, u32) = (20, 100);
const SMOOTH_FACTOR: f64 = 0.6;

/// A live chase.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseState<'a> {
    pub target: u32,
    pub score: u32,
    pub wickets: u32,
    /// Overs bowled in "overs.balls" notation
    pub overs: f64,
    pub pitch: &'a str,
    pub weather: &'a str,
}

/// Intermediate terms surfaced for an undecided chase.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaseDetails {
    pub pitch_impact: f64,
    pub weather_impact: f64,
    /// Wickets in hand / 10
    pub wickets_fraction: f64,
    /// Current rate minus required rate
    pub momentum: f64,
    /// Share of the innings already bowled
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChaseOutlook {
    /// Percentage chance for the chasing side: 100 won, 0 lost, else 1..=99
    pub win_prob: u32,
    /// Runs per over needed; `None` when the chase can no longer be won
    pub required_rate: Option<f64>,
    pub runs_needed: u32,
    pub balls_left: u32,
    pub current_rate: f64,
    /// `None` for decided chases
    pub details: Option<ChaseDetails>,
}

/// Estimate the chasing side's chance of reaching `target`.
pub fn estimate_win_probability(state: &ChaseState<'_>, tables: &ReferenceData) -> ChaseOutlook {
    let innings_balls = T20_OVERS as u32 * BALLS_PER_OVER;
    let balls_left = innings_balls.saturating_sub(total_balls(state.overs));
    let runs_needed = state.target.saturating_sub(state.score);

    if runs_needed == 0 {
        return ChaseOutlook {
            win_prob: 100,
            required_rate: Some(0.0),
            runs_needed: 0,
            balls_left,
            current_rate: decided_rate(state),
            details: None,
        };
    }
    if state.wickets >= ALL_OUT || balls_left == 0 {
        return ChaseOutlook {
            win_prob: 0,
            required_rate: None,
            runs_needed,
            balls_left,
            current_rate: decided_rate(state),
            details: None,
        };
    }

    let required_rate = runs_needed as f64 / (balls_left as f64 / BALLS_PER_OVER as f64);
    let current_rate = if state.overs > 0.0 {
        state.score as f64 / state.overs
    } else {
        0.0
    };

    let pitch_impact = tables.pitch_impact(state.pitch);
    let weather_impact = tables.weather_impact(state.weather);
    let conditions = 1.0 + (pitch_impact + weather_impact);

    let wickets_fraction = (ALL_OUT - state.wickets) as f64 / ALL_OUT as f64;
    let momentum = current_rate - required_rate;
    let pressure = 1.0 - balls_left as f64 / innings_balls as f64;

    let mut p = BASELINE;
    p += momentum * MOMENTUM_WEIGHT;
    p += (wickets_fraction - 0.5) * WICKETS_WEIGHT;
    p -= (required_rate - current_rate).max(0.0) * RATE_PENALTY_WEIGHT;
    p += (conditions - 1.0) * CONDITIONS_WEIGHT;
    p += (pressure - PRESSURE_PIVOT) * PRESSURE_WEIGHT;

    if runs_needed <= FINISH_RUNS && balls_left <= FINISH_BALLS {
        p += FINISH_BONUS * wickets_fraction;
    }
    if required_rate > STEEP_RATE {
        p -= ((required_rate - STEEP_RATE) * STEEP_RATE_SLOPE).min(STEEP_RATE_MAX_PENALTY);
    }
    if runs_needed >= BIG_CHASE_RUNS {
        p = p.min(BIG_CHASE_CEILING);
    }

    let mut win_prob = p.clamp(1.0, 99.0).round_ties_even();

    let evenly_poised = balls_left > SMOOTH_MIN_BALLS_LEFT
        && (required_rate - current_rate).abs() < SMOOTH_MAX_RATE_GAP
        && state.wickets >= SMOOTH_MIN_WICKETS
        && runs_needed > SMOOTH_RUNS.0
        && runs_needed < SMOOTH_RUNS.1;
    if evenly_poised {
        win_prob = (BASELINE + (win_prob - BASELINE) * SMOOTH_FACTOR).round_ties_even();
    }

    ChaseOutlook {
        win_prob: win_prob.clamp(1.0, 99.0) as u32,
        required_rate: Some(required_rate),
        runs_needed,
        balls_left,
        current_rate,
        details: Some(ChaseDetails {
            pitch_impact,
            weather_impact,
            wickets_fraction,
            momentum,
            pressure,
        }),
    }
}

/// Scoring rate reported once a chase is decided; no overs counts as one.
fn decided_rate(state: &ChaseState<'_>) -> f64 {
    let overs = if state.overs > 0.0 { state.overs } else { 1.0 };
    state.score as f64 / overs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::tables::{DEFAULT_PITCH, DEFAULT_WEATHER};
    use approx::assert_relative_eq;

    fn chase(target: u32, score: u32, wickets: u32, overs: f64) -> ChaseState<'static> {
        ChaseState {
            target,
            score,
            wickets,
            overs,
            pitch: DEFAULT_PITCH,
            weather: DEFAULT_WEATHER,
        }
    }

    fn prob(state: &ChaseState<'_>) -> u32 {
        estimate_win_probability(state, &ReferenceData::builtin()).win_prob
    }

    #[test]
    fn target_reached_is_certain_win() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(150, 150, 4, 18.2), &tables);
        assert_eq!(out.win_prob, 100);
        assert_eq!(out.required_rate, Some(0.0));
        assert_eq!(out.runs_needed, 0);
        assert_eq!(out.balls_left, 10);
        assert!(out.details.is_none());

        assert_eq!(prob(&chase(150, 163, 9, 19.5)), 100);
    }

    #[test]
    fn all_out_is_certain_loss() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(180, 120, 10, 16.0), &tables);
        assert_eq!(out.win_prob, 0);
        assert_eq!(out.required_rate, None);
        assert_eq!(out.runs_needed, 60);
        assert_relative_eq!(out.current_rate, 7.5);
    }

    #[test]
    fn overs_exhausted_is_certain_loss() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(180, 170, 3, 20.0), &tables);
        assert_eq!(out.win_prob, 0);
        assert_eq!(out.balls_left, 0);
        assert_eq!(out.required_rate, None);

        // 19.6 carries to 20 overs
        assert_eq!(prob(&chase(180, 170, 3, 19.6)), 0);
    }

    #[test]
    fn absurd_overs_leave_no_balls() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(170, 80, 2, 1e16), &tables);
        assert_eq!(out.win_prob, 0);
        assert_eq!(out.balls_left, 0);
        assert_eq!(out.required_rate, None);
    }

    #[test]
    fn decided_rate_guards_zero_overs() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(0, 0, 0, 0.0), &tables);
        assert_eq!(out.win_prob, 100);
        assert_relative_eq!(out.current_rate, 0.0);
    }

    #[test]
    fn level_chase_at_halfway() {
        // 90 off 60 balls with 8 wickets left, scoring at 8 against 9 required
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(170, 80, 2, 10.0), &tables);
        assert_eq!(out.win_prob, 46);
        assert_eq!(out.runs_needed, 90);
        assert_eq!(out.balls_left, 60);
        assert_relative_eq!(out.required_rate.unwrap(), 9.0);
        assert_relative_eq!(out.current_rate, 8.0);

        let d = out.details.unwrap();
        assert_relative_eq!(d.wickets_fraction, 0.8);
        assert_relative_eq!(d.momentum, -1.0);
        assert_relative_eq!(d.pressure, 0.5);
    }

    #[test]
    fn overs_notation_sets_balls_left() {
        let tables = ReferenceData::builtin();
        let out = estimate_win_probability(&chase(170, 80, 2, 10.3), &tables);
        assert_eq!(out.balls_left, 57);
    }

    #[test]
    fn close_finish_with_wickets() {
        assert_eq!(prob(&chase(150, 145, 3, 18.0)), 99);
    }

    #[test]
    fn huge_chase_is_capped() {
        assert_eq!(prob(&chase(250, 40, 1, 5.0)), 1);
        let early = prob(&chase(200, 30, 0, 2.0));
        assert!(early <= 12, "170 needed should be capped, got {}", early);
    }

    #[test]
    fn evenly_poised_chase_is_pulled_toward_even() {
        // raw estimate rounds to 39; smoothing gives 50 + (39 - 50) * 0.6
        assert_eq!(prob(&chase(145, 55, 6, 8.0)), 43);
    }

    #[test]
    fn batting_conditions_favour_chasers() {
        let dew = prob(&ChaseState {
            pitch: "Flat / Batting Paradise",
            weather: "Night Match (Heavy Dew)",
            ..chase(160, 70, 3, 10.0)
        });
        let drizzle = prob(&ChaseState {
            pitch: "Damp / Slow & Low",
            weather: "Light Rain / Drizzle",
            ..chase(160, 70, 3, 10.0)
        });
        assert_eq!(dew, 39);
        assert_eq!(drizzle, 22);
    }

    #[test]
    fn wickets_in_hand_help() {
        assert!(prob(&chase(160, 70, 1, 10.0)) > prob(&chase(160, 70, 7, 10.0)));
    }

    #[test]
    fn undecided_chases_stay_in_range() {
        let tables = ReferenceData::builtin();
        for target in [40, 120, 180, 240] {
            for score in [0, 30, 90, 150] {
                for wickets in 0..10 {
                    for overs in [0.0, 0.4, 3.0, 9.5, 14.2, 18.0, 19.5] {
                        let state = chase(target, score, wickets, overs);
                        let out = estimate_win_probability(&state, &tables);
                        if out.runs_needed > 0 {
                            assert!(
                                (1..=99).contains(&out.win_prob),
                                "{}/{} chasing {} after {}: {}",
                                score,
                                wickets,
                                target,
                                overs,
                                out.win_prob
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn estimate_is_deterministic() {
        let tables = ReferenceData::builtin();
        let s = chase(171, 96, 4, 12.4);
        assert_eq!(
            estimate_win_probability(&s, &tables),
            estimate_win_probability(&s, &tables)
        );
    }
}
