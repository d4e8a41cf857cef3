//! Revised chase target after a rain interruption.

use super::resources::resource_percentage;

/// Smallest target set when the first innings had no resources to compare.
const FALLBACK_MIN_TARGET: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct RevisedTarget {
    pub target: u32,
    /// First-innings resources (%)
    pub team1_resources: f64,
    /// Second-innings resources (%)
    pub team2_resources: f64,
}

/// Scale the first-innings score by the ratio of resources available to each
/// side and add one run to win.
///
/// `team1_overs` is the first innings' overs with all wickets intact;
/// `team2_overs` and `team2_wickets_lost` describe the chase at the
/// interruption.
pub fn revised_target(
    team1_score: u32,
    team1_overs: f64,
    team2_overs: f64,
    team2_wickets_lost: u32,
) -> RevisedTarget {
    let r1 = resource_percentage(team1_overs, 0);
    let r2 = resource_percentage(team2_overs, team2_wickets_lost);

    let target = if r1 == 0.0 {
        team1_score.max(FALLBACK_MIN_TARGET)
    } else {
        // `as` saturates, so huge scores pin at u32::MAX instead of wrapping
        ((team1_score as f64 * (r2 / r1)).floor() as u32).saturating_add(1)
    };

    RevisedTarget {
        target,
        team1_resources: r1,
        team2_resources: r2,
    }
}
