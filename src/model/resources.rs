//! DLS-style batting resources remaining for a T20 innings.

use crate::reference::tables::{RESOURCE_OVERS, RESOURCE_TABLE};

/// Wickets at which an innings is over.
pub const ALL_OUT: u32 = 10;

const CHECKPOINT_TOLERANCE: f64 = 1e-6;

/// Percentage (0–100) of batting resources left with `overs_left` overs to
/// bowl and `wickets_lost` wickets down.
///
/// Exact checkpoints return the table value; between checkpoints the value is
/// linearly interpolated; beyond the table it holds the nearest edge.
pub fn resource_percentage(overs_left: f64, wickets_lost: u32) -> f64 {
    // `!(x > 0)` also rejects NaN
    if wickets_lost >= ALL_OUT || !(overs_left > 0.0) {
        return 0.0;
    }
    interpolate_row(&RESOURCE_TABLE[wickets_lost as usize], &RESOURCE_OVERS, overs_left)
}

/// Piecewise-linear lookup along one table row.
///
/// - `row`: values at each checkpoint
/// - `checkpoints`: ascending x-axis breakpoints
/// - `x`: point to evaluate
fn interpolate_row<const N: usize>(row: &[f64; N], checkpoints: &[f64; N], x: f64) -> f64 {
    if let Some(i) = checkpoints
        .iter()
        .position(|&c| (x - c).abs() < CHECKPOINT_TOLERANCE)
    {
        return row[i];
    }

    let last = N - 1;
    if x >= checkpoints[last] {
        return row[last];
    }
    if x <= checkpoints[0] {
        return row[0];
    }

    // x is strictly inside (checkpoints[0], checkpoints[last]) here
    let hi = checkpoints.iter().position(|&c| c > x).unwrap_or(last);
    let lo = hi - 1;
    let frac = (x - checkpoints[lo]) / (checkpoints[hi] - checkpoints[lo]);
    row[lo] + (row[hi] - row[lo]) * frac
}
