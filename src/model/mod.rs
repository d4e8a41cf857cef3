pub mod overs;
pub mod projection;
pub mod resources;
pub mod target;
pub mod win_probability;

pub use projection::{project_score, MatchState, Projection};
pub use target::{revised_target, RevisedTarget};
pub use win_probability::{estimate_win_probability, ChaseOutlook, ChaseState};

/// Overs per side in a T20 innings.
pub const T20_OVERS: f64 = 20.0;

/// Round to `places` decimal places for display.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
