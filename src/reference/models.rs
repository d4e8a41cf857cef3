use serde::{Deserialize, Serialize};

/// A ground with its historical T20 scoring profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Unique display name, used as the lookup key
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Typical first-innings aggregate at this ground
    pub avg_score: u32,
    /// Descriptive pitch label, e.g. "Flat / Batting Paradise"
    #[serde(default)]
    pub pitch_type: Option<String>,
    /// "Small" | "Medium" | "Large"
    #[serde(default)]
    pub boundary_size: Option<String>,
}

/// Entry in the `/api/venues` listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueSummary {
    pub name: String,
    pub city: String,
    pub country: String,
    pub avg_score: u32,
}

impl From<&Venue> for VenueSummary {
    fn from(v: &Venue) -> Self {
        VenueSummary {
            name: v.name.clone(),
            city: v.city.clone().unwrap_or_default(),
            country: v.country.clone().unwrap_or_default(),
            avg_score: v.avg_score,
        }
    }
}

/// A labelled adjustment to the expected scoring rate (pitch or weather).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condition {
    pub label: &'static str,
    /// Fractional change to scoring rate, e.g. 0.08 = +8%
    pub impact: f64,
}

impl Condition {
    pub const fn new(label: &'static str, impact: f64) -> Self {
        Condition { label, impact }
    }
}
