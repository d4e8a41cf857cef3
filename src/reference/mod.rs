use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::error::ReferenceDataError;

pub mod models;
pub mod tables;

use models::{Condition, Venue, VenueSummary};
use tables::{DEFAULT_VENUE_AVG, PITCH_TYPES, WEATHER_CONDITIONS};

/// Immutable lookup tables shared by every request.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    venues: Vec<Venue>,
    venue_index: HashMap<String, usize>,
    pitch_impacts: HashMap<&'static str, f64>,
    weather_impacts: HashMap<&'static str, f64>,
}

impl ReferenceData {
    /// Tables with the built-in venue list.
    pub fn builtin() -> Self {
        Self::indexed(tables::builtin_venues())
    }

    /// Build tables around a custom venue list.
    pub fn from_venues(venues: Vec<Venue>) -> Result<Self, ReferenceDataError> {
        if venues.is_empty() {
            return Err(ReferenceDataError::Empty);
        }

        {
            let mut seen = HashSet::with_capacity(venues.len());
            for v in &venues {
                if v.avg_score == 0 {
                    return Err(ReferenceDataError::ZeroAverage(v.name.clone()));
                }
                if !seen.insert(v.name.as_str()) {
                    return Err(ReferenceDataError::DuplicateVenue(v.name.clone()));
                }
            }
        }
        Ok(Self::indexed(venues))
    }

    fn indexed(venues: Vec<Venue>) -> Self {
        let venue_index = venues
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name.clone(), i))
            .collect();
        ReferenceData {
            venues,
            venue_index,
            pitch_impacts: condition_index(&PITCH_TYPES),
            weather_impacts: condition_index(&WEATHER_CONDITIONS),
        }
    }

    /// Load the venue list from a JSON array on disk.
    pub fn from_venues_file(path: &Path) -> Result<Self, ReferenceDataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let venues: Vec<Venue> =
            serde_json::from_str(&raw).map_err(|source| ReferenceDataError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_venues(venues)
    }

    /// Built-in tables, or the venue file when one is configured.
    pub fn load(venues_file: Option<&Path>) -> Result<Self, ReferenceDataError> {
        let data = match venues_file {
            Some(path) => {
                let data = Self::from_venues_file(path)?;
                info!("Loaded {} venues from {}", data.venues.len(), path.display());
                data
            }
            None => {
                let data = Self::builtin();
                info!("Using {} built-in venues", data.venues.len());
                data
            }
        };
        Ok(data)
    }

    pub fn venue_summaries(&self) -> Vec<VenueSummary> {
        self.venues.iter().map(VenueSummary::from).collect()
    }

    pub fn venue(&self, name: &str) -> Option<&Venue> {
        self.venue_index.get(name).map(|&i| &self.venues[i])
    }

    /// Average innings score at the ground, or the league-wide default.
    pub fn venue_avg(&self, name: &str) -> u32 {
        self.venue(name).map(|v| v.avg_score).unwrap_or(DEFAULT_VENUE_AVG)
    }

    /// Scoring-rate delta for a pitch label; unknown labels are neutral.
    pub fn pitch_impact(&self, label: &str) -> f64 {
        self.pitch_impacts.get(label).copied().unwrap_or(0.0)
    }

    /// Scoring-rate delta for a weather label; unknown labels are neutral.
    pub fn weather_impact(&self, label: &str) -> f64 {
        self.weather_impacts.get(label).copied().unwrap_or(0.0)
    }
}

fn condition_index(conditions: &[Condition]) -> HashMap<&'static str, f64> {
    conditions.iter().map(|c| (c.label, c.impact)).collect()
}
