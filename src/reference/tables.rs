//! Built-in reference tables: venues, pitch and weather adjustments, and the
//! T20 resource table used for rain-shortened targets.

use super::models::{Condition, Venue};

pub const DEFAULT_PITCH: &str = "Standard / Balanced";
pub const DEFAULT_WEATHER: &str = "Clear & Sunny (Day)";

/// Average used when the requested ground is not in the venue table.
pub const DEFAULT_VENUE_AVG: u32 = 168;

pub const PITCH_TYPES: [Condition; 5] = [
    Condition::new("Flat / Batting Paradise", 0.08),
    Condition::new("Green / Pacer Friendly", -0.07),
    Condition::new("Dry / Spinner Friendly", -0.05),
    Condition::new("Damp / Slow & Low", -0.09),
    Condition::new(DEFAULT_PITCH, 0.0),
];

pub const WEATHER_CONDITIONS: [Condition; 6] = [
    Condition::new(DEFAULT_WEATHER, 0.0),
    Condition::new("Overcast / Cloudy (Day)", -0.05),
    Condition::new("Clear Night (No Dew)", 0.01),
    Condition::new("Night Match (Heavy Dew)", 0.08),
    Condition::new("Humid Conditions", -0.03),
    Condition::new("Light Rain / Drizzle", -0.06),
];

/// Overs-remaining checkpoints for the resource table columns (ascending).
pub const RESOURCE_OVERS: [f64; 5] = [1.0, 5.0, 10.0, 15.0, 20.0];

/// Percentage of batting resources left.
/// Rows: wickets lost 0..=9. Columns: `RESOURCE_OVERS`.
///
/// Every column is non-increasing down the rows and every row is increasing
/// left to right; interpolation relies on both.
pub const RESOURCE_TABLE: [[f64; 5]; 10] = [
    //  1      5     10     15     20  overs left
    [8.4, 33.5, 62.7, 85.1, 100.0],
    [8.2, 32.4, 59.5, 79.8, 93.9],
    [7.9, 30.7, 55.1, 73.1, 86.5],
    [7.5, 28.3, 49.5, 65.1, 77.5],
    [6.9, 25.1, 42.9, 56.1, 66.9],
    [6.2, 21.4, 35.7, 46.4, 55.4],
    [5.3, 17.5, 28.5, 36.5, 43.4],
    [4.2, 13.6, 21.4, 26.8, 31.6],
    [3.1, 9.6, 14.6, 17.8, 20.7],
    [2.0, 5.8, 8.4, 10.0, 11.5],
];

fn venue(
    name: &str,
    city: &str,
    country: &str,
    avg_score: u32,
    pitch_type: &str,
    boundary_size: &str,
) -> Venue {
    Venue {
        name: name.to_string(),
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        avg_score,
        pitch_type: Some(pitch_type.to_string()),
        boundary_size: Some(boundary_size.to_string()),
    }
}

/// The built-in ground list, in display order.
#[rustfmt::skip]
pub fn builtin_venues() -> Vec<Venue> {
    vec![
        venue("Wankhede Stadium", "Mumbai", "India", 175, "Flat / Batting Paradise", "Medium"),
        venue("Eden Gardens", "Kolkata", "India", 165, "Damp / Slow & Low", "Large"),
        venue("M. Chinnaswamy Stadium", "Bangalore", "India", 180, "Flat / Batting Paradise", "Small"),
        venue("Arun Jaitley Stadium", "Delhi", "India", 170, "Dry / Spinner Friendly", "Medium"),
        venue("MA Chidambaram Stadium", "Chennai", "India", 160, "Damp / Slow & Low", "Large"),
        venue("Narendra Modi Stadium", "Ahmedabad", "India", 172, "Standard / Balanced", "Large"),
        venue("HPCA Stadium", "Dharamshala", "India", 168, "Green / Pacer Friendly", "Medium"),
        venue("Rajiv Gandhi Intl. Stadium", "Hyderabad", "India", 170, "Flat / Batting Paradise", "Medium"),
        venue("Punjab Cricket Association IS Bindra Stadium", "Mohali", "India", 174, "Flat / Batting Paradise", "Medium"),
        venue("Holkar Cricket Stadium", "Indore", "India", 177, "Flat / Batting Paradise", "Medium"),
        venue("Barsapara Cricket Stadium", "Guwahati", "India", 162, "Standard / Balanced", "Large"),
        venue("Melbourne Cricket Ground", "Melbourne", "Australia", 170, "Standard / Balanced", "Large"),
        venue("Sydney Cricket Ground", "Sydney", "Australia", 168, "Dry / Spinner Friendly", "Large"),
        venue("Adelaide Oval", "Adelaide", "Australia", 172, "Flat / Batting Paradise", "Medium"),
        venue("Perth Stadium (Optus Stadium)", "Perth", "Australia", 165, "Green / Pacer Friendly", "Large"),
        venue("The Gabba", "Brisbane", "Australia", 170, "Green / Pacer Friendly", "Medium"),
        venue("Bellerive Oval", "Hobart", "Australia", 160, "Standard / Balanced", "Medium"),
        venue("Lord's", "London", "England", 165, "Green / Pacer Friendly", "Large"),
        venue("Old Trafford", "Manchester", "England", 162, "Standard / Balanced", "Large"),
        venue("The Oval", "London", "England", 168, "Flat / Batting Paradise", "Medium"),
        venue("Edgbaston", "Birmingham", "England", 170, "Flat / Batting Paradise", "Medium"),
        venue("Trent Bridge", "Nottingham", "England", 175, "Flat / Batting Paradise", "Small"),
        venue("Dubai International Stadium", "Dubai", "UAE", 158, "Damp / Slow & Low", "Medium"),
        venue("Sharjah Cricket Stadium", "Sharjah", "UAE", 155, "Dry / Spinner Friendly", "Small"),
        venue("Gaddafi Stadium", "Lahore", "Pakistan", 170, "Flat / Batting Paradise", "Medium"),
        venue("National Stadium", "Karachi", "Pakistan", 172, "Flat / Batting Paradise", "Large"),
        venue("The Wanderers", "Johannesburg", "South Africa", 175, "Flat / Batting Paradise", "Medium"),
        venue("Newlands", "Cape Town", "South Africa", 168, "Standard / Balanced", "Medium"),
        venue("Kingsmead", "Durban", "South Africa", 170, "Damp / Slow & Low", "Medium"),
        venue("SuperSport Park", "Centurion", "South Africa", 178, "Flat / Batting Paradise", "Small"),
        venue("Eden Park", "Auckland", "New Zealand", 178, "Flat / Batting Paradise", "Small"),
        venue("Basin Reserve", "Wellington", "New Zealand", 165, "Green / Pacer Friendly", "Large"),
        venue("Hagley Oval", "Christchurch", "New Zealand", 168, "Green / Pacer Friendly", "Large"),
        venue("Kensington Oval", "Barbados", "West Indies", 172, "Standard / Balanced", "Medium"),
        venue("Queen's Park Oval", "Trinidad", "West Indies", 168, "Dry / Spinner Friendly", "Large"),
        venue("Sabina Park", "Jamaica", "West Indies", 165, "Standard / Balanced", "Medium"),
        venue("Daren Sammy National Cricket Stadium", "St Lucia", "West Indies", 166, "Standard / Balanced", "Medium"),
        venue("R. Premadasa Stadium", "Colombo", "Sri Lanka", 170, "Damp / Slow & Low", "Medium"),
        venue("Pallekele International Stadium", "Pallekele", "Sri Lanka", 165, "Standard / Balanced", "Large"),
        venue("Galle International Stadium", "Galle", "Sri Lanka", 160, "Slow & Low", "Large"),
        venue("Shere Bangla National Stadium", "Dhaka", "Bangladesh", 165, "Damp / Slow & Low", "Medium"),
        venue("Zahur Ahmed Chowdhury Stadium", "Chattogram", "Bangladesh", 162, "Standard / Balanced", "Medium"),
        venue("Maidan", "Example City", "Demo", 154, "Standard / Balanced", "Large"),
    ]
}
