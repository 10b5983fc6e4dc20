//! Canonical and chart-ready data models for the dashboard pipeline.
//!
//! Canonical records come out of [`crate::normalize`]; chart-ready records
//! come out of [`crate::charts`]. Both are created fresh per fetch cycle and
//! never mutated afterwards.

use serde::Serialize;

// ---

/// Placeholder shown wherever a label cannot be derived.
pub const UNKNOWN_LABEL: &str = "?";

/// Single-letter weekday labels, indexed by `weekday - 1` (1 = Monday).
pub const WEEKDAY_LETTERS: [&str; 7] = ["L", "M", "M", "J", "V", "S", "D"];

/// Full weekday names, indexed by `weekday - 1` (1 = Monday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Radar full-scale value shared by every axis.
pub const RADAR_FULL_MARK: u32 = 250;

/// Display floor for session lengths, in minutes.
pub const MIN_DISPLAY_SESSION_MINUTES: f64 = 1.0;

/// The four fetchable resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Profile,
    Activity,
    AverageSessions,
    Performance,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Profile,
        ResourceKind::Activity,
        ResourceKind::AverageSessions,
        ResourceKind::Performance,
    ];

    /// Backend path for this resource, also the mock table key.
    pub fn path(self, user_id: u32) -> String {
        // ---
        match self {
            ResourceKind::Profile => format!("/user/{user_id}"),
            ResourceKind::Activity => format!("/user/{user_id}/activity"),
            ResourceKind::AverageSessions => format!("/user/{user_id}/average-sessions"),
            ResourceKind::Performance => format!("/user/{user_id}/performance"),
        }
    }

    /// Infer the kind from an endpoint string.
    ///
    /// Substring checks run in a fixed priority order (performance,
    /// average-sessions, activity) before the bare `/user/{id}` pattern.
    pub fn from_path(path: &str) -> Option<Self> {
        // ---
        if path.contains("performance") {
            Some(ResourceKind::Performance)
        } else if path.contains("average-sessions") {
            Some(ResourceKind::AverageSessions)
        } else if path.contains("activity") {
            Some(ResourceKind::Activity)
        } else if is_profile_path(path) {
            Some(ResourceKind::Profile)
        } else {
            None
        }
    }
}

fn is_profile_path(path: &str) -> bool {
    // ---
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind("/user/") {
        Some(pos) => {
            let id = &trimmed[pos + "/user/".len()..];
            !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Key nutrient counts, each a non-negative integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    pub calorie_count: u32,
    pub protein_count: u32,
    pub carbohydrate_count: u32,
    pub lipid_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    // ---
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Daily goal completion in `[0, 1]`, unified from `todayScore` / `score`.
    pub score: f64,
    pub key_data: KeyData,
}

/// One day of the activity window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySession {
    // ---
    /// Date string exactly as received.
    pub date: String,
    /// Day of month, or 0 when the date could not be parsed.
    pub day_of_month: u32,
    /// Day of month as text, or [`UNKNOWN_LABEL`].
    pub label: String,
    pub kilogram: f64,
    pub calories: f64,
}

/// Average session length for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLength {
    // ---
    /// 1 = Monday … 7 = Sunday, as received.
    pub weekday: u32,
    pub letter: &'static str,
    pub name: &'static str,
    /// True value in minutes.
    pub raw_length: f64,
    /// `max(raw_length, 1)`, so a zero day still draws.
    pub length: f64,
}

/// Performance category identity, resolved from the numeric wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceKind {
    Cardio,
    Energy,
    Endurance,
    Strength,
    Speed,
    Intensity,
    Unknown,
}

impl PerformanceKind {
    /// Radar display order, top axis first.
    pub const DISPLAY_ORDER: [PerformanceKind; 6] = [
        PerformanceKind::Intensity,
        PerformanceKind::Speed,
        PerformanceKind::Strength,
        PerformanceKind::Endurance,
        PerformanceKind::Energy,
        PerformanceKind::Cardio,
    ];

    /// The authoritative id table. The payload's own `kind` map is never
    /// consulted for identity.
    pub fn from_id(id: u64) -> Self {
        // ---
        match id {
            1 => PerformanceKind::Cardio,
            2 => PerformanceKind::Energy,
            3 => PerformanceKind::Endurance,
            4 => PerformanceKind::Strength,
            5 => PerformanceKind::Speed,
            6 => PerformanceKind::Intensity,
            _ => PerformanceKind::Unknown,
        }
    }

    pub fn slug(self) -> &'static str {
        // ---
        match self {
            PerformanceKind::Cardio => "cardio",
            PerformanceKind::Energy => "energy",
            PerformanceKind::Endurance => "endurance",
            PerformanceKind::Strength => "strength",
            PerformanceKind::Speed => "speed",
            PerformanceKind::Intensity => "intensity",
            PerformanceKind::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        // ---
        match self {
            PerformanceKind::Cardio => "Cardio",
            PerformanceKind::Energy => "Énergie",
            PerformanceKind::Endurance => "Endurance",
            PerformanceKind::Strength => "Force",
            PerformanceKind::Speed => "Vitesse",
            PerformanceKind::Intensity => "Intensité",
            PerformanceKind::Unknown => UNKNOWN_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub kind_id: u64,
    pub kind: PerformanceKind,
    pub value: f64,
}

// --- chart-ready records

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    // ---
    /// Sequential 1-based position, independent of the calendar date.
    pub index: u32,
    pub display: String,
    pub kilogram: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityChart {
    pub sessions: Vec<ActivityPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPoint {
    // ---
    pub index: u32,
    pub letter: &'static str,
    pub length: f64,
    /// False for the two boundary ghosts; presentation suppresses
    /// tooltips and active markers on them.
    pub real: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionsChart {
    pub points: Vec<SessionPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub kind: PerformanceKind,
    pub label: &'static str,
    pub value: f64,
    pub full_mark: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceChart {
    pub axes: Vec<RadarAxis>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreChart {
    /// Goal completion in `[0, 100]`.
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    // ---
    pub slug: &'static str,
    pub label: &'static str,
    pub value: u32,
    pub unit: &'static str,
    /// Value with comma thousands separators followed by the unit, e.g. `1,930kCal`.
    pub display: String,
}

/// Everything one dashboard page needs for a single user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub profile: Option<UserProfile>,
    pub activity: ActivityChart,
    pub sessions: SessionsChart,
    pub performance: PerformanceChart,
    pub score: ScoreChart,
    pub key_data: Vec<StatCard>,
}
