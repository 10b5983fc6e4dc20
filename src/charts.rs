//! Chart transforms over canonical records.
//!
//! Pure functions with no I/O. An empty input is a legitimate case and always
//! produces an empty-but-well-formed chart; rendering "no data" is up to the
//! caller.

use crate::models::{
    ActivityChart, ActivityPoint, ActivitySession, KeyData, PerformanceChart, PerformanceEntry,
    PerformanceKind, RadarAxis, ScoreChart, SessionLength, SessionPoint, SessionsChart, StatCard,
    UserProfile, RADAR_FULL_MARK,
};

// ---

/// Relabel sessions with a sequential 1-based index.
///
/// Calendar gaps are deliberately ignored so the horizontal axis is evenly
/// spaced.
pub fn activity_chart(sessions: &[ActivitySession]) -> ActivityChart {
    // ---
    let sessions = sessions
        .iter()
        .zip(1u32..)
        .map(|(s, index)| ActivityPoint {
            index,
            display: index.to_string(),
            kilogram: s.kilogram,
            calories: s.calories,
        })
        .collect();

    ActivityChart { sessions }
}

/// Bracket the real weekday points with two ghost points.
///
/// The start ghost (index 0) copies the first real length and the end ghost
/// (index n + 1) copies the last, so the interpolated curve keeps a
/// representative slope out to the canvas edges.
pub fn sessions_chart(sessions: &[SessionLength]) -> SessionsChart {
    // ---
    let (Some(first), Some(last)) = (sessions.first(), sessions.last()) else {
        return SessionsChart::default();
    };

    let ghost = |index: u32, length: f64| SessionPoint {
        index,
        letter: "",
        length,
        real: false,
    };

    let mut points = Vec::with_capacity(sessions.len() + 2);
    points.push(ghost(0, first.length));
    points.extend(sessions.iter().zip(1u32..).map(|(s, index)| SessionPoint {
        index,
        letter: s.letter,
        length: s.length,
        real: true,
    }));
    points.push(ghost(sessions.len() as u32 + 1, last.length));

    SessionsChart { points }
}

/// Six radar axes in fixed display order; absent categories read 0.
///
/// Lookup is by resolved kind, so reordering of the upstream id table does
/// not move values between axes. If a kind appears twice the first entry wins.
pub fn performance_chart(entries: &[PerformanceEntry]) -> PerformanceChart {
    // ---
    let axes = PerformanceKind::DISPLAY_ORDER
        .iter()
        .map(|&kind| RadarAxis {
            kind,
            label: kind.label(),
            value: entries
                .iter()
                .find(|e| e.kind == kind)
                .map_or(0.0, |e| e.value),
            full_mark: RADAR_FULL_MARK,
        })
        .collect();

    PerformanceChart { axes }
}

/// `round(score * 100)` clamped to `[0, 100]`; non-finite scores read 0.
pub fn calculate_percentage(score: f64) -> u8 {
    // ---
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Goal-completion chart. A missing profile yields 0%.
pub fn score_chart(profile: Option<&UserProfile>) -> ScoreChart {
    // ---
    ScoreChart {
        percentage: profile.map_or(0, |p| calculate_percentage(p.score)),
    }
}

/// Format with comma thousands separators, e.g. `1930` -> `1,930`.
fn group_thousands(n: u32) -> String {
    // ---
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The four nutrient summary cards. A missing profile yields all zeros.
pub fn key_data_cards(profile: Option<&UserProfile>) -> Vec<StatCard> {
    // ---
    let k = profile.map(|p| p.key_data).unwrap_or_default();

    let card = |slug: &'static str, label: &'static str, value: u32, unit: &'static str| StatCard {
        slug,
        label,
        value,
        unit,
        display: format!("{}{}", group_thousands(value), unit),
    };

    let KeyData {
        calorie_count,
        protein_count,
        carbohydrate_count,
        lipid_count,
    } = k;

    vec![
        card("calories", "Calories", calorie_count, "kCal"),
        card("proteins", "Protéines", protein_count, "g"),
        card("carbohydrates", "Glucides", carbohydrate_count, "g"),
        card("lipids", "Lipides", lipid_count, "g"),
    ]
}
