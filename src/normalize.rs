//! Raw payload normalization.
//!
//! Each function here is total: a structurally present but incomplete payload
//! resolves to documented defaults, logged at `warn`. Only an absent or
//! mistyped top-level payload yields an empty result, and even that is logged
//! rather than returned as an error.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::{
    ActivitySession, KeyData, PerformanceEntry, PerformanceKind, ResourceKind, SessionLength,
    UserProfile, MIN_DISPLAY_SESSION_MINUTES, UNKNOWN_LABEL, WEEKDAY_LETTERS, WEEKDAY_NAMES,
};

// ---

/// Score field names in precedence order.
pub const SCORE_FIELDS: [&str; 2] = ["todayScore", "score"];

/// Output of [`normalize_endpoint`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    Profile(Option<UserProfile>),
    Activity(Vec<ActivitySession>),
    Sessions(Vec<SessionLength>),
    Performance(Vec<PerformanceEntry>),
    /// Unknown resource kind, payload returned unchanged.
    Passthrough(Value),
}

/// Route a raw payload to its normalizer based on the endpoint it came from.
pub fn normalize_endpoint(path: &str, raw: Value) -> Normalized {
    // ---
    match ResourceKind::from_path(path) {
        Some(ResourceKind::Performance) => Normalized::Performance(normalize_performance(&raw)),
        Some(ResourceKind::AverageSessions) => Normalized::Sessions(normalize_sessions(&raw)),
        Some(ResourceKind::Activity) => Normalized::Activity(normalize_activity(&raw)),
        Some(ResourceKind::Profile) => Normalized::Profile(normalize_profile(&raw)),
        None => {
            debug!("No normalizer for {}, passing payload through", path);
            Normalized::Passthrough(raw)
        }
    }
}

/// Return the first candidate field that is present and not `null`.
pub fn first_defined<'a>(obj: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    // ---
    candidates
        .iter()
        .filter_map(|name| obj.get(*name))
        .find(|v| !v.is_null())
}

/// Read a finite number, accepting numeric strings.
fn as_number(v: &Value) -> Option<f64> {
    // ---
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// An object whose fields default individually; `None` stands for a missing
/// or mistyped object, in which case every field reads its default.
type Fields<'a> = Option<&'a Map<String, Value>>;

fn number_field(obj: Fields<'_>, field: &str, context: &str) -> f64 {
    // ---
    match obj.and_then(|o| o.get(field)) {
        None | Some(Value::Null) => 0.0,
        Some(v) => as_number(v).unwrap_or_else(|| {
            warn!("{}: field '{}' is not a number ({}), using 0", context, field, v);
            0.0
        }),
    }
}

/// Non-negative integer field; fractional values round to nearest.
fn count_field(obj: Fields<'_>, field: &str, context: &str) -> u32 {
    // ---
    let n = number_field(obj, field, context);
    if n < 0.0 {
        warn!("{}: field '{}' is negative ({}), using 0", context, field, n);
        return 0;
    }
    n.round().min(u32::MAX as f64) as u32
}

fn string_field(obj: Fields<'_>, field: &str) -> String {
    // ---
    match obj.and_then(|o| o.get(field)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Nested object; `None` (logged) when absent or not an object.
fn nested<'a>(obj: &'a Map<String, Value>, field: &str, context: &str) -> Fields<'a> {
    // ---
    match obj.get(field) {
        Some(Value::Object(inner)) => Some(inner),
        None | Some(Value::Null) => {
            warn!("{}: '{}' missing, defaulting its fields", context, field);
            None
        }
        Some(other) => {
            warn!("{}: '{}' is not an object ({}), defaulting its fields", context, field, other);
            None
        }
    }
}

/// One array entry as an object; `None` (logged) when it is not one.
fn entry_fields<'a>(item: &'a Value, context: &str) -> Fields<'a> {
    // ---
    let obj = item.as_object();
    if obj.is_none() {
        warn!("{}: entry is not an object ({})", context, item);
    }
    obj
}

/// Array field, or `None` (logged) when absent or not iterable.
fn array_field<'a>(raw: &'a Value, field: &str, context: &str) -> Option<&'a Vec<Value>> {
    // ---
    match raw.get(field) {
        Some(Value::Array(items)) => Some(items),
        _ => {
            warn!("{}: missing input, '{}' is not an array", context, field);
            None
        }
    }
}

/// Normalize a user profile payload.
///
/// Returns `None` only when the payload is not an object at all.
pub fn normalize_profile(raw: &Value) -> Option<UserProfile> {
    // ---
    const CTX: &str = "profile";

    let Some(obj) = raw.as_object() else {
        warn!("{}: missing input, payload is {}", CTX, raw);
        return None;
    };

    let infos = nested(obj, "userInfos", CTX);
    let key_data = nested(obj, "keyData", CTX);

    let score = match first_defined(obj, &SCORE_FIELDS) {
        Some(v) => as_number(v).unwrap_or_else(|| {
            warn!("{}: score is not a number ({}), using 0", CTX, v);
            0.0
        }),
        None => {
            warn!("{}: neither todayScore nor score present, using 0", CTX);
            0.0
        }
    };

    Some(UserProfile {
        id: count_field(Some(obj), "id", CTX),
        first_name: string_field(infos, "firstName"),
        last_name: string_field(infos, "lastName"),
        age: count_field(infos, "age", CTX),
        score: score.clamp(0.0, 1.0),
        key_data: KeyData {
            calorie_count: count_field(key_data, "calorieCount", CTX),
            protein_count: count_field(key_data, "proteinCount", CTX),
            carbohydrate_count: count_field(key_data, "carbohydrateCount", CTX),
            lipid_count: count_field(key_data, "lipidCount", CTX),
        },
    })
}

/// Parse the day of month out of an ISO-like `YYYY-MM-DD...` string.
///
/// Only the date token before any `T` or space is read, and month/day need
/// not be zero-padded (`2020-7-3` is day 3).
fn day_of_month(date: &str) -> Option<u32> {
    // ---
    let head = date.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .ok()
        .map(|d| d.day())
}

/// Normalize the daily activity payload, preserving session order.
pub fn normalize_activity(raw: &Value) -> Vec<ActivitySession> {
    // ---
    const CTX: &str = "activity";

    let Some(items) = array_field(raw, "sessions", CTX) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let obj = entry_fields(item, CTX);
            let date = string_field(obj, "day");
            let (day, label) = match day_of_month(&date) {
                Some(day) => (day, day.to_string()),
                None => {
                    warn!("{}: unparseable date '{}'", CTX, date);
                    (0, UNKNOWN_LABEL.to_string())
                }
            };
            ActivitySession {
                date,
                day_of_month: day,
                label,
                kilogram: number_field(obj, "kilogram", CTX),
                calories: number_field(obj, "calories", CTX),
            }
        })
        .collect()
}

/// Normalize average session lengths.
///
/// The display length is floored at one minute for every entry, zero days
/// included; `raw_length` keeps the value as received.
pub fn normalize_sessions(raw: &Value) -> Vec<SessionLength> {
    // ---
    const CTX: &str = "average-sessions";

    let Some(items) = array_field(raw, "sessions", CTX) else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let obj = entry_fields(item, CTX);
            let weekday = count_field(obj, "day", CTX);
            let (letter, name) = match weekday {
                1..=7 => {
                    let i = (weekday - 1) as usize;
                    (WEEKDAY_LETTERS[i], WEEKDAY_NAMES[i])
                }
                _ => {
                    warn!("{}: weekday {} out of range", CTX, weekday);
                    (UNKNOWN_LABEL, UNKNOWN_LABEL)
                }
            };
            let raw_length = number_field(obj, "sessionLength", CTX);
            SessionLength {
                weekday,
                letter,
                name,
                raw_length,
                length: raw_length.max(MIN_DISPLAY_SESSION_MINUTES),
            }
        })
        .collect()
}

/// Normalize performance scores, resolving each category eagerly.
///
/// Identity comes from [`PerformanceKind::from_id`]; the payload's own `kind`
/// table is only compared against it for diagnostics.
pub fn normalize_performance(raw: &Value) -> Vec<PerformanceEntry> {
    // ---
    const CTX: &str = "performance";

    let Some(items) = array_field(raw, "data", CTX) else {
        return Vec::new();
    };
    let wire_table = raw.get("kind").and_then(Value::as_object);

    items
        .iter()
        .map(|item| {
            let obj = entry_fields(item, CTX);
            let kind_id = u64::from(count_field(obj, "kind", CTX));
            let kind = PerformanceKind::from_id(kind_id);
            if kind == PerformanceKind::Unknown {
                warn!("{}: unrecognized kind id {}", CTX, kind_id);
            }

            if let Some(wire) = wire_table
                .and_then(|t| t.get(&kind_id.to_string()))
                .and_then(Value::as_str)
            {
                if wire != kind.slug() {
                    debug!(
                        "{}: payload names kind {} '{}', using '{}'",
                        CTX,
                        kind_id,
                        wire,
                        kind.slug()
                    );
                }
            }

            let value = number_field(obj, "value", CTX);
            if value < 0.0 {
                warn!("{}: negative value {} for {}, using 0", CTX, value, kind.slug());
            }
            PerformanceEntry {
                kind_id,
                kind,
                value: value.max(0.0),
            }
        })
        .collect()
}
