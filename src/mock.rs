//! In-memory fixtures served by the gateway in mock mode.
//!
//! Keyed by the same paths the live backend exposes, seeded for users 12
//! and 18.

use std::collections::HashMap;

use serde_json::{json, Value};

// ---

/// Build the fixture table. Values are unwrapped payloads (no `data` envelope).
pub fn fixtures() -> HashMap<String, Value> {
    // ---
    let mut table = HashMap::new();

    table.insert(
        "/user/12".to_string(),
        json!({
            "id": 12,
            "userInfos": { "firstName": "Karl", "lastName": "Dovineau", "age": 31 },
            "todayScore": 0.12,
            "keyData": {
                "calorieCount": 1930,
                "proteinCount": 155,
                "carbohydrateCount": 290,
                "lipidCount": 50
            }
        }),
    );
    table.insert(
        "/user/18".to_string(),
        json!({
            "id": 18,
            "userInfos": { "firstName": "Cecilia", "lastName": "Ratorez", "age": 34 },
            "todayScore": 0.3,
            "keyData": {
                "calorieCount": 2103,
                "proteinCount": 90,
                "carbohydrateCount": 150,
                "lipidCount": 120
            }
        }),
    );

    table.insert(
        "/user/12/activity".to_string(),
        activity(12, &[(80, 240), (80, 220), (81, 280), (81, 290), (80, 160), (78, 162), (76, 390)]),
    );
    table.insert(
        "/user/18/activity".to_string(),
        activity(18, &[(70, 240), (69, 220), (70, 280), (70, 500), (69, 160), (69, 162), (69, 390)]),
    );

    table.insert(
        "/user/12/average-sessions".to_string(),
        average_sessions(12, [30, 23, 45, 50, 0, 0, 60]),
    );
    table.insert(
        "/user/18/average-sessions".to_string(),
        average_sessions(18, [30, 40, 50, 30, 30, 50, 50]),
    );

    table.insert(
        "/user/12/performance".to_string(),
        performance(12, [80, 120, 140, 50, 200, 90]),
    );
    table.insert(
        "/user/18/performance".to_string(),
        performance(18, [200, 240, 80, 80, 220, 110]),
    );

    table
}

fn activity(user_id: u32, days: &[(u32, u32)]) -> Value {
    // ---
    let sessions: Vec<Value> = days
        .iter()
        .zip(1..)
        .map(|((kilogram, calories), day)| {
            json!({
                "day": format!("2020-07-{day:02}"),
                "kilogram": kilogram,
                "calories": calories
            })
        })
        .collect();
    json!({ "userId": user_id, "sessions": sessions })
}

fn average_sessions(user_id: u32, lengths: [u32; 7]) -> Value {
    // ---
    let sessions: Vec<Value> = lengths
        .iter()
        .zip(1..)
        .map(|(length, day)| json!({ "day": day, "sessionLength": length }))
        .collect();
    json!({ "userId": user_id, "sessions": sessions })
}

/// Values ordered by wire kind id 1..=6.
fn performance(user_id: u32, values: [u32; 6]) -> Value {
    // ---
    let data: Vec<Value> = values
        .iter()
        .zip(1..)
        .map(|(value, kind)| json!({ "value": value, "kind": kind }))
        .collect();
    json!({
        "userId": user_id,
        "kind": {
            "1": "cardio",
            "2": "energy",
            "3": "endurance",
            "4": "strength",
            "5": "speed",
            "6": "intensity"
        },
        "data": data
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::models::ResourceKind;

    #[test]
    fn test_every_resource_seeded_for_both_users() {
        // ---
        let table = fixtures();
        for user_id in [12, 18] {
            for kind in ResourceKind::ALL {
                assert!(
                    table.contains_key(&kind.path(user_id)),
                    "missing fixture {}",
                    kind.path(user_id)
                );
            }
        }
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_activity_dates_are_sequential() {
        // ---
        let table = fixtures();
        let sessions = table["/user/12/activity"]["sessions"].as_array().unwrap();
        assert_eq!(sessions.len(), 7);
        assert_eq!(sessions[0]["day"], "2020-07-01");
        assert_eq!(sessions[6]["day"], "2020-07-07");
    }
}
