//! Saint record data structures.

use serde::{Deserialize, Serialize};

/// A feast date within the liturgical year.
///
/// The day is carried verbatim from the source text with no calendar-validity
/// check; the directory lists entries under days like "31 febbraio".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaintDay {
    /// 1-based month number
    pub month: u32,

    /// Day of month
    pub day: u32,
}

/// One directory entry: a saint or blessed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Saint {
    /// All header lines of the entry, joined with single spaces
    pub full_name: String,

    /// Second header line
    pub first_name: String,

    /// Third header line, when the entry carries one
    pub role: Option<String>,

    /// Feast dates in the order they appear in the entry
    pub dates: Vec<SaintDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_saint() -> Saint {
        Saint {
            full_name: "San Giovanni Battista Giovanni Profeta".to_string(),
            first_name: "Giovanni".to_string(),
            role: None,
            dates: vec![
                SaintDay { month: 6, day: 24 },
                SaintDay { month: 8, day: 29 },
            ],
        }
    }

    #[test]
    fn serializes_missing_role_as_null() {
        let value = serde_json::to_value(sample_saint()).unwrap();
        assert!(value["role"].is_null());
        assert_eq!(value["dates"][0]["month"], 6);
        assert_eq!(value["dates"][1]["day"], 29);
    }

    #[test]
    fn deserializes_cache_file_format() {
        let json = r#"{
            "full_name": "Santa Bibiana Bibiana Martire",
            "first_name": "Bibiana",
            "role": "Martire",
            "dates": [{"month": 12, "day": 2}]
        }"#;

        let saint: Saint = serde_json::from_str(json).unwrap();
        assert_eq!(saint.first_name, "Bibiana");
        assert_eq!(saint.role.as_deref(), Some("Martire"));
        assert_eq!(saint.dates, vec![SaintDay { month: 12, day: 2 }]);
    }
}
