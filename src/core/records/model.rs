//! Creature record model.
//!
//! Records are decoded leniently: the source document is trusted as-is and
//! never validated. A field that is missing or has the wrong shape decodes
//! to its empty value instead of failing the whole list, so malformed
//! entries surface later as blank cells or a `NaN` total.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// Identity
// ============================================================================

/// Opaque record identifier.
///
/// Only ever displayed; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(serde_json::Number),
    /// MongoDB extended-JSON object id, e.g. `{"$oid": "65a1..."}`.
    ObjectId {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::ObjectId { oid } => f.write_str(oid),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for RecordId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Number of numeric attributes carried by every record.
pub const ATTRIBUTE_COUNT: usize = 6;

/// One creature entry as served by the data source.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub hp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub attack: Option<f64>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub defense: Option<f64>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub special_attack: Option<f64>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub special_defense: Option<f64>,
    #[serde(default, deserialize_with = "lenient_attribute")]
    pub speed: Option<f64>,
}

impl Record {
    /// Build a fully-populated record. Attributes are given in display order:
    /// hp, attack, defense, special attack, special defense, speed.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        categories: &[&str],
        attributes: [u32; ATTRIBUTE_COUNT],
    ) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] =
            attributes.map(f64::from);
        Self {
            id: Some(id.into()),
            name: name.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            hp: Some(hp),
            attack: Some(attack),
            defense: Some(defense),
            special_attack: Some(special_attack),
            special_defense: Some(special_defense),
            speed: Some(speed),
        }
    }

    /// The six numeric attributes in fixed display order.
    pub fn attributes(&self) -> [Option<f64>; ATTRIBUTE_COUNT] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    /// Sum of the six attributes, or `None` when any of them is missing.
    ///
    /// Recomputed on every call.
    pub fn total(&self) -> Option<f64> {
        self.attributes()
            .into_iter()
            .try_fold(0.0, |acc, v| v.map(|v| acc + v))
    }

    /// Categories joined with `", "`.
    pub fn categories_label(&self) -> String {
        self.categories.join(", ")
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

// ============================================================================
// Lenient field decoding
// ============================================================================

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Any JSON number is kept as sent, fractions included; anything else is
/// treated as missing.
fn lenient_attribute<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pikachu() -> Record {
        Record::new(1, "Pikachu", &["Electric"], [35, 55, 40, 50, 50, 90])
    }

    #[test]
    fn test_total_is_sum_of_attributes() {
        assert_eq!(pikachu().total(), Some(320.0));
    }

    #[test]
    fn test_total_recomputed_after_change() {
        let mut record = pikachu();
        record.speed = Some(100.0);
        assert_eq!(record.total(), Some(330.0));
    }

    #[test]
    fn test_total_missing_attribute() {
        let mut record = pikachu();
        record.defense = None;
        assert_eq!(record.total(), None);
    }

    #[test]
    fn test_categories_label() {
        let record = Record::new(6, "Charizard", &["Fire", "Flying"], [78, 84, 78, 109, 85, 100]);
        assert_eq!(record.categories_label(), "Fire, Flying");
    }

    #[test]
    fn test_decode_full_record() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "name": "Pikachu",
            "type": ["Electric"],
            "hp": 35,
            "attack": 55,
            "defense": 40,
            "special_attack": 50,
            "special_defense": 50,
            "speed": 90
        }))
        .unwrap();
        assert_eq!(record, pikachu());
    }

    #[test]
    fn test_decode_object_id() {
        let record: Record = serde_json::from_value(json!({
            "id": { "$oid": "65a1f0c2e4b0a1b2c3d4e5f6" },
            "name": "Eevee"
        }))
        .unwrap();
        assert_eq!(
            record.id.map(|id| id.to_string()),
            Some("65a1f0c2e4b0a1b2c3d4e5f6".to_string())
        );
    }

    #[test]
    fn test_decode_string_id() {
        let record: Record = serde_json::from_value(json!({ "id": "025", "name": "Pikachu" })).unwrap();
        assert_eq!(record.id, Some(RecordId::Text("025".to_string())));
    }

    #[test]
    fn test_decode_malformed_fields_are_missing() {
        let record: Record = serde_json::from_value(json!({
            "id": [1, 2],
            "name": 42,
            "type": "Water",
            "hp": "lots",
            "attack": 10.0,
            "defense": null
        }))
        .unwrap();
        assert!(record.id.is_none());
        assert_eq!(record.name, "");
        assert!(record.categories.is_empty());
        assert_eq!(record.hp, None);
        assert_eq!(record.attack, Some(10.0));
        assert_eq!(record.defense, None);
        assert_eq!(record.total(), None);
    }

    #[test]
    fn test_decode_fractional_attribute_is_kept() {
        let record: Record = serde_json::from_value(json!({
            "id": 1,
            "name": "Pikachu",
            "type": ["Electric"],
            "hp": 35.5,
            "attack": 55,
            "defense": 40,
            "special_attack": 50,
            "special_defense": 50,
            "speed": 90
        }))
        .unwrap();
        assert_eq!(record.hp, Some(35.5));
        assert_eq!(record.total(), Some(320.5));
    }

    #[test]
    fn test_name_contains_case_insensitive() {
        let record = pikachu();
        assert!(record.name_contains("pika"));
        assert!(record.name_contains("chu"));
        assert!(record.name_contains("PIKA"));
        assert!(!record.name_contains("raichu"));
    }
}
