//! Decoding of collection snapshots as returned by the Realtime Database.
//!
//! A collection arrives in one of three shapes:
//! - an object keyed by record key (push ids), the usual case;
//! - an array, when every key is a small integer; the index is the key;
//! - `null`, when the collection does not exist.
//!
//! The record key is the professional's identity. Keys are unique within a
//! collection; an `id` field stored inside a record is not, so it is kept
//! as `record_id` and never used for identity.

use crate::domain::model::Professional;
use crate::utils::error::{CatalogError, Result};
use serde_json::{Map, Value};

pub fn decode_snapshot(snapshot: Value) -> Result<Vec<Professional>> {
    match snapshot {
        Value::Null => Ok(Vec::new()),
        Value::Object(entries) => Ok(entries
            .into_iter()
            .filter_map(|(key, record)| decode_entry(key, record))
            .collect()),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| decode_entry(index.to_string(), record))
            .collect()),
        other => Err(CatalogError::InvalidRecord {
            key: "<root>".to_string(),
            reason: format!("expected an object or array, got {}", type_name(&other)),
        }),
    }
}

fn decode_entry(key: String, record: Value) -> Option<Professional> {
    match decode_record(&key, record) {
        Ok(pro) => Some(pro),
        Err(e) => {
            tracing::warn!("Skipping record: {}", e);
            None
        }
    }
}

fn decode_record(key: &str, record: Value) -> Result<Professional> {
    let mut fields: Map<String, Value> = match record {
        Value::Object(fields) => fields,
        // Array snapshots have holes where keys were deleted.
        Value::Null => {
            return Err(CatalogError::InvalidRecord {
                key: key.to_string(),
                reason: "deleted entry".to_string(),
            })
        }
        other => {
            return Err(CatalogError::InvalidRecord {
                key: key.to_string(),
                reason: format!("expected an object, got {}", type_name(&other)),
            })
        }
    };

    match fields.remove("id") {
        Some(Value::String(id)) if !id.is_empty() => {
            fields.insert("record_id".to_string(), Value::String(id));
        }
        Some(Value::Number(n)) => {
            fields.insert("record_id".to_string(), Value::String(n.to_string()));
        }
        _ => {}
    }
    fields.insert("id".to_string(), Value::String(key.to_string()));
    sanitize_skills(key, &mut fields);

    serde_json::from_value(Value::Object(fields)).map_err(|e| CatalogError::InvalidRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// A malformed skill list leaves the professional skill-less instead of
/// dropping the record. Entries that are not objects are discarded.
fn sanitize_skills(key: &str, fields: &mut Map<String, Value>) {
    let Some(skills) = fields.get_mut("oficios") else {
        return;
    };

    match skills {
        Value::Null => {}
        Value::Array(entries) => {
            let before = entries.len();
            entries.retain(Value::is_object);
            if entries.len() < before {
                tracing::warn!(
                    "Record '{}': ignored {} malformed skill entries",
                    key,
                    before - entries.len()
                );
            }
        }
        other => {
            tracing::warn!(
                "Record '{}': skill list is {}, treating as no skills",
                key,
                type_name(other)
            );
            *other = Value::Array(Vec::new());
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_snapshot_uses_keys_as_ids() {
        let pros = decode_snapshot(json!({
            "-Na1": {"nombres": "Ana", "oficios": [{"oficio_name": "Plomero"}]},
            "-Nb2": {"nombres": "Bob"}
        }))
        .unwrap();

        assert_eq!(pros.len(), 2);
        let ids: Vec<&str> = pros.iter().map(|p| p.id.as_str()).collect();
        assert!(ids.contains(&"-Na1"));
        assert!(ids.contains(&"-Nb2"));
    }

    #[test]
    fn test_array_snapshot_skips_holes() {
        let pros = decode_snapshot(json!([
            {"nombres": "Ana"},
            null,
            {"id": 42, "nombres": "Eva"}
        ]))
        .unwrap();

        assert_eq!(pros.len(), 2);
        assert_eq!(pros[0].id.as_str(), "0");
        assert_eq!(pros[1].id.as_str(), "2");
        assert_eq!(pros[1].record_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_stored_id_cannot_take_another_records_key() {
        let pros = decode_snapshot(json!([
            {"id": "1", "nombres": "Ana", "oficios": [{"oficio_name": "Plomero"}]},
            {"nombres": "Bob", "oficios": [{"oficio_name": "Plomero"}]}
        ]))
        .unwrap();

        let ids: Vec<&str> = pros.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["0", "1"]);

        let groups = crate::core::grouper::build_groups(&pros, &["Plomero".to_string()]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].professionals.len(), 2);
    }

    #[test]
    fn test_null_snapshot_is_empty() {
        assert!(decode_snapshot(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let pros = decode_snapshot(json!({
            "a": "not a record",
            "b": {"nombres": 7},
            "c": {"nombres": "Eva"}
        }))
        .unwrap();

        assert_eq!(pros.len(), 1);
        assert_eq!(pros[0].id.as_str(), "c");
    }

    #[test]
    fn test_malformed_skill_list_means_no_skills() {
        let pros = decode_snapshot(json!({
            "a": {"nombres": "Bob", "oficios": "Plomero"},
            "b": {"nombres": "Eva", "oficios": ["Plomero", {"oficio_name": "Carpintero"}]}
        }))
        .unwrap();

        assert_eq!(pros.len(), 2);
        assert!(pros[0].skills.is_empty());
        assert_eq!(pros[1].skills.len(), 1);
        assert_eq!(pros[1].skills[0].name, "Carpintero");
    }

    #[test]
    fn test_nameless_skills_do_not_form_groups() {
        let pros = decode_snapshot(json!({
            "a": {"nombres": "Ana", "oficios": [{"oficio_descripcion": "sin nombre"}]},
            "b": {"nombres": "Bob", "oficios": [{"oficio_name": "  "}, {"oficio_name": "Plomero"}]}
        }))
        .unwrap();

        assert!(pros[0].skills.is_empty());
        assert_eq!(pros[1].skills.len(), 1);

        let skills = crate::core::grouper::distinct_skill_names(&pros);
        assert_eq!(skills, vec!["Plomero".to_string()]);
        let groups = crate::core::grouper::build_groups(&pros, &skills);
        assert!(groups.iter().all(|g| !g.skill_name.trim().is_empty()));
    }

    #[test]
    fn test_scalar_root_is_an_error() {
        assert!(matches!(
            decode_snapshot(json!(3)),
            Err(CatalogError::InvalidRecord { .. })
        ));
    }
}
