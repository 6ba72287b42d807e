//! Required-key checks for JSON request bodies.
//!
//! Create endpoints accept a JSON object and must reject it before any
//! decoding when a required key is absent. Presence is checked on the raw
//! object so that every missing key is reported at once, independent of the
//! order serde would visit fields in.

use serde_json::{Map, Value};
use validator::ValidationError;

use crate::error::CoreError;

/// A request payload with a fixed set of keys that must be present.
///
/// A key counts as present even when its value is `null`; whether `null` is
/// acceptable is decided later by the typed decode.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static str];
}

/// Return the required keys absent from `object`, in declaration order.
pub fn missing_fields(object: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect()
}

/// Check that `value` is a JSON object carrying every key in `required`.
///
/// Returns the object on success so the caller can decode it without
/// re-parsing.
pub fn require_fields(value: Value, required: &[&str]) -> Result<Map<String, Value>, CoreError> {
    let Value::Object(object) = value else {
        return Err(CoreError::Validation(
            "Request body must be a JSON object".to_string(),
        ));
    };

    let missing = missing_fields(&object, required);
    if missing.is_empty() {
        Ok(object)
    } else {
        Err(CoreError::MissingFields(missing))
    }
}

/// `validator` rule for text columns: Postgres cannot store `\0` in TEXT.
pub fn no_nul_bytes(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        Err(ValidationError::new("nul_byte").with_message("must not contain NUL bytes".into()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    const CHARACTER_KEYS: &[&str] = &["name", "last_name", "race", "native_planet", "is_jedi"];

    #[test]
    fn all_keys_present() {
        let body = json!({
            "name": "Luke",
            "last_name": "Skywalker",
            "race": "Human",
            "native_planet": "Tatooine",
            "is_jedi": true,
        });
        let object = require_fields(body, CHARACTER_KEYS).unwrap();
        assert_eq!(object.len(), 5);
    }

    #[test]
    fn reports_every_missing_key_in_order() {
        let body = json!({ "last_name": "Skywalker", "is_jedi": true });
        let err = require_fields(body, CHARACTER_KEYS).unwrap_err();
        assert_matches!(err, CoreError::MissingFields(keys) if keys == ["name", "race", "native_planet"]);
    }

    #[test]
    fn null_value_counts_as_present() {
        let body = json!({ "type": "blaster", "name": "DL-44", "is_lethal": true, "weapon_owner_id": null });
        let missing = missing_fields(
            body.as_object().unwrap(),
            &["type", "name", "is_lethal", "weapon_owner_id"],
        );
        assert!(missing.is_empty());
    }

    #[test]
    fn extra_keys_are_ignored() {
        let body = json!({ "name": "Hoth", "solar_system": "Hoth system", "climate": "frozen" });
        assert!(require_fields(body, &["name", "solar_system"]).is_ok());
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = require_fields(json!(["name"]), &["name"]).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn nul_bytes_are_rejected() {
        assert!(no_nul_bytes("Hoth").is_ok());
        let err = no_nul_bytes("Ho\0th").unwrap_err();
        assert_eq!(err.code, "nul_byte");
    }

    #[test]
    fn empty_object_misses_everything() {
        let err = require_fields(json!({}), &["name", "solar_system"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: name, solar_system");
    }
}
