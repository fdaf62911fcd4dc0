//! JSON Schema generation for the Splitwall configuration file.

use crate::config::SplitwallConfig;

/// Generates the JSON Schema describing [`SplitwallConfig`].
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(SplitwallConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/splitwall/splitwall/main/splitwall.schema.json"
            ),
        );
    }

    schema
}

/// Pretty-printed JSON Schema, ready to be written to a file.
#[must_use]
pub fn generate_schema_json() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_produces_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&generate_schema_json()).unwrap();

        assert!(parsed["$id"].as_str().unwrap().contains("splitwall.schema.json"));
        assert_eq!(parsed["title"], "SplitwallConfig");
        assert!(parsed["properties"]["landscapeDir"].is_object());
        assert!(parsed["properties"]["intervalMs"].is_object());
        assert!(parsed["properties"]["resize"].is_object());
    }

    #[test]
    fn test_schema_lists_resize_modes() {
        let json = generate_schema_json();
        assert!(json.contains("\"stretch\""));
        assert!(json.contains("\"cover\""));
    }
}
