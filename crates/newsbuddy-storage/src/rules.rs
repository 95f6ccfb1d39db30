use std::fs;
use std::path::Path;

use newsbuddy_types::ProgressRules;
use tracing::info;

use crate::error::StorageError;

/// Parse rules from JSON. Missing sections fall back to the shipped defaults.
///
/// Catalog checks (unique ids, non-zero thresholds) and the non-zero level
/// span run during deserialization, so bad rules surface as `Malformed`.
pub fn rules_from_json(json: &str) -> Result<ProgressRules, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Load rules from a JSON file. Call once at startup.
pub fn load_rules(path: impl AsRef<Path>) -> Result<ProgressRules, StorageError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let rules = rules_from_json(&json)?;
    info!(
        path = %path.display(),
        badges = rules.badges.len(),
        per_level = rules.xp.per_level.get(),
        "loaded progress rules"
    );
    Ok(rules)
}
