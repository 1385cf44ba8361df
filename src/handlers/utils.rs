//! Small helpers shared by the command handlers

use crate::error::{CmlError, Result};

/// Parse a `--env-vars`/`--override-config` style argument into a JSON
/// object, rejecting anything that is valid JSON but not an object.
pub fn parse_json_object(
    flag: &str,
    raw: Option<String>,
) -> Result<Option<serde_json::Map<String, serde_json::Value>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err(CmlError::InvalidArgument(format!(
            "{flag} must be a JSON object"
        ))),
        Err(e) => Err(CmlError::InvalidArgument(format!(
            "{flag} must be valid JSON: {e}"
        ))),
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
