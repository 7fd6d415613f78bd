//! Collects a [`PurchaseInput`] from a file or from individual fields and
//! rejects malformed values before the engine ever sees them.

use crate::error::{Result, UtilityError};
use crate::types::input::PurchaseInput;
use std::path::Path;

pub const MAX_ITEM_NAME_CHARS: usize = 100;

/// Reads a purchase from TOML, or from JSON when the file ends in `.json`.
pub fn load_input(path: &Path) -> Result<PurchaseInput> {
    if !path.exists() {
        return Err(UtilityError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let input = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            UtilityError::InvalidInput(format!("{}: {}", path.display(), e))
        })?
    } else {
        toml::from_str(&content).map_err(|e| {
            UtilityError::InvalidInput(format!("{}: {}", path.display(), e))
        })?
    };
    Ok(input)
}

/// Checks the item name length as typed, then trims it and checks the
/// numeric fields.
pub fn validate(mut input: PurchaseInput) -> Result<PurchaseInput> {
    if input.item_name.chars().count() > MAX_ITEM_NAME_CHARS {
        return Err(UtilityError::InvalidInput(format!(
            "item name must be {MAX_ITEM_NAME_CHARS} characters or less"
        )));
    }
    input.item_name = input.item_name.trim().to_string();
    if input.item_name.is_empty() {
        return Err(UtilityError::InvalidInput(
            "item name is required".to_string(),
        ));
    }
    if !input.price.is_finite() || input.price <= 0.0 {
        return Err(UtilityError::InvalidInput(
            "price must be greater than 0".to_string(),
        ));
    }
    if !input.time_use.is_finite() || input.time_use < 0.0 {
        return Err(UtilityError::InvalidInput(
            "hours per week must be a number >= 0".to_string(),
        ));
    }
    Ok(input)
}
