use crate::error::{Result, UtilityError};
use crate::types::config::ModelConfig;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "utility.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/utility-agency/config.toml";

/// Loads the model configuration: shipped defaults, then the global file,
/// then either `explicit` or `./utility.toml`.
pub fn load_config(explicit: Option<&Path>) -> Result<ModelConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let local = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(UtilityError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };
    load_config_with_global(&local, global.as_deref())
}

pub fn load_config_with_global(local: &Path, global_path: Option<&Path>) -> Result<ModelConfig> {
    let mut merged = Value::try_from(ModelConfig::default())?;
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, local)?;

    let cfg: ModelConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| UtilityError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| UtilityError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::TagPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(&dir.path().join(DEFAULT_CONFIG_FILE), None)
            .expect("load should not fail");
        assert_eq!(cfg, ModelConfig::default());
    }

    #[test]
    fn load_config_merges_global_then_local_key_by_key() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let local_path = root.path().join(DEFAULT_CONFIG_FILE);

        fs::write(
            &global_path,
            r#"
[category]
efficiency = 1.5
qol = 1.3

[constants]
zero_price_use_factor = 0.05
"#,
        )
        .expect("global config should write");

        fs::write(
            &local_path,
            r#"
[category]
qol = 1.25

[policy]
unknown_tags = "strict"

[income.high]
buy = [3.0, -1.0]
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(&local_path, Some(&global_path))
            .expect("merged config should load");

        assert_eq!(cfg.category.efficiency, 1.5);
        assert_eq!(cfg.category.qol, 1.25);
        assert_eq!(cfg.category.entertainment, 1.0);
        assert_eq!(cfg.constants.zero_price_use_factor, 0.05);
        assert_eq!(cfg.constants.weeks_per_year, 52.0);
        assert_eq!(cfg.policy.unknown_tags, TagPolicy::Strict);
        assert_eq!(cfg.income.high.buy, [3.0, -1.0]);
        assert_eq!(cfg.income.high.not_buy, [-2.0, 0.25]);
    }

    #[test]
    fn load_config_rejects_unknown_table_keys() {
        let root = TempDir::new().expect("temp dir should be created");
        let local_path = root.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&local_path, "[category]\ngadgets = 1.4\n").expect("config should write");

        let result = load_config_with_global(&local_path, None);
        assert!(matches!(result, Err(UtilityError::ConfigParse(_))));
    }

    #[test]
    fn load_config_rejects_invalid_overrides() {
        let root = TempDir::new().expect("temp dir should be created");
        let local_path = root.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&local_path, "[income.low]\nnot_buy = [2.0, -2.0]\n")
            .expect("config should write");

        let result = load_config_with_global(&local_path, None);
        assert!(matches!(result, Err(UtilityError::InvalidConfig(_))));
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("temp dir should be created");
        let local_path = root.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&local_path, "[category\n").expect("config should write");

        match load_config_with_global(&local_path, None) {
            Err(UtilityError::ConfigParse(message)) => {
                assert!(message.contains(DEFAULT_CONFIG_FILE));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_config_requires_explicit_path_to_exist() {
        let root = TempDir::new().expect("temp dir should be created");
        let missing = root.path().join("missing.toml");
        assert!(matches!(
            load_config(Some(&missing)),
            Err(UtilityError::ConfigNotFound(_))
        ));
    }
}
