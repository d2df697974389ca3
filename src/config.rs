use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool configuration, loaded from `namescan.toml` when present.
///
/// Command-line flags take precedence over anything configured here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NamescanConfig {
    /// Default output format for `scan` (table, plain, json)
    pub format: Option<String>,
    /// Extra gitignore-style patterns to exclude from scans
    pub excludes: Option<Vec<String>>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("namescan.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<NamescanConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: NamescanConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &NamescanConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loaded = load_config(Some(&dir.path().join("namescan.toml"))).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("namescan.toml");
        let config = NamescanConfig {
            format: Some("plain".to_string()),
            excludes: Some(vec!["migrations/".to_string()]),
        };

        write_config(&path, &config, false).expect("write");
        let loaded = load_config(Some(&path)).expect("load").expect("some");
        assert_eq!(loaded.format.as_deref(), Some("plain"));
        assert_eq!(
            loaded.excludes.as_deref(),
            Some(&["migrations/".to_string()][..])
        );
    }

    #[test]
    fn test_write_refuses_to_clobber_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("namescan.toml");
        let config = NamescanConfig::default();

        write_config(&path, &config, false).expect("first write");
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).expect("forced write");
    }
}
