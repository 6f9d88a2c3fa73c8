use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "pas.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    #[serde(default)]
    pub shell: PromptConfig,
    #[serde(default)]
    pub glob: GlobConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { prompt: default_prompt() }
    }
}

fn default_prompt() -> String {
    "$ ".to_string()
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GlobConfig {
    /// Let `*` match names starting with a dot.
    #[serde(default)]
    pub include_hidden: bool,
}

/// Loads settings from `explicit`, or from `pas.toml` in `dir` when present.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ShellConfig> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = dir.join(CONFIG_FILE);
            if !path.exists() {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                return Ok(ShellConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: ShellConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    log::debug!("loaded {:?} from {}", config, config_path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_default_file() {
        let dir = tempdir().unwrap();
        assert_eq!(load_config(None, dir.path()).unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("other.toml")), dir.path()).is_err());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[glob]\ninclude_hidden = true\n").unwrap();
        let config = load_config(None, dir.path()).unwrap();
        assert!(config.glob.include_hidden);
        assert_eq!(config.shell.prompt, "$ ");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[glob]\nrecursive = true\n").unwrap();
        let err = load_config(None, dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("recursive"));
    }
}
