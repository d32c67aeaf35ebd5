//! Shell configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `content_dir`.
pub const CONTENT_DIR_ENV: &str = "C_ARCADE_CONTENT_DIR";

/// Top-level c-arcade configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Directory of station TOML files replacing the built-in content.
    #[serde(default)]
    pub content_dir: Option<PathBuf>,
    /// Skip interactive waits in narrative stations.
    #[serde(default)]
    pub test_mode: bool,
    /// Use `OK`/`--` instead of `✓`/`✗` on the map.
    #[serde(default)]
    pub ascii_marks: bool,
    /// Label shown in the shell prompt.
    #[serde(default = "default_prompt_label")]
    pub prompt_label: String,
}

fn default_prompt_label() -> String {
    "c-arcade".to_string()
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            test_mode: false,
            ascii_marks: false,
            prompt_label: default_prompt_label(),
        }
    }
}

impl ArcadeConfig {
    /// Completion marks for the map: (done, not done).
    pub fn marks(&self) -> (&'static str, &'static str) {
        if self.ascii_marks {
            ("OK", "--")
        } else {
            ("✓", "✗")
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `c-arcade.toml` in the current directory
/// 2. `~/.config/c-arcade/config.toml`
///
/// Environment variable override: `C_ARCADE_CONTENT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<ArcadeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("c-arcade.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match &config_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<ArcadeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ArcadeConfig::default(),
    };

    // Relative content dirs in a config file are relative to that file
    if let Some(dir) = config.content_dir.take() {
        let resolved = PathBuf::from(resolve_env_vars(&dir.to_string_lossy()));
        let base = config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty());
        config.content_dir = Some(match base {
            Some(base) if resolved.is_relative() => base.join(resolved),
            _ => resolved,
        });
    }

    // Apply env var overrides
    if let Ok(dir) = std::env::var(CONTENT_DIR_ENV) {
        if !dir.is_empty() {
            config.content_dir = Some(PathBuf::from(dir));
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("c-arcade"))
}
