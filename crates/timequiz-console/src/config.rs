//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use timequiz_core::{ReportFormat, SessionConfig};

/// Top-level timequiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// CSV file of `question,answer` rows.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Whole-session time limit in seconds; 0 disables it.
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// How the final score is printed.
    #[serde(default)]
    pub format: ReportFormat,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_limit() -> u64 {
    30
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            limit: default_limit(),
            format: ReportFormat::default(),
        }
    }
}

impl QuizConfig {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::from_limit_secs(self.limit)
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `timequiz.toml` in the current directory
/// 2. `~/.config/timequiz/config.toml`
///
/// Environment variable overrides: `TIMEQUIZ_CSV`, `TIMEQUIZ_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("timequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn apply_overrides(
    config: &mut QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(csv) = lookup("TIMEQUIZ_CSV") {
        config.csv = PathBuf::from(csv);
    }
    if let Some(limit) = lookup("TIMEQUIZ_LIMIT") {
        config.limit = limit
            .trim()
            .parse()
            .with_context(|| format!("invalid TIMEQUIZ_LIMIT: '{limit}'"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("timequiz"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
        assert_eq!(config.limit, 30);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(
            config.session_config().time_limit,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizConfig = toml::from_str("limit = 0\nformat = \"json\"\n").unwrap();
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
        assert_eq!(config.limit, 0);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.session_config().time_limit.is_none());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "csv = \"capitals.csv\"\nlimit = 90\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.csv, PathBuf::from("capitals.csv"));
        assert_eq!(config.limit, 90);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "limit = \"soon\"\n").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }

    #[test]
    fn env_overrides() {
        let env = HashMap::from([("TIMEQUIZ_CSV", "env.csv"), ("TIMEQUIZ_LIMIT", " 5 ")]);
        let mut config = QuizConfig::default();
        apply_overrides(&mut config, |k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.csv, PathBuf::from("env.csv"));
        assert_eq!(config.limit, 5);
    }

    #[test]
    fn bad_limit_override() {
        let mut config = QuizConfig::default();
        let err = apply_overrides(&mut config, |k| {
            (k == "TIMEQUIZ_LIMIT").then(|| "soon".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("invalid TIMEQUIZ_LIMIT"));
    }
}
