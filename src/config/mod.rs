use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{GraphError, GraphResult};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}

/// `[log]` 配置段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphtrace".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
            to_stderr: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `[output]` 配置段
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_trace: bool,
    /// 回放步骤之间的停顿
    pub step_delay_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_trace: false,
            step_delay_ms: 300,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.log.dir = Config::resolve_log_dir(&config.log.dir)?;
        Ok(config)
    }

    /// `path` 存在时加载，否则使用默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> GraphResult<Self> {
        if path.as_ref().exists() {
            Config::load(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> GraphResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 把开头的 `~` 展开为用户主目录，其他路径原样保留
    fn resolve_log_dir(dir: &str) -> GraphResult<String> {
        let Some(rest) = dir.strip_prefix('~') else {
            return Ok(dir.to_string());
        };

        let home = env::var_os("HOME")
            .or_else(|| env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .ok_or_else(|| GraphError::Config("cannot determine home directory".to_string()))?;
        let relative = rest.trim_start_matches(['/', '\\']);
        Ok(home.join(relative).to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_trace);
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.output.step_delay_ms = 0;
        config.save(temp_file.path()).expect("Failed to save config");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load partial config");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.step_delay_ms, 300);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[output\nformat = ")
            .expect("Failed to write TOML content to temporary file");
        assert!(matches!(
            Config::load(temp_file.path()),
            Err(GraphError::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().expect("Failed to create temporary dir");
        let config = Config::load_or_default(dir.path().join("absent.toml"))
            .expect("Missing file should fall back to defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_log_dir_keeps_plain_paths() {
        assert_eq!(
            Config::resolve_log_dir("var/logs").expect("plain path should resolve"),
            "var/logs"
        );
    }
}
