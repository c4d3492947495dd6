use hearts_engine::game::Rules;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_BUST_THRESHOLD: i32 = 100;
const DEFAULT_LOG_FILE: &str = "trace.jsonl";
const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root replay configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplayConfig {
    pub run_id: String,
    #[serde(default)]
    pub game: GameConfig,
    pub moves: String,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub replay: ReplayOptions,
}

impl ReplayConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: ReplayConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.game.validate()?;
        validate_path("moves", &self.run_id, &self.moves)?;
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        if let Some(log_file) = self.logging.log_file.as_ref() {
            validate_path("logging.log_file", &self.run_id, log_file)?;
        }
        Ok(())
    }

    /// Resolve `{run_id}` placeholders into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        let summary_json = resolve_template(&self.run_id, &self.outputs.summary_json);
        let log_file = match self.logging.log_file.as_ref() {
            Some(template) => resolve_template(&self.run_id, template),
            None => summary_json
                .parent()
                .map(|dir| dir.join(DEFAULT_LOG_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        };
        ResolvedOutputs {
            moves: resolve_template(&self.run_id, &self.moves),
            summary_json,
            log_file,
        }
    }
}

/// Table rules and dealing for the replayed game.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_bust_threshold")]
    pub bust_threshold: i32,
    #[serde(default = "default_true")]
    pub follow_suit: bool,
    #[serde(default = "default_true")]
    pub rotate_passing: bool,
    /// Deal a seeded deck whenever a round needs one and the next move is
    /// not an explicit deal.
    #[serde(default = "default_true")]
    pub auto_deal: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bust_threshold: DEFAULT_BUST_THRESHOLD,
            follow_suit: true,
            rotate_passing: true,
            auto_deal: true,
        }
    }
}

impl GameConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.bust_threshold <= 0 {
            return Err(ValidationError::InvalidField {
                field: "game.bust_threshold".to_string(),
                message: "bust threshold must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn rules(&self) -> Rules {
        Rules {
            bust_threshold: self.bust_threshold,
            follow_suit: self.follow_suit,
            rotate_passing: self.rotate_passing,
        }
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub summary_json: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        validate_path("outputs.summary_json", run_id, &self.summary_json)
    }
}

/// Logging configuration defaults to human-readable output on stderr.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplayOptions {
    /// Abort on the first rejected move instead of logging and skipping it.
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            stop_on_error: true,
        }
    }
}

fn default_bust_threshold() -> i32 {
    DEFAULT_BUST_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn validate_path(label: &str, run_id: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: label.to_string(),
            message: "path must not be empty".to_string(),
        });
    }

    if resolve_template(run_id, value).components().count() == 0 {
        return Err(ValidationError::InvalidField {
            field: label.to_string(),
            message: "resolved path is invalid".to_string(),
        });
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved input and output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub moves: PathBuf,
    pub summary_json: PathBuf,
    pub log_file: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
