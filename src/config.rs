use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub general: GeneralConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    pub color: bool,
    #[serde(default)]
    pub format: Option<String>,
}

/// Cut-off values for the flag rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Revenue at or above this floor rates Green (default 5 crore).
    pub revenue_floor: f64,
    /// Borrowing-to-revenue ratio above this ceiling rates Amber.
    pub borrowing_ratio_ceiling: f64,
    /// ISCR at or above this floor rates Green.
    pub iscr_floor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            revenue_floor: 50_000_000.0,
            borrowing_ratio_ceiling: 0.25,
            iscr_floor: 2.0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig {
                color: true,
                format: None,
            },
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::load_custom(&Self::config_file_path())
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
        }
        Ok(())
    }

    pub fn load_custom(config_path: &std::path::Path) -> AppResult<Self> {
        if !config_path.exists() {
            let default_config = Config::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.thresholds.revenue_floor <= 0.0 {
            return Err(AppError::Config(
                "Revenue floor must be positive".to_string(),
            ));
        }

        if self.thresholds.borrowing_ratio_ceiling <= 0.0 {
            return Err(AppError::Config(
                "Borrowing ratio ceiling must be positive".to_string(),
            ));
        }

        if self.thresholds.iscr_floor <= 0.0 {
            return Err(AppError::Config("ISCR floor must be positive".to_string()));
        }

        if let Some(format) = &self.general.format {
            if format != "json" && format != "pretty" {
                return Err(AppError::Config(format!(
                    "Unknown default format '{}', expected 'json' or 'pretty'",
                    format
                )));
            }
        }

        Ok(())
    }

    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finlens")
            .join("config.toml")
    }
}
