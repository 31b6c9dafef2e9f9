use crate::error::{EcoRoutesError, Result};
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub registry: RegistryConfig,
    pub transport: TransportConfig,
    pub weather: WeatherConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub max_sites: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { max_sites: 30 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Seats per bus
    pub bus_capacity: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { bus_capacity: 25 }
    }
}

/// Inclusive comfort window for a guided walk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub min_humidity: f64,
    pub max_humidity: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            min_temp_c: 20.0,
            max_temp_c: 25.0,
            min_humidity: 40.0,
            max_humidity: 60.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Ask again instead of aborting when a number cannot be parsed
    pub reprompt_on_invalid: bool,
}

impl Config {
    /// Load the first config file found, falling back to built-in defaults.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        match Self::find_config_path(config_override)? {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .map_err(|e| EcoRoutesError::Config(format!("Failed to read config: {}", e)))?;
        debug!("Loaded config from {}", path.display());
        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| EcoRoutesError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// An explicit override must exist; otherwise `None` means "use defaults".
    pub fn find_config_path(config_override: Option<&PathBuf>) -> Result<Option<PathBuf>> {
        if let Some(path) = config_override {
            if !path.exists() {
                return Err(EcoRoutesError::Config(format!(
                    "Config file not found at {:?}. Run `ecoroutes init` to set up.",
                    path
                )));
            }
            return Ok(Some(path.clone()));
        }

        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(Some(local_config));
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ecoroutes").join("config.yaml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Default path for writing new config files (~/.config/ecoroutes/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EcoRoutesError::Config("Cannot determine config directory".into()))?
            .join("ecoroutes");
        Ok(config_dir.join("config.yaml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.registry.max_sites == 0 {
            return Err(EcoRoutesError::Config(
                "registry.max_sites must be greater than zero".into(),
            ));
        }
        if self.transport.bus_capacity == 0 {
            return Err(EcoRoutesError::Config(
                "transport.bus_capacity must be greater than zero".into(),
            ));
        }
        let w = &self.weather;
        if w.min_temp_c > w.max_temp_c {
            return Err(EcoRoutesError::Config(format!(
                "weather.min_temp_c ({}) is above weather.max_temp_c ({})",
                w.min_temp_c, w.max_temp_c
            )));
        }
        if w.min_humidity > w.max_humidity {
            return Err(EcoRoutesError::Config(format!(
                "weather.min_humidity ({}) is above weather.max_humidity ({})",
                w.min_humidity, w.max_humidity
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| EcoRoutesError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        let defaults = Self::default();

        println!();
        println!("Let's set up ecoroutes!");
        println!();

        println!("Biodiversity site registry");
        let max_sites: usize = Input::new()
            .with_prompt("  Maximum registered sites")
            .default(defaults.registry.max_sites)
            .interact_text()?;

        println!();
        println!("Route logistics");
        let bus_capacity: u32 = Input::new()
            .with_prompt("  Seats per bus")
            .default(defaults.transport.bus_capacity)
            .interact_text()?;

        println!();
        println!("Walking weather window");
        let min_temp_c: f64 = Input::new()
            .with_prompt("  Minimum temperature (°C)")
            .default(defaults.weather.min_temp_c)
            .interact_text()?;
        let max_temp_c: f64 = Input::new()
            .with_prompt("  Maximum temperature (°C)")
            .default(defaults.weather.max_temp_c)
            .interact_text()?;
        let min_humidity: f64 = Input::new()
            .with_prompt("  Minimum relative humidity (%)")
            .default(defaults.weather.min_humidity)
            .interact_text()?;
        let max_humidity: f64 = Input::new()
            .with_prompt("  Maximum relative humidity (%)")
            .default(defaults.weather.max_humidity)
            .interact_text()?;

        println!();
        let reprompt_on_invalid = Confirm::new()
            .with_prompt("Ask again when a number is mistyped?")
            .default(defaults.input.reprompt_on_invalid)
            .interact()?;

        let config = Config {
            registry: RegistryConfig { max_sites },
            transport: TransportConfig { bus_capacity },
            weather: WeatherConfig {
                min_temp_c,
                max_temp_c,
                min_humidity,
                max_humidity,
            },
            input: InputConfig {
                reprompt_on_invalid,
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write with a header comment
        let content = format!(
            "# ecoroutes configuration\n# Generated by `ecoroutes init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            config.to_yaml()?
        );
        std::fs::write(&config_path, content)?;

        println!();
        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| EcoRoutesError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_event_rules() {
        let config = Config::default();
        assert_eq!(config.registry.max_sites, 30);
        assert_eq!(config.transport.bus_capacity, 25);
        assert_eq!(config.weather.min_temp_c, 20.0);
        assert_eq!(config.weather.max_temp_c, 25.0);
        assert_eq!(config.weather.min_humidity, 40.0);
        assert_eq!(config.weather.max_humidity, 60.0);
        assert!(!config.input.reprompt_on_invalid);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let config = Config::from_yaml("transport:\n  bus_capacity: 40\n").unwrap();
        assert_eq!(config.transport.bus_capacity, 40);
        assert_eq!(config.registry.max_sites, 30);
        assert_eq!(config.weather, WeatherConfig::default());
    }

    #[test]
    fn empty_mapping_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("ECOROUTES_TEST_MAX_SITES", "12");
        let config =
            Config::from_yaml("registry:\n  max_sites: ${ECOROUTES_TEST_MAX_SITES}\n").unwrap();
        assert_eq!(config.registry.max_sites, 12);
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let err = Config::from_yaml("weather:\n  min_temp_c: 30\n  max_temp_c: 25\n").unwrap_err();
        assert!(matches!(err, EcoRoutesError::Config(_)));

        let err =
            Config::from_yaml("weather:\n  min_humidity: 70\n  max_humidity: 60\n").unwrap_err();
        assert!(err.to_string().contains("min_humidity"));
    }

    #[test]
    fn zero_capacities_are_rejected() {
        assert!(Config::from_yaml("registry:\n  max_sites: 0\n").is_err());
        assert!(Config::from_yaml("transport:\n  bus_capacity: 0\n").is_err());
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = Config::from_yaml("registry: [").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "input:\n  reprompt_on_invalid: true").unwrap();

        let path = file.path().to_path_buf();
        let config = Config::load(Some(&path)).unwrap();
        assert!(config.input.reprompt_on_invalid);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn yaml_output_parses_back() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("bus_capacity: 25"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }
}
