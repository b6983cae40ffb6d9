use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for git-latest.
///
/// Holds default resolution settings that the CLI flags can override.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Returns the default backend method identifier.
fn default_method() -> String {
    "cli".to_string()
}

/// Default resolution settings.
///
/// `method` selects the backend ("cli"/"git" for the git executable,
/// "lib"/"libgit2" for the embedded library); `verbose` reports skipped tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub verbose: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            method: default_method(),
            verbose: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitlatest.toml` in current directory
/// 3. `gitlatest.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitlatest.toml").exists() {
        fs::read_to_string("./gitlatest.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitlatest.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
