use std::io::ErrorKind;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::settings::GameSettings;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Failed to read config file: {}", err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

// Lazily loads a YAML config through a content provider, validating and
// caching it; a missing document yields the defaults.
pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    provider: TProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            provider,
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        self.provider.set_config_content(&content)?;

        *self.config.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub settings: GameSettings,
    // Cosmetic "thinking" pause the presentation layer applies before a
    // bot move; the engine itself never sleeps.
    pub bot_delay_ms: u32,
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            bot_delay_ms: 500,
            rng_seed: None,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}
