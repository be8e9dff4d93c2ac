// statusbar-core/src/config.rs
use crate::entry::Alignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config directory not found")]
    NoConfigDir,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub status_bar: StatusBarConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusBarConfig {
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Which declared entries to bootstrap, in declaration-file order.
    #[serde(default)]
    pub entry: Vec<EntryConfig>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EntryConfig {
    pub name: String,
    /// Overrides the registered alignment when set.
    #[serde(default)]
    pub alignment: Option<ConfigAlignment>,
    /// Overrides the registered priority when set.
    #[serde(default)]
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigAlignment {
    Left,
    Right,
}

impl ConfigAlignment {
    pub fn to_alignment(self) -> Alignment {
        match self {
            Self::Left => Alignment::Left,
            Self::Right => Alignment::Right,
        }
    }
}

impl Default for StatusBarConfig {
    fn default() -> Self {
        Self {
            visible: true,
            entry: vec![
                EntryConfig {
                    name: "git".to_string(),
                    alignment: None,
                    priority: None,
                },
                EntryConfig {
                    name: "memory".to_string(),
                    alignment: None,
                    priority: None,
                },
            ],
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            status_bar: StatusBarConfig::default(),
        }
    }
}

impl ConfigFile {
    pub fn load() -> Result<Self, ConfigError> {
        // Priority: ./statusbar.toml -> ~/.config/statusbar/statusbar.toml -> default
        let paths = [
            std::env::current_dir()?.join("statusbar.toml"),
            dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("statusbar/statusbar.toml"),
        ];

        for path in paths {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                return toml::from_str(&content).map_err(ConfigError::Parse);
            }
        }

        Ok(Self::default())
    }
}
