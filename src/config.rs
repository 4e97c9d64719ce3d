use serde::Deserialize;

use crate::node::NumberingStyle;

/// Defaults compiled into the binary. Checked by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub list: ListDefaults,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderConfig {
    /// Added to the indent for every nesting level
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "   ".to_string(),
        }
    }
}

/// Values a list gets when its specification leaves them out
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListDefaults {
    pub closure: String,
    pub style: String,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            closure: ".".to_string(),
            style: "number".to_string(),
        }
    }
}

impl ListDefaults {
    pub fn numbering_style(&self) -> NumberingStyle {
        NumberingStyle::from_name(&self.style)
    }
}

impl Config {
    /// The configuration shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }
}
