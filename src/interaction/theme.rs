use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Query used to detect the operating system's color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// A concrete color scheme applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Class set on `<html>`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The user's stored preference. `System` follows the OS setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Light,
    #[default]
    Dark,
    System,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

impl ThemeSetting {
    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            ThemeSetting::Light => Theme::Light,
            ThemeSetting::Dark => Theme::Dark,
            ThemeSetting::System if system_prefers_dark => Theme::Dark,
            ThemeSetting::System => Theme::Light,
        }
    }

    /// Next setting when the toggle is clicked. Anything that is not an
    /// explicit dark setting switches to dark.
    pub fn toggled(self) -> ThemeSetting {
        match self {
            ThemeSetting::Dark => ThemeSetting::Light,
            ThemeSetting::Light | ThemeSetting::System => ThemeSetting::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeSetting::Light => "light",
            ThemeSetting::Dark => "dark",
            ThemeSetting::System => "system",
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSetting {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeSetting::Light),
            "dark" => Ok(ThemeSetting::Dark),
            "system" => Ok(ThemeSetting::System),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}
