use crate::interaction::{ThemeParseError, ThemeSetting};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STORAGE_KEY: &str = "portfolio_preferences";

/// Plain theme string written by earlier versions of the site.
pub const LEGACY_THEME_KEY: &str = "theme";

/// Preferences that survive a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub theme: ThemeSetting,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("could not read from localStorage")]
    Read,
    #[error("could not write to localStorage")]
    Write,
    #[error("malformed preferences: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("legacy theme entry: {0}")]
    LegacyTheme(#[from] ThemeParseError),
}

/// Parse a stored preferences payload.
///
/// Unknown fields are ignored and missing fields take their defaults, so
/// payloads written by older builds still load.
pub fn parse_preferences(json: &str) -> Result<StoredPreferences, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Build preferences from the legacy plain-string theme entry.
pub fn preferences_from_legacy(value: &str) -> Result<StoredPreferences, StorageError> {
    Ok(StoredPreferences {
        theme: value.parse()?,
    })
}

/// Attempts to get the browser's localStorage.
///
/// Returns `None` outside a browser, in private modes that disable storage,
/// or when access raises a SecurityError.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read_preferences() -> Result<Option<StoredPreferences>, StorageError> {
    let storage = get_storage().ok_or(StorageError::Unavailable)?;
    if let Some(json) = storage.get_item(STORAGE_KEY).map_err(|_| StorageError::Read)? {
        return parse_preferences(&json).map(Some);
    }
    match storage
        .get_item(LEGACY_THEME_KEY)
        .map_err(|_| StorageError::Read)?
    {
        Some(value) => preferences_from_legacy(&value).map(Some),
        None => Ok(None),
    }
}

fn write_preferences(prefs: &StoredPreferences) -> Result<(), StorageError> {
    let storage = get_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(prefs)?;
    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| StorageError::Write)
}

/// Load preferences, falling back to defaults.
///
/// Missing storage is expected (private browsing) and stays quiet; corrupt
/// payloads and read failures log a warning.
pub fn load_preferences() -> StoredPreferences {
    match read_preferences() {
        Ok(Some(prefs)) => prefs,
        Ok(None) | Err(StorageError::Unavailable) => StoredPreferences::default(),
        Err(e) => {
            warn!("Portfolio: using default preferences: {}", e);
            StoredPreferences::default()
        }
    }
}

/// Save preferences. Failures are logged and otherwise ignored.
pub fn save_preferences(prefs: &StoredPreferences) {
    match write_preferences(prefs) {
        Ok(()) | Err(StorageError::Unavailable) => {}
        Err(e) => warn!("Portfolio: could not save preferences: {}", e),
    }
}

/// Whether a `storage` event concerns our preferences. A `None` key means
/// the whole storage area was cleared.
pub fn is_preferences_key(key: Option<&str>) -> bool {
    key.map_or(true, |k| k == STORAGE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let prefs = parse_preferences(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.theme, ThemeSetting::Light);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs = parse_preferences("{}").unwrap();
        assert_eq!(prefs, StoredPreferences::default());
        assert_eq!(prefs.theme, ThemeSetting::Dark);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let prefs = parse_preferences(r#"{"theme":"system","volume":3}"#).unwrap();
        assert_eq!(prefs.theme, ThemeSetting::System);
    }

    #[test]
    fn test_malformed_payloads_are_errors() {
        for bad in ["", "not json", r#"{"theme":"sepia"}"#, r#"{"theme":4}"#] {
            let err = parse_preferences(bad).unwrap_err();
            assert!(matches!(err, StorageError::Malformed(_)), "{:?} -> {:?}", bad, err);
            assert!(err.to_string().starts_with("malformed preferences"));
        }
    }

    #[test]
    fn test_legacy_theme_entry() {
        let prefs = preferences_from_legacy("light").unwrap();
        assert_eq!(prefs.theme, ThemeSetting::Light);

        let err = preferences_from_legacy("neon").unwrap_err();
        assert!(matches!(err, StorageError::LegacyTheme(_)));
        assert_eq!(err.to_string(), "legacy theme entry: unknown theme: \"neon\"");
    }

    #[test]
    fn test_serialized_form() {
        let prefs = StoredPreferences {
            theme: ThemeSetting::Light,
        };
        assert_eq!(serde_json::to_string(&prefs).unwrap(), r#"{"theme":"light"}"#);
    }

    #[test]
    fn test_preferences_key_filter() {
        assert!(is_preferences_key(Some(STORAGE_KEY)));
        assert!(is_preferences_key(None));
        assert!(!is_preferences_key(Some("other_app")));
    }
}
