//! Global state for the UI locale preference
//!
//! Service group names arrive from the backend with Estonian, English and
//! Russian variants; the locale preference selects which one is displayed.
//! Pipeline state (record set, filters, compare selection) is NOT kept here -
//! it is owned by `state::CatalogState`.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Locale preference storage (`None` = use the backend's base name)
pub static LOCALE_PREFERENCE: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

/// Get the current locale preference
pub fn get_locale_preference() -> Option<String> {
    let guard = LOCALE_PREFERENCE.lock().ok()?;
    guard.clone()
}

/// Set the locale preference
pub fn set_locale_preference(locale: &str) -> Result<(), String> {
    let mut guard = LOCALE_PREFERENCE
        .lock()
        .map_err(|e| format!("Lock error: {}", e))?;
    *guard = if locale == "auto" {
        None
    } else {
        Some(locale.to_string())
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::ServiceGroup;

    // Single test so nothing races on the shared preference
    #[test]
    fn test_locale_preference_drives_group_names() {
        let group = ServiceGroup {
            id: 1,
            name: "Plumbing".to_string(),
            name_et: Some("Torutööd".to_string()),
            name_en: Some("Plumbing".to_string()),
            name_ru: None,
            description: None,
            created_at: None,
        };

        set_locale_preference("et").unwrap();
        assert_eq!(get_locale_preference(), Some("et".to_string()));
        assert_eq!(group.display_name(), "Torutööd");

        // Missing localization falls back to the base name
        set_locale_preference("ru").unwrap();
        assert_eq!(group.display_name(), "Plumbing");

        set_locale_preference("auto").unwrap();
        assert_eq!(get_locale_preference(), None);
        assert_eq!(group.display_name(), "Plumbing");
    }
}
