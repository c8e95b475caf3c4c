// Catalog models - service listings
//
// These mirror the backend JSON and are read-only to this crate: the record
// set is always the most recent successful fetch, never a partial merge.

use serde::{Deserialize, Serialize};

use crate::globals::get_locale_preference;

/// A service listing as delivered by `/api/services`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_hours: f64,
    pub category: String,
    pub service_group_id: i64,
    pub handyman_id: i64,
    pub is_active: bool,
    pub is_approved: bool,
    #[serde(default)]
    pub example_images: Vec<String>,
    /// ISO 8601 timestamp as delivered by the backend
    #[serde(default)]
    pub created_at: Option<String>,
    pub service_group: ServiceGroup,
    pub handyman: Handyman,
}

/// A service group; standalone fetches carry localized names, the copy
/// embedded in a `Service` carries only `id` and `name`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_et: Option<String>,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The provider offering a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Handyman {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Average rating in [0, 5]
    pub average_score: f64,
}

impl ServiceGroup {
    /// Group name for the current locale preference, falling back to the
    /// backend's base name
    pub fn display_name(&self) -> String {
        let localized = match get_locale_preference().as_deref() {
            Some("et") => self.name_et.clone(),
            Some("en") => self.name_en.clone(),
            Some("ru") => self.name_ru.clone(),
            _ => None,
        };
        localized.unwrap_or_else(|| self.name.clone())
    }
}

impl Handyman {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials shown in the provider avatar badge
    pub fn initials(&self) -> String {
        let mut out = String::new();
        if let Some(c) = self.first_name.chars().next() {
            out.push(c);
        }
        if let Some(c) = self.last_name.chars().next() {
            out.push(c);
        }
        out
    }
}
