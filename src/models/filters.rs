// Catalog models - filter state
//
// The filter state is the single mutable input (besides the record set) to
// every recomputation. `location` and `availability` are carried in the
// shape the UI exchanges but have no filtering effect yet.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);

/// The complete set of user-chosen search criteria
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text term matched against name and description
    pub search: String,
    /// Category label, or "all"
    pub category: String,
    /// Reserved - no filtering effect
    pub location: String,
    /// Inclusive (low, high) price bound
    #[serde(rename = "priceRange")]
    pub price_range: (f64, f64),
    /// Minimum provider rating; 0 = no filter
    pub rating: f64,
    /// Reserved - no filtering effect
    pub availability: String,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            location: String::new(),
            price_range: DEFAULT_PRICE_RANGE,
            rating: 0.0,
            availability: "any".to_string(),
            sort_by: "relevance".to_string(),
        }
    }
}

impl FilterState {
    /// Whether any constraint differs from the defaults (sort order does not
    /// count as a constraint)
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != "all"
            || !self.location.is_empty()
            || self.price_range.0 > DEFAULT_PRICE_RANGE.0
            || self.price_range.1 < DEFAULT_PRICE_RANGE.1
            || self.rating > 0.0
            || self.availability != "any"
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.sort_by)
    }
}

/// Sort orders the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Backend-provided order, preserved
    Relevance,
    /// Provider rating, descending
    Rating,
    /// Price, ascending
    PriceLow,
    /// Price, descending
    PriceHigh,
}

impl SortKey {
    /// Anything unrecognized (including the UI's placeholder options like
    /// "distance") behaves as relevance
    pub fn parse(value: &str) -> Self {
        match value {
            "rating" => SortKey::Rating,
            "price_low" => SortKey::PriceLow,
            "price_high" => SortKey::PriceHigh,
            _ => SortKey::Relevance,
        }
    }
}
