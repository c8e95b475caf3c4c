// Filter/sort engine for service listings
//
// A pure function of (record set, filter state): every edit refilters the
// full record set, so constraints never stack across edits. The engine is
// total - malformed bounds just shrink the result, they never fail.

use crate::models::filters::{FilterState, SortKey};
use crate::models::service::Service;

/// Apply the filter state to the full record set and sort the survivors.
///
/// All predicates are conjunctive. Survivors keep the input's relative
/// order unless an explicit sort key reorders them.
pub fn apply_filters(services: &[Service], filters: &FilterState) -> Vec<Service> {
    let mut results: Vec<Service> = services
        .iter()
        .filter(|service| matches_filters(service, filters))
        .cloned()
        .collect();

    // Stable sort keeps relative order for equal keys
    match filters.sort_key() {
        SortKey::Relevance => {}
        SortKey::Rating => results.sort_by(|a, b| {
            b.handyman
                .average_score
                .total_cmp(&a.handyman.average_score)
        }),
        SortKey::PriceLow => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHigh => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    results
}

fn matches_filters(service: &Service, filters: &FilterState) -> bool {
    matches_search(service, &filters.search)
        && matches_category(service, &filters.category)
        && within_price_range(service, filters.price_range)
        && meets_rating(service, filters.rating)
}

/// Case-insensitive substring match on name or description; an empty term
/// imposes no constraint
fn matches_search(service: &Service, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let term = search.to_lowercase();
    service.name.to_lowercase().contains(&term)
        || service.description.to_lowercase().contains(&term)
}

/// Case-insensitive category equality; "all" imposes no constraint
fn matches_category(service: &Service, category: &str) -> bool {
    category == "all" || service.category.to_lowercase() == category.to_lowercase()
}

/// Inclusive on both ends; the default bound is an ordinary bound, not a
/// sentinel
fn within_price_range(service: &Service, (low, high): (f64, f64)) -> bool {
    service.price >= low && service.price <= high
}

/// Provider rating floor; 0 imposes no constraint
fn meets_rating(service: &Service, rating: f64) -> bool {
    rating <= 0.0 || service.handyman.average_score >= rating
}
