// State management for the catalog page
//
// `CatalogState` is the single owner of the pipeline's mutable state: the
// full record set (most recent successful fetch, or empty), the current
// filter state, and the derived visible list, plus the presentation state
// the services page keeps (view mode, compare mode, compare selection).
// There is exactly one writer, so no locking is needed; an embedding shell
// that shares it across threads wraps it itself.

use serde::{Deserialize, Serialize};

use crate::catalog::compare::CompareSelection;
use crate::catalog::engine::apply_filters;
use crate::catalog::loader::ListingLoader;
use crate::models::filters::FilterState;
use crate::models::service::Service;

/// How the visible listings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

pub struct CatalogState {
    /// Full record set from the last successful fetch
    services: Vec<Service>,
    /// Derived: survivors of the current filters, in display order
    visible: Vec<Service>,
    filters: FilterState,
    view_mode: ViewMode,
    compare_mode: bool,
    compare: CompareSelection,
    loading: bool,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            visible: Vec::new(),
            filters: FilterState::default(),
            view_mode: ViewMode::Grid,
            compare_mode: false,
            compare: CompareSelection::new(),
            loading: true,
        }
    }

    /// Replace the record set with a fresh fetch and refilter.
    ///
    /// The fetch is fail-soft, so a backend outage leaves an empty catalog,
    /// never an error state.
    pub async fn refresh(&mut self, loader: &ListingLoader) {
        self.loading = true;
        let services = loader.fetch_services().await;
        self.set_services(services);
        self.loading = false;
    }

    /// Replace the record set wholesale (never merged) and refilter
    pub fn set_services(&mut self, services: Vec<Service>) {
        log::info!("Catalog now holds {} services", services.len());
        self.services = services;
        self.recompute();
    }

    /// Replace the filter state and refilter the FULL record set; edits
    /// never stack on a previous result
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute();
    }

    /// Edit the current filter state in place, then refilter
    pub fn update_filter<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterState),
    {
        edit(&mut self.filters);
        self.recompute();
    }

    /// Reset every filter to its default and refilter
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        let started = std::time::Instant::now();
        self.visible = apply_filters(&self.services, &self.filters);
        perf_debug!(
            "Refiltered catalog: {} of {} visible in {:?}",
            self.visible.len(),
            self.services.len(),
            started.elapsed()
        );
    }

    /// Survivors of the current filters, in display order
    pub fn visible(&self) -> &[Service] {
        &self.visible
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub fn set_compare_mode(&mut self, enabled: bool) {
        self.compare_mode = enabled;
    }

    pub fn compare(&self) -> &CompareSelection {
        &self.compare
    }

    pub fn toggle_compare(&mut self, id: i64) {
        self.compare.toggle(id);
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::{Handyman, ServiceGroup};

    fn service(id: i64, name: &str, price: f64, category: &str, rating: f64) -> Service {
        Service {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            duration_hours: 1.0,
            category: category.to_string(),
            service_group_id: 1,
            handyman_id: id,
            is_active: true,
            is_approved: true,
            example_images: Vec::new(),
            created_at: None,
            service_group: ServiceGroup {
                id: 1,
                name: "Home Repair".to_string(),
                name_et: None,
                name_en: None,
                name_ru: None,
                description: None,
                created_at: None,
            },
            handyman: Handyman {
                id,
                first_name: "Test".to_string(),
                last_name: "Provider".to_string(),
                average_score: rating,
            },
        }
    }

    fn visible_ids(state: &CatalogState) -> Vec<i64> {
        state.visible().iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_edits_refilter_from_the_full_set() {
        let mut state = CatalogState::new();
        state.set_services(vec![
            service(1, "Pipe Fix", 50.0, "Plumbing", 4.5),
            service(2, "Wire Job", 150.0, "Electrical", 3.0),
        ]);

        state.update_filter(|f| f.category = "Plumbing".to_string());
        assert_eq!(visible_ids(&state), vec![1]);

        // A second edit must not stack on the previous result
        state.update_filter(|f| {
            f.category = "all".to_string();
            f.search = "wire".to_string();
        });
        assert_eq!(visible_ids(&state), vec![2]);
    }

    #[test]
    fn test_clear_filters_restores_everything() {
        let mut state = CatalogState::new();
        state.set_services(vec![
            service(1, "Pipe Fix", 50.0, "Plumbing", 4.5),
            service(2, "Wire Job", 150.0, "Electrical", 3.0),
        ]);

        state.update_filter(|f| f.rating = 4.0);
        assert_eq!(visible_ids(&state), vec![1]);

        state.clear_filters();
        assert_eq!(visible_ids(&state), vec![1, 2]);
        assert!(!state.filters().has_active_filters());
    }

    #[test]
    fn test_set_services_replaces_wholesale() {
        let mut state = CatalogState::new();
        state.set_services(vec![service(1, "Pipe Fix", 50.0, "Plumbing", 4.5)]);
        state.set_services(vec![service(2, "Wire Job", 150.0, "Electrical", 3.0)]);

        assert_eq!(visible_ids(&state), vec![2]);
        assert_eq!(state.services().len(), 1);
    }

    #[test]
    fn test_filters_survive_a_reload() {
        let mut state = CatalogState::new();
        state.update_filter(|f| f.category = "Electrical".to_string());

        state.set_services(vec![
            service(1, "Pipe Fix", 50.0, "Plumbing", 4.5),
            service(2, "Wire Job", 150.0, "Electrical", 3.0),
        ]);
        assert_eq!(visible_ids(&state), vec![2]);
    }

    #[test]
    fn test_compare_and_view_mode_plumbing() {
        let mut state = CatalogState::new();
        assert_eq!(state.view_mode(), ViewMode::Grid);
        state.set_view_mode(ViewMode::List);
        assert_eq!(state.view_mode(), ViewMode::List);

        state.set_compare_mode(true);
        for id in [1, 2, 3, 4] {
            state.toggle_compare(id);
        }
        assert_eq!(state.compare().ids(), &[1, 2, 3]);
    }
}
