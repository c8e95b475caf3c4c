// Service PRO client core - catalog browsing for a services marketplace
//
// This is the Rust core an embedding UI shell drives. It only includes:
// - Listing loading (fail-soft fetch of services and service groups)
// - Filtering and sorting of the loaded record set
// - Compare selection and basic view state

// Perf logging macros - exported for use by other modules
#[macro_use]
pub mod macros;

// Global state
pub mod globals;

// Core modules
pub mod catalog;
pub mod config;
pub mod models;
pub mod state;
pub mod utils;

pub use catalog::compare::CompareSelection;
pub use catalog::engine::apply_filters;
pub use catalog::loader::ListingLoader;
pub use config::Config;
pub use models::filters::{FilterState, SortKey};
pub use models::{Handyman, Service, ServiceGroup};
pub use state::{CatalogState, ViewMode};

/// Initialize env_logger to output to stderr (reads RUST_LOG env var).
/// Repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .try_init();
}
