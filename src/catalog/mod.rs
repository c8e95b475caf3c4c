// Catalog pipeline for Service PRO listings
// Loading, filtering/sorting, and compare selection

pub mod compare;
pub mod engine;
pub mod loader;

pub use compare::CompareSelection;
pub use engine::apply_filters;
pub use loader::ListingLoader;
