// Catalog models

pub mod filters;
pub mod service;

pub use filters::{FilterState, SortKey};
pub use service::{Handyman, Service, ServiceGroup};
