//! # ViewModel Module
//!
//! The view model split into focused responsibilities: the core state owner,
//! the label derivations and the query snapshot.

mod core;
mod labels;
mod snapshot;

// Re-export the main ViewModel
pub use core::SearchViewModel;

// Re-export types and label constants the presentation layer needs
pub use labels::{
    AREA_PLACEHOLDER, BEDS_BATHS_PLACEHOLDER, COMPLETION_STATUS_PLACEHOLDER, KEYWORDS_HINT,
    LOCATION_HINT, PRICE_PLACEHOLDER, PROPERTY_TYPE_PLACEHOLDER,
};
pub use snapshot::FilterQuery;
