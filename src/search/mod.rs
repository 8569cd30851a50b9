//! # Search Form Core
//!
//! MVVM implementation of the property search filter: leaf models own one
//! filter dimension each, the view model coordinates them and derives labels
//! and snapshots, and the shell controller plus text renderer form a thin
//! presentation layer around them.

pub mod controller;
pub mod events;
pub mod models;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controller::AppController;
pub use events::*;
pub use view_models::*;
pub use views::TextRenderer;

// Re-export specific items from models to avoid conflicts
pub use models::{
    ChoiceSet, ModeModel, PopoverModel, RangeModel, RangeValue, SearchTermModel,
    SingleChoiceModel, ToggleOutcome,
};
