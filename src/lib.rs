//! # Propline - Property Search Filter Core
//!
//! The filter-state engine behind a real-estate search bar: rent/buy tabs,
//! location text, property type, price and area ranges, bedroom/bathroom
//! toggles, completion status and keywords, merged into one resettable query
//! snapshot. Ships with a line-based demo shell as its presentation layer.
//!
//! ## Architecture
//!
//! This crate follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Labels    │              │ - Snapshot   │              │ - Range │
//! │ - Rendering │              │ - Labels     │              │ - Sets  │
//! │             │              │ - Reset      │              │ - Mode  │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Actions
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Command    │
//!                               │   Parsing    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! Every user interaction targets exactly one leaf model; no leaf knows any
//! other. The view model is the single reader, recomputing summary labels
//! and the [`search::FilterQuery`] snapshot from current state on demand.

pub mod cmd_args;
pub mod config;
pub mod search;

// Re-export main types for easy access
pub use search::*;
