//! # Filter Models
//!
//! Pure state models for the search form, one per filter dimension. Models
//! hold data and basic transitions only; label derivation and coordination
//! live in the view model. No model knows about any other.

use serde::Serialize;

use crate::search::events::{
    Mode, ModelEvent, PopoverId, RangeBound, RangeField, TextField, TriggerId,
};

/// A min/max pair with zero as the "unset" sentinel for both bounds.
///
/// Bounds are independent: replacing one never touches the other, and no
/// ordering between them is enforced. `min > max` is accepted and stored
/// verbatim; whether such a pair is meaningful is for a validator outside
/// this crate to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeValue {
    pub min: u64,
    pub max: u64,
}

impl RangeValue {
    /// The unset range, both bounds at the sentinel
    pub fn unset() -> Self {
        Self { min: 0, max: 0 }
    }

    /// Copy of this range with the minimum replaced
    pub fn with_min(self, min: u64) -> Self {
        Self { min, ..self }
    }

    /// Copy of this range with the maximum replaced
    pub fn with_max(self, max: u64) -> Self {
        Self { max, ..self }
    }

    /// Copy of this range with the named bound replaced
    pub fn with_bound(self, bound: RangeBound, value: u64) -> Self {
        match bound {
            RangeBound::Min => self.with_min(value),
            RangeBound::Max => self.with_max(value),
        }
    }

    /// True when neither bound has been set
    pub fn is_unset(&self) -> bool {
        self.min == 0 && self.max == 0
    }
}

impl Default for RangeValue {
    fn default() -> Self {
        Self::unset()
    }
}

/// Range picker model for one filter dimension (price or area)
#[derive(Debug, Clone)]
pub struct RangeModel {
    field: RangeField,
    value: RangeValue,
}

impl RangeModel {
    /// Create an unset range for the given dimension
    pub fn new(field: RangeField) -> Self {
        Self {
            field,
            value: RangeValue::unset(),
        }
    }

    pub fn field(&self) -> RangeField {
        self.field
    }

    pub fn value(&self) -> RangeValue {
        self.value
    }

    /// Replace one bound unconditionally, returning event
    pub fn set_bound(&mut self, bound: RangeBound, value: u64) -> ModelEvent {
        self.value = self.value.with_bound(bound, value);
        ModelEvent::RangeBoundChanged {
            field: self.field,
            bound,
            value,
        }
    }

    /// Drop both bounds back to the sentinel, regardless of prior state
    pub fn reset(&mut self) -> ModelEvent {
        self.value = RangeValue::unset();
        ModelEvent::RangeReset { field: self.field }
    }
}

/// Outcome of a toggle on a [`ChoiceSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// An unordered membership set with click-to-toggle semantics.
///
/// Tokens come from a fixed catalog the presentation renders as option cards;
/// the set records which are active, in the order they were activated. A
/// toggle removes a present element (preserving the order of the rest) or
/// appends an absent one. The same generic operation serves bedrooms and
/// bathrooms on two independent instances.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceSet<T> {
    items: Vec<T>,
}

impl<T: Clone + PartialEq> ChoiceSet<T> {
    /// Create an empty set
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Active items in activation order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove `item` if present, append it otherwise
    pub fn toggle(&mut self, item: T) -> ToggleOutcome {
        if let Some(index) = self.items.iter().position(|active| *active == item) {
            self.items.remove(index);
            ToggleOutcome::Removed
        } else {
            self.items.push(item);
            ToggleOutcome::Added
        }
    }

    /// Deactivate everything
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone + PartialEq> Default for ChoiceSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single selection from a fixed option list, with an explicit unset state.
///
/// Unset is a distinct variant rather than a sentinel value colliding with a
/// real option. The placeholder entry the presentation shows for the unset
/// state is never a selectable target.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceModel<T> {
    selection: Option<T>,
}

impl<T: Clone + PartialEq> SingleChoiceModel<T> {
    /// Create with nothing selected
    pub fn new() -> Self {
        Self { selection: None }
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    pub fn is_unset(&self) -> bool {
        self.selection.is_none()
    }

    /// Replace the held value unconditionally
    pub fn select(&mut self, value: T) {
        self.selection = Some(value);
    }

    /// Back to the unset state
    pub fn clear(&mut self) {
        self.selection = None;
    }
}

impl<T: Clone + PartialEq> Default for SingleChoiceModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Open/closed state of one popover panel.
///
/// The model stores only whether the panel is open and which trigger opened
/// it; anchoring the panel to an on-screen element is a presentation concern.
/// Instances are fully independent — there is no cross-popover mutual
/// exclusion, so several panels may be open at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverModel {
    id: PopoverId,
    anchor: Option<TriggerId>,
}

impl PopoverModel {
    /// Create closed
    pub fn new(id: PopoverId) -> Self {
        Self { id, anchor: None }
    }

    pub fn id(&self) -> PopoverId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// Trigger the panel is currently keyed to, if open
    pub fn anchor(&self) -> Option<TriggerId> {
        self.anchor
    }

    /// Handle a click on a toggler: close when open, open for `trigger`
    /// otherwise.
    pub fn toggle(&mut self, trigger: TriggerId) -> ModelEvent {
        if self.anchor.is_some() {
            self.anchor = None;
            ModelEvent::PopoverToggled {
                id: self.id,
                open: false,
            }
        } else {
            self.anchor = Some(trigger);
            ModelEvent::PopoverToggled {
                id: self.id,
                open: true,
            }
        }
    }
}

/// Rent/Buy mode switch
#[derive(Debug, Clone, PartialEq)]
pub struct ModeModel {
    mode: Mode,
}

impl ModeModel {
    /// Create on the rent tab, the form's initial state
    pub fn new() -> Self {
        Self { mode: Mode::Rent }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Replace the active mode, returning event if it actually changed
    pub fn select(&mut self, new_mode: Mode) -> Option<ModelEvent> {
        if self.mode != new_mode {
            let old_mode = self.mode;
            self.mode = new_mode;
            Some(ModelEvent::ModeChanged {
                from: old_mode,
                to: new_mode,
            })
        } else {
            None
        }
    }
}

impl Default for ModeModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-text input model (location or keywords).
///
/// Every keystroke replaces the whole term; debouncing before submission is
/// left to whoever executes the search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTermModel {
    field: TextField,
    text: String,
}

impl SearchTermModel {
    /// Create empty for the given input
    pub fn new(field: TextField) -> Self {
        Self {
            field,
            text: String::new(),
        }
    }

    pub fn field(&self) -> TextField {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the term, returning event
    pub fn set_text(&mut self, text: impl Into<String>) -> ModelEvent {
        self.text = text.into();
        ModelEvent::SearchTermChanged {
            field: self.field,
            text: self.text.clone(),
        }
    }
}
