//! # Core ViewModel Structure
//!
//! The central coordinator for the search form. It owns one model per filter
//! dimension plus the popover handles, routes each inbound action to the one
//! leaf it targets, and tells the presentation layer what to re-render. Leaf
//! state is reachable only through this struct, so every dimension has a
//! single source of truth.

use crate::search::events::{
    ChoiceGroup, CompletionStatus, EventBus, FilterAction, Mode, ModelEvent, PopoverId,
    PropertyType, RangeBound, RangeField, TextField, TriggerId, ViewEvent,
};
use crate::search::models::{
    ChoiceSet, ModeModel, PopoverModel, RangeModel, RangeValue, SearchTermModel,
    SingleChoiceModel, ToggleOutcome,
};

/// Type alias for event bus option to reduce complexity
type EventBusOption = Option<Box<dyn EventBus>>;

/// The search form view model
///
/// Owns all filter state. Mutation happens exclusively through the action
/// methods below, each of which completes synchronously before the next
/// event is processed.
pub struct SearchViewModel {
    pub(super) mode: ModeModel,
    pub(super) location: SearchTermModel,
    pub(super) keywords: SearchTermModel,
    pub(super) property_type: SingleChoiceModel<PropertyType>,
    pub(super) completion_status: SingleChoiceModel<CompletionStatus>,
    pub(super) price: RangeModel,
    pub(super) area: RangeModel,
    pub(super) bedrooms: ChoiceSet<String>,
    pub(super) bathrooms: ChoiceSet<String>,
    price_popover: PopoverModel,
    area_popover: PopoverModel,
    beds_popover: PopoverModel,
    more_options: bool,
    event_bus: EventBusOption,
}

impl SearchViewModel {
    /// Create a fresh form: rent tab, everything unset, popovers closed,
    /// extra row hidden
    pub fn new() -> Self {
        Self {
            mode: ModeModel::new(),
            location: SearchTermModel::new(TextField::Location),
            keywords: SearchTermModel::new(TextField::Keywords),
            property_type: SingleChoiceModel::new(),
            completion_status: SingleChoiceModel::new(),
            price: RangeModel::new(RangeField::Price),
            area: RangeModel::new(RangeField::Area),
            bedrooms: ChoiceSet::new(),
            bathrooms: ChoiceSet::new(),
            price_popover: PopoverModel::new(PopoverId::Price),
            area_popover: PopoverModel::new(PopoverId::Area),
            beds_popover: PopoverModel::new(PopoverId::BedsAndBaths),
            more_options: false,
            event_bus: None,
        }
    }

    /// Attach an event bus for model/view event delivery
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// Route an inbound action to the leaf it targets
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::SelectMode(mode) => self.select_mode(mode),
            FilterAction::TypeLocation(text) => self.type_location(text),
            FilterAction::TypeKeywords(text) => self.type_keywords(text),
            FilterAction::SelectPropertyType(value) => self.select_property_type(value),
            FilterAction::SelectCompletionStatus(value) => self.select_completion_status(value),
            FilterAction::SetRangeBound {
                field,
                bound,
                value,
            } => self.set_range_bound(field, bound, value),
            FilterAction::ResetRange { field } => self.reset_range(field),
            FilterAction::ToggleChoice { group, token } => self.toggle_choice(group, token),
            FilterAction::ToggleMoreOptions => self.toggle_more_options(),
            FilterAction::TogglePopover(id) => self.toggle_popover(id),
            FilterAction::ResetAll => self.reset_all(),
        }
    }

    /// Switch the rent/buy tab
    pub fn select_mode(&mut self, mode: Mode) {
        if let Some(event) = self.mode.select(mode) {
            tracing::debug!("Mode switched to {:?}", mode);
            self.emit_model_event(event);
            self.emit_view_events([ViewEvent::FooterUpdateRequired]);
        }
    }

    /// Replace the location search term
    pub fn type_location(&mut self, text: impl Into<String>) {
        let event = self.location.set_text(text);
        self.emit_model_event(event);
    }

    /// Replace the keywords search term
    pub fn type_keywords(&mut self, text: impl Into<String>) {
        let event = self.keywords.set_text(text);
        self.emit_model_event(event);
    }

    /// Pick a property type from its select
    pub fn select_property_type(&mut self, value: PropertyType) {
        self.property_type.select(value);
        tracing::debug!("Property type selected: {:?}", value);
        self.emit_model_event(ModelEvent::PropertyTypeSelected { value });
        self.emit_view_events([ViewEvent::ControlRowRedrawRequired]);
    }

    /// Pick a completion status from its select
    pub fn select_completion_status(&mut self, value: CompletionStatus) {
        self.completion_status.select(value);
        tracing::debug!("Completion status selected: {:?}", value);
        self.emit_model_event(ModelEvent::CompletionStatusSelected { value });
        self.emit_view_events([ViewEvent::ControlRowRedrawRequired]);
    }

    /// Replace one bound of the price or area range
    pub fn set_range_bound(&mut self, field: RangeField, bound: RangeBound, value: u64) {
        let event = self.range_model_mut(field).set_bound(bound, value);
        tracing::debug!("Range {:?} {:?} set to {}", field, bound, value);
        self.emit_model_event(event);
        self.emit_view_events([ViewEvent::ControlRowRedrawRequired]);
    }

    /// Per-popover reset for the price or area range
    pub fn reset_range(&mut self, field: RangeField) {
        let event = self.range_model_mut(field).reset();
        tracing::debug!("Range {:?} reset", field);
        self.emit_model_event(event);
        self.emit_view_events([ViewEvent::ControlRowRedrawRequired]);
    }

    /// Toggle an option card in the bedrooms or bathrooms set
    pub fn toggle_choice(&mut self, group: ChoiceGroup, token: impl Into<String>) {
        let token = token.into();
        let outcome = match group {
            ChoiceGroup::Bedrooms => self.bedrooms.toggle(token.clone()),
            ChoiceGroup::Bathrooms => self.bathrooms.toggle(token.clone()),
        };
        tracing::debug!("Choice {:?} in {:?}: {:?}", token, group, outcome);
        self.emit_model_event(ModelEvent::ChoiceToggled {
            group,
            token,
            added: outcome == ToggleOutcome::Added,
        });
        self.emit_view_events([ViewEvent::ControlRowRedrawRequired]);
    }

    /// Show or hide the extra row of controls.
    ///
    /// Hiding never clears completion status, area or keywords; their state
    /// persists across visibility cycles.
    pub fn toggle_more_options(&mut self) {
        self.more_options = !self.more_options;
        let visible = self.more_options;
        tracing::debug!("More options row visible: {}", visible);
        self.emit_model_event(ModelEvent::MoreOptionsToggled { visible });
        self.emit_view_events([
            ViewEvent::ExtraRowVisibilityChanged { visible },
            ViewEvent::FooterUpdateRequired,
        ]);
    }

    /// Handle a click on a popover toggler
    pub fn toggle_popover(&mut self, id: PopoverId) {
        let trigger = Self::toggler_trigger(id);
        let event = self.popover_mut(id).toggle(trigger);
        self.emit_model_event(event);
        self.emit_view_events([ViewEvent::PopoverRedrawRequired { id }]);
    }

    /// Composite reset: ranges to the sentinel, choice sets emptied,
    /// single-selects back to unset.
    ///
    /// Mode, free-text terms, popover visibility and the extra-row flag are
    /// deliberately untouched — no per-widget reset in the form covers them.
    pub fn reset_all(&mut self) {
        self.price.reset();
        self.area.reset();
        self.bedrooms.clear();
        self.bathrooms.clear();
        self.property_type.clear();
        self.completion_status.clear();
        tracing::info!("All filters cleared");
        self.emit_model_event(ModelEvent::FiltersReset);
        self.emit_view_events([ViewEvent::FullRedrawRequired]);
    }

    // Read access for the presentation layer

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn location(&self) -> &str {
        self.location.text()
    }

    pub fn keywords(&self) -> &str {
        self.keywords.text()
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        self.property_type.selection().copied()
    }

    pub fn completion_status(&self) -> Option<CompletionStatus> {
        self.completion_status.selection().copied()
    }

    pub fn price(&self) -> RangeValue {
        self.price.value()
    }

    pub fn area(&self) -> RangeValue {
        self.area.value()
    }

    pub fn range(&self, field: RangeField) -> RangeValue {
        match field {
            RangeField::Price => self.price.value(),
            RangeField::Area => self.area.value(),
        }
    }

    pub fn bedrooms(&self) -> &[String] {
        self.bedrooms.items()
    }

    pub fn bathrooms(&self) -> &[String] {
        self.bathrooms.items()
    }

    pub fn is_popover_open(&self, id: PopoverId) -> bool {
        self.popover(id).is_open()
    }

    pub fn more_options(&self) -> bool {
        self.more_options
    }

    // Internal plumbing

    fn range_model_mut(&mut self, field: RangeField) -> &mut RangeModel {
        match field {
            RangeField::Price => &mut self.price,
            RangeField::Area => &mut self.area,
        }
    }

    fn popover(&self, id: PopoverId) -> &PopoverModel {
        match id {
            PopoverId::Price => &self.price_popover,
            PopoverId::Area => &self.area_popover,
            PopoverId::BedsAndBaths => &self.beds_popover,
        }
    }

    fn popover_mut(&mut self, id: PopoverId) -> &mut PopoverModel {
        match id {
            PopoverId::Price => &mut self.price_popover,
            PopoverId::Area => &mut self.area_popover,
            PopoverId::BedsAndBaths => &mut self.beds_popover,
        }
    }

    /// Identity of the toggler element belonging to a popover. Each panel
    /// has exactly one toggler in this form.
    fn toggler_trigger(id: PopoverId) -> TriggerId {
        match id {
            PopoverId::Price => TriggerId(1),
            PopoverId::Area => TriggerId(2),
            PopoverId::BedsAndBaths => TriggerId(3),
        }
    }

    fn emit_model_event(&mut self, event: ModelEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_model_event(event);
        }
    }

    fn emit_view_events(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        if let Some(bus) = self.event_bus.as_mut() {
            for event in events {
                bus.publish_view_event(event);
            }
        }
    }
}

impl Default for SearchViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::events::SimpleEventBus;
    use std::sync::{Arc, Mutex};

    #[test]
    fn new_form_should_have_everything_unset() {
        let vm = SearchViewModel::new();

        assert_eq!(vm.mode(), Mode::Rent);
        assert_eq!(vm.location(), "");
        assert_eq!(vm.keywords(), "");
        assert_eq!(vm.property_type(), None);
        assert_eq!(vm.completion_status(), None);
        assert!(vm.price().is_unset());
        assert!(vm.area().is_unset());
        assert!(vm.bedrooms().is_empty());
        assert!(vm.bathrooms().is_empty());
        assert!(!vm.more_options());
        assert!(!vm.is_popover_open(PopoverId::Price));
    }

    #[test]
    fn apply_should_route_actions_to_the_right_leaf() {
        let mut vm = SearchViewModel::new();

        vm.apply(FilterAction::SelectMode(Mode::Buy));
        vm.apply(FilterAction::TypeLocation("Downtown".to_string()));
        vm.apply(FilterAction::SetRangeBound {
            field: RangeField::Price,
            bound: RangeBound::Min,
            value: 10,
        });
        vm.apply(FilterAction::ToggleChoice {
            group: ChoiceGroup::Bedrooms,
            token: "2".to_string(),
        });

        assert_eq!(vm.mode(), Mode::Buy);
        assert_eq!(vm.location(), "Downtown");
        assert_eq!(vm.price().min, 10);
        assert_eq!(vm.bedrooms(), ["2".to_string()]);
        // untouched dimensions stay untouched
        assert!(vm.area().is_unset());
        assert!(vm.bathrooms().is_empty());
    }

    #[test]
    fn bedrooms_and_bathrooms_should_not_share_state() {
        let mut vm = SearchViewModel::new();

        vm.toggle_choice(ChoiceGroup::Bedrooms, "3");
        vm.toggle_choice(ChoiceGroup::Bathrooms, "2");

        assert_eq!(vm.bedrooms(), ["3".to_string()]);
        assert_eq!(vm.bathrooms(), ["2".to_string()]);

        vm.toggle_choice(ChoiceGroup::Bathrooms, "2");
        assert_eq!(vm.bedrooms(), ["3".to_string()]);
        assert!(vm.bathrooms().is_empty());
    }

    #[test]
    fn popovers_should_toggle_independently() {
        let mut vm = SearchViewModel::new();

        vm.toggle_popover(PopoverId::Price);
        vm.toggle_popover(PopoverId::BedsAndBaths);

        assert!(vm.is_popover_open(PopoverId::Price));
        assert!(vm.is_popover_open(PopoverId::BedsAndBaths));
        assert!(!vm.is_popover_open(PopoverId::Area));

        vm.toggle_popover(PopoverId::Price);
        assert!(!vm.is_popover_open(PopoverId::Price));
        assert!(vm.is_popover_open(PopoverId::BedsAndBaths));
    }

    #[test]
    fn hiding_extra_row_should_keep_its_state() {
        let mut vm = SearchViewModel::new();

        vm.toggle_more_options();
        vm.select_completion_status(CompletionStatus::Ready);
        vm.set_range_bound(RangeField::Area, RangeBound::Min, 20);
        vm.type_keywords("beach");

        vm.toggle_more_options();
        vm.toggle_more_options();

        assert_eq!(vm.completion_status(), Some(CompletionStatus::Ready));
        assert_eq!(vm.area().min, 20);
        assert_eq!(vm.keywords(), "beach");
    }

    #[test]
    fn reset_all_should_clear_filters_but_not_mode_or_text() {
        let mut vm = SearchViewModel::new();

        vm.select_mode(Mode::Buy);
        vm.type_location("Maadi");
        vm.select_property_type(PropertyType::Villa);
        vm.select_completion_status(CompletionStatus::OffPlan);
        vm.set_range_bound(RangeField::Price, RangeBound::Min, 10);
        vm.set_range_bound(RangeField::Area, RangeBound::Max, 30);
        vm.toggle_choice(ChoiceGroup::Bedrooms, "Studio");
        vm.toggle_choice(ChoiceGroup::Bathrooms, "1");

        vm.reset_all();

        assert!(vm.price().is_unset());
        assert!(vm.area().is_unset());
        assert!(vm.bedrooms().is_empty());
        assert!(vm.bathrooms().is_empty());
        assert_eq!(vm.property_type(), None);
        assert_eq!(vm.completion_status(), None);
        // not covered by any widget reset
        assert_eq!(vm.mode(), Mode::Buy);
        assert_eq!(vm.location(), "Maadi");
    }

    #[test]
    fn bus_should_receive_model_events_for_transitions() {
        let mut vm = SearchViewModel::new();
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        let mut bus = SimpleEventBus::new();
        bus.subscribe_to_model_events(Box::new(move |event| {
            sink.lock().unwrap().push(event.clone());
        }));
        vm.set_event_bus(Box::new(bus));

        vm.select_mode(Mode::Buy);
        vm.select_mode(Mode::Buy); // no-op, no event
        vm.toggle_choice(ChoiceGroup::Bedrooms, "2");

        let events = received.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ModelEvent::ModeChanged {
                    from: Mode::Rent,
                    to: Mode::Buy,
                },
                ModelEvent::ChoiceToggled {
                    group: ChoiceGroup::Bedrooms,
                    token: "2".to_string(),
                    added: true,
                },
            ]
        );
    }
}
