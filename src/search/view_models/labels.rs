//! # Summary Labels
//!
//! Human-readable strings the presentation layer shows on the togglers,
//! selects and footer. Labels are derived from current state on every call
//! and never stored.

use crate::search::view_models::core::SearchViewModel;

/// Toggler text when no price bound is set
pub const PRICE_PLACEHOLDER: &str = "Price";

/// Toggler text when no area bound is set
pub const AREA_PLACEHOLDER: &str = "Area";

/// Toggler text until both bed and bath sets are non-empty
pub const BEDS_BATHS_PLACEHOLDER: &str = "Beds & Baths";

/// Select text when no property type is chosen
pub const PROPERTY_TYPE_PLACEHOLDER: &str = "Property Type";

/// Select text when no completion status is chosen
pub const COMPLETION_STATUS_PLACEHOLDER: &str = "Completion Status";

/// Hint text for the location input
pub const LOCATION_HINT: &str = "City, community or building";

/// Hint text for the keywords input
pub const KEYWORDS_HINT: &str = "Keywords: e.g. beach, chiller";

impl SearchViewModel {
    /// Price toggler label: placeholder iff both bounds are at the sentinel
    pub fn price_label(&self) -> String {
        let price = self.price();
        if price.is_unset() {
            PRICE_PLACEHOLDER.to_string()
        } else {
            format!("{} min to {} max", price.min, price.max)
        }
    }

    /// Area toggler label, with the unit on each bound
    pub fn area_label(&self) -> String {
        let area = self.area();
        if area.is_unset() {
            AREA_PLACEHOLDER.to_string()
        } else {
            format!("{} sqft min to {} sqft max", area.min, area.max)
        }
    }

    /// Beds & baths toggler label.
    ///
    /// Stays on the placeholder until BOTH sets have at least one token,
    /// then joins each set's tokens in activation order.
    pub fn beds_baths_label(&self) -> String {
        if self.bathrooms.is_empty() || self.bedrooms.is_empty() {
            return BEDS_BATHS_PLACEHOLDER.to_string();
        }

        format!(
            "{} Beds, {} Baths",
            self.bedrooms.items().join("-"),
            self.bathrooms.items().join("-")
        )
    }

    /// Property type select label
    pub fn property_type_label(&self) -> String {
        match self.property_type() {
            Some(value) => value.as_str().to_string(),
            None => PROPERTY_TYPE_PLACEHOLDER.to_string(),
        }
    }

    /// Completion status select label
    pub fn completion_status_label(&self) -> String {
        match self.completion_status() {
            Some(value) => value.label().to_string(),
            None => COMPLETION_STATUS_PLACEHOLDER.to_string(),
        }
    }

    /// Footer banner reflecting the active tab
    pub fn mode_banner(&self) -> String {
        format!("You're on {} mode!", self.mode().as_str().to_uppercase())
    }

    /// Footer link text tracking the extra-row visibility
    pub fn more_options_label(&self) -> &'static str {
        if self.more_options() {
            "Show less options"
        } else {
            "Show more options"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::search::events::{
        ChoiceGroup, CompletionStatus, Mode, PropertyType, RangeBound, RangeField,
    };
    use crate::search::view_models::core::SearchViewModel;

    use super::*;

    #[test]
    fn price_label_should_be_placeholder_iff_both_bounds_zero() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.price_label(), PRICE_PLACEHOLDER);

        vm.set_range_bound(RangeField::Price, RangeBound::Min, 10);
        assert_eq!(vm.price_label(), "10 min to 0 max");

        vm.set_range_bound(RangeField::Price, RangeBound::Max, 20);
        assert_eq!(vm.price_label(), "10 min to 20 max");

        vm.reset_range(RangeField::Price);
        assert_eq!(vm.price_label(), PRICE_PLACEHOLDER);
    }

    #[test]
    fn area_label_should_carry_the_unit() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.area_label(), AREA_PLACEHOLDER);

        vm.set_range_bound(RangeField::Area, RangeBound::Max, 30);
        assert_eq!(vm.area_label(), "0 sqft min to 30 sqft max");
    }

    #[test]
    fn beds_baths_label_should_need_both_sets() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.beds_baths_label(), BEDS_BATHS_PLACEHOLDER);

        vm.toggle_choice(ChoiceGroup::Bedrooms, "2");
        vm.toggle_choice(ChoiceGroup::Bedrooms, "3");
        // bathrooms still empty
        assert_eq!(vm.beds_baths_label(), BEDS_BATHS_PLACEHOLDER);

        vm.toggle_choice(ChoiceGroup::Bathrooms, "1");
        assert_eq!(vm.beds_baths_label(), "2-3 Beds, 1 Baths");
    }

    #[test]
    fn beds_baths_label_should_use_activation_order() {
        let mut vm = SearchViewModel::new();
        vm.toggle_choice(ChoiceGroup::Bedrooms, "3");
        vm.toggle_choice(ChoiceGroup::Bedrooms, "Studio");
        vm.toggle_choice(ChoiceGroup::Bathrooms, "2");
        vm.toggle_choice(ChoiceGroup::Bathrooms, "1");

        assert_eq!(vm.beds_baths_label(), "3-Studio Beds, 2-1 Baths");
    }

    #[test]
    fn beds_baths_label_should_return_to_placeholder_after_undo() {
        let mut vm = SearchViewModel::new();
        vm.toggle_choice(ChoiceGroup::Bedrooms, "2");
        vm.toggle_choice(ChoiceGroup::Bathrooms, "1");
        assert_eq!(vm.beds_baths_label(), "2 Beds, 1 Baths");

        vm.toggle_choice(ChoiceGroup::Bedrooms, "2");
        assert_eq!(vm.beds_baths_label(), BEDS_BATHS_PLACEHOLDER);
    }

    #[test]
    fn select_labels_should_track_selection() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.property_type_label(), PROPERTY_TYPE_PLACEHOLDER);
        assert_eq!(vm.completion_status_label(), COMPLETION_STATUS_PLACEHOLDER);

        vm.select_property_type(PropertyType::Duplex);
        vm.select_completion_status(CompletionStatus::OffPlan);

        assert_eq!(vm.property_type_label(), "Duplex");
        assert_eq!(vm.completion_status_label(), "Off-plan");
    }

    #[test]
    fn mode_banner_should_uppercase_the_mode() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.mode_banner(), "You're on RENT mode!");

        vm.select_mode(Mode::Buy);
        assert_eq!(vm.mode_banner(), "You're on BUY mode!");
    }

    #[test]
    fn more_options_label_should_flip_with_visibility() {
        let mut vm = SearchViewModel::new();
        assert_eq!(vm.more_options_label(), "Show more options");

        vm.toggle_more_options();
        assert_eq!(vm.more_options_label(), "Show less options");
    }
}
