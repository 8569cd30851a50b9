//! # Query Snapshot
//!
//! The read-only composite the form hands to whoever executes the search.
//! A snapshot is recomputed from leaf state on every call and never stored,
//! so it cannot drift from the controls.

use serde::Serialize;

use crate::search::events::{CompletionStatus, Mode, PropertyType};
use crate::search::models::RangeValue;
use crate::search::view_models::core::SearchViewModel;

/// Point-in-time values of every filter dimension.
///
/// Unset dimensions keep their sentinels (`None`, empty vec, zero bounds);
/// nothing is normalized or validated here — a `min > max` range is passed
/// through as-is for a downstream validator to judge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterQuery {
    pub mode: Mode,
    pub location: String,
    pub property_type: Option<PropertyType>,
    pub completion_status: Option<CompletionStatus>,
    pub price: RangeValue,
    pub area: RangeValue,
    pub bedrooms: Vec<String>,
    pub bathrooms: Vec<String>,
    pub keywords: String,
}

impl SearchViewModel {
    /// Pure read of all leaf states at call time
    pub fn snapshot(&self) -> FilterQuery {
        FilterQuery {
            mode: self.mode(),
            location: self.location().to_string(),
            property_type: self.property_type(),
            completion_status: self.completion_status(),
            price: self.price(),
            area: self.area(),
            bedrooms: self.bedrooms().to_vec(),
            bathrooms: self.bathrooms().to_vec(),
            keywords: self.keywords().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::search::events::{ChoiceGroup, Mode, PropertyType, RangeBound, RangeField};
    use crate::search::view_models::core::SearchViewModel;

    #[test]
    fn snapshot_should_capture_current_leaf_values() {
        let mut vm = SearchViewModel::new();
        vm.select_mode(Mode::Buy);
        vm.type_location("Nasr City");
        vm.select_property_type(PropertyType::Apartment);
        vm.set_range_bound(RangeField::Price, RangeBound::Min, 10);
        vm.set_range_bound(RangeField::Price, RangeBound::Max, 20);
        vm.toggle_choice(ChoiceGroup::Bedrooms, "2");

        let query = vm.snapshot();

        assert_eq!(query.mode, Mode::Buy);
        assert_eq!(query.location, "Nasr City");
        assert_eq!(query.property_type, Some(PropertyType::Apartment));
        assert_eq!(query.completion_status, None);
        assert_eq!(query.price.min, 10);
        assert_eq!(query.price.max, 20);
        assert!(query.area.is_unset());
        assert_eq!(query.bedrooms, ["2".to_string()]);
        assert!(query.bathrooms.is_empty());
    }

    #[test]
    fn snapshot_should_not_track_later_changes() {
        let mut vm = SearchViewModel::new();
        vm.set_range_bound(RangeField::Price, RangeBound::Min, 10);

        let before = vm.snapshot();
        vm.set_range_bound(RangeField::Price, RangeBound::Min, 30);
        let after = vm.snapshot();

        assert_eq!(before.price.min, 10);
        assert_eq!(after.price.min, 30);
    }

    #[test]
    fn snapshot_should_pass_inverted_ranges_through() {
        let mut vm = SearchViewModel::new();
        vm.set_range_bound(RangeField::Price, RangeBound::Min, 30);
        vm.set_range_bound(RangeField::Price, RangeBound::Max, 10);

        let query = vm.snapshot();
        assert_eq!(query.price.min, 30);
        assert_eq!(query.price.max, 10);
    }

    #[test]
    fn snapshot_should_serialize_wire_values() {
        let mut vm = SearchViewModel::new();
        vm.select_mode(Mode::Buy);
        vm.select_property_type(PropertyType::Villa);
        vm.apply(crate::search::events::FilterAction::SelectCompletionStatus(
            crate::search::events::CompletionStatus::OffPlan,
        ));

        let json = serde_json::to_value(vm.snapshot()).unwrap();

        assert_eq!(json["mode"], "buy");
        assert_eq!(json["property_type"], "Villa");
        assert_eq!(json["completion_status"], "off-plan");
        assert_eq!(json["price"]["min"], 0);
    }
}
