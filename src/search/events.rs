//! # Event System for the Search Form
//!
//! Event-driven communication between the filter models, the view model and
//! the presentation layer. Events decouple components: leaf models report what
//! changed, the view model reports what needs re-rendering, and neither knows
//! who is listening.

use serde::Serialize;

/// Transaction mode selected through the tab pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Rent,
    Buy,
}

impl Mode {
    /// Lowercase wire value, as submitted with a query
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Rent => "rent",
            Mode::Buy => "buy",
        }
    }

    /// Parse a user-supplied token into a mode
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "rent" => Some(Mode::Rent),
            "buy" => Some(Mode::Buy),
            _ => None,
        }
    }
}

/// Property type options offered by the single-select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PropertyType {
    Apartment,
    Villa,
    Duplex,
}

impl PropertyType {
    /// Display label, identical to the submitted value
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Duplex => "Duplex",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "apartment" => Some(PropertyType::Apartment),
            "villa" => Some(PropertyType::Villa),
            "duplex" => Some(PropertyType::Duplex),
            _ => None,
        }
    }
}

/// Completion status options for the extra-row single-select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompletionStatus {
    #[serde(rename = "off-plan")]
    OffPlan,
    #[serde(rename = "ready")]
    Ready,
}

impl CompletionStatus {
    /// Lowercase wire value, as submitted with a query
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::OffPlan => "off-plan",
            CompletionStatus::Ready => "ready",
        }
    }

    /// Display label shown in the select control
    pub fn label(&self) -> &'static str {
        match self {
            CompletionStatus::OffPlan => "Off-plan",
            CompletionStatus::Ready => "Ready",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "off-plan" | "offplan" => Some(CompletionStatus::OffPlan),
            "ready" => Some(CompletionStatus::Ready),
            _ => None,
        }
    }
}

/// Which bound of a min/max pair an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeBound {
    Min,
    Max,
}

/// Which range-valued filter dimension an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeField {
    Price,
    Area,
}

/// Which toggle-set an option click belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceGroup {
    Bedrooms,
    Bathrooms,
}

/// Which free-text input a keystroke belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Location,
    Keywords,
}

/// Identity of a popover panel and its toggler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopoverId {
    Price,
    Area,
    BedsAndBaths,
}

/// Opaque identity of the on-screen element that triggered a popover click.
///
/// The core only compares trigger identities; what the identity refers to
/// (and where the panel is anchored) is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerId(pub u32);

/// Discrete user actions forwarded by the presentation layer
///
/// This is the complete inbound vocabulary of the search form. Every
/// interaction the controls can produce maps to exactly one variant, and
/// every variant targets exactly one leaf model.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    /// Rent/Buy tab clicked
    SelectMode(Mode),

    /// Location text input changed
    TypeLocation(String),

    /// Keywords text input changed
    TypeKeywords(String),

    /// Property type picked from its select
    SelectPropertyType(PropertyType),

    /// Completion status picked from its select
    SelectCompletionStatus(CompletionStatus),

    /// One bound of a range picker changed
    SetRangeBound {
        field: RangeField,
        bound: RangeBound,
        value: u64,
    },

    /// Per-popover reset button clicked for a range picker
    ResetRange { field: RangeField },

    /// Option card clicked in a bedrooms/bathrooms toggle set
    ToggleChoice { group: ChoiceGroup, token: String },

    /// "Show more/less options" footer link clicked
    ToggleMoreOptions,

    /// A popover toggler clicked
    TogglePopover(PopoverId),

    /// Composite reset of every filter dimension
    ResetAll,
}

/// Events emitted when filter models change
///
/// These represent pure state changes without any view concerns. The
/// presentation layer can subscribe to them to keep external state (an URL,
/// an analytics stream) in sync.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// Transaction mode switched
    ModeChanged { from: Mode, to: Mode },

    /// A free-text input changed
    SearchTermChanged { field: TextField, text: String },

    /// Property type selection replaced
    PropertyTypeSelected { value: PropertyType },

    /// Completion status selection replaced
    CompletionStatusSelected { value: CompletionStatus },

    /// One bound of a range replaced
    RangeBoundChanged {
        field: RangeField,
        bound: RangeBound,
        value: u64,
    },

    /// A range dropped back to its unset sentinel
    RangeReset { field: RangeField },

    /// A token was added to or removed from a toggle set
    ChoiceToggled {
        group: ChoiceGroup,
        token: String,
        added: bool,
    },

    /// A popover opened or closed
    PopoverToggled { id: PopoverId, open: bool },

    /// The extra row of controls was shown or hidden
    MoreOptionsToggled { visible: bool },

    /// Every filter dimension was cleared at once
    FiltersReset,
}

/// Events emitted when the view needs updating
///
/// These tell the presentation layer which part of the form to re-render,
/// allowing partial updates instead of redrawing the whole control row.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A toggler summary label changed
    ControlRowRedrawRequired,

    /// A popover panel opened or closed and needs (un)mounting
    PopoverRedrawRequired { id: PopoverId },

    /// The extra row was shown or hidden
    ExtraRowVisibilityChanged { visible: bool },

    /// The footer (mode banner, more-options link) changed
    FooterUpdateRequired,

    /// Everything needs re-rendering
    FullRedrawRequired,
}

/// Type alias for model event handlers to reduce complexity
pub type ModelEventHandler = Box<dyn Fn(&ModelEvent) + Send + Sync>;

/// Type alias for view event handlers to reduce complexity
pub type ViewEventHandler = Box<dyn Fn(&ViewEvent) + Send + Sync>;

/// Event bus for decoupled communication between components
pub trait EventBus: Send + Sync {
    /// Publish a model event
    fn publish_model_event(&mut self, event: ModelEvent);

    /// Publish a view event
    fn publish_view_event(&mut self, event: ViewEvent);

    /// Subscribe to model events
    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler);

    /// Subscribe to view events
    fn subscribe_to_view_events(&mut self, handler: ViewEventHandler);
}

/// Simple in-memory event bus implementation
pub struct SimpleEventBus {
    model_handlers: Vec<ModelEventHandler>,
    view_handlers: Vec<ViewEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            model_handlers: Vec::new(),
            view_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_model_event(&mut self, event: ModelEvent) {
        for handler in &self.model_handlers {
            handler(&event);
        }
    }

    fn publish_view_event(&mut self, event: ViewEvent) {
        for handler in &self.view_handlers {
            handler(&event);
        }
    }

    fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.model_handlers.push(handler);
    }

    fn subscribe_to_view_events(&mut self, handler: ViewEventHandler) {
        self.view_handlers.push(handler);
    }
}
