//! # View Layer for the Demo Shell
//!
//! Renders the form state as plain text. This is the thin presentation
//! collaborator the core is designed against: it reads current state and
//! labels, and holds no filter logic of its own.

use anyhow::Result;
use std::io::Write;

use crate::search::events::PopoverId;
use crate::search::view_models::{SearchViewModel, KEYWORDS_HINT, LOCATION_HINT};

/// Text renderer writing the control row, popovers and footer to a sink
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying sink (for tests)
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render the whole form: tabs, control row, extra row when visible,
    /// open popovers and the footer
    pub fn render_form(&mut self, view_model: &SearchViewModel) -> Result<()> {
        let location = if view_model.location().is_empty() {
            format!("[{LOCATION_HINT}]")
        } else {
            view_model.location().to_string()
        };

        writeln!(self.out, "[{}] tab active", view_model.mode().as_str())?;
        writeln!(
            self.out,
            "| {} | {} | {} | {} | [Search] |",
            location,
            view_model.property_type_label(),
            view_model.beds_baths_label(),
            view_model.price_label(),
        )?;

        if view_model.more_options() {
            let keywords = if view_model.keywords().is_empty() {
                format!("[{KEYWORDS_HINT}]")
            } else {
                view_model.keywords().to_string()
            };
            writeln!(
                self.out,
                "| {} | {} | {} |",
                view_model.completion_status_label(),
                view_model.area_label(),
                keywords,
            )?;
        }

        for id in [PopoverId::Price, PopoverId::Area, PopoverId::BedsAndBaths] {
            if view_model.is_popover_open(id) {
                writeln!(self.out, "  (popover open: {})", popover_name(id))?;
            }
        }

        writeln!(
            self.out,
            "{}  --  {}",
            view_model.mode_banner(),
            view_model.more_options_label()
        )?;

        Ok(())
    }

    /// Render the query snapshot, pretty JSON or compact single-line text
    pub fn render_snapshot(&mut self, view_model: &SearchViewModel, json: bool) -> Result<()> {
        let query = view_model.snapshot();
        if json {
            writeln!(self.out, "{}", serde_json::to_string_pretty(&query)?)?;
        } else {
            writeln!(self.out, "{query:?}")?;
        }
        Ok(())
    }

    /// Print a plain message line
    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

fn popover_name(id: PopoverId) -> &'static str {
    match id {
        PopoverId::Price => "price",
        PopoverId::Area => "area",
        PopoverId::BedsAndBaths => "beds & baths",
    }
}
