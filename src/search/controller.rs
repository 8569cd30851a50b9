//! # Search Shell Controller
//!
//! The controller orchestrates the demo shell: it reads one command line at
//! a time, translates it into a filter action, applies it to the view model
//! and asks the renderer to redraw. Events are strictly serialized — each
//! line is fully processed before the next is read.

use anyhow::{anyhow, bail, Result};
use std::io::{self, BufRead, Write};

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::search::events::{
    ChoiceGroup, CompletionStatus, FilterAction, Mode, PopoverId, PropertyType, RangeBound,
    RangeField,
};
use crate::search::view_models::SearchViewModel;
use crate::search::views::TextRenderer;

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Forward an action to the view model
    Apply(FilterAction),
    /// Render the form
    Show,
    /// Render the query snapshot
    Snapshot,
    /// Print command help
    Help,
    /// Leave the shell
    Quit,
}

/// The main application controller wiring input to the view model
pub struct AppController {
    view_model: SearchViewModel,
    renderer: TextRenderer<io::Stdout>,
    scripted: Vec<String>,
    json: bool,
    should_quit: bool,
}

impl AppController {
    /// Create new application controller
    pub fn new(args: CommandLineArgs) -> Result<Self> {
        Ok(Self {
            view_model: SearchViewModel::new(),
            renderer: TextRenderer::new(io::stdout()),
            scripted: args.commands().to_vec(),
            json: args.json(),
            should_quit: false,
        })
    }

    /// Run the shell: scripted commands when given, interactive otherwise
    pub fn run(&mut self) -> Result<()> {
        if !self.scripted.is_empty() {
            let commands = std::mem::take(&mut self.scripted);
            for line in &commands {
                tracing::debug!("Scripted command: {}", line);
                self.handle_line(line)?;
                if self.should_quit {
                    break;
                }
            }
            // A script ends with the snapshot it built up
            self.renderer.render_snapshot(&self.view_model, self.json)?;
            return Ok(());
        }

        self.renderer
            .message("propline — property search shell (type 'help' for commands)")?;
        self.renderer.render_form(&self.view_model)?;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            self.handle_line(&line)?;
            if self.should_quit {
                break;
            }
        }

        self.renderer.message("bye")?;
        Ok(())
    }

    /// Process one command line
    pub fn handle_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        match parse_directive(line) {
            Ok(Directive::Apply(action)) => {
                tracing::debug!("Applying {:?}", action);
                self.view_model.apply(action);
                self.renderer.render_form(&self.view_model)?;
            }
            Ok(Directive::Show) => self.renderer.render_form(&self.view_model)?,
            Ok(Directive::Snapshot) => {
                self.renderer.render_snapshot(&self.view_model, self.json)?
            }
            Ok(Directive::Help) => self.print_help()?,
            Ok(Directive::Quit) => self.should_quit = true,
            Err(error) => {
                tracing::warn!("Rejected command '{}': {}", line, error);
                self.renderer.message(&format!("error: {error}"))?;
            }
        }

        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        let mut help = Vec::new();
        writeln!(help, "commands:")?;
        writeln!(help, "  mode rent|buy            switch transaction mode")?;
        writeln!(help, "  where <text>             set location search text")?;
        writeln!(help, "  keywords <text>          set keyword search text")?;
        writeln!(help, "  type apartment|villa|duplex")?;
        writeln!(help, "  status off-plan|ready")?;
        writeln!(
            help,
            "  price min|max <n>        set a price bound in {} (steps: {:?})",
            config::PRICE_CURRENCY,
            config::PRICE_STEPS
        )?;
        writeln!(help, "  price reset")?;
        writeln!(
            help,
            "  area min|max <n>         set an area bound in {} (steps: {:?})",
            config::AREA_UNIT,
            config::AREA_STEPS
        )?;
        writeln!(help, "  area reset")?;
        writeln!(help, "  bed <option>             toggle a bedroom card ({})", config::BEDROOM_OPTIONS.join("/"))?;
        writeln!(help, "  bath <option>            toggle a bathroom card ({})", config::BATHROOM_OPTIONS.join("/"))?;
        writeln!(help, "  open price|area|beds     toggle a popover")?;
        writeln!(help, "  more                     show/hide extra options row")?;
        writeln!(help, "  reset                    clear every filter")?;
        writeln!(help, "  show | snapshot | help | quit")?;
        self.renderer.message(std::str::from_utf8(&help)?.trim_end())?;
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &SearchViewModel {
        &self.view_model
    }

    /// Get mutable reference to view model (for testing)
    pub fn view_model_mut(&mut self) -> &mut SearchViewModel {
        &mut self.view_model
    }
}

/// Parse one command line into a directive.
///
/// The shell owns input validation: only catalog tokens and known commands
/// pass. The view model behind it accepts whatever it is handed.
pub fn parse_directive(line: &str) -> Result<Directive> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = parts.collect();

    let directive = match command.as_str() {
        "mode" => {
            let token = single_arg(&rest, "mode rent|buy")?;
            let mode = Mode::parse(token).ok_or_else(|| anyhow!("unknown mode '{token}'"))?;
            Directive::Apply(FilterAction::SelectMode(mode))
        }
        "where" => Directive::Apply(FilterAction::TypeLocation(rest.join(" "))),
        "keywords" => Directive::Apply(FilterAction::TypeKeywords(rest.join(" "))),
        "type" => {
            let token = single_arg(&rest, "type apartment|villa|duplex")?;
            let value = PropertyType::parse(token)
                .ok_or_else(|| anyhow!("unknown property type '{token}'"))?;
            Directive::Apply(FilterAction::SelectPropertyType(value))
        }
        "status" => {
            let token = single_arg(&rest, "status off-plan|ready")?;
            let value = CompletionStatus::parse(token)
                .ok_or_else(|| anyhow!("unknown completion status '{token}'"))?;
            Directive::Apply(FilterAction::SelectCompletionStatus(value))
        }
        "price" => range_directive(RangeField::Price, &rest)?,
        "area" => range_directive(RangeField::Area, &rest)?,
        "bed" => {
            let token = single_arg(&rest, "bed <option>")?;
            let token = config::canonical_bedroom_token(token)
                .ok_or_else(|| anyhow!("'{token}' is not a bedroom option"))?;
            Directive::Apply(FilterAction::ToggleChoice {
                group: ChoiceGroup::Bedrooms,
                token: token.to_string(),
            })
        }
        "bath" => {
            let token = single_arg(&rest, "bath <option>")?;
            let token = config::canonical_bathroom_token(token)
                .ok_or_else(|| anyhow!("'{token}' is not a bathroom option"))?;
            Directive::Apply(FilterAction::ToggleChoice {
                group: ChoiceGroup::Bathrooms,
                token: token.to_string(),
            })
        }
        "open" => {
            let token = single_arg(&rest, "open price|area|beds")?;
            let id = match token.to_lowercase().as_str() {
                "price" => PopoverId::Price,
                "area" => PopoverId::Area,
                "beds" | "bedsbaths" | "beds&baths" => PopoverId::BedsAndBaths,
                other => bail!("unknown popover '{other}'"),
            };
            Directive::Apply(FilterAction::TogglePopover(id))
        }
        "more" => Directive::Apply(FilterAction::ToggleMoreOptions),
        "reset" => Directive::Apply(FilterAction::ResetAll),
        "show" => Directive::Show,
        "snapshot" => Directive::Snapshot,
        "help" => Directive::Help,
        "quit" | "exit" => Directive::Quit,
        other => bail!("unknown command '{other}' (try 'help')"),
    };

    Ok(directive)
}

fn range_directive(field: RangeField, rest: &[&str]) -> Result<Directive> {
    let steps: &[u64] = match field {
        RangeField::Price => &config::PRICE_STEPS,
        RangeField::Area => &config::AREA_STEPS,
    };

    match rest {
        ["reset"] => Ok(Directive::Apply(FilterAction::ResetRange { field })),
        [bound, value] => {
            let bound = match bound.to_lowercase().as_str() {
                "min" => RangeBound::Min,
                "max" => RangeBound::Max,
                other => bail!("expected min|max|reset, got '{other}'"),
            };
            let value: u64 = value
                .parse()
                .map_err(|_| anyhow!("'{value}' is not a number"))?;
            // the selects only offer these steps
            if !steps.contains(&value) {
                bail!(
                    "'{value}' is not an offered step ({})",
                    steps
                        .iter()
                        .map(|step| step.to_string())
                        .collect::<Vec<_>>()
                        .join("/")
                );
            }
            Ok(Directive::Apply(FilterAction::SetRangeBound {
                field,
                bound,
                value,
            }))
        }
        _ => bail!("expected '<min|max> <n>' or 'reset'"),
    }
}

fn single_arg<'a>(rest: &[&'a str], usage: &str) -> Result<&'a str> {
    match rest {
        &[token] => Ok(token),
        _ => bail!("usage: {usage}"),
    }
}
