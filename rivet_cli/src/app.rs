//! Interactive rivet layout session.
//!
//! Generic over the reader and writer so the whole prompt flow can run
//! against in-memory buffers.
//!
//! Bad input at any prompt prints the error and asks again. End of input
//! stops the current phase: during data entry it skips to the summary,
//! during questions it ends the session.

use std::io::{BufRead, Write};

use rivet_core::calculations::rivet_layout::{
    calculate, LayoutInput, SUGGESTED_EDGE_MULTIPLIER, SUGGESTED_SPACING_MULTIPLIER,
};
use rivet_core::explain::explain;
use rivet_core::input::{parse_dimension_in, parse_multiplier, require_positive};
use rivet_core::{RivetResult, Session, UnitSystem};

/// Settings that do not come from the prompts
#[derive(Debug, Clone, Copy, Default)]
pub struct AppConfig {
    /// Skip the unit prompt and use these units
    pub units: Option<UnitSystem>,

    /// Print the session as JSON after data entry
    pub json: bool,
}

pub struct App<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        App { input, output, config }
    }

    /// Run the full session. Returns every layout that was calculated.
    pub fn run(&mut self) -> RivetResult<Session> {
        writeln!(self.output, "=== Rivet Layout Calculator ===")?;

        let units = match self.config.units {
            Some(units) => units,
            None => match self.prompt("Select units: inches or mm (type 'inches' or 'mm'): ")? {
                Some(choice) => UnitSystem::from_choice(&choice),
                None => return Ok(Session::new(UnitSystem::default())),
            },
        };
        tracing::info!(%units, "session started");

        let mut session = Session::new(units);
        self.collect_layouts(&mut session)?;
        if session.is_empty() {
            return Ok(session);
        }

        writeln!(self.output, "\n--- All Calculated Layouts ---")?;
        for line in session.summary_lines() {
            writeln!(self.output, "{}", line)?;
        }

        if self.config.json {
            writeln!(self.output, "\nJSON Output:")?;
            writeln!(self.output, "{}", session.to_json_pretty()?)?;
        }

        self.answer_questions(&session)?;
        Ok(session)
    }

    fn collect_layouts(&mut self, session: &mut Session) -> RivetResult<()> {
        let units = session.units;
        loop {
            let Some(input) = self.read_sheet(units)? else {
                return Ok(());
            };

            let result = calculate(&input);
            writeln!(self.output)?;
            for line in result.report_lines() {
                writeln!(self.output, "  {}", line)?;
            }
            if result.is_degenerate() {
                tracing::warn!(
                    rivets_along_length = result.rivets_along_length,
                    rivets_along_width = result.rivets_along_width,
                    "edge distances leave room for only one rivet on a side"
                );
                writeln!(
                    self.output,
                    "  Note: only one rivet fits along a side; the perimeter total undercounts this sheet."
                )?;
            }
            writeln!(self.output, "\nTotal rivets for this layout: {}", result.total_rivets)?;
            session.add_layout(result);

            match self.prompt("Do you want to calculate another sheet? (y/n): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => return Ok(()),
            }
        }
    }

    /// Prompt for one sheet. `None` when input ran out part way.
    fn read_sheet(&mut self, units: UnitSystem) -> RivetResult<Option<LayoutInput>> {
        let Some(thickness) = self.prompt_dimension(&format!("\nEnter sheet thickness ({}): ", units), "thickness", units)? else {
            return Ok(None);
        };

        writeln!(self.output, "Suggested minimum edge multiplier: {}D", SUGGESTED_EDGE_MULTIPLIER)?;
        writeln!(self.output, "Suggested minimum spacing multiplier: {}D", SUGGESTED_SPACING_MULTIPLIER)?;

        let Some(edge_multiplier) = self.prompt_multiplier("Enter edge distance multiplier (e.g., 2D): ", "edge_multiplier")? else {
            return Ok(None);
        };
        let Some(spacing_multiplier) = self.prompt_multiplier("Enter spacing multiplier (e.g., 4D): ", "spacing_multiplier")? else {
            return Ok(None);
        };
        let Some(length) = self.prompt_dimension(&format!("Enter sheet length ({}): ", units), "length", units)? else {
            return Ok(None);
        };
        let Some(width) = self.prompt_dimension(&format!("Enter sheet width ({}): ", units), "width", units)? else {
            return Ok(None);
        };

        Ok(Some(LayoutInput {
            length,
            width,
            thickness,
            spacing_multiplier,
            edge_multiplier,
        }))
    }

    fn answer_questions(&mut self, session: &Session) -> RivetResult<()> {
        writeln!(self.output, "\nYou can now ask questions about the calculations. Type 'exit' to quit.")?;
        loop {
            let Some(question) = self.prompt("Ask: ")? else {
                return Ok(());
            };
            let trimmed = question.trim();
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
                return Ok(());
            }

            let choice = if session.needs_selection() {
                match self.prompt(&format!("Which layout (1-{})? ", session.len()))? {
                    Some(choice) => choice,
                    None => return Ok(()),
                }
            } else {
                String::new()
            };

            let selection = session.select(&choice)?;
            if selection.fell_back {
                writeln!(self.output, "Invalid layout number. Using the first layout by default.")?;
            }
            writeln!(self.output, "{}", explain(selection.result(), &question))?;
        }
    }

    fn prompt_dimension(&mut self, message: &str, field: &str, units: UnitSystem) -> RivetResult<Option<f64>> {
        self.prompt_parsed(message, |text| {
            parse_dimension_in(text, units).and_then(|value| require_positive(field, value))
        })
    }

    fn prompt_multiplier(&mut self, message: &str, field: &str) -> RivetResult<Option<f64>> {
        self.prompt_parsed(message, |text| {
            parse_multiplier(text).and_then(|value| require_positive(field, value))
        })
    }

    /// Prompt until `parse` accepts the answer or input runs out.
    fn prompt_parsed<T>(&mut self, message: &str, parse: impl Fn(&str) -> RivetResult<T>) -> RivetResult<Option<T>> {
        loop {
            let Some(text) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(e) if e.is_recoverable() => {
                    tracing::debug!(code = e.error_code(), "rejected input");
                    writeln!(self.output, "Error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Print `message` and read one line. `None` at end of input.
    fn prompt(&mut self, message: &str) -> RivetResult<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
