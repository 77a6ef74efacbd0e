//! Interactive menu loop over the report engine.
//!
//! The shell is a blocking read-eval loop: show the menu, read a
//! single-character command, collect the command's parameters (re-asking
//! until valid), run the report, wait for an acknowledgment, repeat. It is
//! generic over its input and output streams so tests can script a session.
//!
//! EOF anywhere is treated as quit; the selection gathered so far is still
//! handed back for persistence.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use rer_core::{report, Dataset, Report, ReportKind, Selection};

pub struct Shell<'a> {
    dataset: &'a Dataset,
    selection: Selection,
}

impl<'a> Shell<'a> {
    pub fn new(dataset: &'a Dataset, selection: Selection) -> Self {
        Self { dataset, selection }
    }

    /// The selection as of the last completed menu action.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Regenerate and display the report persisted by the previous session.
    ///
    /// Runs once at startup, before the menu. A selection that no longer
    /// fits the dataset (e.g. a country index past the end after the data
    /// file shrank) is logged and skipped rather than surfaced to the user.
    pub fn replay_last(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        let report = match self.selection.report_type {
            ReportKind::None => return Ok(()),
            ReportKind::Country => {
                match usize::try_from(self.selection.country_index)
                    .ok()
                    .map(|index| report::country_report(self.dataset, index))
                {
                    Some(Ok(report)) => report,
                    Some(Err(err)) => {
                        warn!("Skipping saved report: {err}");
                        return Ok(());
                    }
                    None => {
                        warn!("Skipping saved report: no country was selected");
                        return Ok(());
                    }
                }
            }
            ReportKind::Source => {
                report::source_report(self.dataset, &self.selection.source_type)
            }
            ReportKind::PercentRange => report::percent_range_report(
                self.dataset,
                self.selection.min_percent,
                self.selection.max_percent,
            ),
        };
        self.show_report(&report, input, output)
    }

    /// The menu loop. Returns when the user quits or input reaches EOF.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        loop {
            self.print_menu(output)?;
            let Some(line) = read_trimmed(input)? else {
                break;
            };
            match line.to_ascii_uppercase().as_str() {
                "C" => self.select_country(input, output)?,
                "S" => self.select_source(input, output)?,
                "P" => self.select_percent_range(input, output)?,
                "X" => break,
                _ => writeln!(output, "Invalid input. Please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output, "Renewable Electricity Production in 2021")?;
        writeln!(output, "========================================")?;
        writeln!(output, "Enter 'C' to select a country")?;
        writeln!(output, "Enter 'S' to select a specific source")?;
        writeln!(output, "Enter 'P' to select a % range of renewables production")?;
        writeln!(output, "Enter 'X' to quit")?;
        output.flush()?;
        Ok(())
    }

    fn select_country(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        self.selection.report_type = ReportKind::Country;
        writeln!(output, "Select a country by number.")?;
        for (i, country) in self.dataset.countries.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, country.name)?;
        }

        let Some(pick) = prompt_for_index(input, output, 1, self.dataset.len())? else {
            return Ok(());
        };
        let index = pick - 1;
        self.selection.country_index = index as i64;

        let report = report::country_report(self.dataset, index)?;
        self.show_report(&report, input, output)
    }

    fn select_source(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        self.selection.report_type = ReportKind::Source;
        writeln!(output, "Select a renewable source by number.")?;
        let types = report::distinct_source_types(self.dataset);
        for (i, kind) in types.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, kind)?;
        }

        let Some(pick) = prompt_for_index(input, output, 1, types.len())? else {
            return Ok(());
        };
        let kind = types[pick - 1].clone();
        self.selection.source_type = kind.clone();

        let report = report::source_report(self.dataset, &kind);
        self.show_report(&report, input, output)
    }

    fn select_percent_range(
        &mut self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        self.selection.report_type = ReportKind::PercentRange;

        writeln!(
            output,
            "Enter the minimum % of renewables produced OR press enter for no minimum:"
        )?;
        let Some(min) = prompt_for_percent(input, output, 0.0)? else {
            return Ok(());
        };

        writeln!(
            output,
            "Enter the maximum % of renewables produced OR press enter for no maximum:"
        )?;
        let Some(max) = prompt_for_percent(input, output, 100.0)? else {
            return Ok(());
        };

        self.selection.min_percent = min;
        self.selection.max_percent = max;

        let report = report::percent_range_report(self.dataset, min, max);
        self.show_report(&report, input, output)
    }

    fn show_report(
        &self,
        report: &Report,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<()> {
        write!(output, "{report}")?;
        writeln!(output, "Press Enter to return to the menu.")?;
        output.flush()?;
        // Acknowledgment gate; the content of the line is irrelevant.
        read_trimmed(input)?;
        Ok(())
    }
}

/// Read an integer in `[min, max]`, re-asking until valid. `None` on EOF.
fn prompt_for_index(
    input: &mut impl BufRead,
    output: &mut impl Write,
    min: usize,
    max: usize,
) -> Result<Option<usize>> {
    loop {
        output.flush()?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(value) if value >= min && value <= max => return Ok(Some(value)),
            _ => writeln!(output, "Please enter a number between {min} and {max}.")?,
        }
    }
}

/// Read a percent bound: blank means `default`, anything else must parse as
/// a number. Bounds are not range-checked. `None` on EOF.
fn prompt_for_percent(
    input: &mut impl BufRead,
    output: &mut impl Write,
    default: f64,
) -> Result<Option<f64>> {
    loop {
        output.flush()?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        match line.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Please enter a number or press enter for the default.")?,
        }
    }
}

/// One trimmed line of input, or `None` at EOF.
fn read_trimmed(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
