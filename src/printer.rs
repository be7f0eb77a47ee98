use std::io::{self, Write};

use colored::*;

use crate::htmlscraper::SearchResult;

const SHOWN_RESULTS: usize = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    pub color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Printer { color }
    }

    /// Writes the result for a human. A classified error goes to `err` on its
    /// own; otherwise the count line and up to five numbered descriptions go
    /// to `out`.
    pub fn print<O: Write, E: Write>(
        &self,
        result: &SearchResult,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        if let Some(error) = &result.error {
            writeln!(err, "{} {}", self.label("Error:"), error)?;
            return Ok(());
        }

        write!(out, "Found {} results.", result.count)?;
        if result.count > SHOWN_RESULTS as i64 {
            write!(out, " Showing first five:")?;
        }
        writeln!(out)?;

        let shown = result.descriptions.iter().take(SHOWN_RESULTS);
        for (i, description) in shown.enumerate() {
            writeln!(out, "{} {}", self.number(i + 1), description)?;
        }

        Ok(())
    }

    /// Prints to the process's standard streams.
    pub fn pretty_print(&self, result: &SearchResult) -> io::Result<()> {
        self.print(result, &mut io::stdout().lock(), &mut io::stderr().lock())
    }

    fn label(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn number(&self, n: usize) -> String {
        let text = format!("{}.", n);
        if self.color {
            text.blue().bold().to_string()
        } else {
            text
        }
    }
}
