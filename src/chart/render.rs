use std::io::{self, Write};

use colored::Colorize;

use super::aggregate::Bucket;

const DEFAULT_BAR_WIDTH: usize = 30;

/// Rendering seam for the chart view. The aggregator stays testable with no
/// renderer at all, and the terminal implementation is swappable.
pub trait ChartRenderer {
    /// Draws the full bucket sequence, replacing whatever the surface showed
    /// before. Implementations must not update a prior chart incrementally.
    fn render(&mut self, buckets: &[Bucket]) -> io::Result<()>;

    /// Releases the previously rendered chart so the next `render` starts
    /// from a clean surface.
    fn destroy(&mut self);
}

/// Grouped horizontal bar chart drawn with block characters, one
/// income/expense pair per bucket, scaled against a zero-based axis.
pub struct TextBarChart<W: Write> {
    out: W,
    width: usize,
    rendered: bool,
}

impl TextBarChart<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), DEFAULT_BAR_WIDTH)
    }
}

impl<W: Write> TextBarChart<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            rendered: false,
        }
    }
}

impl<W: Write> ChartRenderer for TextBarChart<W> {
    fn render(&mut self, buckets: &[Bucket]) -> io::Result<()> {
        if self.rendered {
            self.destroy();
            // Blank line marks where the replaced chart ended.
            writeln!(self.out)?;
        }

        let max = buckets
            .iter()
            .map(|bucket| bucket.income.max(bucket.expense))
            .fold(0.0, f64::max);
        let label_width = buckets
            .iter()
            .map(|bucket| bucket.label.len())
            .max()
            .unwrap_or(0);

        for bucket in buckets {
            // Pad before colorizing: escape sequences would defeat width
            // formatting otherwise.
            let income = format!("{:<w$}", scaled_bar(bucket.income, max, self.width), w = self.width);
            let expense = format!("{:<w$}", scaled_bar(bucket.expense, max, self.width), w = self.width);
            writeln!(
                self.out,
                "{:>lw$}  {} {:>10.2}",
                bucket.label,
                income.green(),
                bucket.income,
                lw = label_width,
            )?;
            writeln!(
                self.out,
                "{:>lw$}  {} {:>10.2}",
                "",
                expense.red(),
                bucket.expense,
                lw = label_width,
            )?;
        }
        self.out.flush()?;
        self.rendered = true;
        Ok(())
    }

    fn destroy(&mut self) {
        self.rendered = false;
    }
}

/// Bar length for `value` on a zero-based axis topped by `max`.
fn scaled_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).clamp(1, width);
    "█".repeat(filled)
}
