//! Command dispatch and the shell's view-refresh flow.

use std::io;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;
use tracing::info;

use crate::chart::{bucketize, ChartMode, ChartRenderer, TextBarChart};
use crate::errors::StoreError;
use crate::ledger::{EntryKind, Ledger};
use crate::storage::StateStore;
use crate::theme::Theme;

use super::{output, views};

const SUGGESTION_DISTANCE: usize = 3;

/// Command catalog: name plus the description shown by `help`.
const COMMANDS: &[(&str, &str)] = &[
    ("budget", "Set the budget ceiling"),
    ("add", "Record an entry: add <amount> <category> <income|expense>"),
    ("undo", "Remove the most recent entry"),
    ("list", "Show recorded entries, newest first"),
    ("chart", "Render the income/expense chart: chart [weekly|monthly]"),
    ("theme", "Toggle or set the theme: theme [dark|light]"),
    ("reset", "Delete all stored data"),
    ("help", "Show available commands"),
    ("exit", "Quit spendwise"),
];

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Shell state: the ledger, the chart-mode selector, the active theme, and
/// the rendering surface.
///
/// The theme view persists through its own store handle; ledger records go
/// through the ledger's injected store only.
pub struct ShellContext {
    ledger: Ledger,
    theme_store: Box<dyn StateStore>,
    theme: Theme,
    chart_mode: ChartMode,
    chart: Box<dyn ChartRenderer>,
    mode: CliMode,
    prompt_theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(
        ledger_store: Box<dyn StateStore>,
        theme_store: Box<dyn StateStore>,
        mode: CliMode,
    ) -> Result<Self, StoreError> {
        let theme = Theme::load(theme_store.as_ref())?;
        output::set_theme(theme);
        let ledger = Ledger::load(ledger_store)?;
        Ok(Self {
            ledger,
            theme_store,
            theme,
            chart_mode: ChartMode::Weekly,
            chart: Box::new(TextBarChart::stdout()),
            mode,
            prompt_theme: ColorfulTheme::default(),
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Initial render of the persisted state, shown when an interactive
    /// session opens.
    pub fn render_startup(&self) {
        views::render_balance(&self.ledger);
        views::render_alert(&self.ledger);
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match command {
            "budget" => self.cmd_budget(args)?,
            "add" => self.cmd_add(args)?,
            "undo" => self.cmd_undo()?,
            "list" => views::render_list(&self.ledger),
            "chart" => self.cmd_chart(args)?,
            "theme" => self.cmd_theme(args)?,
            "reset" => self.cmd_reset(args)?,
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            unknown => self.report_unknown(unknown),
        }
        Ok(LoopControl::Continue)
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::InvalidArguments(message) => output::warning(message),
            other => output::error(other),
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&self.prompt_theme)
            .with_prompt("Exit spendwise?")
            .default(true)
            .interact()?)
    }

    fn cmd_budget(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let value = parse_amount(args.first().copied(), "budget <amount>")?;
        if self.ledger.set_ceiling(value)? {
            info!(value, "budget ceiling updated");
            views::render_balance(&self.ledger);
            views::render_alert(&self.ledger);
        } else {
            output::warning("Budget must be greater than zero.");
        }
        Ok(())
    }

    fn cmd_add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let usage = "add <amount> <category> <income|expense>";
        let (amount, category, kind) = match args {
            [amount, category, kind] => (*amount, *category, *kind),
            _ => return Err(CommandError::InvalidArguments(format!("Usage: {usage}"))),
        };
        let amount = parse_amount(Some(amount), usage)?;
        let kind = EntryKind::parse(kind).ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "Unknown entry type `{kind}` (use income or expense)"
            ))
        })?;

        if self.ledger.add_entry(amount, category, kind)? {
            views::render_list(&self.ledger);
            views::render_alert(&self.ledger);
            self.render_chart()?;
        } else {
            output::warning("Entry needs a positive amount and a category.");
        }
        Ok(())
    }

    fn cmd_undo(&mut self) -> Result<(), CommandError> {
        match self.ledger.undo_last()? {
            Some(entry) => {
                output::success(format!(
                    "Removed {}{:.2} ({}).",
                    entry.kind.sign(),
                    entry.amount,
                    entry.category
                ));
                views::render_list(&self.ledger);
                views::render_alert(&self.ledger);
                self.render_chart()?;
            }
            None => output::info("Nothing to undo."),
        }
        Ok(())
    }

    fn cmd_chart(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if let Some(&raw) = args.first() {
            self.chart_mode = ChartMode::parse(raw).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "Unknown chart mode `{raw}` (use weekly or monthly)"
                ))
            })?;
        }
        self.render_chart()
    }

    fn render_chart(&mut self) -> Result<(), CommandError> {
        let buckets = bucketize(self.ledger.entries(), self.chart_mode, Local::now());
        output::section(format!("Income vs Expense ({})", self.chart_mode.as_str()));
        self.chart.render(&buckets)?;
        Ok(())
    }

    fn cmd_theme(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let next = match args.first() {
            Some(&raw) => Theme::parse(raw).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "Unknown theme `{raw}` (use dark or light)"
                ))
            })?,
            None => self.theme.toggled(),
        };
        next.persist(self.theme_store.as_mut())?;
        self.theme = next;
        output::set_theme(next);
        output::info(next.label());
        Ok(())
    }

    fn cmd_reset(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let confirmed = match self.mode {
            CliMode::Interactive => Confirm::with_theme(&self.prompt_theme)
                .with_prompt("Reset the entire app? All data will be deleted!")
                .default(false)
                .interact()?,
            // No prompt to answer in script mode; demand the explicit word.
            CliMode::Script => args.first() == Some(&"yes"),
        };
        if !confirmed {
            output::info("Reset cancelled.");
            return Ok(());
        }

        self.ledger.reset_all()?;
        self.chart.destroy();
        self.render_chart()?;
        info!("all stored data cleared");
        output::success("All data has been reset.");
        Ok(())
    }

    fn cmd_help(&self) {
        output::section("Commands");
        let width = COMMANDS
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, description) in COMMANDS {
            println!("  {name:<width$}  {description}");
        }
    }

    fn report_unknown(&self, command: &str) {
        let suggestion = COMMANDS
            .iter()
            .map(|(name, _)| (*name, levenshtein(command, name)))
            .min_by_key(|(_, distance)| *distance)
            .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
            .map(|(name, _)| name);
        match suggestion {
            Some(name) => output::warning(format!(
                "Unknown command `{command}`. Did you mean `{name}`?"
            )),
            None => output::warning(format!(
                "Unknown command `{command}`. Type `help` for the command list."
            )),
        }
    }
}

fn parse_amount(raw: Option<&str>, usage: &str) -> Result<f64, CommandError> {
    let raw = raw.ok_or_else(|| CommandError::InvalidArguments(format!("Usage: {usage}")))?;
    raw.parse::<f64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a number")))
}
