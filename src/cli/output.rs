use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::theme::Theme;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

static ACTIVE_THEME: Lazy<RwLock<Theme>> = Lazy::new(|| RwLock::new(Theme::Light));

/// Applies the display theme to all subsequent output.
pub fn set_theme(theme: Theme) {
    if let Ok(mut guard) = ACTIVE_THEME.write() {
        *guard = theme;
    }
}

pub fn active_theme() -> Theme {
    ACTIVE_THEME
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", "[i]"),
        MessageKind::Success => ("SUCCESS", "[✓]"),
        MessageKind::Warning => ("WARNING", "[!]"),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section => ("INFO", ""),
    }
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => {
            let (label, icon) = build_label(kind);
            format!("{label}: {icon} {text}")
        }
    };

    // Dark terminals get the bright color variants, light ones the plain
    // set; severity mapping is identical in both.
    let dark = active_theme() == Theme::Dark;
    match kind {
        MessageKind::Success => {
            if dark {
                base.bright_green().to_string()
            } else {
                base.green().to_string()
            }
        }
        MessageKind::Warning => {
            if dark {
                base.bright_yellow().to_string()
            } else {
                base.yellow().to_string()
            }
        }
        MessageKind::Error => {
            if dark {
                base.bright_red().to_string()
            } else {
                base.red().to_string()
            }
        }
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Success, message));
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Warning, message));
}

pub fn error(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Error, message));
}

pub fn section(message: impl fmt::Display) {
    println!("{}", apply_style(MessageKind::Section, message));
}
