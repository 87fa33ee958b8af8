// src/utils.rs
use crate::models::FilterRule;
use console::{Color, style};
use std::fmt;
use std::path::Path;

/// Pipeline stage boundaries, reported before the stage runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Reading(&'a Path),
    Collecting(&'a Path),
    Filtering(&'a FilterRule),
    Writing(&'a Path),
    Copying(&'a Path),
    CopyingFile { from: &'a Path, to: &'a Path },
}

impl fmt::Display for Stage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reading(path) => write!(f, "Reading: {}", path.display()),
            Self::Collecting(path) => write!(f, "Collecting: {}", path.display()),
            Self::Filtering(rule) => write!(f, "Filtering: {rule}"),
            Self::Writing(path) => write!(f, "Writing: {}", path.display()),
            Self::Copying(dir) => write!(f, "Copying files to {}", dir.display()),
            Self::CopyingFile { from, to } => {
                write!(f, "Copying {} -> {}", from.display(), to.display())
            }
        }
    }
}

/// Side channel for progress output. Nothing in the pipeline depends on it.
pub trait ProgressReporter {
    fn report(&self, stage: &Stage<'_>);
}

/// Reports nothing.
impl ProgressReporter for () {
    #[inline]
    fn report(&self, _stage: &Stage<'_>) {}
}

impl<F> ProgressReporter for F
where
    F: Fn(&Stage<'_>),
{
    #[inline]
    fn report(&self, stage: &Stage<'_>) {
        self(stage);
    }
}

/// Colored progress lines on stdout: green per stage, yellow per copied file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    #[inline]
    fn report(&self, stage: &Stage<'_>) {
        let line = stage.to_string();
        match stage {
            Stage::CopyingFile { .. } => println!("{}", style(line).yellow()),
            _ => println!("{}", style(line).green()),
        }
    }
}

const LOGO: [&str; 6] = [
    "  ██╗     ██╗███████╗████████╗███████╗██╗██╗     ███████╗███████╗",
    "  ██║     ██║██╔════╝╚══██╔══╝██╔════╝██║██║     ██╔════╝██╔════╝",
    "  ██║     ██║███████╗   ██║   █████╗  ██║██║     █████╗  ███████╗",
    "  ██║     ██║╚════██║   ██║   ██╔══╝  ██║██║     ██╔══╝  ╚════██║",
    "  ███████╗██║███████║   ██║   ██║     ██║███████╗███████╗███████║",
    "  ╚══════╝╚═╝╚══════╝   ╚═╝   ╚═╝     ╚═╝╚══════╝╚══════╝╚══════╝",
];

const LOGO_COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

/// Start-up banner with the crate version on the last line.
#[inline]
#[must_use]
pub fn draw_logo() -> String {
    let mut logo = String::from("\n");
    for (line, color) in LOGO.iter().zip(LOGO_COLORS) {
        logo.push_str(&style(line).fg(color).to_string());
        logo.push('\n');
    }
    logo.pop();
    logo.push_str(&format!("  v{}\n", env!("CARGO_PKG_VERSION")));
    logo
}
