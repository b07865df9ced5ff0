use std::path::{Path, PathBuf};

use colored::Colorize;
use supports_color::Stream;

use crate::filesystem::{EntryKind, PlanStep};

/// Receives one notification per folder or file that got created.
pub trait Reporter {
    fn created(&mut self, kind: EntryKind, path: &Path);
}

/// Prints a progress line per creation to stdout.
#[derive(Debug, Clone)]
pub struct StdoutReporter {
    colored: bool,
}

impl StdoutReporter {
    pub fn new() -> Self {
        Self {
            colored: supports_color::on(Stream::Stdout).is_some(),
        }
    }

    pub fn print_plan(&self, steps: &[PlanStep]) {
        for step in steps {
            println!("{}", plan_line(step, self.colored));
        }
    }
}

impl Default for StdoutReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for StdoutReporter {
    fn created(&mut self, kind: EntryKind, path: &Path) {
        println!("{}", progress_line(kind, path, self.colored));
    }
}

impl Reporter for Vec<(EntryKind, PathBuf)> {
    fn created(&mut self, kind: EntryKind, path: &Path) {
        self.push((kind, path.to_path_buf()));
    }
}

pub fn progress_line(kind: EntryKind, path: &Path, colored: bool) -> String {
    let verb = if colored {
        "Created".green().bold().to_string()
    } else {
        "Created".to_string()
    };
    format!("{verb} {kind}: {}", path.display())
}

pub fn plan_line(step: &PlanStep, colored: bool) -> String {
    let action = match step {
        PlanStep::EnsureFolder(_) => "Would ensure",
        PlanStep::CreateFile(_) => "Would create",
    };
    let action = if colored {
        action.yellow().to_string()
    } else {
        action.to_string()
    };
    format!("{action} {}: {}", step.kind(), step.path().display())
}
