use crate::render::Report;
use crate::view::{Screen, COPY_CONFIRMATION, COPY_LABEL};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Terminal implementation of the view's mount points: an indicatif spinner
/// for the loading indicator, stderr for the error channel, stdout for
/// results. The transcript is append-only, so retracting an error banner or
/// a prior result needs no terminal action.
pub struct TerminalScreen {
    busy: AtomicBool,
    spinner: Mutex<Option<ProgressBar>>,
    copy_label: Mutex<String>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
            spinner: Mutex::new(None),
            copy_label: Mutex::new(COPY_LABEL.to_string()),
        }
    }

    /// True while a request is in flight. The REPL is sequential, so this
    /// is UI-level state only, not a concurrency guarantee.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    fn show_loading(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        spinner.set_message("Analyzing... this can take a moment");
        spinner.enable_steady_tick(Duration::from_millis(120));
        *self.spinner.lock().unwrap() = Some(spinner);
    }

    fn hide_loading(&self) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn clear_error(&self) {}

    fn show_result(&self, report: &Report) {
        println!("{}", report.to_terminal());
        println!();
        println!("{}", "(/copy copies this report to the clipboard)".dimmed());
    }

    fn hide_result(&self) {}

    fn set_copy_label(&self, label: &str) {
        let mut current = self.copy_label.lock().unwrap();
        if label == COPY_CONFIRMATION && *current != label {
            println!("{}", label.green().bold());
        }
        *current = label.to_string();
    }
}
