use crate::api::AnalysisClient;
use crate::clipboard::ClipboardSink;
use crate::core::types::Ticker;
use crate::error::AnalystError;
use crate::render::Report;
use std::sync::Arc;
use std::time::Duration;

pub const COPY_LABEL: &str = "Copy to clipboard";
pub const COPY_CONFIRMATION: &str = "Copied!";
pub const COPY_REVERT_MS: u64 = 2000;

/// The mount points the view drives. The terminal implementation lives in
/// [`crate::screen`]; tests inject a recording fake. Methods take `&self`
/// because the copy-label revert fires from a spawned timer.
pub trait Screen: Send + Sync + 'static {
    /// Disable/enable the submit affordance while a request is in flight.
    fn set_busy(&self, busy: bool);
    fn show_loading(&self);
    fn hide_loading(&self);
    /// Show a message in the single error channel, replacing any prior one.
    fn show_error(&self, message: &str);
    fn clear_error(&self);
    /// Replace the result region with a freshly built report and reveal it.
    fn show_result(&self, report: &Report);
    fn hide_result(&self);
    fn set_copy_label(&self, label: &str);
}

/// Orchestrates the one user-facing workflow: enter ticker, see analysis,
/// optionally copy it. Owns its mount points; constructed once at startup.
pub struct AnalysisView<S: Screen, C: ClipboardSink> {
    screen: Arc<S>,
    client: AnalysisClient,
    clipboard: C,
    last_report: Option<Report>,
}

impl<S: Screen, C: ClipboardSink> AnalysisView<S, C> {
    pub fn new(client: AnalysisClient, screen: Arc<S>, clipboard: C) -> Self {
        Self {
            screen,
            client,
            clipboard,
            last_report: None,
        }
    }

    /// One submit cycle. Every exit path hides the loading indicator and
    /// re-enables the trigger; errors never propagate past this boundary.
    pub async fn submit(&mut self, input: &str) {
        let ticker = match Ticker::parse(input) {
            Ok(ticker) => ticker,
            Err(e) => {
                self.screen.show_error(&e.to_string());
                return;
            }
        };

        self.screen.clear_error();
        self.screen.show_loading();
        self.screen.set_busy(true);
        self.screen.hide_result();

        let outcome = self.client.analyze(&ticker).await;

        self.screen.hide_loading();
        self.screen.set_busy(false);

        match outcome {
            Ok(data) => {
                let report = Report::build(&ticker, &data);
                self.screen.show_result(&report);
                self.last_report = Some(report);
            }
            Err(e) => {
                log::error!("Analysis failed: {}", e);
                self.screen.show_error(&e.to_string());
            }
        }
    }

    /// Copy the last rendered report as plain text. On success the copy
    /// label shows a confirmation and reverts after [`COPY_REVERT_MS`]; a
    /// second copy within the window spawns a second timer, and since both
    /// revert to the fixed original label the window is simply extended.
    pub fn copy_result(&mut self) {
        let Some(report) = self.last_report.as_ref() else {
            self.screen
                .show_error(&AnalystError::NothingToCopy.to_string());
            return;
        };

        match self.clipboard.set_text(&report.to_plain_text()) {
            Ok(()) => {
                self.screen.set_copy_label(COPY_CONFIRMATION);
                let screen = Arc::clone(&self.screen);
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(COPY_REVERT_MS)).await;
                    screen.set_copy_label(COPY_LABEL);
                });
            }
            Err(e) => {
                if let AnalystError::Clipboard(reason) = &e {
                    log::debug!("Clipboard write failed: {}", reason);
                }
                self.screen.show_error(&e.to_string());
            }
        }
    }
}
