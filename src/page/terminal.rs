// Terminal rendering of the login page for the command-line binary
use std::io::Write;
use std::sync::Mutex;

use super::{PageElement, PageSurface};
use crate::settings::NotifierSettings;
use crate::utils::html::html_to_text;

/// [`PageSurface`] that prints page mutations to a writer (stdout by default)
/// and console messages to stderr.
pub struct TerminalPage {
    settings: NotifierSettings,
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalPage {
    #[must_use]
    pub fn new(settings: NotifierSettings) -> Self {
        Self::with_writer(settings, Box::new(std::io::stdout()))
    }

    #[must_use]
    pub fn with_writer(settings: NotifierSettings, out: Box<dyn Write + Send>) -> Self {
        Self {
            settings,
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, line: &str) {
        let Ok(mut out) = self.out.lock() else {
            log::error!("Terminal page writer poisoned, dropping: {line}");
            return;
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            log::error!("Failed to write to terminal page: {e}");
        }
    }
}

impl PageSurface for TerminalPage {
    fn hide(&self, element: PageElement) {
        log::debug!("Hiding {}", element.selector(&self.settings.page));
    }

    fn set_html(&self, element: PageElement, html: &str) {
        log::debug!("Replacing content of {}", element.selector(&self.settings.page));
        self.write_line(&html_to_text(html));
    }

    fn navigate(&self, path: &str) {
        self.write_line(&format!("→ {}", self.settings.absolute_url(path)));
    }

    fn console_log(&self, message: &str) {
        eprintln!("{message}");
    }
}
