//! Page surface touched by the sign-in notifier
//!
//! The notifier only ever writes to the page: it hides elements, replaces the
//! status markup, asks for a navigation and writes to the diagnostic console.
//! It never reads anything back, so the trait has no getters.

pub mod terminal;

pub use terminal::TerminalPage;

use crate::settings::PageSettings;

/// The elements of the login page the notifier knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    /// The control that starts the interactive sign-in flow
    SignInButton,
    /// The element receiving status markup
    Status,
    /// Informational text shown until the login is confirmed
    Disclaimer,
}

impl PageElement {
    /// CSS selector of this element on the configured page
    #[must_use]
    pub fn selector(self, settings: &PageSettings) -> &str {
        match self {
            PageElement::SignInButton => &settings.signin_button_selector,
            PageElement::Status => &settings.status_selector,
            PageElement::Disclaimer => &settings.disclaimer_selector,
        }
    }
}

/// Write-only view of the page
pub trait PageSurface: Send + Sync {
    /// Hide an element for the rest of the page view
    fn hide(&self, element: PageElement);

    /// Replace the content of an element with `html`
    fn set_html(&self, element: PageElement, html: &str);

    /// Full-page navigation to `path`
    fn navigate(&self, path: &str);

    /// Write a line to the diagnostic console
    fn console_log(&self, message: &str);
}
