//! Login completion notifier
//!
//! Invoked by the sign-in widget once the user finishes the interactive
//! authorization flow. Forwards the one-time code to the server and renders
//! one of three outcomes on the page.
//!
//! The empty-response branch decides between the two failure messages by
//! looking at the widget's original `error` field, not at anything in the
//! server response. That is how the login page has always behaved and it is
//! kept on purpose.

pub mod messages;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::errors::{NotifierError, TransportError};
use crate::models::{AuthorizationResult, LoginOutcome, ServerResponse};
use crate::page::{PageElement, PageSurface};
use crate::scheduler::Scheduler;
use crate::settings::NotifierSettings;
use crate::transport::{CodeExchangeClient, ReqwestCodeExchangeClient};
use crate::utils::logging::LoggingHelper;

/// Runtime configuration for the notifier
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub state_token: String,
    pub redirect_path: String,
    pub redirect_delay: Duration,
    pub report_transport_failures: bool,
}

impl NotifierConfig {
    /// Create notifier configuration from settings
    #[must_use]
    pub fn from_settings(settings: &NotifierSettings) -> Self {
        Self {
            state_token: settings.server.state_token.clone(),
            redirect_path: settings.notifier.redirect_path.clone(),
            redirect_delay: Duration::from_millis(settings.notifier.redirect_delay_ms),
            report_transport_failures: settings.notifier.report_transport_failures,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self::from_settings(&NotifierSettings::default())
    }
}

/// Callback target for the sign-in widget
#[derive(Clone)]
pub struct LoginCompletionNotifier {
    client: Arc<dyn CodeExchangeClient>,
    page: Arc<dyn PageSurface>,
    scheduler: Arc<dyn Scheduler>,
    config: NotifierConfig,
}

impl LoginCompletionNotifier {
    #[must_use]
    pub fn new(
        client: Arc<dyn CodeExchangeClient>,
        page: Arc<dyn PageSurface>,
        scheduler: Arc<dyn Scheduler>,
        config: NotifierConfig,
    ) -> Self {
        Self {
            client,
            page,
            scheduler,
            config,
        }
    }

    /// Create a notifier talking to the configured server over HTTP
    ///
    /// # Errors
    ///
    /// Returns an error if the server URL in `settings` is invalid
    pub fn from_settings(
        settings: &NotifierSettings,
        page: Arc<dyn PageSurface>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, NotifierError> {
        let client = ReqwestCodeExchangeClient::new(&settings.server)?;
        Ok(Self::new(
            Arc::new(client),
            page,
            scheduler,
            NotifierConfig::from_settings(settings),
        ))
    }

    #[must_use]
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Run the whole sign-in completion and wait for the server's answer
    pub async fn handle(&self, auth_result: AuthorizationResult) -> LoginOutcome {
        let Some(code) = self.begin(&auth_result) else {
            return LoginOutcome::MissingCode;
        };
        self.complete(code, auth_result.error).await
    }

    /// Fire-and-forget form of [`handle`](Self::handle)
    ///
    /// The sign-in button is hidden before this returns; the request and the
    /// rendering of its outcome continue on a spawned task. Returns `None`
    /// when there is no code, in which case nothing happened at all.
    ///
    /// # Panics
    ///
    /// Panics if called with a code outside of a tokio runtime.
    pub fn dispatch(
        self: &Arc<Self>,
        auth_result: AuthorizationResult,
    ) -> Option<JoinHandle<LoginOutcome>> {
        let code = self.begin(&auth_result)?;
        let notifier = Arc::clone(self);
        Some(tokio::spawn(async move {
            notifier.complete(code, auth_result.error).await
        }))
    }

    /// Check for a code and, when there is one, hide the sign-in button
    fn begin(&self, auth_result: &AuthorizationResult) -> Option<String> {
        let Some(code) = auth_result.code() else {
            LoggingHelper::log_missing_code(auth_result.error());
            return None;
        };
        self.page.hide(PageElement::SignInButton);
        Some(code.to_string())
    }

    async fn complete(&self, code: String, widget_error: Option<String>) -> LoginOutcome {
        let widget_error = widget_error.filter(|e| !e.is_empty());
        let outcome = match self.client.post_code(&self.config.state_token, &code).await {
            Ok(response) => self.render_response(response, widget_error.as_deref()),
            Err(e) => self.render_transport_failure(&e),
        };
        LoggingHelper::log_outcome(&outcome);
        outcome
    }

    fn render_response(
        &self,
        response: ServerResponse,
        widget_error: Option<&str>,
    ) -> LoginOutcome {
        if response.is_truthy() {
            self.page.set_html(PageElement::Status, &messages::login_successful(response.body()));
            self.page.hide(PageElement::Disclaimer);
            self.schedule_redirect();
            LoginOutcome::Success {
                body: response.into_body(),
            }
        } else if let Some(error) = widget_error {
            let line = messages::widget_error_log(error);
            log::warn!("{line}");
            self.page.console_log(&line);
            self.page.set_html(PageElement::Status, messages::LOGIN_ERROR);
            LoginOutcome::ServerRejection {
                error: error.to_string(),
            }
        } else {
            self.page.set_html(PageElement::Status, messages::SERVER_CALL_FAILED);
            LoginOutcome::UnknownFailure
        }
    }

    fn render_transport_failure(&self, error: &TransportError) -> LoginOutcome {
        let reason = error.to_string();
        LoggingHelper::log_transport_failure(&reason, self.config.report_transport_failures);
        if self.config.report_transport_failures {
            self.page.set_html(PageElement::Status, messages::SERVER_CALL_FAILED);
        }
        LoginOutcome::TransportFailure { reason }
    }

    fn schedule_redirect(&self) {
        let page = Arc::clone(&self.page);
        let path = self.config.redirect_path.clone();
        LoggingHelper::log_redirect_scheduled(&path, self.config.redirect_delay.as_millis());
        self.scheduler.schedule(
            self.config.redirect_delay,
            Box::new(move || page.navigate(&path)),
        );
    }
}
