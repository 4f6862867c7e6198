//! Fluent builder for notifier settings used in tests

use crate::settings::NotifierSettings;

use super::constants::TEST_STATE_TOKEN;

/// Builder for customized test settings
pub struct TestSettingsBuilder {
    settings: NotifierSettings,
}

impl TestSettingsBuilder {
    /// Defaults plus the test state token
    #[must_use]
    pub fn new() -> Self {
        let mut settings = NotifierSettings::default();
        settings.server.state_token = TEST_STATE_TOKEN.to_string();
        Self { settings }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.settings.server.base_url = base_url.to_string();
        self
    }

    #[must_use]
    pub fn with_state_token(mut self, state_token: &str) -> Self {
        self.settings.server.state_token = state_token.to_string();
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, path: &str, delay_ms: u64) -> Self {
        self.settings.notifier.redirect_path = path.to_string();
        self.settings.notifier.redirect_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn reporting_transport_failures(mut self) -> Self {
        self.settings.notifier.report_transport_failures = true;
        self
    }

    #[must_use]
    pub fn build(self) -> NotifierSettings {
        self.settings
    }
}

impl Default for TestSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
