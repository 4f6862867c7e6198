//! Test fixtures providing a pre-wired notifier
//!
//! [`TestHarness`] connects a [`LoginCompletionNotifier`] to a mock client, a
//! recording page and a manual scheduler, and keeps handles on all three.

use std::sync::Arc;

use crate::notifier::{LoginCompletionNotifier, NotifierConfig};
use crate::settings::NotifierSettings;

use super::builders::TestSettingsBuilder;
use super::mock::MockCodeExchangeClient;
use super::recorder::{ManualScheduler, RecordingPage};

pub struct TestHarness {
    pub notifier: Arc<LoginCompletionNotifier>,
    pub client: Arc<MockCodeExchangeClient>,
    pub page: Arc<RecordingPage>,
    pub scheduler: Arc<ManualScheduler>,
}

impl TestHarness {
    /// Harness with default test settings
    #[must_use]
    pub fn new(client: MockCodeExchangeClient) -> Self {
        Self::with_settings(client, &TestSettingsBuilder::new().build())
    }

    #[must_use]
    pub fn with_settings(client: MockCodeExchangeClient, settings: &NotifierSettings) -> Self {
        let client = Arc::new(client);
        let page = Arc::new(RecordingPage::new());
        let scheduler = Arc::new(ManualScheduler::new());
        let notifier = Arc::new(LoginCompletionNotifier::new(
            Arc::clone(&client) as _,
            Arc::clone(&page) as _,
            Arc::clone(&scheduler) as _,
            NotifierConfig::from_settings(settings),
        ));
        Self {
            notifier,
            client,
            page,
            scheduler,
        }
    }
}
