//! Unified testing utilities for the sign-in notifier
//!
//! ## Organization
//!
//! - [`mock`] - Scripted sign-in endpoint client
//! - [`recorder`] - Recording page surface and manually driven scheduler
//! - [`fixtures`] - Pre-wired notifier harness
//! - [`builders`] - Fluent builder for test settings
//! - [`assertions`] - Assertion helpers for page state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signin_notifier::models::AuthorizationResult;
//! use signin_notifier::testing::{MockCodeExchangeClient, TestHarness};
//!
//! async fn confirmed_login() {
//!     let harness = TestHarness::new(MockCodeExchangeClient::responding("Welcome"));
//!     let outcome = harness.notifier.handle(AuthorizationResult::with_code("abc")).await;
//!     assert!(outcome.is_success());
//!     assert_eq!(harness.scheduler.run_all(), 1);
//! }
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod mock;
pub mod recorder;

// Re-export commonly used items for convenience
pub use assertions::*;
pub use builders::TestSettingsBuilder;
pub use fixtures::TestHarness;
pub use mock::{MockCodeExchangeClient, RecordedCall};
pub use recorder::{ManualScheduler, PageEvent, RecordingPage};

/// Common test constants
pub mod constants {
    /// State token rendered into the test page
    pub const TEST_STATE_TOKEN: &str = "PX7QK2ZLM9WB4TJD8RNC5VHY3FSA6GE1";

    /// Authorization code in the shape the identity provider issues
    pub const TEST_CODE: &str = "4/0AfJohXn7Qc-xyz_Rp8L+vT/Kd==";

    /// Body the server renders for a confirmed login
    pub const TEST_WELCOME_BODY: &str =
        "<h2>Welcome, Ada!</h2><img src=\"https://example.com/ada.png\">";
}
