use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::models::AuthorizationResult;
use crate::page::PageElement;
use crate::scheduler::TokioScheduler;
use crate::testing::constants::{TEST_CODE, TEST_STATE_TOKEN};
use crate::testing::{
    assert_hidden, assert_status_contains, assert_untouched, assert_visible,
    MockCodeExchangeClient, PageEvent, RecordingPage, TestHarness, TestSettingsBuilder,
};

#[tokio::test]
async fn test_confirmed_login_renders_success_and_schedules_redirect() {
    let harness = TestHarness::new(MockCodeExchangeClient::responding("Welcome"));

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc"))
        .await;

    assert_eq!(
        outcome,
        LoginOutcome::Success {
            body: "Welcome".to_string()
        }
    );
    assert_status_contains(&harness.page, "Your Login is Successful!");
    assert_status_contains(&harness.page, "Welcome");
    assert_eq!(
        harness.page.html(PageElement::Status).unwrap(),
        "Your Login is Successful!</br>Welcome</br>Redirecting..."
    );
    assert_hidden(&harness.page, PageElement::Disclaimer);

    // Navigation only happens once the delay elapses
    assert!(harness.page.navigations().is_empty());
    assert_eq!(
        harness.scheduler.scheduled_delays(),
        vec![Duration::from_millis(4000)]
    );
    assert_eq!(harness.scheduler.run_all(), 1);
    assert_eq!(harness.page.navigations(), vec!["/exercises".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_redirect_fires_once_after_four_seconds() {
    let client = Arc::new(MockCodeExchangeClient::responding("Welcome"));
    let page = Arc::new(RecordingPage::new());
    let scheduler = Arc::new(TokioScheduler::new());
    let notifier = LoginCompletionNotifier::new(
        client,
        Arc::clone(&page) as _,
        Arc::clone(&scheduler) as _,
        NotifierConfig::default(),
    );

    let started = tokio::time::Instant::now();
    let outcome = notifier.handle(AuthorizationResult::with_code("abc")).await;
    assert!(outcome.is_success());

    tokio::time::advance(Duration::from_millis(3999)).await;
    tokio::task::yield_now().await;
    assert!(page.navigations().is_empty());

    scheduler.wait_idle().await;
    assert!(started.elapsed() >= Duration::from_millis(4000));
    assert_eq!(page.navigations(), vec!["/exercises".to_string()]);
}

#[tokio::test]
async fn test_empty_response_with_widget_error_logs_and_reports() {
    let harness = TestHarness::new(MockCodeExchangeClient::empty());

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc").with_error("denied"))
        .await;

    assert_eq!(
        outcome,
        LoginOutcome::ServerRejection {
            error: "denied".to_string()
        }
    );
    assert_eq!(
        harness.page.console(),
        vec!["We're sorry, an error has occurred: denied".to_string()]
    );
    assert_status_contains(
        &harness.page,
        "We're sorry, we cannot log you in right now due to an error.",
    );
    assert_visible(&harness.page, PageElement::Disclaimer);
    assert!(harness.scheduler.scheduled_delays().is_empty());
}

#[tokio::test]
async fn test_empty_response_without_error_reports_server_call_failure() {
    let harness = TestHarness::new(MockCodeExchangeClient::empty());

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc"))
        .await;

    assert_eq!(outcome, LoginOutcome::UnknownFailure);
    assert_status_contains(&harness.page, "Failed to make a server-side call");
    assert!(harness.page.console().is_empty());
    assert!(harness.scheduler.scheduled_delays().is_empty());
}

#[tokio::test]
async fn test_widget_error_is_ignored_when_server_confirms() {
    let harness = TestHarness::new(MockCodeExchangeClient::responding("Welcome"));

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc").with_error("denied"))
        .await;

    assert!(outcome.is_success());
    assert!(harness.page.console().is_empty());
}

#[tokio::test]
async fn test_missing_code_does_nothing() {
    let harness = TestHarness::new(MockCodeExchangeClient::responding("Welcome"));

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::default())
        .await;

    assert_eq!(outcome, LoginOutcome::MissingCode);
    assert_eq!(harness.client.call_count(), 0);
    assert_untouched(&harness.page);
    assert!(harness.scheduler.scheduled_delays().is_empty());
}

#[tokio::test]
async fn test_error_only_result_does_nothing() {
    let harness = TestHarness::new(MockCodeExchangeClient::empty());
    let auth_result =
        AuthorizationResult::from_json(r#"{"error":"popup_closed_by_user"}"#).unwrap();

    let outcome = harness.notifier.handle(auth_result).await;

    assert_eq!(outcome, LoginOutcome::MissingCode);
    assert_eq!(harness.client.call_count(), 0);
    assert_untouched(&harness.page);
}

#[tokio::test]
async fn test_code_is_forwarded_verbatim_with_state() {
    let harness = TestHarness::new(MockCodeExchangeClient::responding("ok"));

    harness
        .notifier
        .handle(AuthorizationResult::with_code(TEST_CODE))
        .await;

    let calls = harness.client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].code, TEST_CODE);
    assert_eq!(calls[0].state_token, TEST_STATE_TOKEN);
}

#[tokio::test]
async fn test_sign_in_button_hidden_before_response() {
    let (client, gate) = MockCodeExchangeClient::responding("Welcome").gated();
    let harness = TestHarness::new(client);

    let handle = harness
        .notifier
        .dispatch(AuthorizationResult::with_code("abc"))
        .expect("code present");

    // Hidden synchronously, before the request was even polled
    assert_eq!(
        harness.page.events(),
        vec![PageEvent::Hidden(PageElement::SignInButton)]
    );

    gate.notify_one();
    let outcome = handle.await.unwrap();

    assert!(outcome.is_success());
    assert_eq!(
        harness.page.events()[0],
        PageEvent::Hidden(PageElement::SignInButton)
    );
    assert_hidden(&harness.page, PageElement::Disclaimer);
}

#[tokio::test]
async fn test_sign_in_button_stays_hidden_on_failure() {
    let harness = TestHarness::new(MockCodeExchangeClient::empty());

    harness
        .notifier
        .handle(AuthorizationResult::with_code("abc"))
        .await;

    assert_hidden(&harness.page, PageElement::SignInButton);
    assert_visible(&harness.page, PageElement::Disclaimer);
}

#[tokio::test]
async fn test_dispatch_without_code_returns_none() {
    let harness = TestHarness::new(MockCodeExchangeClient::responding("Welcome"));

    assert!(harness
        .notifier
        .dispatch(AuthorizationResult::with_code(""))
        .is_none());
    assert_untouched(&harness.page);
    assert_eq!(harness.client.call_count(), 0);
}

#[tokio::test]
async fn test_transport_failure_leaves_page_alone() {
    let harness = TestHarness::new(MockCodeExchangeClient::failing_with_status(500));

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc").with_error("denied"))
        .await;

    assert_eq!(
        outcome,
        LoginOutcome::TransportFailure {
            reason: "Sign-in endpoint returned HTTP 500".to_string()
        }
    );
    // Only the sign-in button was hidden on the way in
    assert_eq!(
        harness.page.events(),
        vec![PageEvent::Hidden(PageElement::SignInButton)]
    );
    assert!(harness.scheduler.scheduled_delays().is_empty());
}

#[tokio::test]
async fn test_transport_failure_reported_when_enabled() {
    let settings = TestSettingsBuilder::new()
        .reporting_transport_failures()
        .build();
    let harness =
        TestHarness::with_settings(MockCodeExchangeClient::failing_with_status(502), &settings);

    let outcome = harness
        .notifier
        .handle(AuthorizationResult::with_code("abc"))
        .await;

    assert!(matches!(outcome, LoginOutcome::TransportFailure { .. }));
    assert_status_contains(&harness.page, "Failed to make a server-side call");
    assert!(harness.page.navigations().is_empty());
}

#[tokio::test]
async fn test_custom_redirect_settings() {
    let settings = TestSettingsBuilder::new()
        .with_redirect("/dashboard", 250)
        .build();
    let harness = TestHarness::with_settings(MockCodeExchangeClient::responding("hi"), &settings);

    harness
        .notifier
        .handle(AuthorizationResult::with_code("abc"))
        .await;

    assert_eq!(
        harness.scheduler.scheduled_delays(),
        vec![Duration::from_millis(250)]
    );
    harness.scheduler.run_all();
    assert_eq!(harness.page.navigations(), vec!["/dashboard".to_string()]);
}

#[test]
fn test_config_from_settings() {
    let settings = TestSettingsBuilder::new().with_state_token("S1").build();
    let config = NotifierConfig::from_settings(&settings);
    assert_eq!(config.state_token, "S1");
    assert_eq!(config.redirect_path, "/exercises");
    assert_eq!(config.redirect_delay, Duration::from_millis(4000));
    assert!(!config.report_transport_failures);
}
