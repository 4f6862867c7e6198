#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use signin_notifier::{
    AuthorizationResult, LoginCompletionNotifier, LoginOutcome, NotifierSettings, TerminalPage,
    TokioScheduler,
};
use std::io::Read;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from Settings.toml and environment variables
    let settings = NotifierSettings::load().context("Failed to load settings")?;
    settings.init_logging()?;

    // The widget's authorization result arrives as JSON on stdin
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("Failed to read authorization result from stdin")?;
    let auth_result = AuthorizationResult::from_json(&payload)?;

    if settings.server.state_token.is_empty() {
        log::warn!("No state token configured; the server will likely reject the code");
    }

    print_startup_info(&settings);

    let page = Arc::new(TerminalPage::new(settings.clone()));
    let scheduler = Arc::new(TokioScheduler::new());
    let notifier = LoginCompletionNotifier::from_settings(
        &settings,
        page,
        Arc::clone(&scheduler) as _,
    )
    .context("Failed to set up sign-in notifier")?;

    let outcome = notifier.handle(auth_result).await;

    // Let the post-login navigation fire before exiting
    scheduler.wait_idle().await;

    exit_status(outcome)
}

/// Map the callback outcome to the process exit status.
/// Only an unreachable endpoint is an error; the page-level outcomes are not.
fn exit_status(outcome: LoginOutcome) -> anyhow::Result<()> {
    match outcome {
        LoginOutcome::TransportFailure { reason } => {
            anyhow::bail!("Sign-in endpoint unreachable: {reason}")
        }
        other => {
            log::info!("Sign-in callback finished: {}", other.label());
            Ok(())
        }
    }
}

fn print_startup_info(settings: &NotifierSettings) {
    log::info!(
        "signin-notifier {} posting to {}{}",
        signin_notifier::VERSION,
        settings.server.base_url.trim_end_matches('/'),
        settings.server.connect_path
    );
    log::debug!(
        "Page elements: button={} status={} disclaimer={}",
        settings.page.signin_button_selector,
        settings.page.status_selector,
        settings.page.disclaimer_selector
    );
}
