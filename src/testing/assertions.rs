//! Assertion helpers for page state
//!
//! These keep notifier tests readable: each helper checks one property of a
//! [`RecordingPage`] and reports the full event log when it fails.

use crate::page::PageElement;

use super::recorder::RecordingPage;

/// Assert that the status element currently contains `expected`
///
/// # Panics
///
/// Panics if the status element was never written or does not contain `expected`.
pub fn assert_status_contains(page: &RecordingPage, expected: &str) {
    let status = page.html(PageElement::Status);
    assert!(
        status.as_deref().is_some_and(|html| html.contains(expected)),
        "Expected status to contain '{expected}', got {status:?}; events: {:?}",
        page.events()
    );
}

/// Assert that `element` has been hidden
///
/// # Panics
///
/// Panics if the element was never hidden.
pub fn assert_hidden(page: &RecordingPage, element: PageElement) {
    assert!(
        page.is_hidden(element),
        "Expected {element:?} to be hidden; events: {:?}",
        page.events()
    );
}

/// Assert that `element` has not been hidden
///
/// # Panics
///
/// Panics if the element was hidden.
pub fn assert_visible(page: &RecordingPage, element: PageElement) {
    assert!(
        !page.is_hidden(element),
        "Expected {element:?} to stay visible; events: {:?}",
        page.events()
    );
}

/// Assert that nothing at all happened on the page
///
/// # Panics
///
/// Panics if any page event was recorded.
pub fn assert_untouched(page: &RecordingPage) {
    assert!(
        page.is_untouched(),
        "Expected page to be untouched; events: {:?}",
        page.events()
    );
}
