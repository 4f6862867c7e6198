//! Recording collaborators for the notifier
//!
//! [`RecordingPage`] keeps every page mutation in order. [`ManualScheduler`]
//! holds deferred tasks until the test runs them, so delays can be asserted
//! without waiting.

use std::sync::Mutex;
use std::time::Duration;

use crate::page::{PageElement, PageSurface};
use crate::scheduler::{DeferredTask, Scheduler};

/// One mutation observed on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Hidden(PageElement),
    Html(PageElement, String),
    Navigated(String),
    Console(String),
}

/// [`PageSurface`] that records instead of rendering
#[derive(Default)]
pub struct RecordingPage {
    events: Mutex<Vec<PageEvent>>,
}

impl RecordingPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they happened
    ///
    /// # Panics
    ///
    /// Panics if the event log mutex is poisoned.
    #[must_use]
    pub fn events(&self) -> Vec<PageEvent> {
        self.events.lock().unwrap().clone()
    }

    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.events().is_empty()
    }

    #[must_use]
    pub fn is_hidden(&self, element: PageElement) -> bool {
        self.events().contains(&PageEvent::Hidden(element))
    }

    /// Current content of `element`, i.e. the last markup written to it
    #[must_use]
    pub fn html(&self, element: PageElement) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            PageEvent::Html(target, html) if target == element => Some(html),
            _ => None,
        })
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::Navigated(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn console(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                PageEvent::Console(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: PageEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PageSurface for RecordingPage {
    fn hide(&self, element: PageElement) {
        self.record(PageEvent::Hidden(element));
    }

    fn set_html(&self, element: PageElement, html: &str) {
        self.record(PageEvent::Html(element, html.to_string()));
    }

    fn navigate(&self, path: &str) {
        self.record(PageEvent::Navigated(path.to_string()));
    }

    fn console_log(&self, message: &str) {
        self.record(PageEvent::Console(message.to_string()));
    }
}

/// [`Scheduler`] whose tasks only run when the test says so
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Mutex<Vec<(Duration, DeferredTask)>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the tasks still waiting to run
    ///
    /// # Panics
    ///
    /// Panics if the task list mutex is poisoned.
    #[must_use]
    pub fn scheduled_delays(&self) -> Vec<Duration> {
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Run every waiting task and return how many ran
    ///
    /// # Panics
    ///
    /// Panics if the task list mutex is poisoned.
    pub fn run_all(&self) -> usize {
        let tasks = std::mem::take(&mut *self.tasks.lock().unwrap());
        let count = tasks.len();
        for (_, task) in tasks {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: DeferredTask) {
        self.tasks.lock().unwrap().push((delay, task));
    }
}
