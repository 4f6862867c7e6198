#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the signin-notifier library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod errors;
pub mod models;
pub mod notifier;
pub mod page;
pub mod scheduler;
pub mod settings;
pub mod transport;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Re-export commonly used items
pub use errors::{NotifierError, TransportError};
pub use models::{AuthorizationResult, LoginOutcome, ServerResponse};
pub use notifier::{LoginCompletionNotifier, NotifierConfig};
pub use page::{PageElement, PageSurface, TerminalPage};
pub use scheduler::{Scheduler, TokioScheduler};
pub use settings::NotifierSettings;
pub use transport::{CodeExchangeClient, ReqwestCodeExchangeClient};
