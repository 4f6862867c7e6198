//! Mock objects and fake implementations for testing
//!
//! [`MockCodeExchangeClient`] stands in for the sign-in endpoint: it records
//! every call and answers with a scripted reply. A gated client holds its
//! reply until the test releases it, which makes the window between request
//! and response observable.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::errors::TransportError;
use crate::models::ServerResponse;
use crate::transport::CodeExchangeClient;

/// A single `post_code` call as seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub state_token: String,
    pub code: String,
}

#[derive(Debug, Clone)]
enum MockReply {
    Body(String),
    Status(u16),
}

/// Scripted [`CodeExchangeClient`]
pub struct MockCodeExchangeClient {
    reply: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
    gate: Option<Arc<Notify>>,
}

impl MockCodeExchangeClient {
    /// Answer every call with `body`
    #[must_use]
    pub fn responding(body: &str) -> Self {
        Self::with_reply(MockReply::Body(body.to_string()))
    }

    /// Answer every call with an empty body
    #[must_use]
    pub fn empty() -> Self {
        Self::responding("")
    }

    /// Fail every call as if the server answered with `status`
    #[must_use]
    pub fn failing_with_status(status: u16) -> Self {
        Self::with_reply(MockReply::Status(status))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Hold every reply until the returned handle is notified
    #[must_use]
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Calls received so far
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl CodeExchangeClient for MockCodeExchangeClient {
    async fn post_code(
        &self,
        state_token: &str,
        code: &str,
    ) -> Result<ServerResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            state_token: state_token.to_string(),
            code: code.to_string(),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            MockReply::Body(body) => Ok(ServerResponse::new(body.clone())),
            MockReply::Status(status) => Err(TransportError::Status(*status)),
        }
    }
}
