//! Generation request lifecycle.
//!
//! ```text
//! Idle ──begin──▶ Pending ──settle(Ok)──▶ Succeeded
//!                    │                        │
//!                    └──settle(Err)──▶ Failed ┘──begin──▶ Pending
//! ```
//!
//! Only one request may be in flight. Each request gets a ticket and a
//! response is applied only if its ticket is still the current one, so a
//! late answer can never overwrite newer state.

use crate::types::{GenerateError, GeneratedContent, SubmitRejected, Toast};

/// Where the current submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(GeneratedContent),
    /// Carries the message shown to the user.
    Failed(String),
}

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Request state of the generator.
#[derive(Debug, Default)]
pub struct Generation {
    status: RequestStatus,
    /// Last successful payload. Survives later failures.
    result: Option<GeneratedContent>,
    in_flight: Option<RequestTicket>,
    /// Status before the in-flight request started.
    before_pending: RequestStatus,
    issued: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn result(&self) -> Option<&GeneratedContent> {
        self.result.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether "generate" is enabled for this description.
    pub fn can_generate(&self, description: &str) -> bool {
        self.check(description).is_ok()
    }

    /// Whether "regenerate" is enabled.
    pub fn can_regenerate(&self, description: &str) -> bool {
        self.result.is_some() && self.can_generate(description)
    }

    fn check(&self, description: &str) -> Result<(), SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::AlreadyPending);
        }
        if description.is_empty() {
            return Err(SubmitRejected::EmptyDescription);
        }
        Ok(())
    }

    /// Move to `Pending` and hand out the ticket of the new request.
    pub fn begin(&mut self, description: &str) -> Result<RequestTicket, SubmitRejected> {
        self.check(description)?;
        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        self.in_flight = Some(ticket);
        self.before_pending = std::mem::replace(&mut self.status, RequestStatus::Pending);
        Ok(ticket)
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns the notification to show, or `None` if the ticket is stale
    /// and the outcome was discarded.
    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<GeneratedContent, GenerateError>,
    ) -> Option<Toast> {
        if self.in_flight != Some(ticket) {
            log::warn!("Discarding stale generation response {:?}", ticket);
            return None;
        }
        self.in_flight = None;
        self.before_pending = RequestStatus::Idle;

        match outcome {
            Ok(content) => {
                self.result = Some(content.clone());
                self.status = RequestStatus::Succeeded(content);
                Some(Toast::generated())
            }
            Err(err) => {
                let message = err.user_message();
                self.status = RequestStatus::Failed(message.clone());
                Some(Toast::generation_failed(message))
            }
        }
    }

    /// Forget the in-flight request so its response is discarded.
    ///
    /// The status goes back to what it was before the request started,
    /// including an earlier failure message.
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            log::debug!("Abandoning generation request {:?}", ticket);
            self.status = std::mem::take(&mut self.before_pending);
        }
    }
}
