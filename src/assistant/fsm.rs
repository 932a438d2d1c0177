use crate::{Error, Result};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Received,
    Answering,
    Responded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    BeginAnswering,
    AnswerProduced,
    ErrorOccurred,
}

/// Lifecycle of a single `/api/ask` request.
#[derive(Debug)]
pub struct RequestLifecycle {
    id: Uuid,
    state: RequestState,
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: RequestState::Received,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_state(&self) -> RequestState {
        self.state
    }

    pub fn transition(&mut self, event: RequestEvent) -> Result<()> {
        let new_state = match (self.state, event) {
            (RequestState::Received, RequestEvent::BeginAnswering) => RequestState::Answering,
            (RequestState::Answering, RequestEvent::AnswerProduced) => RequestState::Responded,
            (RequestState::Received, RequestEvent::ErrorOccurred)
            | (RequestState::Answering, RequestEvent::ErrorOccurred) => RequestState::Failed,
            _ => {
                warn!(
                    request_id = %self.id,
                    "Invalid request transition from {:?} with event {:?}", self.state, event
                );
                return Err(Error::fsm(format!(
                    "Invalid transition from {:?} with event {:?}",
                    self.state, event
                )));
            }
        };

        debug!(
            request_id = %self.id,
            "Request state transition: {:?} -> {:?} (event: {:?})", self.state, new_state, event
        );

        self.state = new_state;
        Ok(())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, RequestState::Responded | RequestState::Failed)
    }
}
