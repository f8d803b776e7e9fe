use super::{Request, Response, Transport};
use crate::error::TransportError;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Records every request and answers from a queue of canned responses.
///
/// An empty queue answers `200 {}`. Queued non-2xx responses are turned into
/// [`TransportError::Status`] exactly as the HTTP transport would.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    responses: Mutex<VecDeque<Result<Response, TransportError>>>,
    requests: Mutex<Vec<Request>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: Response) -> &Self {
        self.queue(Ok(response))
    }

    pub fn push_json(&self, status: u16, body: Value) -> &Self {
        self.push_response(Response::json(status, &body))
    }

    pub fn push_network_error(&self, message: impl Into<String>) -> &Self {
        self.queue(Err(TransportError::Network(message.into())))
    }

    fn queue(&self, outcome: Result<Response, TransportError>) -> &Self {
        locked(&self.responses).push_back(outcome);
        self
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        locked(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<Request> {
        self.requests().pop()
    }
}

// Every mutation is a single push or pop, so a poisoned queue is still consistent.
fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Transport for InMemoryTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        locked(&self.requests).push(request.clone());
        let next = locked(&self.responses).pop_front();

        match next {
            Some(outcome) => outcome?.error_for_status(),
            None => Ok(Response::new(200, "{}")),
        }
    }
}
