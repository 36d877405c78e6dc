use cosmwasm_std::Binary;
use serde::de::DeserializeOwned;

use crate::api::decode_json;
use crate::error::{FetchError, TransportError};

/// Handle for one issued request. Only the ticket of the latest request of a
/// still-open loader is accepted by `Loader::resolve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub url: String,
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchStatus<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(FetchError),
}

/// Request/response state of one backend read, keyed by its URL.
///
/// The loader issues a new request only when its key changes, discards
/// responses that arrive for superseded keys or after `close`, and keeps the
/// last error instead of retrying.
#[derive(Clone, Debug)]
pub struct Loader<T> {
    key: Option<String>,
    generation: u64,
    status: FetchStatus<T>,
    closed: bool,
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Loader {
            key: None,
            generation: 0,
            status: FetchStatus::Idle,
            closed: false,
        }
    }
}

impl<T: DeserializeOwned> Loader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the loader at `key`. Returns a ticket when a request must be issued,
    /// `None` when the key is unchanged. A `None` key idles the loader and abandons
    /// any in-flight request.
    pub fn watch(&mut self, key: Option<String>) -> Option<Ticket> {
        if self.closed || key == self.key {
            return None;
        }
        self.generation += 1;
        self.key = key;
        match &self.key {
            Some(url) => {
                self.status = FetchStatus::Loading;
                Some(Ticket {
                    url: url.clone(),
                    generation: self.generation,
                })
            }
            None => {
                self.status = FetchStatus::Idle;
                None
            }
        }
    }

    /// Applies a response. Returns false if the ticket is stale and the body was dropped.
    pub fn resolve(&mut self, ticket: &Ticket, body: Result<Binary, TransportError>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = match body
            .map_err(FetchError::from)
            .and_then(|body| decode_json(&ticket.url, &body))
        {
            Ok(data) => FetchStatus::Ready(data),
            Err(err) => FetchStatus::Failed(err),
        };
        true
    }

    /// Tears the loader down. Later responses are discarded and `watch` no longer fires.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
        if self.is_loading() {
            self.status = FetchStatus::Idle;
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        !self.closed && ticket.generation == self.generation
    }
}

impl<T> Loader<T> {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn status(&self) -> &FetchStatus<T> {
        &self.status
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            FetchStatus::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self.status, FetchStatus::Ready(_))
    }

    /// True once the current key got an answer, good or bad
    pub fn is_settled(&self) -> bool {
        matches!(self.status, FetchStatus::Ready(_) | FetchStatus::Failed(_))
    }
}
