//! Three-state view of an in-flight page fetch.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api::FetchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> QueryState<T> {
    /// Convert a resource poll (`None` while pending) into a query state.
    pub fn from_poll(poll: Option<Result<T, FetchError>>) -> Self {
        match poll {
            None => QueryState::Loading,
            Some(Ok(data)) => QueryState::Ready(data),
            Some(Err(err)) => QueryState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
