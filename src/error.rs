/// Error types for the servlet host
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::servlets::Verb;

/// Errors a servlet can return from a request method
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServletError {
    /// The servlet does not implement this verb
    #[error("HTTP method {0} is not supported by this URL")]
    MethodNotAllowed(Verb),
}

impl IntoResponse for ServletError {
    fn into_response(self) -> Response {
        match self {
            ServletError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED.into_response(),
        }
    }
}

/// Errors raised while building the route table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("{verb} {path} is already bound")]
    Duplicate { path: String, verb: Verb },

    #[error("route path must start with '/': {0}")]
    InvalidPath(String),
}

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// Host/port did not form a socket address
    #[error("Invalid host/port format '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Could not bind the listener
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed while running
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error(transparent)]
    Route(#[from] RouteError),

    /// An environment variable held an unusable value
    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },
}
