//! Request handlers and the lifecycle contract they share with the host.

mod login;
mod login4;

use std::fmt;

use axum::routing::MethodFilter;

use crate::error::ServletError;
use crate::models::ServletRequest;
use crate::sink::LogSink;

pub use login::LoginServlet;
pub use login4::Login4Servlet;

pub const INIT_LINE: &str = "init 메서드 호출";
pub const DESTROY_LINE: &str = "destroy 메서드 호출";

/// HTTP verbs a servlet can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verb {
    Get,
    Post,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
        }
    }

    pub fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request handler with host-driven lifecycle hooks.
///
/// `init` runs once before the first request and `destroy` once after the
/// last. Verbs the servlet does not override answer `MethodNotAllowed`.
pub trait Servlet: Send + Sync {
    fn name(&self) -> &'static str;

    fn init(&self, _out: &dyn LogSink) {}

    fn destroy(&self, _out: &dyn LogSink) {}

    fn do_get(&self, _req: &ServletRequest, _out: &dyn LogSink) -> Result<(), ServletError> {
        Err(ServletError::MethodNotAllowed(Verb::Get))
    }

    fn do_post(&self, _req: &ServletRequest, _out: &dyn LogSink) -> Result<(), ServletError> {
        Err(ServletError::MethodNotAllowed(Verb::Post))
    }
}

/// Dispatch one request to the method matching `verb`.
pub fn service(
    servlet: &dyn Servlet,
    verb: Verb,
    req: &ServletRequest,
    out: &dyn LogSink,
) -> Result<(), ServletError> {
    match verb {
        Verb::Get => servlet.do_get(req, out),
        Verb::Post => servlet.do_post(req, out),
    }
}
