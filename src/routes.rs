use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::config::Settings;
use crate::error::RouteError;
use crate::models::{PasswordDisplay, ServletRequest};
use crate::servlets::{service, Login4Servlet, LoginServlet, Servlet, Verb};
use crate::sink::{LogSink, SharedSink};

/// One `(path, verb) -> servlet` binding.
#[derive(Clone)]
pub struct RouteEntry {
    pub path: String,
    pub verb: Verb,
    pub servlet: Arc<dyn Servlet>,
}

/// Explicit route table, built once at startup.
#[derive(Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `/login` (GET) and `/login4` (GET, POST).
    pub fn standard(settings: &Settings) -> Result<Self, RouteError> {
        let password = PasswordDisplay::from_mask_flag(settings.mask_password);
        let login: Arc<dyn Servlet> = Arc::new(LoginServlet::new(password));
        let login4: Arc<dyn Servlet> = Arc::new(Login4Servlet::new(password));

        let mut table = Self::new();
        table
            .bind("/login", Verb::Get, login)?
            .bind("/login4", Verb::Get, login4.clone())?
            .bind("/login4", Verb::Post, login4)?;
        Ok(table)
    }

    pub fn bind(&mut self, path: &str, verb: Verb, servlet: Arc<dyn Servlet>) -> Result<&mut Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }
        if self.entries.iter().any(|e| e.path == path && e.verb == verb) {
            return Err(RouteError::Duplicate {
                path: path.to_string(),
                verb,
            });
        }
        self.entries.push(RouteEntry {
            path: path.to_string(),
            verb,
            servlet,
        });
        Ok(self)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Distinct servlets in the order they were first bound.
    pub fn servlets(&self) -> Vec<Arc<dyn Servlet>> {
        let mut seen: Vec<Arc<dyn Servlet>> = Vec::new();
        for entry in &self.entries {
            if !seen.iter().any(|s| same_servlet(s, &entry.servlet)) {
                seen.push(entry.servlet.clone());
            }
        }
        seen
    }

    /// `(path, verb, servlet name)` rows for display.
    pub fn paths(&self) -> Vec<(String, Verb, &'static str)> {
        self.entries
            .iter()
            .map(|e| (e.path.clone(), e.verb, e.servlet.name()))
            .collect()
    }

    /// Build the axum router; every handler writes to `sink`.
    pub fn into_router(self, sink: SharedSink) -> Router {
        let mut grouped: BTreeMap<String, MethodRouter> = BTreeMap::new();
        for RouteEntry { path, verb, servlet } in self.entries {
            let sink = sink.clone();
            let handler = move |req: ServletRequest| async move { dispatch(&*servlet, verb, &req, &*sink) };
            let method_router = grouped.remove(&path).unwrap_or_else(MethodRouter::new);
            grouped.insert(path, method_router.on(verb.filter(), handler));
        }

        let router = grouped
            .into_iter()
            .fold(Router::new(), |router, (path, method_router)| router.route(&path, method_router));
        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http().make_span_with(request_span)))
    }
}

/// Span for one request. Only the path is recorded: the query string carries
/// `user_pw`.
fn request_span(req: &Request<Body>) -> Span {
    tracing::debug_span!("request", method = %req.method(), path = %req.uri().path())
}

fn same_servlet(a: &Arc<dyn Servlet>, b: &Arc<dyn Servlet>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// No body, no explicit status: a handled request is a bare `200 OK`.
fn dispatch(servlet: &dyn Servlet, verb: Verb, req: &ServletRequest, sink: &dyn LogSink) -> Response {
    match service(servlet, verb, req, sink) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            tracing::debug!(servlet = servlet.name(), method = %req.method, path = %req.path, %e, "request rejected");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_standard_table() {
        let table = RouteTable::standard(&Settings::default()).unwrap();
        let rows = table.paths();
        assert_eq!(
            rows,
            vec![
                ("/login".to_string(), Verb::Get, "login"),
                ("/login4".to_string(), Verb::Get, "login4"),
                ("/login4".to_string(), Verb::Post, "login4"),
            ]
        );
        assert_eq!(table.servlets().len(), 2);
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let mut table = RouteTable::new();
        let servlet: Arc<dyn Servlet> = Arc::new(LoginServlet::default());
        table.bind("/login", Verb::Get, servlet.clone()).unwrap();
        let err = table.bind("/login", Verb::Get, servlet.clone()).err();
        assert_eq!(
            err,
            Some(RouteError::Duplicate {
                path: "/login".to_string(),
                verb: Verb::Get
            })
        );
        // Same path, other verb is fine.
        assert!(table.bind("/login", Verb::Post, servlet).is_ok());
        assert_eq!(table.entries().len(), 2);
    }

    #[test]
    fn test_path_must_be_absolute() {
        let mut table = RouteTable::new();
        let err = table.bind("login", Verb::Get, Arc::new(LoginServlet::default())).err();
        assert_eq!(err, Some(RouteError::InvalidPath("login".to_string())));
    }

    #[test]
    fn test_dispatch_status() {
        let out = MemorySink::new();
        let req = ServletRequest::new(axum::http::Method::POST, "/login", Default::default());
        let res = dispatch(&LoginServlet::default(), Verb::Post, &req, &out);
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
        let res = dispatch(&LoginServlet::default(), Verb::Get, &req, &out);
        assert_eq!(res.status(), StatusCode::OK);
    }
}
