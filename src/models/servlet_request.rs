use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Method},
    response::{IntoResponse, Response},
};

use super::ParameterMap;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request as handed to a servlet: already parsed, already decoded as UTF-8.
#[derive(Clone, Debug)]
pub struct ServletRequest {
    pub method: Method,
    pub path: String,
    pub params: ParameterMap,
}

impl ServletRequest {
    pub fn new(method: Method, path: impl Into<String>, params: ParameterMap) -> Self {
        Self {
            method,
            path: path.into(),
            params,
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case(FORM_CONTENT_TYPE)
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for ServletRequest
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_owned);
        // Only POST form bodies carry parameters; any charset in the
        // content type is ignored and UTF-8 is used.
        let read_body = method == Method::POST && is_form(req.headers());

        let body = if read_body {
            Some(Bytes::from_request(req, state).await.map_err(IntoResponse::into_response)?)
        } else {
            None
        };

        let params = ParameterMap::from_parts(query.as_deref(), body.as_deref());
        Ok(ServletRequest::new(method, path, params))
    }
}
