use crate::error::ServletError;
use crate::models::{CredentialPair, PasswordDisplay, ServletRequest};
use crate::sink::LogSink;

use super::Servlet;

/// `/login4`: GET and POST both announce themselves and then share one
/// extraction routine.
#[derive(Clone, Debug, Default)]
pub struct Login4Servlet {
    password: PasswordDisplay,
}

impl Login4Servlet {
    pub fn new(password: PasswordDisplay) -> Self {
        Self { password }
    }

    fn do_handle(&self, req: &ServletRequest, out: &dyn LogSink) {
        let creds = CredentialPair::from_request(req);
        out.line("doHandle 메서드 호출");
        out.line(&format!("아이디:{}", creds.user_id_display()));
        out.line(&format!("비밀번호:{}", creds.user_pw_display(self.password)));
    }
}

impl Servlet for Login4Servlet {
    fn name(&self) -> &'static str {
        "login4"
    }

    fn do_get(&self, req: &ServletRequest, out: &dyn LogSink) -> Result<(), ServletError> {
        out.line("doGet 메서드 호출");
        self.do_handle(req, out);
        Ok(())
    }

    fn do_post(&self, req: &ServletRequest, out: &dyn LogSink) -> Result<(), ServletError> {
        out.line("doPost 메서드 호출");
        self.do_handle(req, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParameterMap;
    use crate::sink::MemorySink;
    use axum::http::Method;

    fn params() -> ParameterMap {
        [("user_id", "alice"), ("user_pw", "secret")].into_iter().collect()
    }

    #[test]
    fn test_get_output() {
        let out = MemorySink::new();
        let req = ServletRequest::new(Method::GET, "/login4", params());
        Login4Servlet::default().do_get(&req, &out).unwrap();
        assert_eq!(
            out.lines(),
            vec!["doGet 메서드 호출", "doHandle 메서드 호출", "아이디:alice", "비밀번호:secret"]
        );
    }

    #[test]
    fn test_get_and_post_differ_only_in_announcement() {
        let servlet = Login4Servlet::default();
        let get_out = MemorySink::new();
        let post_out = MemorySink::new();
        servlet
            .do_get(&ServletRequest::new(Method::GET, "/login4", params()), &get_out)
            .unwrap();
        servlet
            .do_post(&ServletRequest::new(Method::POST, "/login4", params()), &post_out)
            .unwrap();

        let get_lines = get_out.lines();
        let post_lines = post_out.lines();
        assert_eq!(get_lines[0], "doGet 메서드 호출");
        assert_eq!(post_lines[0], "doPost 메서드 호출");
        assert_eq!(get_lines[1..], post_lines[1..]);
    }

    #[test]
    fn test_no_params() {
        let out = MemorySink::new();
        let req = ServletRequest::new(Method::POST, "/login4", ParameterMap::new());
        Login4Servlet::default().do_post(&req, &out).unwrap();
        assert_eq!(out.lines()[2..], ["아이디:null", "비밀번호:null"]);
    }

    #[test]
    fn test_no_lifecycle_lines() {
        let out = MemorySink::new();
        let servlet = Login4Servlet::default();
        servlet.init(&out);
        servlet.destroy(&out);
        assert!(out.lines().is_empty());
    }
}
