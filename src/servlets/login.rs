use crate::error::ServletError;
use crate::models::{CredentialPair, PasswordDisplay, ServletRequest};
use crate::sink::LogSink;

use super::{Servlet, DESTROY_LINE, INIT_LINE};

/// `/login`: GET only, announces its own start and stop.
#[derive(Clone, Debug, Default)]
pub struct LoginServlet {
    password: PasswordDisplay,
}

impl LoginServlet {
    pub fn new(password: PasswordDisplay) -> Self {
        Self { password }
    }
}

impl Servlet for LoginServlet {
    fn name(&self) -> &'static str {
        "login"
    }

    fn init(&self, out: &dyn LogSink) {
        out.line(INIT_LINE);
    }

    fn do_get(&self, req: &ServletRequest, out: &dyn LogSink) -> Result<(), ServletError> {
        let creds = CredentialPair::from_request(req);
        out.line(&format!("아이디: {}", creds.user_id_display()));
        out.line(&format!("비밀번호: {}", creds.user_pw_display(self.password)));
        Ok(())
    }

    fn destroy(&self, out: &dyn LogSink) {
        out.line(DESTROY_LINE);
    }
}
