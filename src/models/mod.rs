pub mod credential_pair;
pub mod parameter_map;
pub mod servlet_request;

pub use credential_pair::{CredentialPair, PasswordDisplay, NULL_MARKER, USER_ID_PARAM, USER_PW_PARAM};
pub use parameter_map::ParameterMap;
pub use servlet_request::ServletRequest;
