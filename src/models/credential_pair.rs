use std::fmt;

use super::ServletRequest;

pub const USER_ID_PARAM: &str = "user_id";
pub const USER_PW_PARAM: &str = "user_pw";

/// Rendered in place of an absent parameter.
pub const NULL_MARKER: &str = "null";

/// The two values pulled out of one request. Neither is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialPair {
    pub user_id: Option<String>,
    pub user_pw: Option<String>,
}

impl CredentialPair {
    pub fn from_request(req: &ServletRequest) -> Self {
        Self {
            user_id: req.parameter(USER_ID_PARAM).map(str::to_owned),
            user_pw: req.parameter(USER_PW_PARAM).map(str::to_owned),
        }
    }

    pub fn user_id_display(&self) -> OptionalValue<'_> {
        OptionalValue::clear(self.user_id.as_deref())
    }

    pub fn user_pw_display(&self, mode: PasswordDisplay) -> OptionalValue<'_> {
        match mode {
            PasswordDisplay::Clear => OptionalValue::clear(self.user_pw.as_deref()),
            PasswordDisplay::Masked => OptionalValue::masked(self.user_pw.as_deref()),
        }
    }
}

/// How `user_pw` is written out. Clear text is what the login pages have
/// always done; masking is opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordDisplay {
    #[default]
    Clear,
    Masked,
}

impl PasswordDisplay {
    pub fn from_mask_flag(mask: bool) -> Self {
        if mask {
            PasswordDisplay::Masked
        } else {
            PasswordDisplay::Clear
        }
    }
}

/// Display adapter for a value that may be missing.
pub struct OptionalValue<'a> {
    value: Option<&'a str>,
    masked: bool,
}

impl<'a> OptionalValue<'a> {
    fn clear(value: Option<&'a str>) -> Self {
        Self { value, masked: false }
    }

    fn masked(value: Option<&'a str>) -> Self {
        Self { value, masked: true }
    }
}

impl fmt::Display for OptionalValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            None => f.write_str(NULL_MARKER),
            Some(v) if self.masked => {
                for _ in v.chars() {
                    f.write_str("*")?;
                }
                Ok(())
            }
            Some(v) => f.write_str(v),
        }
    }
}
