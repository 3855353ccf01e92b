use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{id::*, time::*};

const LOCAL_PREFIX: &str = "local:";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id               : Id,
    pub login_identifier : LoginIdentifier,
    pub display_name     : String,
    pub username         : Option<String>,
    pub email            : Option<String>,
    pub created_at       : Timestamp,
    pub last_login_at    : Option<Timestamp>,
}

/// Unique key a user signs in with.
///
/// Accounts managed by this application are prefixed with `local:` to
/// keep them apart from identifiers issued by external providers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoginIdentifier(String);

#[derive(Debug, Error)]
#[error("Empty login identifier")]
pub struct LoginIdentifierParseError;

impl LoginIdentifier {
    pub fn new_unchecked(identifier: String) -> Self {
        Self(identifier)
    }

    pub fn local(name: &str) -> Result<Self, LoginIdentifierParseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoginIdentifierParseError);
        }
        Ok(Self(format!("{LOCAL_PREFIX}{name}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LoginIdentifier {
    type Err = LoginIdentifierParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LoginIdentifierParseError);
        }
        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for LoginIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<LoginIdentifier> for String {
    fn from(from: LoginIdentifier) -> Self {
        from.0
    }
}

impl fmt::Display for LoginIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
