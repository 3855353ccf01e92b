use crate::repositories;
use giphywall_entities::user::LoginIdentifierParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The user already exists")]
    UserExists,
    #[error("Invalid login identifier")]
    LoginIdentifier,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<LoginIdentifierParseError> for Error {
    fn from(_: LoginIdentifierParseError) -> Self {
        Self::LoginIdentifier
    }
}
