use giphywall_core::{repositories::Error as RepoError, usecases::Error as BError};
use thiserror::Error;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_user_exists(&self) -> bool {
        matches!(self, Self::Business(BError::UserExists))
    }
}
