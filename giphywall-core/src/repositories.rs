// Low-level database access traits.
// Each repository is responsible for a single entity.
// Related entities are only referenced by their id and
// never modified or loaded by another repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait GifRepo {
    fn create_gif(&self, gif: &Gif) -> Result<()>;

    // Returns the number of deleted gifs, i.e. 0 for unknown ids
    fn delete_gif(&self, id: &str) -> Result<usize>;

    // Newest first
    fn all_gifs(&self) -> Result<Vec<Gif>>;
    fn gifs_uploaded_by(&self, user_id: &str) -> Result<Vec<Gif>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn record_login(&self, user_id: &str, at: Timestamp) -> Result<()>;

    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn try_get_user_by_login_identifier(&self, login_identifier: &str) -> Result<Option<User>>;

    // Case-insensitive match against username, email or display name.
    // If multiple users match the one created first is returned.
    fn try_get_user_by_name_or_email(&self, query: &str) -> Result<Option<User>>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: &Comment) -> Result<()>;

    // Oldest first
    fn load_comments_of_gif(&self, gif_id: &str) -> Result<Vec<Comment>>;
}
