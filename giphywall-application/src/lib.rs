mod comments;
mod gifs;
mod users;

pub mod prelude {
    pub use super::{comments::*, gifs::*, users::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use giphywall_core::{entities::*, gateways::comment::CommentGenerator, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use giphywall_db_sqlite::Connections;
}
