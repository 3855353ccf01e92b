mod comments;
mod create_new_user;
mod error;
mod gifs;
mod get_user;
mod login;


pub use self::{
    comments::*, create_new_user::*, error::Error, get_user::*, gifs::*, login::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
