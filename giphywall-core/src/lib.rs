pub mod gateways;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use giphywall_entities::{comment::*, gif::*, id::*, time::*, user::*};
}
