use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id           : Id,
    pub gif_id       : Id,
    pub text         : String,
    pub ai_generated : bool,
    pub created_at   : Timestamp,
}
