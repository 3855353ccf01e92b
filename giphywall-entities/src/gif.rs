use crate::{id::*, time::*};

const GIPHY_EMBED_BASE_URL: &str = "https://giphy.com/embed/";

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gif {
    pub id          : Id,
    /// URL or file system path of the image.
    pub source      : String,
    pub caption     : Option<String>,
    /// Media id, only known if the source is a Giphy URL.
    pub giphy_id    : Option<String>,
    pub tags        : Vec<String>,
    pub uploaded_by : Option<Id>,
    pub created_at  : Timestamp,
}

impl Gif {
    pub fn embed_url(&self) -> Option<String> {
        self.giphy_id
            .as_deref()
            .map(|giphy_id| format!("{GIPHY_EMBED_BASE_URL}{giphy_id}"))
    }
}
