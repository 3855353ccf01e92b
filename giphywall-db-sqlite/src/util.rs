use giphywall_core::entities::*;

use super::models;

pub(crate) fn tags_to_json(tags: &[String]) -> String {
    // Serializing a list of strings cannot fail
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".into())
}

fn tags_from_json(gif_id: &str, json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed tags of gif {gif_id}: {err}");
        Vec::new()
    })
}

impl From<models::GifEntity> for Gif {
    fn from(from: models::GifEntity) -> Self {
        let models::GifEntity {
            rowid: _,
            id,
            source,
            caption,
            giphy_id,
            tags,
            uploaded_by,
            created_at,
        } = from;
        let tags = tags_from_json(&id, &tags);
        Self {
            id: id.into(),
            source,
            caption,
            giphy_id,
            tags,
            uploaded_by: uploaded_by.map(Into::into),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<models::UserEntity> for User {
    fn from(from: models::UserEntity) -> Self {
        let models::UserEntity {
            rowid: _,
            id,
            login_identifier,
            display_name,
            username,
            email,
            created_at,
            last_login_at,
        } = from;
        Self {
            id: id.into(),
            login_identifier: LoginIdentifier::new_unchecked(login_identifier),
            display_name,
            username,
            email,
            created_at: Timestamp::from_millis(created_at),
            last_login_at: last_login_at.map(Timestamp::from_millis),
        }
    }
}

impl From<models::CommentEntity> for Comment {
    fn from(from: models::CommentEntity) -> Self {
        let models::CommentEntity {
            rowid: _,
            id,
            gif_id,
            text,
            ai_generated,
            created_at,
        } = from;
        Self {
            id: id.into(),
            gif_id: gif_id.into(),
            text,
            ai_generated,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a Gif> for models::NewGif<'a> {
    fn from(from: &'a Gif) -> Self {
        let Gif {
            id,
            source,
            caption,
            giphy_id,
            tags,
            uploaded_by,
            created_at,
        } = from;
        Self {
            id: id.as_str(),
            source,
            caption: caption.as_deref(),
            giphy_id: giphy_id.as_deref(),
            tags: tags_to_json(tags),
            uploaded_by: uploaded_by.as_ref().map(Id::as_str),
            created_at: created_at.as_millis(),
        }
    }
}

impl<'a> From<&'a User> for models::NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let User {
            id,
            login_identifier,
            display_name,
            username,
            email,
            created_at,
            last_login_at,
        } = from;
        Self {
            id: id.as_str(),
            login_identifier: login_identifier.as_str(),
            display_name,
            username: username.as_deref(),
            email: email.as_deref(),
            created_at: created_at.as_millis(),
            last_login_at: last_login_at.map(Timestamp::as_millis),
        }
    }
}

impl<'a> From<&'a Comment> for models::NewComment<'a> {
    fn from(from: &'a Comment) -> Self {
        let Comment {
            id,
            gif_id,
            text,
            ai_generated,
            created_at,
        } = from;
        Self {
            id: id.as_str(),
            gif_id: gif_id.as_str(),
            text,
            ai_generated: *ai_generated,
            created_at: created_at.as_millis(),
        }
    }
}
