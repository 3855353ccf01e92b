#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::prelude::*;

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = gifs)]
pub struct NewGif<'a> {
    pub id: &'a str,
    pub source: &'a str,
    pub caption: Option<&'a str>,
    pub giphy_id: Option<&'a str>,
    // JSON array
    pub tags: String,
    pub uploaded_by: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct GifEntity {
    pub rowid: i64,
    pub id: String,
    pub source: String,
    pub caption: Option<String>,
    pub giphy_id: Option<String>,
    pub tags: String,
    pub uploaded_by: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub login_identifier: &'a str,
    pub display_name: &'a str,
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub login_identifier: String,
    pub display_name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub id: &'a str,
    pub gif_id: &'a str,
    pub text: &'a str,
    pub ai_generated: bool,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct CommentEntity {
    pub rowid: i64,
    pub id: String,
    pub gif_id: String,
    pub text: String,
    pub ai_generated: bool,
    pub created_at: i64,
}
