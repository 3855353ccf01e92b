pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{gif_builder::*, user_builder::*};

pub mod gif_builder {

    use super::*;
    use crate::{gif::*, id::*, time::*};

    #[derive(Debug)]
    pub struct GifBuild {
        gif: Gif,
    }

    impl GifBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.gif.id = id.into();
            self
        }
        pub fn source(mut self, source: &str) -> Self {
            self.gif.source = source.into();
            self
        }
        pub fn caption(mut self, caption: &str) -> Self {
            self.gif.caption = Some(caption.into());
            self
        }
        pub fn giphy_id(mut self, giphy_id: &str) -> Self {
            self.gif.giphy_id = Some(giphy_id.into());
            self
        }
        pub fn tags(mut self, tags: Vec<&str>) -> Self {
            self.gif.tags = tags.into_iter().map(Into::into).collect();
            self
        }
        pub fn uploaded_by(mut self, user_id: &str) -> Self {
            self.gif.uploaded_by = Some(user_id.into());
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.gif.created_at = created_at;
            self
        }
        pub fn finish(self) -> Gif {
            self.gif
        }
    }

    impl Builder for Gif {
        type Build = GifBuild;
        fn build() -> GifBuild {
            GifBuild {
                gif: Gif {
                    id: Id::new(),
                    source: "".into(),
                    caption: None,
                    giphy_id: None,
                    tags: vec![],
                    uploaded_by: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn login_identifier(mut self, login_identifier: &str) -> Self {
            self.user.login_identifier = LoginIdentifier::new_unchecked(login_identifier.into());
            self
        }
        pub fn display_name(mut self, display_name: &str) -> Self {
            self.user.display_name = display_name.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = Some(username.into());
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = Some(email.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    login_identifier: LoginIdentifier::new_unchecked("local:anonymous".into()),
                    display_name: "".into(),
                    username: None,
                    email: None,
                    created_at: Timestamp::now(),
                    last_login_at: None,
                },
            }
        }
    }
}
