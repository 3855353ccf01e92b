pub mod prelude {
    pub(crate) use crate::{prelude as flows, sqlite, usecases, Id};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            giphywall_db_sqlite::initialize(&db_connections).unwrap();
            Self { db_connections }
        }

        pub fn add_gif(&self, source: &str, caption: Option<&str>) -> Id {
            flows::add_gif(
                &self.db_connections,
                usecases::NewGif {
                    source: source.into(),
                    caption: caption.map(Into::into),
                    ..Default::default()
                },
            )
            .unwrap()
        }
    }
}
