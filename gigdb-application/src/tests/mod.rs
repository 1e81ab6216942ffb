mod flows;

pub mod prelude {

    pub use gigdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            gigdb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self { db_connections }
        }

        pub fn create_venue(&self, new_venue: usecases::NewVenue) -> Venue {
            flows::create_venue(&self.db_connections, new_venue).unwrap()
        }

        pub fn create_artist(&self, new_artist: usecases::NewArtist) -> Artist {
            flows::create_artist(&self.db_connections, new_artist).unwrap()
        }

        pub fn create_show(&self, venue_id: &Id, artist_id: &Id, start_time: &str) -> Show {
            flows::create_show(
                &self.db_connections,
                usecases::NewShow {
                    venue_id: venue_id.to_string(),
                    artist_id: artist_id.to_string(),
                    start_time: start_time.to_string(),
                },
            )
            .unwrap()
        }

        pub fn try_get_venue(&self, id: &str) -> Option<Venue> {
            match self.db_connections.shared().unwrap().get_venue(id) {
                Ok(venue) => Some(venue),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn try_get_artist(&self, id: &str) -> Option<Artist> {
            match self.db_connections.shared().unwrap().get_artist(id) {
                Ok(artist) => Some(artist),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn venue_exists(&self, id: &str) -> bool {
            self.try_get_venue(id).is_some()
        }

        pub fn all_shows(&self) -> Vec<Show> {
            self.db_connections
                .shared()
                .unwrap()
                .all_shows_chronologically()
                .unwrap()
        }
    }

    pub fn default_new_venue() -> usecases::NewVenue {
        usecases::NewVenue {
            name: "The Fillmore".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            street_address: "1805 Geary Blvd".into(),
            phone: "415-000-1234".into(),
            image_url: "https://example.com/fillmore.jpg".into(),
            facebook_url: None,
            website_url: "https://example.com/fillmore".into(),
            genres: vec!["Rock n Roll".into()],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    pub fn default_new_artist() -> usecases::NewArtist {
        usecases::NewArtist {
            name: "The Who".into(),
            city: "London".into(),
            state: "".into(),
            phone: "".into(),
            image_url: "https://example.com/the-who.jpg".into(),
            facebook_url: None,
            website_url: None,
            genres: vec!["Rock n Roll".into()],
            seeking_venue: false,
            seeking_description: None,
        }
    }
}
