pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{artist_builder::*, show_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{id::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.venue.state = state.into();
            self
        }
        pub fn genres(mut self, genres: Vec<impl Into<String>>) -> Self {
            self.venue.genres = genres.into_iter().map(|g| g.into()).collect();
            self
        }
        pub fn seeking_talent(mut self, seeking: bool) -> Self {
            self.venue.seeking_talent = seeking;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    name: "".into(),
                    city: "".into(),
                    state: "".into(),
                    street_address: "".into(),
                    phone: "".into(),
                    image_url: "".into(),
                    facebook_url: None,
                    website_url: "".into(),
                    genres: vec![],
                    seeking_talent: false,
                    seeking_description: None,
                },
            }
        }
    }
}

pub mod artist_builder {

    use super::*;
    use crate::{artist::*, id::*};

    #[derive(Debug)]
    pub struct ArtistBuild {
        artist: Artist,
    }

    impl ArtistBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.artist.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.artist.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.artist.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.artist.state = state.into();
            self
        }
        pub fn genres(mut self, genres: Vec<impl Into<String>>) -> Self {
            self.artist.genres = genres.into_iter().map(|g| g.into()).collect();
            self
        }
        pub fn finish(self) -> Artist {
            self.artist
        }
    }

    impl Builder for Artist {
        type Build = ArtistBuild;
        fn build() -> ArtistBuild {
            ArtistBuild {
                artist: Artist {
                    id: Id::new(),
                    name: "".into(),
                    city: "".into(),
                    state: "".into(),
                    phone: "".into(),
                    image_url: "".into(),
                    facebook_url: None,
                    website_url: None,
                    genres: vec![],
                    seeking_venue: false,
                    seeking_description: None,
                },
            }
        }
    }
}

pub mod show_builder {

    use super::*;
    use crate::{id::*, show::*, time::*};

    #[derive(Debug)]
    pub struct ShowBuild {
        show: Show,
    }

    impl ShowBuild {
        pub fn venue_id(mut self, id: &str) -> Self {
            self.show.venue_id = id.into();
            self
        }
        pub fn artist_id(mut self, id: &str) -> Self {
            self.show.artist_id = id.into();
            self
        }
        pub fn start_time(mut self, at: Timestamp) -> Self {
            self.show.start_time = at;
            self
        }
        pub fn finish(self) -> Show {
            self.show
        }
    }

    impl Builder for Show {
        type Build = ShowBuild;
        fn build() -> ShowBuild {
            ShowBuild {
                show: Show {
                    id: Id::new(),
                    venue_id: Id::default(),
                    artist_id: Id::default(),
                    start_time: Timestamp::from_secs(0),
                },
            }
        }
    }
}
