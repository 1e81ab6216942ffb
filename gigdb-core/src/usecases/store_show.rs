use super::prelude::*;

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct NewShow {
    pub venue_id   : String,
    pub artist_id  : String,
    // Raw `datetime-local` form value, e.g. "2030-01-01T20:00:00".
    pub start_time : String,
}

/// Book an artist at a venue. Fails with `NotFound` if either
/// reference does not exist.
pub fn create_show<R: ShowRepo>(repo: &R, new_show: NewShow) -> Result<Show> {
    let NewShow {
        venue_id,
        artist_id,
        start_time,
    } = new_show;
    let start_time = start_time.parse::<Timestamp>()?;
    let show = Show {
        id: Id::new(),
        venue_id: venue_id.into(),
        artist_id: artist_id.into(),
        start_time,
    };
    repo.create_show(show.clone())?;
    Ok(show)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoShows;

    impl ShowRepo for NoShows {
        fn create_show(&self, _: Show) -> std::result::Result<(), crate::repositories::Error> {
            Ok(())
        }
        fn all_shows_chronologically(
            &self,
        ) -> std::result::Result<Vec<Show>, crate::repositories::Error> {
            Ok(vec![])
        }
        fn all_show_listings_chronologically(
            &self,
        ) -> std::result::Result<Vec<ShowListing>, crate::repositories::Error> {
            Ok(vec![])
        }
        fn shows_of_venue(
            &self,
            _: &Id,
        ) -> std::result::Result<Vec<VenueShow>, crate::repositories::Error> {
            Ok(vec![])
        }
        fn shows_of_artist(
            &self,
            _: &Id,
        ) -> std::result::Result<Vec<ArtistShow>, crate::repositories::Error> {
            Ok(vec![])
        }
        fn delete_shows_of_venue(
            &self,
            _: &Id,
        ) -> std::result::Result<usize, crate::repositories::Error> {
            Ok(0)
        }
        fn count_shows(&self) -> std::result::Result<usize, crate::repositories::Error> {
            Ok(0)
        }
    }

    #[test]
    fn show_start_time_must_parse() {
        let err = create_show(
            &NoShows,
            NewShow {
                venue_id: "v".into(),
                artist_id: "a".into(),
                start_time: "someday".into(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::StartTime));
    }

    #[test]
    fn show_accepts_datetime_local_input() {
        let show = create_show(
            &NoShows,
            NewShow {
                venue_id: "v".into(),
                artist_id: "a".into(),
                start_time: "2030-01-01T20:00:00".into(),
            },
        )
        .unwrap();
        assert_eq!(show.start_time.to_string(), "2030-01-01 20:00:00");
    }
}
