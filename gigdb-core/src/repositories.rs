// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait VenueRepo {
    fn create_venue(&self, venue: Venue) -> Result<()>;
    fn update_venue(&self, venue: &Venue) -> Result<()>;

    // The shows owned by the venue must be deleted first,
    // within the same transaction.
    fn delete_venue(&self, id: &Id) -> Result<()>;

    fn get_venue(&self, id: &str) -> Result<Venue>;
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    // Case-insensitive substring match on the name.
    fn venues_by_name(&self, name_part: &str) -> Result<Vec<Venue>>;
}

pub trait ArtistRepo {
    fn create_artist(&self, artist: Artist) -> Result<()>;
    fn update_artist(&self, artist: &Artist) -> Result<()>;

    fn get_artist(&self, id: &str) -> Result<Artist>;
    fn all_artists(&self) -> Result<Vec<Artist>>;
    fn count_artists(&self) -> Result<usize>;

    fn artists_by_name(&self, name_part: &str) -> Result<Vec<Artist>>;
}

pub trait ShowRepo {
    // Fails with `NotFound` if the referenced venue or artist
    // does not exist.
    fn create_show(&self, show: Show) -> Result<()>;

    fn all_shows_chronologically(&self) -> Result<Vec<Show>>;
    fn all_show_listings_chronologically(&self) -> Result<Vec<ShowListing>>;

    fn shows_of_venue(&self, venue_id: &Id) -> Result<Vec<VenueShow>>;
    fn shows_of_artist(&self, artist_id: &Id) -> Result<Vec<ArtistShow>>;

    fn delete_shows_of_venue(&self, venue_id: &Id) -> Result<usize>;

    fn count_shows(&self) -> Result<usize>;
}
