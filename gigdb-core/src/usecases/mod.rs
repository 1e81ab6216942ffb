mod error;
mod group_venues_by_locale;
mod partition_shows_by_time;
mod search_artists;
mod search_venues;
mod store_artist;
mod store_show;
mod store_venue;

pub use self::{
    error::Error, group_venues_by_locale::*, partition_shows_by_time::*, search_artists::*,
    search_venues::*, store_artist::*, store_show::*, store_venue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_venue<R: VenueRepo>(repo: &R, id: &str) -> Result<Venue> {
    Ok(repo.get_venue(id)?)
}

pub fn get_artist<R: ArtistRepo>(repo: &R, id: &str) -> Result<Artist> {
    Ok(repo.get_artist(id)?)
}

/// Assemble a venue profile page: the venue itself and its shows,
/// split into past and upcoming relative to `now`.
pub fn venue_page<R>(repo: &R, id: &str, now: Timestamp) -> Result<VenuePage>
where
    R: VenueRepo + ShowRepo,
{
    let venue = repo.get_venue(id)?;
    let shows = repo.shows_of_venue(&venue.id)?;
    let ShowPartition { past, upcoming } =
        partition_shows_by_time(shows, now, |show: &VenueShow| show.start_time);
    Ok(VenuePage {
        venue,
        past,
        upcoming,
    })
}

pub fn artist_page<R>(repo: &R, id: &str, now: Timestamp) -> Result<ArtistPage>
where
    R: ArtistRepo + ShowRepo,
{
    let artist = repo.get_artist(id)?;
    let shows = repo.shows_of_artist(&artist.id)?;
    let ShowPartition { past, upcoming } =
        partition_shows_by_time(shows, now, |show: &ArtistShow| show.start_time);
    Ok(ArtistPage {
        artist,
        past,
        upcoming,
    })
}

#[derive(Debug, Clone)]
pub struct VenuePage {
    pub venue: Venue,
    pub past: Vec<VenueShow>,
    pub upcoming: Vec<VenueShow>,
}

#[derive(Debug, Clone)]
pub struct ArtistPage {
    pub artist: Artist,
    pub past: Vec<ArtistShow>,
    pub upcoming: Vec<ArtistShow>,
}

pub fn venue_directory<R>(repo: &R, now: Timestamp) -> Result<Vec<LocaleGroup>>
where
    R: VenueRepo + ShowRepo,
{
    let venues = repo.all_venues()?;
    let shows = repo.all_shows_chronologically()?;
    Ok(group_venues_by_locale(venues, &shows, now))
}

pub fn artist_directory<R: ArtistRepo>(repo: &R) -> Result<Vec<Artist>> {
    Ok(repo.all_artists()?)
}

pub fn show_directory<R: ShowRepo>(repo: &R) -> Result<Vec<ShowListing>> {
    Ok(repo.all_show_listings_chronologically()?)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub venue_count: usize,
    pub artist_count: usize,
    pub show_count: usize,
}

pub fn directory_stats<R>(repo: &R) -> Result<DirectoryStats>
where
    R: VenueRepo + ArtistRepo + ShowRepo,
{
    Ok(DirectoryStats {
        venue_count: repo.count_venues()?,
        artist_count: repo.count_artists()?,
        show_count: repo.count_shows()?,
    })
}

// Optional form fields arrive as empty strings.
pub(super) fn optional_param(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn num_upcoming_shows_of_venue(shows: &[Show], venue_id: &Id, now: Timestamp) -> usize {
    shows
        .iter()
        .filter(|show| show.venue_id == *venue_id && show.start_time > now)
        .count()
}

pub(crate) fn num_upcoming_shows_of_artist(shows: &[Show], artist_id: &Id, now: Timestamp) -> usize {
    shows
        .iter()
        .filter(|show| show.artist_id == *artist_id && show.start_time > now)
        .count()
}

/// Normalize a submitted genre list: trim, drop empties, dedup, sort.
/// Casing is preserved, genres are display labels.
pub fn prepare_genre_list<'a>(genres: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut genres: Vec<_> = genres
        .into_iter()
        .filter_map(|g| match g.trim() {
            g if g.is_empty() => None,
            g => Some(g.to_string()),
        })
        .collect();
    genres.sort_unstable();
    genres.dedup();
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_genre_list_trims_dedups_and_sorts() {
        let genres = prepare_genre_list(vec!["Jazz", "  Blues ", "", "Jazz", "Rock n Roll"]);
        assert_eq!(genres, vec!["Blues", "Jazz", "Rock n Roll"]);
    }

    #[test]
    fn prepare_genre_list_preserves_casing() {
        let genres = prepare_genre_list(vec!["Hip-Hop", "hip-hop"]);
        assert_eq!(genres, vec!["Hip-Hop", "hip-hop"]);
    }
}
