use super::{num_upcoming_shows_of_artist, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: Id,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistSearchResults {
    pub count: usize,
    pub items: Vec<ArtistSummary>,
}

pub fn search_artists<R>(repo: &R, search_term: &str, now: Timestamp) -> Result<ArtistSearchResults>
where
    R: ArtistRepo + ShowRepo,
{
    let artists = repo.artists_by_name(search_term)?;
    let shows = repo.all_shows_chronologically()?;
    let items: Vec<_> = artists
        .into_iter()
        .map(|artist| ArtistSummary {
            num_upcoming_shows: num_upcoming_shows_of_artist(&shows, &artist.id, now),
            id: artist.id,
            name: artist.name,
        })
        .collect();
    Ok(ArtistSearchResults {
        count: items.len(),
        items,
    })
}
