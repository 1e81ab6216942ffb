use super::{num_upcoming_shows_of_venue, prelude::*, VenueSummary};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueSearchResults {
    pub count: usize,
    pub items: Vec<VenueSummary>,
}

/// Find venues whose name contains the search term
/// (case-insensitive) and annotate each match with its
/// upcoming-show count.
pub fn search_venues<R>(repo: &R, search_term: &str, now: Timestamp) -> Result<VenueSearchResults>
where
    R: VenueRepo + ShowRepo,
{
    let venues = repo.venues_by_name(search_term)?;
    let shows = repo.all_shows_chronologically()?;
    let items: Vec<_> = venues
        .into_iter()
        .map(|venue| VenueSummary {
            num_upcoming_shows: num_upcoming_shows_of_venue(&shows, &venue.id, now),
            id: venue.id,
            name: venue.name,
        })
        .collect();
    Ok(VenueSearchResults {
        count: items.len(),
        items,
    })
}
