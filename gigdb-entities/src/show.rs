use crate::{id::*, time::*};

/// A booking of one artist at one venue at a point in time.
///
/// A show has no identity beyond this pairing and its start time.
/// Both references are required and must point to existing records.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id         : Id,
    pub venue_id   : Id,
    pub artist_id  : Id,
    pub start_time : Timestamp,
}

// View-ready join records. The counterpart columns are resolved by a
// batched join in the persistence layer, never row by row.

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub artist_id        : Id,
    pub artist_name      : String,
    pub artist_image_url : String,
    pub start_time       : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub venue_id        : Id,
    pub venue_name      : String,
    pub venue_image_url : String,
    pub start_time      : Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id         : Id,
    pub venue_name       : String,
    pub artist_id        : Id,
    pub artist_name      : String,
    pub artist_image_url : String,
    pub start_time       : Timestamp,
}
