use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id                  : Id,
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub street_address      : String,
    pub phone               : String,
    pub image_url           : String,
    pub facebook_url        : Option<String>,
    pub website_url         : String,
    // Genres are an ordered set of display labels, e.g. "Jazz", "Rock n Roll".
    pub genres              : Vec<String>,
    pub seeking_talent      : bool,
    pub seeking_description : Option<String>,
}

impl Venue {
    /// Grouping key for the directory listing.
    /// Two venues share a locale iff city and state match exactly.
    pub fn locale(&self) -> (&str, &str) {
        (&self.city, &self.state)
    }
}
