use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id                  : Id,
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub phone               : String,
    pub image_url           : String,
    pub facebook_url        : Option<String>,
    pub website_url         : Option<String>,
    pub genres              : Vec<String>,
    pub seeking_venue       : bool,
    pub seeking_description : Option<String>,
}
