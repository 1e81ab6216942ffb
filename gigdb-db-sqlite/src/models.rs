#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// `start_time` columns are stored as unix timestamps
// with second precision.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues)]
#[diesel(treat_none_as_null = true)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub street_address: &'a str,
    pub phone: &'a str,
    pub image_url: &'a str,
    pub facebook_url: Option<&'a str>,
    pub website_url: &'a str,
    pub seeking_talent: bool,
    pub seeking_description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct VenueEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub street_address: String,
    pub phone: String,
    pub image_url: String,
    pub facebook_url: Option<String>,
    pub website_url: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = venue_genres)]
pub struct NewVenueGenre<'a> {
    pub venue_rowid: i64,
    pub genre: &'a str,
}

#[derive(Queryable)]
pub struct VenueGenre {
    pub venue_rowid: i64,
    pub genre: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = artists)]
#[diesel(treat_none_as_null = true)]
pub struct NewArtist<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub phone: &'a str,
    pub image_url: &'a str,
    pub facebook_url: Option<&'a str>,
    pub website_url: Option<&'a str>,
    pub seeking_venue: bool,
    pub seeking_description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ArtistEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_url: String,
    pub facebook_url: Option<String>,
    pub website_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = artist_genres)]
pub struct NewArtistGenre<'a> {
    pub artist_rowid: i64,
    pub genre: &'a str,
}

#[derive(Queryable)]
pub struct ArtistGenre {
    pub artist_rowid: i64,
    pub genre: String,
}

#[derive(Insertable)]
#[diesel(table_name = shows)]
pub struct NewShow<'a> {
    pub id: &'a str,
    pub venue_rowid: i64,
    pub artist_rowid: i64,
    pub start_time: i64,
}

// Joined columns only, resolved in a single query per listing.

#[derive(Queryable)]
pub struct JoinedShowRefs {
    pub id: String,
    pub venue_id: String,
    pub artist_id: String,
    pub start_time: i64,
}

#[derive(Queryable)]
pub struct JoinedVenueShow {
    pub artist_id: String,
    pub artist_name: String,
    pub artist_image_url: String,
    pub start_time: i64,
}

#[derive(Queryable)]
pub struct JoinedArtistShow {
    pub venue_id: String,
    pub venue_name: String,
    pub venue_image_url: String,
    pub start_time: i64,
}

#[derive(Queryable)]
pub struct JoinedShowListing {
    pub venue_id: String,
    pub venue_name: String,
    pub artist_id: String,
    pub artist_name: String,
    pub artist_image_url: String,
    pub start_time: i64,
}
