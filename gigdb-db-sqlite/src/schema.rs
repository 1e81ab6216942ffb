///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        city -> Text,
        state -> Text,
        street_address -> Text,
        phone -> Text,
        image_url -> Text,
        facebook_url -> Nullable<Text>,
        website_url -> Text,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

table! {
    venue_genres (venue_rowid, genre) {
        venue_rowid -> BigInt,
        genre -> Text,
    }
}

joinable!(venue_genres -> venues (venue_rowid));

///////////////////////////////////////////////////////////////////////
// Artists
///////////////////////////////////////////////////////////////////////

table! {
    artists (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Text,
        image_url -> Text,
        facebook_url -> Nullable<Text>,
        website_url -> Nullable<Text>,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

table! {
    artist_genres (artist_rowid, genre) {
        artist_rowid -> BigInt,
        genre -> Text,
    }
}

joinable!(artist_genres -> artists (artist_rowid));

///////////////////////////////////////////////////////////////////////
// Shows
///////////////////////////////////////////////////////////////////////

table! {
    shows (rowid) {
        rowid -> BigInt,
        id -> Text,
        venue_rowid -> BigInt,
        artist_rowid -> BigInt,
        start_time -> BigInt,
    }
}

joinable!(shows -> venues (venue_rowid));
joinable!(shows -> artists (artist_rowid));

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(venues, venue_genres, artists, artist_genres, shows,);
