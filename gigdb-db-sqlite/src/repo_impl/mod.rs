use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::Error as DieselError,
};

use gigdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util, DbConnection, DbReadOnly, DbReadWrite, SqliteConnection};

mod artist;
mod show;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_venue_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::venues::dsl;
    dsl::venues
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve venue id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_artist_rowid(conn: &mut SqliteConnection, id: &Id) -> Result<i64> {
    use schema::artists::dsl;
    dsl::artists
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve artist id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_venue_genres(conn: &mut SqliteConnection, venue_rowid: i64) -> Result<Vec<String>> {
    use schema::venue_genres::dsl;
    dsl::venue_genres
        .select(dsl::genre)
        .filter(dsl::venue_rowid.eq(venue_rowid))
        .order_by(dsl::genre)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_artist_genres(conn: &mut SqliteConnection, artist_rowid: i64) -> Result<Vec<String>> {
    use schema::artist_genres::dsl;
    dsl::artist_genres
        .select(dsl::genre)
        .filter(dsl::artist_rowid.eq(artist_rowid))
        .order_by(dsl::genre)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}
