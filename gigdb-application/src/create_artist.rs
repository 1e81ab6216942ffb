use std::result;

use gigdb_db_sqlite::DbReadWrite;

use super::*;
use usecases::{Error, NewArtist};

pub fn create_artist(connections: &sqlite::Connections, new_artist: NewArtist) -> Result<Artist> {
    let artist = create_and_add_new_artist(connections.exclusive()?, new_artist)?;
    Ok(artist)
}

fn create_and_add_new_artist(
    mut connection: DbReadWrite<'_>,
    new_artist: NewArtist,
) -> result::Result<Artist, Error> {
    connection.transaction(|conn| {
        usecases::create_artist(conn, new_artist).map_err(|err| {
            warn!("Failed to store newly created artist: {}", err);
            err
        })
    })
}
