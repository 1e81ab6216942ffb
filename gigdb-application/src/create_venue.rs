use std::result;

use gigdb_db_sqlite::DbReadWrite;

use super::*;
use usecases::{Error, NewVenue};

pub fn create_venue(connections: &sqlite::Connections, new_venue: NewVenue) -> Result<Venue> {
    let venue = create_and_add_new_venue(connections.exclusive()?, new_venue)?;
    Ok(venue)
}

fn create_and_add_new_venue(
    mut connection: DbReadWrite<'_>,
    new_venue: NewVenue,
) -> result::Result<Venue, Error> {
    connection.transaction(|conn| {
        usecases::create_venue(conn, new_venue).map_err(|err| {
            warn!("Failed to store newly created venue: {}", err);
            err
        })
    })
}
