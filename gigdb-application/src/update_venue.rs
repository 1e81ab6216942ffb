use super::*;
use usecases::NewVenue;

/// Overwrite all fields of an existing venue.
pub fn update_venue(
    connections: &sqlite::Connections,
    id: Id,
    new_venue: NewVenue,
) -> Result<Venue> {
    let venue = connections.exclusive()?.transaction(|conn| {
        usecases::update_venue(conn, id, new_venue).map_err(|err| {
            warn!("Failed to store updated venue: {}", err);
            err
        })
    })?;
    Ok(venue)
}
