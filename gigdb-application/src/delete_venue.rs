use super::*;
use usecases::Error;

/// Delete a venue together with all of its shows.
///
/// Both deletions happen in the same transaction. Either the venue
/// and every one of its shows are gone afterwards or, on any failure,
/// nothing is.
pub fn delete_venue(connections: &sqlite::Connections, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction::<_, _, Error>(|conn| {
            let deleted_shows = conn.delete_shows_of_venue(id)?;
            conn.delete_venue(id).map_err(|err| {
                warn!("Failed to delete venue {}: {}", id, err);
                err
            })?;
            debug!("Deleted venue {} and {} of its shows", id, deleted_shows);
            Ok(())
        })?;
    Ok(())
}
