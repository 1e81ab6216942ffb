use super::*;
use usecases::NewArtist;

/// Overwrite all fields of an existing artist.
pub fn update_artist(
    connections: &sqlite::Connections,
    id: Id,
    new_artist: NewArtist,
) -> Result<Artist> {
    let artist = connections.exclusive()?.transaction(|conn| {
        usecases::update_artist(conn, id, new_artist).map_err(|err| {
            warn!("Failed to store updated artist: {}", err);
            err
        })
    })?;
    Ok(artist)
}
