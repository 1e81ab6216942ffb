use super::*;
use usecases::NewShow;

/// Book an artist at a venue.
pub fn create_show(connections: &sqlite::Connections, new_show: NewShow) -> Result<Show> {
    let show = connections.exclusive()?.transaction(|conn| {
        usecases::create_show(conn, new_show).map_err(|err| {
            warn!("Failed to store newly created show: {}", err);
            err
        })
    })?;
    Ok(show)
}
