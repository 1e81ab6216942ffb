use super::*;

impl ShowRepo for DbReadOnly<'_> {
    fn create_show(&self, _show: Show) -> Result<()> {
        unreachable!();
    }
    fn delete_shows_of_venue(&self, _venue_id: &Id) -> Result<usize> {
        unreachable!();
    }

    fn all_shows_chronologically(&self) -> Result<Vec<Show>> {
        all_shows_chronologically(&mut self.conn.borrow_mut())
    }
    fn all_show_listings_chronologically(&self) -> Result<Vec<ShowListing>> {
        all_show_listings_chronologically(&mut self.conn.borrow_mut())
    }
    fn shows_of_venue(&self, venue_id: &Id) -> Result<Vec<VenueShow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: &Id) -> Result<Vec<ArtistShow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
}

impl ShowRepo for DbReadWrite<'_> {
    fn create_show(&self, show: Show) -> Result<()> {
        create_show(&mut self.conn.borrow_mut(), show)
    }
    fn delete_shows_of_venue(&self, venue_id: &Id) -> Result<usize> {
        delete_shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }

    fn all_shows_chronologically(&self) -> Result<Vec<Show>> {
        all_shows_chronologically(&mut self.conn.borrow_mut())
    }
    fn all_show_listings_chronologically(&self) -> Result<Vec<ShowListing>> {
        all_show_listings_chronologically(&mut self.conn.borrow_mut())
    }
    fn shows_of_venue(&self, venue_id: &Id) -> Result<Vec<VenueShow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: &Id) -> Result<Vec<ArtistShow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
}

impl ShowRepo for DbConnection<'_> {
    fn create_show(&self, show: Show) -> Result<()> {
        create_show(&mut self.conn.borrow_mut(), show)
    }
    fn delete_shows_of_venue(&self, venue_id: &Id) -> Result<usize> {
        delete_shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }

    fn all_shows_chronologically(&self) -> Result<Vec<Show>> {
        all_shows_chronologically(&mut self.conn.borrow_mut())
    }
    fn all_show_listings_chronologically(&self) -> Result<Vec<ShowListing>> {
        all_show_listings_chronologically(&mut self.conn.borrow_mut())
    }
    fn shows_of_venue(&self, venue_id: &Id) -> Result<Vec<VenueShow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: &Id) -> Result<Vec<ArtistShow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
}

fn create_show(conn: &mut SqliteConnection, show: Show) -> Result<()> {
    // Both references must resolve, otherwise the booking is rejected.
    let venue_rowid = resolve_venue_rowid(conn, &show.venue_id)?;
    let artist_rowid = resolve_artist_rowid(conn, &show.artist_id)?;
    let new_show = models::NewShow {
        id: show.id.as_ref(),
        venue_rowid,
        artist_rowid,
        start_time: show.start_time.as_secs(),
    };
    diesel::insert_into(schema::shows::table)
        .values(&new_show)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_shows_chronologically(conn: &mut SqliteConnection) -> Result<Vec<Show>> {
    use schema::{artists::dsl as a_dsl, shows::dsl as s_dsl, venues::dsl as v_dsl};
    let rows = s_dsl::shows
        .inner_join(v_dsl::venues)
        .inner_join(a_dsl::artists)
        .select((s_dsl::id, v_dsl::id, a_dsl::id, s_dsl::start_time))
        .order_by(s_dsl::start_time)
        .load::<models::JoinedShowRefs>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let models::JoinedShowRefs {
                id,
                venue_id,
                artist_id,
                start_time,
            } = row;
            Show {
                id: id.into(),
                venue_id: venue_id.into(),
                artist_id: artist_id.into(),
                start_time: Timestamp::from_secs(start_time),
            }
        })
        .collect())
}

fn all_show_listings_chronologically(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>> {
    use schema::{artists::dsl as a_dsl, shows::dsl as s_dsl, venues::dsl as v_dsl};
    let rows = s_dsl::shows
        .inner_join(v_dsl::venues)
        .inner_join(a_dsl::artists)
        .select((
            v_dsl::id,
            v_dsl::name,
            a_dsl::id,
            a_dsl::name,
            a_dsl::image_url,
            s_dsl::start_time,
        ))
        .order_by(s_dsl::start_time)
        .load::<models::JoinedShowListing>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let models::JoinedShowListing {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_url,
                start_time,
            } = row;
            ShowListing {
                venue_id: venue_id.into(),
                venue_name,
                artist_id: artist_id.into(),
                artist_name,
                artist_image_url,
                start_time: Timestamp::from_secs(start_time),
            }
        })
        .collect())
}

fn shows_of_venue(conn: &mut SqliteConnection, venue_id: &Id) -> Result<Vec<VenueShow>> {
    use schema::{artists::dsl as a_dsl, shows::dsl as s_dsl};
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    let rows = s_dsl::shows
        .inner_join(a_dsl::artists)
        .select((a_dsl::id, a_dsl::name, a_dsl::image_url, s_dsl::start_time))
        .filter(s_dsl::venue_rowid.eq(venue_rowid))
        .order_by(s_dsl::start_time)
        .load::<models::JoinedVenueShow>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let models::JoinedVenueShow {
                artist_id,
                artist_name,
                artist_image_url,
                start_time,
            } = row;
            VenueShow {
                artist_id: artist_id.into(),
                artist_name,
                artist_image_url,
                start_time: Timestamp::from_secs(start_time),
            }
        })
        .collect())
}

fn shows_of_artist(conn: &mut SqliteConnection, artist_id: &Id) -> Result<Vec<ArtistShow>> {
    use schema::{shows::dsl as s_dsl, venues::dsl as v_dsl};
    let artist_rowid = resolve_artist_rowid(conn, artist_id)?;
    let rows = s_dsl::shows
        .inner_join(v_dsl::venues)
        .select((v_dsl::id, v_dsl::name, v_dsl::image_url, s_dsl::start_time))
        .filter(s_dsl::artist_rowid.eq(artist_rowid))
        .order_by(s_dsl::start_time)
        .load::<models::JoinedArtistShow>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let models::JoinedArtistShow {
                venue_id,
                venue_name,
                venue_image_url,
                start_time,
            } = row;
            ArtistShow {
                venue_id: venue_id.into(),
                venue_name,
                venue_image_url,
                start_time: Timestamp::from_secs(start_time),
            }
        })
        .collect())
}

fn delete_shows_of_venue(conn: &mut SqliteConnection, venue_id: &Id) -> Result<usize> {
    use schema::shows::dsl;
    let venue_rowid = resolve_venue_rowid(conn, venue_id)?;
    diesel::delete(dsl::shows.filter(dsl::venue_rowid.eq(venue_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn count_shows(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::shows::dsl;
    Ok(dsl::shows
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
