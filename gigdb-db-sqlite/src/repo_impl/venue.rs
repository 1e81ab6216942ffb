use super::*;

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _venue: Venue) -> Result<()> {
        unreachable!();
    }
    fn update_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn delete_venue(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_part: &str) -> Result<Vec<Venue>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

impl VenueRepo for DbReadWrite<'_> {
    fn create_venue(&self, venue: Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: &Id) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_part: &str) -> Result<Vec<Venue>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, venue: Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: &Id) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_part: &str) -> Result<Vec<Venue>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

fn into_new_venue(venue: &Venue) -> models::NewVenue<'_> {
    models::NewVenue {
        id: venue.id.as_ref(),
        name: &venue.name,
        city: &venue.city,
        state: &venue.state,
        street_address: &venue.street_address,
        phone: &venue.phone,
        image_url: &venue.image_url,
        facebook_url: venue.facebook_url.as_deref(),
        website_url: &venue.website_url,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.as_deref(),
    }
}

fn create_venue(conn: &mut SqliteConnection, venue: Venue) -> Result<()> {
    let new_venue = into_new_venue(&venue);
    conn.transaction::<_, DieselError, _>(|conn| {
        // Insert venue
        diesel::insert_into(schema::venues::table)
            .values(&new_venue)
            .execute(conn)?;
        let venue_rowid = resolve_venue_rowid(conn, &venue.id).map_err(|err| {
            log::warn!(
                "Failed to resolve id of newly created venue {}: {}",
                venue.id,
                err,
            );
            DieselError::RollbackTransaction
        })?;
        // Insert venue genres
        let genres: Vec<_> = venue
            .genres
            .iter()
            .map(|genre| models::NewVenueGenre { venue_rowid, genre })
            .collect();
        diesel::insert_or_ignore_into(schema::venue_genres::table)
            .values(&genres)
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn update_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    let venue_rowid = resolve_venue_rowid(conn, &venue.id)?;
    let new_venue = into_new_venue(venue);
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::{venue_genres::dsl as vg_dsl, venues::dsl as v_dsl};
        // Update venue
        diesel::update(v_dsl::venues.filter(v_dsl::rowid.eq(venue_rowid)))
            .set(&new_venue)
            .execute(conn)?;
        // Update venue genres
        let genres_diff = {
            let old_genres = vg_dsl::venue_genres
                .select(vg_dsl::genre)
                .filter(vg_dsl::venue_rowid.eq(venue_rowid))
                .load(conn)?;
            util::genres_diff(&old_genres, &venue.genres)
        };
        diesel::delete(
            vg_dsl::venue_genres
                .filter(vg_dsl::venue_rowid.eq(venue_rowid))
                .filter(vg_dsl::genre.eq_any(&genres_diff.deleted)),
        )
        .execute(conn)?;
        {
            let new_genres: Vec<_> = genres_diff
                .added
                .iter()
                .map(|genre| models::NewVenueGenre { venue_rowid, genre })
                .collect();
            diesel::insert_or_ignore_into(vg_dsl::venue_genres)
                .values(&new_genres)
                .execute(conn)?;
        }
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

// The caller must have deleted the venue's shows beforehand,
// within the same transaction.
fn delete_venue(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::{venue_genres::dsl as vg_dsl, venues::dsl as v_dsl};
    let venue_rowid = resolve_venue_rowid(conn, id)?;
    diesel::delete(vg_dsl::venue_genres.filter(vg_dsl::venue_rowid.eq(venue_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let count = diesel::delete(v_dsl::venues.filter(v_dsl::rowid.eq(venue_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(count, 1);
    Ok(())
}

fn get_venue(conn: &mut SqliteConnection, id: &str) -> Result<Venue> {
    use schema::venues::dsl;
    let entity = dsl::venues
        .filter(dsl::id.eq(id))
        .first::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?;
    let genres = load_venue_genres(conn, entity.rowid)?;
    Ok(util::venue_from_entity_and_genres(entity, genres))
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::{venue_genres::dsl as vg_dsl, venues::dsl as v_dsl};
    let entities = v_dsl::venues
        .order_by(v_dsl::rowid)
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?;
    let genre_rels = vg_dsl::venue_genres
        .order_by(vg_dsl::genre)
        .load::<models::VenueGenre>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities
        .into_iter()
        .map(|entity| {
            let genres = genre_rels
                .iter()
                .filter(|rel| rel.venue_rowid == entity.rowid)
                .map(|rel| rel.genre.clone())
                .collect();
            util::venue_from_entity_and_genres(entity, genres)
        })
        .collect())
}

fn count_venues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn venues_by_name(conn: &mut SqliteConnection, name_part: &str) -> Result<Vec<Venue>> {
    use schema::{venue_genres::dsl as vg_dsl, venues::dsl as v_dsl};
    // LIKE folds ASCII case in SQLite.
    let pattern = format!("%{name_part}%");
    let entities = v_dsl::venues
        .filter(v_dsl::name.like(pattern))
        .order_by(v_dsl::rowid)
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?;
    let genre_rels = vg_dsl::venue_genres
        .order_by(vg_dsl::genre)
        .load::<models::VenueGenre>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities
        .into_iter()
        .map(|entity| {
            let genres = genre_rels
                .iter()
                .filter(|rel| rel.venue_rowid == entity.rowid)
                .map(|rel| rel.genre.clone())
                .collect();
            util::venue_from_entity_and_genres(entity, genres)
        })
        .collect())
}
