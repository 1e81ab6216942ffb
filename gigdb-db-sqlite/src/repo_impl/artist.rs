use super::*;

impl ArtistRepo for DbReadOnly<'_> {
    fn create_artist(&self, _artist: Artist) -> Result<()> {
        unreachable!();
    }
    fn update_artist(&self, _artist: &Artist) -> Result<()> {
        unreachable!();
    }

    fn get_artist(&self, id: &str) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<Artist>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_part: &str) -> Result<Vec<Artist>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

impl ArtistRepo for DbReadWrite<'_> {
    fn create_artist(&self, artist: Artist) -> Result<()> {
        create_artist(&mut self.conn.borrow_mut(), artist)
    }
    fn update_artist(&self, artist: &Artist) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), artist)
    }

    fn get_artist(&self, id: &str) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<Artist>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_part: &str) -> Result<Vec<Artist>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

impl ArtistRepo for DbConnection<'_> {
    fn create_artist(&self, artist: Artist) -> Result<()> {
        create_artist(&mut self.conn.borrow_mut(), artist)
    }
    fn update_artist(&self, artist: &Artist) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), artist)
    }

    fn get_artist(&self, id: &str) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<Artist>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_part: &str) -> Result<Vec<Artist>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_part)
    }
}

fn into_new_artist(artist: &Artist) -> models::NewArtist<'_> {
    models::NewArtist {
        id: artist.id.as_ref(),
        name: &artist.name,
        city: &artist.city,
        state: &artist.state,
        phone: &artist.phone,
        image_url: &artist.image_url,
        facebook_url: artist.facebook_url.as_deref(),
        website_url: artist.website_url.as_deref(),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.as_deref(),
    }
}

fn create_artist(conn: &mut SqliteConnection, artist: Artist) -> Result<()> {
    let new_artist = into_new_artist(&artist);
    conn.transaction::<_, DieselError, _>(|conn| {
        // Insert artist
        diesel::insert_into(schema::artists::table)
            .values(&new_artist)
            .execute(conn)?;
        let artist_rowid = resolve_artist_rowid(conn, &artist.id).map_err(|err| {
            log::warn!(
                "Failed to resolve id of newly created artist {}: {}",
                artist.id,
                err,
            );
            DieselError::RollbackTransaction
        })?;
        // Insert artist genres
        let genres: Vec<_> = artist
            .genres
            .iter()
            .map(|genre| models::NewArtistGenre { artist_rowid, genre })
            .collect();
        diesel::insert_or_ignore_into(schema::artist_genres::table)
            .values(&genres)
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn update_artist(conn: &mut SqliteConnection, artist: &Artist) -> Result<()> {
    let artist_rowid = resolve_artist_rowid(conn, &artist.id)?;
    let new_artist = into_new_artist(artist);
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::{artist_genres::dsl as ag_dsl, artists::dsl as a_dsl};
        // Update artist
        diesel::update(a_dsl::artists.filter(a_dsl::rowid.eq(artist_rowid)))
            .set(&new_artist)
            .execute(conn)?;
        // Update artist genres
        let genres_diff = {
            let old_genres = ag_dsl::artist_genres
                .select(ag_dsl::genre)
                .filter(ag_dsl::artist_rowid.eq(artist_rowid))
                .load(conn)?;
            util::genres_diff(&old_genres, &artist.genres)
        };
        diesel::delete(
            ag_dsl::artist_genres
                .filter(ag_dsl::artist_rowid.eq(artist_rowid))
                .filter(ag_dsl::genre.eq_any(&genres_diff.deleted)),
        )
        .execute(conn)?;
        {
            let new_genres: Vec<_> = genres_diff
                .added
                .iter()
                .map(|genre| models::NewArtistGenre { artist_rowid, genre })
                .collect();
            diesel::insert_or_ignore_into(ag_dsl::artist_genres)
                .values(&new_genres)
                .execute(conn)?;
        }
        Ok(())
    })
    .map_err(from_diesel_err)?;
    Ok(())
}

fn get_artist(conn: &mut SqliteConnection, id: &str) -> Result<Artist> {
    use schema::artists::dsl;
    let entity = dsl::artists
        .filter(dsl::id.eq(id))
        .first::<models::ArtistEntity>(conn)
        .map_err(from_diesel_err)?;
    let genres = load_artist_genres(conn, entity.rowid)?;
    Ok(util::artist_from_entity_and_genres(entity, genres))
}

fn all_artists(conn: &mut SqliteConnection) -> Result<Vec<Artist>> {
    use schema::{artist_genres::dsl as ag_dsl, artists::dsl as a_dsl};
    let entities = a_dsl::artists
        .order_by(a_dsl::rowid)
        .load::<models::ArtistEntity>(conn)
        .map_err(from_diesel_err)?;
    let genre_rels = ag_dsl::artist_genres
        .order_by(ag_dsl::genre)
        .load::<models::ArtistGenre>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities
        .into_iter()
        .map(|entity| {
            let genres = genre_rels
                .iter()
                .filter(|rel| rel.artist_rowid == entity.rowid)
                .map(|rel| rel.genre.clone())
                .collect();
            util::artist_from_entity_and_genres(entity, genres)
        })
        .collect())
}

fn count_artists(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::artists::dsl;
    Ok(dsl::artists
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn artists_by_name(conn: &mut SqliteConnection, name_part: &str) -> Result<Vec<Artist>> {
    use schema::{artist_genres::dsl as ag_dsl, artists::dsl as a_dsl};
    let pattern = format!("%{name_part}%");
    let entities = a_dsl::artists
        .filter(a_dsl::name.like(pattern))
        .order_by(a_dsl::rowid)
        .load::<models::ArtistEntity>(conn)
        .map_err(from_diesel_err)?;
    let genre_rels = ag_dsl::artist_genres
        .order_by(ag_dsl::genre)
        .load::<models::ArtistGenre>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities
        .into_iter()
        .map(|entity| {
            let genres = genre_rels
                .iter()
                .filter(|rel| rel.artist_rowid == entity.rowid)
                .map(|rel| rel.genre.clone())
                .collect();
            util::artist_from_entity_and_genres(entity, genres)
        })
        .collect())
}
