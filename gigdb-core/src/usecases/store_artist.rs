use super::{optional_param, prelude::*};

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct NewArtist {
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub phone               : String,
    pub image_url           : String,
    pub facebook_url        : Option<String>,
    pub website_url         : Option<String>,
    pub genres              : Vec<String>,
    pub seeking_venue       : bool,
    pub seeking_description : Option<String>,
}

pub fn create_artist<R: ArtistRepo>(repo: &R, new_artist: NewArtist) -> Result<Artist> {
    let artist = artist_from_params(Id::new(), new_artist)?;
    repo.create_artist(artist.clone())?;
    Ok(artist)
}

// Full overwrite of all fields. Fails with `NotFound` for unknown ids.
pub fn update_artist<R: ArtistRepo>(repo: &R, id: Id, new_artist: NewArtist) -> Result<Artist> {
    let artist = artist_from_params(id, new_artist)?;
    repo.update_artist(&artist)?;
    Ok(artist)
}

fn artist_from_params(id: Id, new_artist: NewArtist) -> Result<Artist> {
    let NewArtist {
        name,
        city,
        state,
        phone,
        image_url,
        facebook_url,
        website_url,
        genres,
        seeking_venue,
        seeking_description,
    } = new_artist;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let genres = super::prepare_genre_list(genres.iter().map(String::as_str));
    Ok(Artist {
        id,
        name,
        city,
        state,
        phone,
        image_url,
        facebook_url: optional_param(facebook_url),
        website_url: optional_param(website_url),
        genres,
        seeking_venue,
        seeking_description: optional_param(seeking_description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_requires_a_name() {
        let err = artist_from_params(Id::new(), NewArtist::default()).unwrap_err();
        assert!(matches!(err, Error::Name));
    }

    #[test]
    fn artist_blank_website_becomes_none() {
        let artist = artist_from_params(
            Id::new(),
            NewArtist {
                name: "The Who".into(),
                website_url: Some(" ".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(artist.website_url, None);
    }
}
