use super::{optional_param, prelude::*};

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct NewVenue {
    pub name                : String,
    pub city                : String,
    pub state               : String,
    pub street_address      : String,
    pub phone               : String,
    pub image_url           : String,
    pub facebook_url        : Option<String>,
    pub website_url         : String,
    pub genres              : Vec<String>,
    pub seeking_talent      : bool,
    pub seeking_description : Option<String>,
}

pub fn create_venue<R: VenueRepo>(repo: &R, new_venue: NewVenue) -> Result<Venue> {
    let venue = venue_from_params(Id::new(), new_venue)?;
    repo.create_venue(venue.clone())?;
    Ok(venue)
}

// Full overwrite of all fields. Fails with `NotFound` for unknown ids.
pub fn update_venue<R: VenueRepo>(repo: &R, id: Id, new_venue: NewVenue) -> Result<Venue> {
    let venue = venue_from_params(id, new_venue)?;
    repo.update_venue(&venue)?;
    Ok(venue)
}

fn venue_from_params(id: Id, new_venue: NewVenue) -> Result<Venue> {
    let NewVenue {
        name,
        city,
        state,
        street_address,
        phone,
        image_url,
        facebook_url,
        website_url,
        genres,
        seeking_talent,
        seeking_description,
    } = new_venue;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::Name);
    }
    let genres = super::prepare_genre_list(genres.iter().map(String::as_str));
    Ok(Venue {
        id,
        name,
        city,
        state,
        street_address,
        phone,
        image_url,
        facebook_url: optional_param(facebook_url),
        website_url,
        genres,
        seeking_talent,
        seeking_description: optional_param(seeking_description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_requires_a_name() {
        let err = venue_from_params(
            Id::new(),
            NewVenue {
                name: "   ".into(),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::Name));
    }

    #[test]
    fn venue_genres_are_normalized() {
        let venue = venue_from_params(
            Id::new(),
            NewVenue {
                name: "The Fillmore".into(),
                genres: vec!["Rock n Roll".into(), " Jazz ".into(), "Jazz".into()],
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(venue.genres, vec!["Jazz", "Rock n Roll"]);
    }

    #[test]
    fn venue_blank_optionals_become_none() {
        let venue = venue_from_params(
            Id::new(),
            NewVenue {
                name: "The Fillmore".into(),
                facebook_url: Some("  ".into()),
                seeking_description: Some("".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(venue.facebook_url, None);
        assert_eq!(venue.seeking_description, None);
    }
}
