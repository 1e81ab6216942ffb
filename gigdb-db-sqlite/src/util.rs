use gigdb_core::entities::*;

use super::models;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenresDiff {
    pub added: Vec<String>,
    pub deleted: Vec<String>,
}

pub fn genres_diff(old: &[String], new: &[String]) -> GenresDiff {
    let added = new
        .iter()
        .filter(|genre| !old.contains(genre))
        .cloned()
        .collect();
    let deleted = old
        .iter()
        .filter(|genre| !new.contains(genre))
        .cloned()
        .collect();
    GenresDiff { added, deleted }
}

pub fn venue_from_entity_and_genres(
    entity: models::VenueEntity,
    genres: Vec<String>,
) -> Venue {
    let models::VenueEntity {
        id,
        name,
        city,
        state,
        street_address,
        phone,
        image_url,
        facebook_url,
        website_url,
        seeking_talent,
        seeking_description,
        ..
    } = entity;
    Venue {
        id: id.into(),
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
    }
}

pub fn artist_from_entity_and_genres(
    entity: models::ArtistEntity,
    genres: Vec<String>,
) -> Artist {
    let models::ArtistEntity {
        id,
        name,
        city,
        state,
        phone,
        image_url,
        facebook_url,
        website_url,
        seeking_venue,
        seeking_description,
        ..
    } = entity;
    Artist {
        id: id.into(),
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_diff_splits_added_and_deleted() {
        let old = vec!["Blues".to_string(), "Jazz".to_string()];
        let new = vec!["Jazz".to_string(), "Soul".to_string()];
        let diff = genres_diff(&old, &new);
        assert_eq!(diff.added, vec!["Soul"]);
        assert_eq!(diff.deleted, vec!["Blues"]);
    }

    #[test]
    fn genres_diff_of_identical_lists_is_empty() {
        let genres = vec!["Jazz".to_string()];
        assert_eq!(genres_diff(&genres, &genres), GenresDiff::default());
    }
}
