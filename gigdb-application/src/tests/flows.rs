use super::prelude::*;

#[test]
fn create_venue_and_fetch_it_back_unchanged() {
    let fixture = BackendFixture::new();
    let created = fixture.create_venue(usecases::NewVenue {
        facebook_url: Some("https://facebook.com/fillmore".into()),
        seeking_talent: true,
        seeking_description: Some("Local acts welcome".into()),
        ..default_new_venue()
    });
    let fetched = fixture.try_get_venue(created.id.as_str()).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "The Fillmore");
    assert_eq!(fetched.city, "San Francisco");
    assert_eq!(fetched.state, "CA");
    assert_eq!(fetched.genres, vec!["Rock n Roll"]);
    assert!(fetched.seeking_talent);
    assert_eq!(
        fetched.seeking_description.as_deref(),
        Some("Local acts welcome")
    );
}

#[test]
fn create_venue_without_name_fails() {
    let fixture = BackendFixture::new();
    let err = flows::create_venue(
        &fixture.db_connections,
        usecases::NewVenue {
            name: "  ".into(),
            ..default_new_venue()
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(crate::error::BError::Parameter(usecases::Error::Name))
    ));
}

#[test]
fn update_venue_overwrites_all_fields() {
    let fixture = BackendFixture::new();
    let created = fixture.create_venue(default_new_venue());
    flows::update_venue(
        &fixture.db_connections,
        created.id.clone(),
        usecases::NewVenue {
            name: "The Fillmore West".into(),
            genres: vec!["Jazz".into(), "Soul".into()],
            facebook_url: Some("https://facebook.com/fillmore-west".into()),
            ..default_new_venue()
        },
    )
    .unwrap();
    let fetched = fixture.try_get_venue(created.id.as_str()).unwrap();
    assert_eq!(fetched.name, "The Fillmore West");
    assert_eq!(fetched.genres, vec!["Jazz", "Soul"]);
    assert_eq!(
        fetched.facebook_url.as_deref(),
        Some("https://facebook.com/fillmore-west")
    );
}

#[test]
fn update_unknown_venue_fails_with_not_found() {
    let fixture = BackendFixture::new();
    let err = flows::update_venue(
        &fixture.db_connections,
        Id::new(),
        default_new_venue(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(crate::error::BError::Parameter(usecases::Error::Repo(
            RepoError::NotFound
        )))
    ));
}

#[test]
fn venue_page_partitions_upcoming_show() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let now = "2026-01-01T00:00:00".parse::<Timestamp>().unwrap();
    let page = usecases::venue_page(&db, venue.id.as_str(), now).unwrap();
    assert_eq!(page.upcoming.len(), 1);
    assert_eq!(page.past.len(), 0);
    assert_eq!(page.upcoming[0].artist_id, artist.id);
    assert_eq!(page.upcoming[0].artist_name, "The Who");
    assert_eq!(
        page.upcoming[0].start_time.to_string(),
        "2030-01-01 20:00:00"
    );
}

#[test]
fn venue_page_partitions_past_show() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2000-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let now = "2026-01-01T00:00:00".parse::<Timestamp>().unwrap();
    let page = usecases::venue_page(&db, venue.id.as_str(), now).unwrap();
    assert_eq!(page.past.len(), 1);
    assert_eq!(page.upcoming.len(), 0);
}

#[test]
fn artist_page_resolves_venue_side() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let now = "2026-01-01T00:00:00".parse::<Timestamp>().unwrap();
    let page = usecases::artist_page(&db, artist.id.as_str(), now).unwrap();
    assert_eq!(page.upcoming.len(), 1);
    assert_eq!(page.upcoming[0].venue_id, venue.id);
    assert_eq!(page.upcoming[0].venue_name, "The Fillmore");
}

#[test]
fn delete_venue_removes_venue_and_all_of_its_shows() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");
    fixture.create_show(&venue.id, &artist.id, "2030-02-01T20:00:00");
    assert_eq!(fixture.all_shows().len(), 2);

    flows::delete_venue(&fixture.db_connections, &venue.id).unwrap();

    assert!(!fixture.venue_exists(venue.id.as_str()));
    assert!(fixture.all_shows().is_empty());
    // The artist is not part of the cascade.
    assert!(fixture.try_get_artist(artist.id.as_str()).is_some());
}

#[test]
fn delete_unknown_venue_fails_and_changes_nothing() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let err = flows::delete_venue(&fixture.db_connections, &Id::new()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(crate::error::BError::Parameter(usecases::Error::Repo(
            RepoError::NotFound
        )))
    ));
    assert!(fixture.venue_exists(venue.id.as_str()));
}

#[test]
fn create_show_against_missing_artist_is_rolled_back() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let result = flows::create_show(
        &fixture.db_connections,
        usecases::NewShow {
            venue_id: venue.id.to_string(),
            artist_id: Id::new().to_string(),
            start_time: "2030-01-01T20:00:00".into(),
        },
    );
    assert!(result.is_err());
    assert!(fixture.all_shows().is_empty());
}

#[test]
fn create_show_with_unparsable_start_time_fails() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    let err = flows::create_show(
        &fixture.db_connections,
        usecases::NewShow {
            venue_id: venue.id.to_string(),
            artist_id: artist.id.to_string(),
            start_time: "next friday".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(crate::error::BError::Parameter(usecases::Error::StartTime))
    ));
}

#[test]
fn venue_search_is_case_insensitive_and_counts_upcoming_shows() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");
    fixture.create_show(&venue.id, &artist.id, "2000-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let now = "2026-01-01T00:00:00".parse::<Timestamp>().unwrap();
    let results = usecases::search_venues(&db, "fill", now).unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.items[0].name, "The Fillmore");
    assert_eq!(results.items[0].num_upcoming_shows, 1);

    let no_results = usecases::search_venues(&db, "bowl", now).unwrap();
    assert_eq!(no_results.count, 0);
}

#[test]
fn artist_search_matches_substring() {
    let fixture = BackendFixture::new();
    fixture.create_artist(default_new_artist());
    let db = fixture.db_connections.shared().unwrap();
    let now = Timestamp::now();
    let results = usecases::search_artists(&db, "who", now).unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.items[0].name, "The Who");
}

#[test]
fn venue_directory_groups_by_locale() {
    let fixture = BackendFixture::new();
    fixture.create_venue(default_new_venue());
    fixture.create_venue(usecases::NewVenue {
        name: "Bottom of the Hill".into(),
        ..default_new_venue()
    });
    fixture.create_venue(usecases::NewVenue {
        name: "Park West".into(),
        city: "Chicago".into(),
        state: "IL".into(),
        ..default_new_venue()
    });

    let db = fixture.db_connections.shared().unwrap();
    let groups = usecases::venue_directory(&db, Timestamp::now()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].city, "San Francisco");
    assert_eq!(groups[0].venues.len(), 2);
    assert_eq!(groups[1].city, "Chicago");
    assert_eq!(groups[1].venues.len(), 1);
}

#[test]
fn directory_stats_count_all_entities() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let stats = usecases::directory_stats(&db).unwrap();
    assert_eq!(stats.venue_count, 1);
    assert_eq!(stats.artist_count, 1);
    assert_eq!(stats.show_count, 1);
}

#[test]
fn show_listing_is_chronological_and_fully_resolved() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(&venue.id, &artist.id, "2030-02-01T20:00:00");
    fixture.create_show(&venue.id, &artist.id, "2030-01-01T20:00:00");

    let db = fixture.db_connections.shared().unwrap();
    let listings = usecases::show_directory(&db).unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].start_time.to_string(), "2030-01-01 20:00:00");
    assert_eq!(listings[0].venue_name, "The Fillmore");
    assert_eq!(listings[0].artist_name, "The Who");
    assert_eq!(listings[1].start_time.to_string(), "2030-02-01 20:00:00");
}
