use super::{num_upcoming_shows_of_venue, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: Id,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Group venues by `(city, state)` for the directory listing.
///
/// Two venues share a group iff city and state match exactly
/// (case-sensitive). Groups appear in first-occurrence order of
/// their locale in the input, venues keep their input order within
/// each group.
pub fn group_venues_by_locale(
    venues: Vec<Venue>,
    shows: &[Show],
    now: Timestamp,
) -> Vec<LocaleGroup> {
    let mut groups: Vec<LocaleGroup> = Vec::new();
    for venue in venues {
        let summary = VenueSummary {
            num_upcoming_shows: num_upcoming_shows_of_venue(shows, &venue.id, now),
            id: venue.id,
            name: venue.name,
        };
        match groups.iter_mut().find(|group| {
            (group.city.as_str(), group.state.as_str())
                == (venue.city.as_str(), venue.state.as_str())
        }) {
            Some(group) => group.venues.push(summary),
            None => groups.push(LocaleGroup {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigdb_entities::builders::*;

    fn venue(name: &str, city: &str, state: &str) -> Venue {
        Venue::build().name(name).city(city).state(state).finish()
    }

    fn show_at(venue_id: &Id, secs: i64) -> Show {
        Show::build()
            .venue_id(venue_id.as_str())
            .artist_id("some-artist")
            .start_time(Timestamp::from_secs(secs))
            .finish()
    }

    #[test]
    fn venues_with_equal_locale_share_a_group() {
        let groups = group_venues_by_locale(
            vec![
                venue("The Fillmore", "San Francisco", "CA"),
                venue("Bottom of the Hill", "San Francisco", "CA"),
            ],
            &[],
            Timestamp::from_secs(0),
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].venues.len(), 2);
    }

    #[test]
    fn venues_with_differing_locale_end_up_in_different_groups() {
        let groups = group_venues_by_locale(
            vec![
                venue("The Fillmore", "San Francisco", "CA"),
                venue("Park West", "Chicago", "IL"),
            ],
            &[],
            Timestamp::from_secs(0),
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].venues.len(), 1);
        assert_eq!(groups[1].venues.len(), 1);
    }

    #[test]
    fn locale_equality_is_case_sensitive() {
        let groups = group_venues_by_locale(
            vec![
                venue("A", "San Francisco", "CA"),
                venue("B", "san francisco", "CA"),
            ],
            &[],
            Timestamp::from_secs(0),
        );
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn group_order_follows_first_occurrence() {
        let groups = group_venues_by_locale(
            vec![
                venue("A", "Chicago", "IL"),
                venue("B", "New York", "NY"),
                venue("C", "Chicago", "IL"),
            ],
            &[],
            Timestamp::from_secs(0),
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "Chicago");
        assert_eq!(groups[1].city, "New York");
        assert_eq!(groups[0].venues.len(), 2);
    }

    #[test]
    fn upcoming_count_only_counts_strictly_future_shows() {
        let v = venue("The Fillmore", "San Francisco", "CA");
        let now = Timestamp::from_secs(1_000);
        let shows = vec![
            show_at(&v.id, 999),   // past
            show_at(&v.id, 1_000), // exactly now counts as past
            show_at(&v.id, 1_001), // upcoming
            show_at(&v.id, 2_000), // upcoming
        ];
        let groups = group_venues_by_locale(vec![v], &shows, now);
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 2);
    }

    #[test]
    fn shows_of_other_venues_do_not_count() {
        let v1 = venue("A", "Chicago", "IL");
        let v2 = venue("B", "Chicago", "IL");
        let now = Timestamp::from_secs(0);
        let shows = vec![show_at(&v2.id, 100)];
        let groups = group_venues_by_locale(vec![v1, v2], &shows, now);
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 0);
        assert_eq!(groups[0].venues[1].num_upcoming_shows, 1);
    }
}
