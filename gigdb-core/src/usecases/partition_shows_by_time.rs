use crate::entities::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowPartition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

/// Split shows into past and upcoming relative to `now`.
///
/// A show is upcoming iff its start time is strictly after `now`,
/// past otherwise. Every show ends up in exactly one half.
pub fn partition_shows_by_time<T, F>(shows: Vec<T>, now: Timestamp, start_time: F) -> ShowPartition<T>
where
    F: Fn(&T) -> Timestamp,
{
    let mut partition = ShowPartition {
        past: Vec::new(),
        upcoming: Vec::new(),
    };
    for show in shows {
        if start_time(&show) > now {
            partition.upcoming.push(show);
        } else {
            partition.past.push(show);
        }
    }
    partition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_is_complete_and_disjoint() {
        let now = Timestamp::from_secs(100);
        let shows = vec![
            Timestamp::from_secs(50),
            Timestamp::from_secs(100),
            Timestamp::from_secs(101),
            Timestamp::from_secs(150),
        ];
        let ShowPartition { past, upcoming } =
            partition_shows_by_time(shows.clone(), now, |ts| *ts);
        assert_eq!(past.len() + upcoming.len(), shows.len());
        assert!(past.iter().all(|ts| *ts <= now));
        assert!(upcoming.iter().all(|ts| *ts > now));
    }

    #[test]
    fn show_starting_exactly_now_is_past() {
        let now = Timestamp::from_secs(100);
        let ShowPartition { past, upcoming } =
            partition_shows_by_time(vec![Timestamp::from_secs(100)], now, |ts| *ts);
        assert_eq!(past.len(), 1);
        assert!(upcoming.is_empty());
    }

    #[test]
    fn input_order_is_preserved_within_each_half() {
        let now = Timestamp::from_secs(0);
        let shows = vec![
            Timestamp::from_secs(3),
            Timestamp::from_secs(1),
            Timestamp::from_secs(2),
        ];
        let ShowPartition { upcoming, .. } = partition_shows_by_time(shows, now, |ts| *ts);
        assert_eq!(
            upcoming,
            vec![
                Timestamp::from_secs(3),
                Timestamp::from_secs(1),
                Timestamp::from_secs(2)
            ]
        );
    }
}
