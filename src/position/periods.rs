use chrono::{Duration, NaiveDate};

/// Label used when input data carries a period outside 1..=24.
pub const UNKNOWN_TIME: &str = "Unknown Time";

/// Maps trading periods 1..=24 to their local wall-clock start times for
/// `local_date`. Index 0 corresponds to period 1.
///
/// The anchor is 23:00 on the day before `local_date`, so the labels run
/// 23:00, 00:00, 01:00, ... 22:00.
///
/// This is a fixed 24-step hour walk. On DST transition days the real
/// trading day has 23 or 25 periods and one bucket is mislabelled or lost;
/// that is the documented contract of the report, not something to patch
/// here. Out-of-range periods in input data are labelled [`UNKNOWN_TIME`]
/// downstream rather than rejected.
pub fn period_time_map(local_date: NaiveDate) -> [String; 24] {
    let anchor = local_date
        .and_hms_opt(23, 0, 0)
        .expect("23:00:00 is a valid wall-clock time")
        - Duration::days(1);

    std::array::from_fn(|i| {
        (anchor + Duration::hours(i as i64))
            .format("%H:%M")
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_label_is_2300_and_last_is_2200() {
        let map = period_time_map(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(map[0], "23:00");
        assert_eq!(map[23], "22:00");
    }

    #[test]
    fn labels_advance_one_hour_modulo_24() {
        let map = period_time_map(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        for i in 0..24 {
            let expected_hour = (23 + i) % 24;
            assert_eq!(map[i], format!("{expected_hour:02}:00"));
        }
    }

    #[test]
    fn map_does_not_depend_on_which_date_is_asked() {
        // The labels are wall-clock only; the date just fixes the anchor day.
        let a = period_time_map(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let b = period_time_map(NaiveDate::from_ymd_opt(2031, 12, 17).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn first_of_month_anchors_on_previous_month() {
        // Anchor is 23:00 on 2024-02-29; a leap day must not break the walk.
        let map = period_time_map(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(map[1], "00:00");
    }

    #[test]
    fn dst_transition_date_still_yields_24_fixed_labels() {
        // 2024-03-31 is the spring-forward date in Europe/London. The fixed
        // scheme deliberately ignores that and still emits 24 hourly labels.
        let map = period_time_map(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(map.len(), 24);
        assert_eq!(map[0], "23:00");
        assert_eq!(map[23], "22:00");
    }
}
