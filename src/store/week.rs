use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Which weekday opens the calendar week. Mirrors the choices offered in
/// the scheduling settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Monday,
    Saturday,
    Sunday,
}

impl WeekStart {
    pub const ALL: [WeekStart; 3] = [WeekStart::Monday, WeekStart::Saturday, WeekStart::Sunday];

    pub fn as_str(self) -> &'static str {
        match self {
            WeekStart::Monday => "monday",
            WeekStart::Saturday => "saturday",
            WeekStart::Sunday => "sunday",
        }
    }

    /// Lenient parse for values coming out of a select element. Anything
    /// unrecognized falls back to Monday.
    pub fn parse(value: &str) -> WeekStart {
        match value {
            "saturday" => WeekStart::Saturday,
            "sunday" => WeekStart::Sunday,
            _ => WeekStart::Monday,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            WeekStart::Monday => "common.monday",
            WeekStart::Saturday => "common.saturday",
            WeekStart::Sunday => "common.sunday",
        }
    }

    pub(crate) fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Saturday => Weekday::Sat,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest day on or before `reference` that falls on the configured start
/// weekday. A reference already on the start day maps to itself.
pub fn start_of_week(reference: NaiveDate, start: WeekStart) -> NaiveDate {
    let back = (reference.weekday().num_days_from_monday() + 7
        - start.weekday().num_days_from_monday())
        % 7;
    reference - Duration::days(i64::from(back))
}

/// Seven consecutive days starting at the week containing `reference`.
pub fn week_window(reference: NaiveDate, start: WeekStart) -> [NaiveDate; 7] {
    let first = start_of_week(reference, start);
    std::array::from_fn(|i| first + Duration::days(i as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_is_seven_consecutive_days() {
        let days = week_window(day(2023, 6, 14), WeekStart::Monday);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn window_contains_reference_and_starts_on_configured_day() {
        let reference = day(2023, 6, 14);
        for start in WeekStart::ALL {
            let days = week_window(reference, start);
            assert_eq!(days[0].weekday(), start.weekday());
            assert!(days.contains(&reference));
            assert!(days[0] <= reference);
        }
    }

    #[test]
    fn reference_on_start_day_opens_the_window() {
        assert_eq!(
            week_window(day(2023, 6, 12), WeekStart::Monday)[0],
            day(2023, 6, 12)
        );
        assert_eq!(
            week_window(day(2023, 6, 17), WeekStart::Saturday)[0],
            day(2023, 6, 17)
        );
        assert_eq!(
            week_window(day(2023, 6, 18), WeekStart::Sunday)[0],
            day(2023, 6, 18)
        );
    }

    #[test]
    fn saturday_and_sunday_weeks_wrap_correctly() {
        // Wednesday 2023-06-14
        let reference = day(2023, 6, 14);
        assert_eq!(start_of_week(reference, WeekStart::Saturday), day(2023, 6, 10));
        assert_eq!(start_of_week(reference, WeekStart::Sunday), day(2023, 6, 11));
    }

    #[test]
    fn moving_the_reference_a_week_shifts_the_window_a_week() {
        let reference = day(2023, 6, 14);
        let this_week = week_window(reference, WeekStart::Monday);
        let next_week = week_window(reference + Duration::days(7), WeekStart::Monday);
        for (a, b) in this_week.iter().zip(next_week.iter()) {
            assert_eq!(*b - *a, Duration::days(7));
        }
    }

    #[test]
    fn parse_falls_back_to_monday() {
        assert_eq!(WeekStart::parse("sunday"), WeekStart::Sunday);
        assert_eq!(WeekStart::parse("saturday"), WeekStart::Saturday);
        assert_eq!(WeekStart::parse("tuesday"), WeekStart::Monday);
        assert_eq!(WeekStart::parse(""), WeekStart::Monday);
    }
}
