//! Trip length, given directly or as a pair of dates.

use chrono::NaiveDate;

/// Error returned when a trip would last less than one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("trip must last at least one day, got {days}")]
pub struct InvalidDuration {
    pub days: i64,
}

/// How long the traveller stays.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_planner::domain::TripLength;
///
/// assert_eq!(TripLength::Days(7).days(), Ok(7));
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(TripLength::Dates { check_in, check_out }.days(), Ok(4));
///
/// // Checking out on the day of arrival is not a trip.
/// assert!(TripLength::Dates { check_in, check_out: check_in }.days().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripLength {
    Days(u32),
    Dates {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

impl TripLength {
    /// Number of days (and nights) the trip lasts; at least one.
    pub fn days(&self) -> Result<u32, InvalidDuration> {
        let days = match *self {
            TripLength::Days(n) => i64::from(n),
            TripLength::Dates {
                check_in,
                check_out,
            } => (check_out - check_in).num_days(),
        };

        if days < 1 {
            return Err(InvalidDuration { days });
        }
        u32::try_from(days).map_err(|_| InvalidDuration { days })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Dates resolve to the number of days between them
        #[test]
        fn dates_match_offset(start in 0i64..20_000, offset in 1i64..60) {
            let check_in = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(start);
            let check_out = check_in + chrono::Duration::days(offset);
            let length = TripLength::Dates { check_in, check_out };
            prop_assert_eq!(length.days(), Ok(offset as u32));
        }

        /// Reversed or equal dates never resolve
        #[test]
        fn reversed_dates_fail(start in 0i64..20_000, offset in 0i64..60) {
            let check_out = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + chrono::Duration::days(start);
            let check_in = check_out + chrono::Duration::days(offset);
            let length = TripLength::Dates { check_in, check_out };
            prop_assert!(length.days().is_err());
        }
    }
}
