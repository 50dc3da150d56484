// Hotel stay dates around the concert
use crate::models::{TripInput, TripInputError};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelWindow {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl TravelWindow {
    // Check-in `days_before` the concert, check-out the morning after the last extra day.
    pub fn from_trip(trip: &TripInput) -> Result<Self, TripInputError> {
        let concert = trip.concert_date()?;
        let out_of_range = || TripInputError::InvalidDate(trip.concert_date.clone());

        let check_in = concert
            .checked_sub_days(Days::new(u64::from(trip.days_before)))
            .ok_or_else(out_of_range)?;
        let check_out = concert
            .checked_add_days(Days::new(u64::from(trip.days_after) + 1))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    // Midnight UTC of both dates in nanoseconds since the epoch
    pub fn to_nanos(&self) -> Option<(i64, i64)> {
        let nanos = |date: NaiveDate| date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_nanos_opt();
        Some((nanos(self.check_in)?, nanos(self.check_out)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn trip(date: &str, before: u32, after: u32) -> TripInput {
        TripInput {
            concert_date: date.to_string(),
            days_before: before,
            days_after: after,
            ..Default::default()
        }
    }

    #[test_case(0, 0, "2025-07-12", "2025-07-13"; "#1 concert night only")]
    #[test_case(2, 1, "2025-07-10", "2025-07-14"; "#2 days either side")]
    #[test_case(1, 0, "2025-07-11", "2025-07-13"; "#3 arrive a day early")]
    fn test_window_dates(before: u32, after: u32, check_in: &str, check_out: &str) {
        let trip = trip("2025-07-12", before, after);
        let window = TravelWindow::from_trip(&trip).unwrap();

        assert_eq!(window.check_in, check_in.parse::<NaiveDate>().unwrap());
        assert_eq!(window.check_out, check_out.parse::<NaiveDate>().unwrap());
        assert_eq!(window.nights(), trip.nights() as i64);
    }

    #[test]
    fn test_window_crosses_month_end() {
        let window = TravelWindow::from_trip(&trip("2025-03-01", 2, 0)).unwrap();
        assert_eq!(window.check_in, NaiveDate::from_ymd_opt(2025, 2, 27).unwrap());
    }

    #[test]
    fn test_window_requires_valid_date() {
        let result = TravelWindow::from_trip(&trip("next friday", 0, 0));
        assert_eq!(result, Err(TripInputError::InvalidDate("next friday".to_string())));
    }

    #[test]
    fn test_window_rejects_days_beyond_calendar() {
        let result = TravelWindow::from_trip(&trip("2025-07-12", u32::MAX, 0));
        assert_eq!(result, Err(TripInputError::InvalidDate("2025-07-12".to_string())));
    }

    #[test]
    fn test_window_nanos() {
        let window = TravelWindow::from_trip(&trip("1970-01-01", 0, 0)).unwrap();
        assert_eq!(window.to_nanos(), Some((0, 86_400_000_000_000)));
    }
}
