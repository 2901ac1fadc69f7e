//! Time slots offered by the booking widget.
//!
//! The remaining-capacity figure is a display placeholder: it is drawn at
//! random on every request and is not backed by any reservation count.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;
use shared::{SlotAvailability, TimeSlot};

pub const WEEKDAY_SCHEDULE: [&str; 6] = ["09:00", "10:30", "13:00", "15:00", "17:00", "19:00"];
pub const WEEKEND_SCHEDULE: [&str; 10] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

pub const SLOT_CAPACITY: u32 = 20;
/// Upper bound of the random "already booked" figure
const MAX_PLACEHOLDER_BOOKED: u32 = 7;
pub const DEFAULT_BOOKING_HORIZON_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub struct SlotService {
    horizon_days: i64,
}

impl Default for SlotService {
    fn default() -> Self {
        Self::new(DEFAULT_BOOKING_HORIZON_DAYS)
    }
}

impl SlotService {
    pub fn new(horizon_days: i64) -> Self {
        Self { horizon_days }
    }

    pub fn horizon_days(&self) -> i64 {
        self.horizon_days
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn schedule_for(date: NaiveDate) -> &'static [&'static str] {
        if Self::is_weekend(date) {
            &WEEKEND_SCHEDULE
        } else {
            &WEEKDAY_SCHEDULE
        }
    }

    /// Is `date` further out than bookings are taken
    pub fn is_beyond_horizon(&self, date: NaiveDate, today: NaiveDate) -> bool {
        (date - today).num_days() > self.horizon_days
    }

    /// Is `time` one of the slots scheduled on `date`
    pub fn is_offered(date: NaiveDate, time: &str) -> bool {
        Self::schedule_for(date).contains(&time)
    }

    /// Slots for `date` using the thread-local RNG
    pub fn generate(&self, date: NaiveDate, today: NaiveDate) -> SlotAvailability {
        self.generate_with(date, today, &mut rand::thread_rng())
    }

    /// Slots for `date`. Past dates are not rejected here.
    pub fn generate_with<R: Rng>(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        rng: &mut R,
    ) -> SlotAvailability {
        let date_str = date.format("%Y-%m-%d").to_string();

        if self.is_beyond_horizon(date, today) {
            return SlotAvailability::TooFar {
                date: date_str,
                max_days: self.horizon_days,
            };
        }

        let slots = Self::schedule_for(date)
            .iter()
            .map(|time| {
                let booked = rng.gen_range(0..=MAX_PLACEHOLDER_BOOKED);
                let available = SLOT_CAPACITY - booked;
                TimeSlot {
                    time: time.to_string(),
                    display_time: Self::format_time_for_display(time),
                    capacity_total: SLOT_CAPACITY,
                    capacity_available: available,
                    is_available: available > 0,
                }
            })
            .collect();

        SlotAvailability::Open {
            date: date_str,
            is_weekend: Self::is_weekend(date),
            slots,
        }
    }

    /// "13:00" -> "1:00 PM". Anything that is not HH:MM comes back unchanged.
    pub fn format_time_for_display(time: &str) -> String {
        let Some((hours, minutes)) = time.split_once(':') else {
            return time.to_string();
        };
        let Ok(hour) = hours.parse::<u32>() else {
            return time.to_string();
        };

        let suffix = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{} {}", display_hour, minutes, suffix)
    }

    /// The quick-pick "this weekend" date: the coming Saturday, or the next
    /// one when today is already a Saturday.
    pub fn next_weekend(today: NaiveDate) -> NaiveDate {
        let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
        let days_to_add = match 6 - days_from_sunday {
            0 => 7,
            n => n,
        };
        today + Duration::days(days_to_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_saturday_ten_days_out_gets_weekend_schedule() {
        let service = SlotService::default();
        let today = date("2026-10-14");
        let saturday = date("2026-10-24");
        let mut rng = StdRng::seed_from_u64(7);

        let availability = service.generate_with(saturday, today, &mut rng);

        assert!(!availability.is_too_far());
        let times: Vec<&str> = availability.slots().iter().map(|s| s.time.as_str()).collect();
        assert_eq!(times, WEEKEND_SCHEDULE.to_vec());
        match availability {
            SlotAvailability::Open { is_weekend, .. } => assert!(is_weekend),
            other => panic!("Expected open slots, got {:?}", other),
        }
    }

    #[test]
    fn test_weekday_schedule() {
        let service = SlotService::default();
        let monday = date("2026-10-19");
        let availability = service.generate(monday, monday);

        assert_eq!(availability.slots().len(), 6);
        assert_eq!(availability.slots()[1].time, "10:30");
        assert_eq!(availability.slots()[1].display_time, "10:30 AM");
    }

    #[test]
    fn test_forty_five_days_out_is_too_far() {
        let service = SlotService::default();
        let today = date("2026-10-19");
        let availability = service.generate(today + Duration::days(45), today);

        assert!(availability.is_too_far());
        assert!(availability.slots().is_empty());
        assert_eq!(
            availability,
            SlotAvailability::TooFar { date: "2026-12-03".to_string(), max_days: 30 }
        );
    }

    #[test]
    fn test_horizon_boundary() {
        let service = SlotService::default();
        let today = date("2026-10-19");
        assert!(!service.is_beyond_horizon(today + Duration::days(30), today));
        assert!(service.is_beyond_horizon(today + Duration::days(31), today));
    }

    #[test]
    fn test_capacity_placeholder_stays_in_range() {
        let service = SlotService::default();
        let today = date("2026-10-19");
        let mut rng = StdRng::seed_from_u64(42);

        for offset in 0..14 {
            let availability = service.generate_with(today + Duration::days(offset), today, &mut rng);
            for slot in availability.slots() {
                assert_eq!(slot.capacity_total, 20);
                assert!(slot.capacity_available >= 13 && slot.capacity_available <= 20);
                assert!(slot.is_available);
            }
        }
    }

    #[test]
    fn test_is_offered() {
        let monday = date("2026-10-19");
        let saturday = date("2026-10-24");
        assert!(SlotService::is_offered(monday, "10:30"));
        assert!(!SlotService::is_offered(monday, "10:00"));
        assert!(SlotService::is_offered(saturday, "10:00"));
        assert!(!SlotService::is_offered(saturday, "19:00"));
    }

    #[test]
    fn test_format_time_for_display() {
        assert_eq!(SlotService::format_time_for_display("13:00"), "1:00 PM");
        assert_eq!(SlotService::format_time_for_display("09:00"), "9:00 AM");
        assert_eq!(SlotService::format_time_for_display("12:00"), "12:00 PM");
        assert_eq!(SlotService::format_time_for_display("00:30"), "12:30 AM");
        assert_eq!(SlotService::format_time_for_display("noon"), "noon");
    }

    #[test]
    fn test_next_weekend() {
        // Monday -> Saturday of the same week
        assert_eq!(SlotService::next_weekend(date("2026-10-19")), date("2026-10-24"));
        // Friday -> tomorrow
        assert_eq!(SlotService::next_weekend(date("2026-10-23")), date("2026-10-24"));
        // Saturday -> the following Saturday
        assert_eq!(SlotService::next_weekend(date("2026-10-24")), date("2026-10-31"));
        // Sunday -> the coming Saturday
        assert_eq!(SlotService::next_weekend(date("2026-10-25")), date("2026-10-31"));
    }
}
