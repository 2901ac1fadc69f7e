use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// Transitions are unconstrained: the admin console may move a booking from
/// any status to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = BookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(BookingStatusError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingStatusError {
    Unknown(String),
}

impl fmt::Display for BookingStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatusError::Unknown(value) => write!(f, "Unknown booking status: '{}'", value),
        }
    }
}

impl std::error::Error for BookingStatusError {}

/// A single reservation.
///
/// Records arrive from two places: the local fallback store and the remote
/// spreadsheet service. Rows from the spreadsheet are loosely typed, so every
/// field has a default and timestamps that fail to parse are dropped rather
/// than rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    /// Primary identifier ("HV<epoch_millis><suffix>" or a server-assigned id)
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// Legacy alternate identifier; some records only carry their id here
    #[serde(
        rename = "bookingid",
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub legacy_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    /// Key into the activity catalog (e.g. "general-1")
    #[serde(deserialize_with = "lenient_string")]
    pub activity: String,
    /// Display label captured at submission time
    #[serde(deserialize_with = "lenient_string")]
    pub activity_name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub kids: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub adults: u32,
    /// ISO 8601 date (YYYY-MM-DD)
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    /// Slot time (HH:MM, 24-hour)
    #[serde(deserialize_with = "lenient_string")]
    pub time: String,
    /// Total computed at submission time, never recomputed
    #[serde(deserialize_with = "lenient_u32")]
    pub total: u32,
    #[serde(deserialize_with = "lenient_string")]
    pub notes: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub grip_socks: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub waiver: bool,
    /// A blank or unrecognised status reads as pending
    #[serde(deserialize_with = "lenient_status")]
    pub status: BookingStatus,
    #[serde(deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_timestamp", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// True while the record exists only in the local fallback store
    #[serde(deserialize_with = "lenient_bool")]
    pub is_local: bool,
}

impl Booking {
    /// Generate a client-side booking id from a timestamp and a random suffix
    pub fn generate_id(epoch_millis: i64, suffix: u32) -> String {
        format!("HV{}{}", epoch_millis, suffix)
    }

    /// The identifier to show and to address this record by
    pub fn primary_id(&self) -> &str {
        if !self.id.is_empty() {
            &self.id
        } else {
            self.legacy_id.as_deref().unwrap_or("")
        }
    }

    /// Dual-key match against both the primary and the legacy id field
    pub fn matches_id(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        self.id == id || self.legacy_id.as_deref() == Some(id)
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

// Spreadsheet cells come back as strings, numbers or null depending on how
// they were typed; blank cells read as the field default.

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(D::Error::custom(format!("expected a text value, found {}", other))),
    }
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_string(deserializer)?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {}", n))),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(0),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| D::Error::custom(format!("expected a whole number, found '{}'", s))),
        Some(other) => Err(D::Error::custom(format!("expected a whole number, found {}", other))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1")
        }
        Some(serde_json::Value::Number(n)) => n.as_i64().is_some_and(|v| v != 0),
        _ => false,
    })
}

fn lenient_status<'de, D>(deserializer: D) -> Result<BookingStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer)?;
    Ok(raw.parse().unwrap_or_default())
}

/// Partial update applied by the admin console's edit form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub activity: Option<String>,
    pub activity_name: Option<String>,
    pub kids: Option<u32>,
    pub adults: Option<u32>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

impl BookingPatch {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Merge the present fields into `booking` and stamp `updatedAt`
    pub fn apply(&self, booking: &mut Booking, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            booking.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            booking.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            booking.email = email.clone();
        }
        if let Some(activity) = &self.activity {
            booking.activity = activity.clone();
        }
        if let Some(activity_name) = &self.activity_name {
            booking.activity_name = activity_name.clone();
        }
        if let Some(kids) = self.kids {
            booking.kids = kids;
        }
        if let Some(adults) = self.adults {
            booking.adults = adults;
        }
        if let Some(date) = &self.date {
            booking.date = date.clone();
        }
        if let Some(time) = &self.time {
            booking.time = time.clone();
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(notes) = &self.notes {
            booking.notes = notes.clone();
        }
        booking.updated_at = Some(now);
    }
}

/// Filters used by the admin console.
///
/// The remote service understands `date`, `status` and `search` only;
/// `activity` is always applied locally.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingFilters {
    pub date: Option<String>,
    pub status: Option<BookingStatus>,
    pub search: Option<String>,
    pub activity: Option<String>,
}

impl BookingFilters {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.status.is_none() && self.search.is_none() && self.activity.is_none()
    }

    /// Date, status and search criteria (the ones the remote service applies)
    pub fn matches_record_fields(&self, booking: &Booking) -> bool {
        if let Some(date) = &self.date {
            if &booking.date != date {
                return false;
            }
        }
        if let Some(status) = self.status {
            if booking.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let term = search.to_lowercase();
            let hit = booking.name.to_lowercase().contains(&term)
                || booking.email.to_lowercase().contains(&term)
                || booking.phone.contains(search.as_str());
            if !hit {
                return false;
            }
        }
        true
    }

    pub fn matches_activity(&self, booking: &Booking) -> bool {
        match &self.activity {
            Some(activity) => &booking.activity == activity,
            None => true,
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        self.matches_record_fields(booking) && self.matches_activity(booking)
    }
}

/// Which store answered a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingSource {
    Remote,
    Local,
}

/// How an activity is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActivityPricing {
    /// Charged per kid and per adult
    #[serde(rename_all = "camelCase")]
    PerPerson { kid_price: u32, adult_price: u32 },
    /// Party package charged once per booking regardless of headcount
    #[serde(rename_all = "camelCase")]
    FlatRate { package_price: u32 },
}

/// An entry of the activity catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub key: String,
    pub name: String,
    pub duration: String,
    pub pricing: ActivityPricing,
}

/// Price breakdown shown live in the booking widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub kids_total: u32,
    pub adults_total: u32,
    /// Mandatory per-person add-on (grip socks)
    pub accessory_total: u32,
    pub grand_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub activity: String,
    #[serde(default)]
    pub kids: u32,
    #[serde(default)]
    pub adults: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub activity: String,
    /// None when the activity key is unknown; submission must be blocked
    pub activity_name: Option<String>,
    pub breakdown: PriceBreakdown,
}

/// A bookable time of day with its displayed capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// HH:MM, 24-hour
    pub time: String,
    /// e.g. "1:00 PM"
    pub display_time: String,
    pub capacity_total: u32,
    /// Placeholder figure, not backed by real reservations
    pub capacity_available: u32,
    pub is_available: bool,
}

/// Slots offered for a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotAvailability {
    #[serde(rename_all = "camelCase")]
    Open {
        date: String,
        is_weekend: bool,
        slots: Vec<TimeSlot>,
    },
    /// The date lies beyond the booking horizon
    #[serde(rename_all = "camelCase")]
    TooFar { date: String, max_days: i64 },
}

impl SlotAvailability {
    pub fn slots(&self) -> &[TimeSlot] {
        match self {
            SlotAvailability::Open { slots, .. } => slots,
            SlotAvailability::TooFar { .. } => &[],
        }
    }

    pub fn is_too_far(&self) -> bool {
        matches!(self, SlotAvailability::TooFar { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub date: String,
}

/// Request submitted by the visitor-facing booking form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub activity: String,
    pub kids: u32,
    pub adults: u32,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    /// Consent to purchase the mandatory grip socks
    pub grip_socks: bool,
    /// Consent to the waiver terms
    pub waiver: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub booking_id: String,
    pub booking: Booking,
    pub stored_remotely: bool,
    pub success_message: String,
}

/// Query parameters of the admin booking list; blank values mean "no filter"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingListRequest {
    pub date: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub activity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    pub source: BookingSource,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

/// Response to status changes, edits and deletes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingMutationResponse {
    pub booking_id: String,
    pub booking: Option<Booking>,
    pub success_message: String,
}

/// Dashboard counters over the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub completed: usize,
}

/// Request to write the export file on the machine running the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportToPathRequest {
    /// Target directory; the Documents folder when absent
    pub custom_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportToPathResponse {
    pub file_path: String,
    pub booking_count: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub success: bool,
    pub message: String,
    pub remaining_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    pub signed_in: bool,
    pub email: Option<String>,
    pub remembered_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_booking_id() {
        let id = Booking::generate_id(1702516122000, 417);
        assert_eq!(id, "HV1702516122000417");
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert_eq!(" Confirmed ".parse::<BookingStatus>().unwrap(), BookingStatus::Confirmed);
        assert!("archived".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_matches_id_checks_both_fields() {
        let booking = Booking {
            id: "srv-42".to_string(),
            legacy_id: Some("HV1".to_string()),
            ..Booking::default()
        };
        assert!(booking.matches_id("srv-42"));
        assert!(booking.matches_id("HV1"));
        assert!(!booking.matches_id("HV2"));
        assert!(!booking.matches_id(""));
    }

    #[test]
    fn test_primary_id_falls_back_to_legacy_field() {
        let booking = Booking {
            legacy_id: Some("HV7".to_string()),
            ..Booking::default()
        };
        assert_eq!(booking.primary_id(), "HV7");
    }

    #[test]
    fn test_deserialize_spreadsheet_row() {
        let json = r#"{
            "bookingid": "HV99",
            "name": "Thandi",
            "kids": 2,
            "status": "confirmed",
            "createdAt": "not a date",
            "updatedAt": 1702516122000
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, "");
        assert_eq!(booking.primary_id(), "HV99");
        assert_eq!(booking.kids, 2);
        assert_eq!(booking.adults, 0);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert!(booking.created_at.is_none());
        assert_eq!(booking.updated_at.unwrap().timestamp_millis(), 1702516122000);
        assert!(!booking.is_local);
    }

    #[test]
    fn test_blank_status_reads_as_pending() {
        let booking: Booking =
            serde_json::from_str(r#"{"bookingid":"HV9","name":"Sipho","kids":2,"status":""}"#).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.kids, 2);

        let booking: Booking = serde_json::from_str(r#"{"id":"HV10","status":null}"#).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);

        let booking: Booking = serde_json::from_str(r#"{"id":"HV11","status":"On hold"}"#).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);

        let booking: Booking = serde_json::from_str(r#"{"id":"HV12","status":"Confirmed"}"#).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_spreadsheet_row_with_blank_cells() {
        let json = r#"{
            "bookingid": 4417,
            "name": "Sipho",
            "kids": "3",
            "adults": "",
            "total": null,
            "time": null,
            "notes": "",
            "gripSocks": "TRUE",
            "waiver": "",
            "isLocal": null
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.legacy_id.as_deref(), Some("4417"));
        assert_eq!(booking.kids, 3);
        assert_eq!(booking.adults, 0);
        assert_eq!(booking.total, 0);
        assert_eq!(booking.time, "");
        assert_eq!(booking.notes, "");
        assert!(booking.grip_socks);
        assert!(!booking.waiver);
        assert!(!booking.is_local);
    }

    #[test]
    fn test_garbage_counts_still_reject_the_row() {
        assert!(serde_json::from_str::<Booking>(r#"{"id":"HV1","kids":"lots"}"#).is_err());
        assert!(serde_json::from_str::<Booking>(r#"{"id":"HV1","adults":-2}"#).is_err());
        assert!(serde_json::from_str::<Booking>(r#"{"id":["HV1"]}"#).is_err());
    }

    #[test]
    fn test_serialize_uses_camel_case_names() {
        let booking = Booking {
            id: "HV1".to_string(),
            activity_name: "Toddler 1hr".to_string(),
            is_local: true,
            ..Booking::default()
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["activityName"], "Toddler 1hr");
        assert_eq!(value["isLocal"], true);
        assert_eq!(value["status"], "pending");
        assert!(value.get("bookingid").is_none());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut booking = Booking {
            name: "Old".to_string(),
            phone: "0821234567".to_string(),
            kids: 1,
            ..Booking::default()
        };
        let now = Utc::now();
        let patch = BookingPatch {
            name: Some("New".to_string()),
            kids: Some(3),
            ..BookingPatch::default()
        };
        patch.apply(&mut booking, now);
        assert_eq!(booking.name, "New");
        assert_eq!(booking.kids, 3);
        assert_eq!(booking.phone, "0821234567");
        assert_eq!(booking.updated_at, Some(now));
    }

    #[test]
    fn test_filters_search_name_email_and_phone() {
        let booking = Booking {
            name: "Sipho Dlamini".to_string(),
            email: "sipho@example.com".to_string(),
            phone: "082 555 0101".to_string(),
            activity: "general-1".to_string(),
            date: "2026-10-24".to_string(),
            ..Booking::default()
        };
        let by_name = BookingFilters { search: Some("DLAMINI".to_string()), ..Default::default() };
        let by_phone = BookingFilters { search: Some("555".to_string()), ..Default::default() };
        let by_activity = BookingFilters { activity: Some("toddler-1".to_string()), ..Default::default() };
        let by_date = BookingFilters { date: Some("2026-10-24".to_string()), ..Default::default() };
        assert!(by_name.matches(&booking));
        assert!(by_phone.matches(&booking));
        assert!(!by_activity.matches(&booking));
        assert!(by_activity.matches_record_fields(&booking));
        assert!(by_date.matches(&booking));
    }
}
