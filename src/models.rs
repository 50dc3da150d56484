// Offer records supplied by the trip builder: tickets, hotels, VIP packages and transport.
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Currency assumed for hotels that carry no price range
pub const DEFAULT_HOTEL_CURRENCY: &str = "USD";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TripInputError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("At least one traveler is required")]
    NoTravelers,

    #[error("At least one ticket option is required")]
    NoTickets,

    #[error("At least one hotel option is required")]
    NoHotels,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketType {
    Standard,
    Vip,
    // Tags the trip builder does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub currency: String,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Ticket {
    pub fn new(id: u64, name: &str, ticket_type: TicketType, price: f64, currency: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            ticket_type,
            currency: currency.to_string(),
            price,
            available: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub name: String,
    // Price for one night
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u32>,
}

impl RoomType {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            price,
            description: None,
            bed_type: None,
            occupancy: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceType {
    PerNight,
    PerWeek,
    PerMonth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_price: f64,
    pub max_price: f64,
    pub currency: String,
    pub rate_type: PriceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub country: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    // 0 to 5 in half-point steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<f64>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceRange>,
}

impl Hotel {
    pub fn new(name: &str, country: &str, city: &str) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            city: city.to_string(),
            address: None,
            star_rating: None,
            room_types: Vec::new(),
            prices: None,
        }
    }

    pub fn with_star_rating(mut self, rating: f64) -> Self {
        self.star_rating = Some(rating);
        self
    }

    pub fn with_room(mut self, room: RoomType) -> Self {
        self.room_types.push(room);
        self
    }

    // Sets a per-night price range spanning the listed rooms in the given currency
    pub fn with_currency(mut self, currency: &str) -> Self {
        let (min_price, max_price) = self
            .room_types
            .iter()
            .fold((f64::MAX, 0.0_f64), |(lo, hi), room| {
                (lo.min(room.price), hi.max(room.price))
            });
        self.prices = Some(PriceRange {
            min_price: if self.room_types.is_empty() { 0.0 } else { min_price },
            max_price,
            currency: currency.to_string(),
            rate_type: PriceType::PerNight,
        });
        self
    }

    // Currency used when matching this hotel against other offers.
    // Falls back to `default` when the hotel has no price range.
    pub fn effective_currency<'a>(&'a self, default: &'a str) -> &'a str {
        self.prices
            .as_ref()
            .map_or(default, |range| range.currency.as_str())
    }

    // Whether `room` is one of this hotel's own listed room types
    pub fn lists_room(&self, room: &RoomType) -> bool {
        self.room_types
            .iter()
            .any(|r| r.name == room.name && r.price == room.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VipPackage {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub currency: String,
    #[serde(default)]
    pub inclusions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_perks: Option<String>,
}

impl VipPackage {
    pub fn new(id: u64, name: &str, price: f64, currency: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            currency: currency.to_string(),
            inclusions: Vec::new(),
            exclusive_perks: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Plane,
    Train,
    Taxi,
    Ground,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOffer {
    pub id: String,
    pub mode: TransportMode,
    pub provider: String,
    // Free text such as "Economy Plus" or "First Class"
    pub class_label: String,
    pub price: f64,
    pub currency: String,
}

impl TransportOffer {
    pub fn new(
        id: &str,
        mode: TransportMode,
        provider: &str,
        class_label: &str,
        price: f64,
        currency: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            mode,
            provider: provider.to_string(),
            class_label: class_label.to_string(),
            price,
            currency: currency.to_string(),
        }
    }
}

// Everything the user entered in the trip builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInput {
    pub event_name: String,
    pub event_city: String,
    pub concert_date: String,
    pub travelers: u32,
    #[serde(default)]
    pub days_before: u32,
    #[serde(default)]
    pub days_after: u32,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub vip_packages: Vec<VipPackage>,
    #[serde(default)]
    pub transport_offers: Vec<TransportOffer>,
}

impl Default for TripInput {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            event_city: String::new(),
            concert_date: String::new(),
            travelers: 1,
            days_before: 0,
            days_after: 0,
            tickets: Vec::new(),
            hotels: Vec::new(),
            vip_packages: Vec::new(),
            transport_offers: Vec::new(),
        }
    }
}

impl TripInput {
    pub fn from_json(json_str: &str) -> Result<Self, TripInputError> {
        serde_json::from_str(json_str).map_err(|e| TripInputError::JsonParseError(e.to_string()))
    }

    // Hotel nights covered by the trip: the concert night plus the days on either side.
    // Widened so that extreme day counts cannot overflow.
    pub fn nights(&self) -> u64 {
        u64::from(self.days_before) + u64::from(self.days_after) + 1
    }

    // Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp
    pub fn concert_date(&self) -> Result<NaiveDate, TripInputError> {
        let raw = self.concert_date.trim();
        if raw.is_empty() {
            return Err(TripInputError::MissingField("concert_date".to_string()));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
            .map_err(|_| TripInputError::InvalidDate(raw.to_string()))
    }

    // Checks the fields the trip builder requires before running a comparison.
    // Bundle generation itself never calls this and copes with empty input.
    pub fn validate(&self) -> Result<(), TripInputError> {
        if self.event_name.trim().is_empty() {
            return Err(TripInputError::MissingField("event_name".to_string()));
        }
        if self.event_city.trim().is_empty() {
            return Err(TripInputError::MissingField("event_city".to_string()));
        }
        self.concert_date()?;
        if self.travelers == 0 {
            return Err(TripInputError::NoTravelers);
        }
        if self.tickets.is_empty() {
            return Err(TripInputError::NoTickets);
        }
        if self.hotels.is_empty() {
            return Err(TripInputError::NoHotels);
        }
        Ok(())
    }
}

// Sample trip shipped with the crate
pub const SAMPLE_TRIP_PATH: &str = "samples/trip_input.json";

pub fn load_sample_trip() -> Result<TripInput, TripInputError> {
    let content = std::fs::read_to_string(SAMPLE_TRIP_PATH)
        .map_err(|e| TripInputError::JsonParseError(e.to_string()))?;
    TripInput::from_json(&content)
}
