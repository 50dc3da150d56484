// Quality scores used to rank upgrade eligibility. Never used for pricing.
use crate::models::TicketType;

pub const DEFAULT_STAR_RATING: f64 = 3.0;

pub fn ticket_quality(ticket_type: TicketType) -> u8 {
    match ticket_type {
        TicketType::Vip => 2,
        TicketType::Standard => 1,
        TicketType::Unknown => 0,
    }
}

// Scores a free-text transport class label.
// Matching is case-insensitive on substrings; anything unrecognised sits in
// the baseline tier.
pub fn transport_quality(class_label: &str) -> u8 {
    let label = class_label.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| label.contains(w));

    if contains_any(&["first", "business"]) {
        3
    } else if contains_any(&["premium", "plus"]) {
        2
    } else {
        // "economy", "standard" and unknown labels
        1
    }
}

// Star rating (or `default_rating` when unrated) plus a bonus for the room tier
pub fn room_quality(room_name: &str, star_rating: Option<f64>, default_rating: f64) -> f64 {
    let name = room_name.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| name.contains(w));

    // Only a missing rating takes the default. An explicit 0.0 stays 0.0 and is
    // not treated as unrated.
    let base = star_rating.unwrap_or(default_rating);
    let bonus = if contains_any(&["suite", "deluxe", "premium"]) {
        2.0
    } else if contains_any(&["superior", "upgraded"]) {
        1.0
    } else {
        0.0
    };

    base + bonus
}
