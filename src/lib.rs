// Trip bundle comparison engine: prices ticket, hotel, VIP and transport combinations
// and finds cheaper upgrades relative to a chosen bundle.

pub mod bundle;
pub mod comparison;
pub mod engine;
pub mod generator;
pub mod models;
pub mod quality;
pub mod sorting;
pub mod travel_window;
pub mod upgrades;

// Re-export key types for convenience
pub use bundle::{Bundle, BundleError, UpgradeAlternatives};
pub use comparison::{ComparisonError, ComparisonRecord};
pub use engine::{ComparisonEngine, EngineConfig, LocalComparisonEngine};
pub use generator::BundleGenerator;
pub use models::{
    Hotel, PriceRange, PriceType, RoomType, Ticket, TicketType, TransportMode, TransportOffer,
    TripInput, TripInputError, VipPackage,
};
pub use sorting::{sort_bundles, SortOption, SortOptionError};
pub use travel_window::TravelWindow;
pub use upgrades::UpgradeDetector;

// Generates bundles with the default configuration
pub fn generate_bundles(trip: &TripInput) -> Vec<Bundle> {
    BundleGenerator::default().generate(trip)
}

// Detects upgrades with the default configuration
pub fn detect_upgrades(baseline: &Bundle, all_bundles: &[Bundle]) -> UpgradeAlternatives {
    UpgradeDetector::default().detect(baseline, all_bundles)
}
