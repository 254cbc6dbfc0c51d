//! Enumerated types.

mod item_quality;
mod listing_intent;
mod search_intent;

pub use item_quality::ItemQuality;
pub use listing_intent::ListingIntent;
pub use search_intent::SearchIntent;
