use serde::{Serialize, Deserialize};
use strum_macros::{Display, EnumString};

/// Filters classifieds search results by intent.
#[derive(Serialize, Deserialize, Display, EnumString, Default, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SearchIntent {
    /// Only buy listings.
    Buy,
    /// Only sell listings.
    Sell,
    /// Listings of both intents. This is the default.
    #[default]
    Dual,
}
