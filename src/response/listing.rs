//! Listing shapes shared between responses.

use super::deserializers::{from_int_to_bool, option_steamid};
use crate::currencies::Currencies;
use crate::enums::{ItemQuality, ListingIntent};
use crate::types::{AppId, ListingId};
use chrono::{DateTime, Utc};
use chrono::serde::{ts_seconds, ts_seconds_option};
use serde::Deserialize;
use steamid_ng::SteamID;

/// A classifieds listing as returned by the listing management and search endpoints.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ListingElement {
    /// The listing ID.
    pub id: ListingId,
    /// The owner of the listing.
    #[serde(default, deserialize_with = "option_steamid")]
    pub steamid: Option<SteamID>,
    /// The app ID of the listed item.
    #[serde(default)]
    pub appid: AppId,
    /// The price.
    #[serde(default)]
    pub currencies: Currencies,
    /// Whether the listing accepts offers.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub offers: bool,
    /// Whether the listing only accepts the listed price.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub buyout: bool,
    /// The listing description.
    #[serde(default)]
    pub details: Option<String>,
    /// When the listing was created.
    #[serde(default, with = "ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// When the listing was last bumped.
    #[serde(default, with = "ts_seconds_option")]
    pub bump: Option<DateTime<Utc>>,
    /// Whether this is a buy or sell listing.
    pub intent: ListingIntent,
    /// The listed item.
    pub item: ListingItem,
    /// Whether the listing was created by an automated trading bot.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub automatic: bool,
    /// The number of listings folded into this one.
    #[serde(default)]
    pub count: Option<u32>,
    /// Whether the listing is promoted.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub promoted: bool,
}

/// The item of a listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ListingItem {
    /// The asset ID, for sell listings.
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub original_id: Option<u64>,
    /// The item's definition index.
    #[serde(default)]
    pub defindex: u32,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub quality: Option<ItemQuality>,
    #[serde(default)]
    pub inventory: Option<u64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub origin: Option<u32>,
    #[serde(default)]
    pub attributes: Vec<ListingAttribute>,
    /// The item's name.
    #[serde(default)]
    pub name: String,
}

/// An attribute of a listed item, e.g. a paint or particle effect.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ListingAttribute {
    pub defindex: u32,
    #[serde(default)]
    pub value: Option<AttributeValue>,
    #[serde(default)]
    pub float_value: Option<f64>,
}

/// The value of an attribute. Most values are numeric, some are text.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
}

/// A listing within an item snapshot.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SnapshotListing {
    /// The owner of the listing.
    #[serde(default, deserialize_with = "option_steamid")]
    pub steamid: Option<SteamID>,
    /// Whether the listing accepts offers.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub offers: bool,
    /// Whether the listing only accepts the listed price.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub buyout: bool,
    #[serde(default)]
    pub details: Option<String>,
    /// When the listing was last updated.
    #[serde(with = "ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub intent: ListingIntent,
    /// The price converted to refined metal.
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub item: ListingItem,
    #[serde(default)]
    pub currencies: Currencies,
    #[serde(default, with = "ts_seconds_option")]
    pub bump: Option<DateTime<Utc>>,
    /// Set when the listing is managed by a trading bot.
    #[serde(default, rename = "userAgent")]
    pub user_agent: Option<UserAgent>,
}

/// The client that manages a listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserAgent {
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, rename = "lastPulse", with = "ts_seconds_option")]
    pub last_pulse: Option<DateTime<Utc>>,
}

/// A listing owned by the session user.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserListing {
    pub id: ListingId,
    #[serde(default, deserialize_with = "option_steamid")]
    pub steamid: Option<SteamID>,
    #[serde(default)]
    pub appid: AppId,
    #[serde(default)]
    pub currencies: Currencies,
    #[serde(default)]
    pub value: Option<ListingValue>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "listedAt", with = "ts_seconds_option")]
    pub listed_at: Option<DateTime<Utc>>,
    #[serde(default, rename = "bumpedAt", with = "ts_seconds_option")]
    pub bumped_at: Option<DateTime<Utc>>,
    pub intent: ListingIntent,
    #[serde(default)]
    pub count: Option<u32>,
    /// E.g. "active" or "archived".
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub item: UserListingItem,
}

/// The value of a listing in refined metal.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ListingValue {
    pub raw: f64,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub long: String,
}

/// The item of a [`UserListing`].
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct UserListingItem {
    #[serde(default)]
    pub defindex: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "marketName")]
    pub market_name: Option<String>,
}

/// Pagination details.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Cursor {
    pub skip: u32,
    pub limit: u32,
    pub total: u32,
    #[serde(default, rename = "_info")]
    pub info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_element() {
        let json = r#"{
            "id": "440_11152148507",
            "steamid": "76561198080179568",
            "appid": 440,
            "currencies": { "metal": 4.77 },
            "offers": 1,
            "buyout": 0,
            "details": "Only buying 1 Trencher's Tunic.",
            "created": 1672531200,
            "bump": 1672534800,
            "intent": 0,
            "item": {
                "defindex": 30309,
                "quality": 6,
                "attributes": [{ "defindex": 142, "float_value": 15185211 }],
                "name": "Trencher's Tunic"
            },
            "promoted": 0
        }"#;
        let listing: ListingElement = serde_json::from_str(json).unwrap();

        assert_eq!(listing.intent, ListingIntent::Buy);
        assert_eq!(listing.currencies.metal, Some(4.77));
        assert!(listing.offers);
        assert!(!listing.buyout);
        assert_eq!(listing.item.quality, Some(ItemQuality::Unique));
        assert_eq!(listing.item.attributes[0].float_value, Some(15185211.0));
        assert_eq!(listing.created.map(|time| time.timestamp()), Some(1672531200));
    }

    #[test]
    fn parses_text_attribute_value() {
        let json = r#"{ "defindex": 500, "value": "Team Spirit" }"#;
        let attribute: ListingAttribute = serde_json::from_str(json).unwrap();

        assert_eq!(attribute.value, Some(AttributeValue::Text("Team Spirit".into())));
    }
}
