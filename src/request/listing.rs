use crate::currencies::Currencies;
use crate::enums::ListingIntent;
use crate::serializers::option_bool_as_int;
use serde::Serialize;

/// A listing to be created.
///
/// Buy listings describe the wanted item with `item`. Sell listings reference the asset being
/// sold with `id`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreatableListing {
    /// Whether this is a buy or sell listing.
    pub intent: ListingIntent,
    /// The asset ID of the item being sold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The item being bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<CreatableItem>,
    /// Whether the listing accepts offers.
    #[serde(serialize_with = "option_bool_as_int", skip_serializing_if = "Option::is_none")]
    pub offers: Option<bool>,
    /// Whether the listing only accepts the listed price.
    #[serde(serialize_with = "option_bool_as_int", skip_serializing_if = "Option::is_none")]
    pub buyout: Option<bool>,
    /// Whether the listing should be promoted. Premium only.
    #[serde(serialize_with = "option_bool_as_int", skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
    /// The listing description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// The price.
    pub currencies: Currencies,
}

impl CreatableListing {
    /// A buy listing for an item.
    pub fn buy(item: CreatableItem, currencies: Currencies) -> Self {
        Self {
            intent: ListingIntent::Buy,
            id: None,
            item: Some(item),
            offers: None,
            buyout: None,
            promoted: None,
            details: None,
            currencies,
        }
    }

    /// A sell listing for an asset in your inventory.
    pub fn sell(assetid: impl Into<String>, currencies: Currencies) -> Self {
        Self {
            intent: ListingIntent::Sell,
            id: Some(assetid.into()),
            item: None,
            offers: None,
            buyout: None,
            promoted: None,
            details: None,
            currencies,
        }
    }

    /// Sets the listing description.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Describes an item for a buy listing.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreatableItem {
    /// The quality name, e.g. "Unique" or "Strange".
    pub quality: String,
    /// The market hash name of the item (appid 440).
    pub item_name: String,
    /// Whether the item is craftable. Craftable when omitted.
    #[serde(serialize_with = "option_bool_as_int", skip_serializing_if = "Option::is_none")]
    pub craftable: Option<bool>,
    /// The price index, e.g. the particle effect of an unusual.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priceindex: Option<u32>,
}

impl CreatableItem {
    /// A craftable item of `quality` named `item_name`.
    pub fn new(quality: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            quality: quality.into(),
            item_name: item_name.into(),
            craftable: None,
            priceindex: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_buy_listing() {
        let listing = CreatableListing::buy(
            CreatableItem::new("Unique", "Trencher's Tunic"),
            Currencies::new(0.0, 4.77),
        ).details("Only buying 1 Trencher's Tunic.");
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json, serde_json::json!({
            "intent": 0,
            "item": {
                "quality": "Unique",
                "item_name": "Trencher's Tunic",
            },
            "details": "Only buying 1 Trencher's Tunic.",
            "currencies": {
                "metal": 4.77,
                "keys": 0.0,
            },
        }));
    }

    #[test]
    fn serializes_sell_listing_flags() {
        let mut listing = CreatableListing::sell("11152148507", Currencies::metal(34.66));

        listing.offers = Some(true);
        listing.buyout = Some(false);

        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["intent"], 1);
        assert_eq!(json["id"], "11152148507");
        assert_eq!(json["offers"], 1);
        assert_eq!(json["buyout"], 0);
        assert!(json.get("item").is_none());
    }
}
