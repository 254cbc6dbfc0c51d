use std::fmt;
use num_enum::{TryFromPrimitive, IntoPrimitive};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_repr::Serialize_repr;
use strum_macros::{Display, EnumString};

/// The intent of a classifieds listing.
/// 
/// Serialized as `0` or `1`. Snapshot listings spell the intent out as `"buy"` or `"sell"`,
/// both forms are accepted when deserializing.
#[derive(Serialize_repr, Display, EnumString, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ListingIntent {
    /// A buy order.
    Buy = 0,
    /// A sell order.
    Sell = 1,
}

impl<'de> Deserialize<'de> for ListingIntent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListingIntentVisitor;
        
        impl<'de> Visitor<'de> for ListingIntentVisitor {
            type Value = ListingIntent;
            
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("0, 1, \"buy\" or \"sell\"")
            }
            
            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .ok()
                    .and_then(|value| ListingIntent::try_from(value).ok())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }
            
            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
                    .and_then(|value| self.visit_u64(value))
            }
            
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse::<ListingIntent>()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }
        
        deserializer.deserialize_any(ListingIntentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[derive(Debug, serde::Deserialize)]
    struct Listing {
        intent: ListingIntent,
    }
    
    #[test]
    fn deserializes_numeric_intent() {
        let listing: Listing = serde_json::from_str(r#"{"intent":1}"#).unwrap();
        
        assert_eq!(listing.intent, ListingIntent::Sell);
    }
    
    #[test]
    fn deserializes_named_intent() {
        let listing: Listing = serde_json::from_str(r#"{"intent":"buy"}"#).unwrap();
        
        assert_eq!(listing.intent, ListingIntent::Buy);
    }
    
    #[test]
    fn rejects_unknown_intent() {
        assert!(serde_json::from_str::<Listing>(r#"{"intent":2}"#).is_err());
        assert!(serde_json::from_str::<Listing>(r#"{"intent":"dual"}"#).is_err());
    }
    
    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&ListingIntent::Sell).unwrap(), "1");
        assert_eq!(ListingIntent::Buy.to_string(), "buy");
    }
}
