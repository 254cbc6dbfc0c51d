use serde::de::{self, Deserializer, Visitor};
use std::fmt;
use steamid_ng::SteamID;

/// Flags are sent as `0`/`1` by most endpoints and as booleans by some.
pub fn from_int_to_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or an integer flag")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value == 1)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value == 1)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Steam IDs arrive as strings, occasionally as numbers.
pub fn option_steamid<'de, D>(deserializer: D) -> Result<Option<SteamID>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SteamIDVisitor;

    impl<'de> Visitor<'de> for SteamIDVisitor {
        type Value = Option<SteamID>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a 64-bit Steam ID as a string or number")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(SteamID::from(value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse::<u64>()
                .map(|steamid| Some(SteamID::from(steamid)))
                .map_err(de::Error::custom)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(SteamIDVisitor)
}

/// Some error fields are codes and some are messages. Both are kept as text.
pub fn option_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "option_steamid")]
        steamid: Option<SteamID>,
        #[serde(default, deserialize_with = "from_int_to_bool")]
        offers: bool,
        #[serde(default, deserialize_with = "option_number_or_string")]
        error: Option<String>,
    }

    #[test]
    fn parses_steamid_string() {
        let listing: Listing = serde_json::from_str(r#"{"steamid":"76561198080179568"}"#).unwrap();

        assert_eq!(listing.steamid.map(u64::from), Some(76561198080179568));
    }

    #[test]
    fn parses_int_and_bool_flags() {
        let listing: Listing = serde_json::from_str(r#"{"offers":1}"#).unwrap();

        assert!(listing.offers);

        let listing: Listing = serde_json::from_str(r#"{"offers":false}"#).unwrap();

        assert!(!listing.offers);
    }

    #[test]
    fn keeps_error_codes_as_text() {
        let listing: Listing = serde_json::from_str(r#"{"error":6}"#).unwrap();

        assert_eq!(listing.error.as_deref(), Some("6"));

        let listing: Listing = serde_json::from_str(r#"{"error":"Item is not tradable"}"#).unwrap();

        assert_eq!(listing.error.as_deref(), Some("Item is not tradable"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let listing: Listing = serde_json::from_str("{}").unwrap();

        assert!(listing.steamid.is_none());
        assert!(!listing.offers);
        assert!(listing.error.is_none());
    }
}
