use super::deserializers::from_int_to_bool;
use super::listing::ListingElement;
use serde::Deserialize;

/// Response for [`Classifieds::search`](crate::Classifieds::search).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub response: SearchResponseBody,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResponseBody {
    /// A message or status describing the search.
    #[serde(default)]
    pub message: Option<String>,
    /// The number of listings matched by the query.
    #[serde(default)]
    pub total: Option<u32>,
    /// The number of listings skipped for this page.
    #[serde(default)]
    pub skip: Option<u32>,
    /// The number of listings on this page.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// Buy listings.
    #[serde(default)]
    pub buy: Option<SearchListings>,
    /// Sell listings.
    #[serde(default)]
    pub sell: Option<SearchListings>,
}

/// Listings of one intent within a search response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SearchListings {
    pub total: u32,
    #[serde(default)]
    pub listings: Vec<ListingElement>,
    /// Whether listings were folded.
    #[serde(default, deserialize_with = "from_int_to_bool")]
    pub fold: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ListingIntent;

    #[test]
    fn parses_search_response() {
        let response: SearchResponse = serde_json::from_str(include_str!("fixtures/search.json")).unwrap();
        let body = response.response;
        let sell = body.sell.unwrap();

        assert_eq!(body.total, Some(3));
        assert_eq!(body.buy.unwrap().listings.len(), 1);
        assert!(sell.fold);
        assert_eq!(sell.listings[0].intent, ListingIntent::Sell);
        assert_eq!(sell.listings[0].count, Some(4));
    }
}
