use super::deserializers::option_number_or_string;
use super::listing::{Cursor, ListingElement, SnapshotListing, UserListing};
use crate::types::{AppId, Sku};
use chrono::{DateTime, Utc};
use chrono::serde::ts_seconds;
use serde::Deserialize;
use std::collections::HashMap;

/// A response carrying only a message.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response for [`Classifieds::delete_listing`](crate::Classifieds::delete_listing).
pub type DeleteListingResponse = MessageResponse;
/// Response for [`Classifieds::create_listing`](crate::Classifieds::create_listing).
pub type CreateListingResponse = MessageResponse;
/// Response for [`Classifieds::delete_all_listings`](crate::Classifieds::delete_all_listings).
pub type DeleteAllListingsResponse = MessageResponse;
/// Response for [`Classifieds::get_listing`](crate::Classifieds::get_listing).
pub type GetListingResponse = ListingElement;

/// Response for [`Classifieds::get_my_listings`](crate::Classifieds::get_my_listings).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GetMyListingsResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// The listing cap of the account.
    #[serde(default)]
    pub cap: u32,
    /// Premium promotions remaining.
    #[serde(default)]
    pub promotes_remaining: u32,
    #[serde(default)]
    pub listings: Vec<ListingElement>,
}

/// Response for [`Classifieds::get_user_listings`](crate::Classifieds::get_user_listings).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GetUserListingsResponse {
    #[serde(default)]
    pub results: Vec<UserListing>,
    #[serde(default)]
    pub cursor: Cursor,
}

/// Response for [`Classifieds::get_listings`](crate::Classifieds::get_listings).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GetListingsResponse {
    /// Up to fifteen buy and sell orders for the item.
    #[serde(default)]
    pub listings: Vec<SnapshotListing>,
    pub appid: AppId,
    pub sku: Sku,
    /// When the snapshot was taken.
    #[serde(rename = "createdAt", with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
}

/// Response for [`Classifieds::create_listings`](crate::Classifieds::create_listings).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreateListingsResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Results keyed by the name of the listed item.
    #[serde(default)]
    pub listings: HashMap<String, CreateListingResult>,
}

/// The result of creating one listing.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CreateListingResult {
    #[serde(default)]
    pub created: Option<u32>,
    #[serde(default, deserialize_with = "option_number_or_string")]
    pub error: Option<String>,
    #[serde(default)]
    pub retry: Option<u32>,
    #[serde(default)]
    pub used: Option<u32>,
    #[serde(default)]
    pub cap: Option<u32>,
}

impl CreateListingResult {
    pub fn is_created(&self) -> bool {
        self.created.unwrap_or(0) > 0 && self.error.is_none()
    }
}

/// Response for [`Classifieds::delete_listings`](crate::Classifieds::delete_listings).
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteListingsResponse {
    /// The number of listings deleted.
    #[serde(default)]
    pub deleted: u32,
    /// Listings skipped due to errors. The shape of each entry is defined by the server.
    #[serde(default)]
    pub skipped: Vec<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}
