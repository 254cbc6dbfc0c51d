use super::CreatableListing;
use crate::enums::{ListingIntent, SearchIntent};
use crate::response::{
    SearchResponse,
    GetMyListingsResponse,
    GetListingResponse,
    DeleteListingResponse,
    GetUserLimitsResponse,
    CreateListingResponse,
    DeleteAllListingsResponse,
    GetUserListingsResponse,
    GetListingsResponse,
    CreateListingsResponse,
    DeleteListingsResponse,
};
use crate::types::{AppId, CallResult, Callback, ListingId, Sku};
use std::fmt;
use steamid_ng::SteamID;

pub(crate) const DEFAULT_SEARCH_ITEM: &str = "Team Captain";
pub(crate) const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;
pub(crate) const DEFAULT_SNAPSHOT_SKU: &str = "The Team Captain";
pub(crate) const DEFAULT_USER_LISTINGS_LIMIT: u32 = 100;

/// Implements the callback setter and `Debug` for a parameter structure. The callback itself
/// is shown only as present or absent.
macro_rules! impl_params {
    ($params:ident => $response:ty { $($field:ident),* }) => {
        impl $params {
            /// Delivers the outcome of the request to `callback` instead of the returned
            /// [`Call`](crate::Call).
            pub fn callback<F>(mut self, callback: F) -> Self
            where
                F: FnOnce(CallResult<$response>) + Send + 'static,
            {
                self.callback = Some(Box::new(callback));
                self
            }
        }

        impl fmt::Debug for $params {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($params))
                    $(.field(stringify!($field), &self.$field))*
                    .field("callback", &self.callback.is_some())
                    .finish()
            }
        }
    };
}

/// Parameters for [`Classifieds::search`](crate::Classifieds::search).
#[derive(Default)]
pub struct SearchParams {
    /// Filter listings by intent. Defaults to [`SearchIntent::Dual`].
    pub intent: Option<SearchIntent>,
    /// The page size used to paginate. Defaults to 10.
    pub page_size: Option<u32>,
    /// Whether listings are folded. Defaults to `true`.
    pub fold: Option<bool>,
    /// The item name to search for. Defaults to "Team Captain".
    pub item: Option<String>,
    /// Only show listings created by this user.
    pub steamid: Option<SteamID>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<SearchResponse>>,
}

impl_params!(SearchParams => SearchResponse { intent, page_size, fold, item, steamid });

/// Parameters for [`Classifieds::get_my_listings`](crate::Classifieds::get_my_listings).
#[derive(Default)]
pub struct GetMyListingsParams {
    /// Filter listings by intent. Listings of both intents are returned when omitted.
    pub intent: Option<ListingIntent>,
    /// Whether to include inactive listings. Defaults to `true`.
    pub inactive: Option<bool>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<GetMyListingsResponse>>,
}

impl_params!(GetMyListingsParams => GetMyListingsResponse { intent, inactive });

/// Parameters for [`Classifieds::get_listing`](crate::Classifieds::get_listing).
#[derive(Default)]
pub struct GetListingParams {
    /// The listing ID. Required.
    pub id: Option<ListingId>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<GetListingResponse>>,
}

impl_params!(GetListingParams => GetListingResponse { id });

impl GetListingParams {
    /// Parameters for the listing with `id`.
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self {
            id: Some(id.into()),
            callback: None,
        }
    }
}

/// Parameters for [`Classifieds::delete_listing`](crate::Classifieds::delete_listing).
#[derive(Default)]
pub struct DeleteListingParams {
    /// The listing ID. Required.
    pub id: Option<ListingId>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<DeleteListingResponse>>,
}

impl_params!(DeleteListingParams => DeleteListingResponse { id });

impl DeleteListingParams {
    /// Parameters for deleting the listing with `id`.
    pub fn new(id: impl Into<ListingId>) -> Self {
        Self {
            id: Some(id.into()),
            callback: None,
        }
    }
}

/// Parameters for [`Classifieds::get_user_limits`](crate::Classifieds::get_user_limits).
#[derive(Default)]
pub struct GetUserLimitsParams {
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<GetUserLimitsResponse>>,
}

impl_params!(GetUserLimitsParams => GetUserLimitsResponse {});

/// Parameters for [`Classifieds::create_listing`](crate::Classifieds::create_listing).
#[derive(Default)]
pub struct CreateListingParams {
    /// The listing to create. Required.
    pub listing: Option<CreatableListing>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<CreateListingResponse>>,
}

impl_params!(CreateListingParams => CreateListingResponse { listing });

impl CreateListingParams {
    /// Parameters for creating `listing`.
    pub fn new(listing: CreatableListing) -> Self {
        Self {
            listing: Some(listing),
            callback: None,
        }
    }
}

/// Parameters for [`Classifieds::delete_all_listings`](crate::Classifieds::delete_all_listings).
#[derive(Default)]
pub struct DeleteAllListingsParams {
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<DeleteAllListingsResponse>>,
}

impl_params!(DeleteAllListingsParams => DeleteAllListingsResponse {});

/// Parameters for [`Classifieds::get_user_listings`](crate::Classifieds::get_user_listings).
#[derive(Default)]
pub struct GetUserListingsParams {
    /// The offset at which to return listings. Defaults to 0.
    pub skip: Option<u32>,
    /// The maximum number of listings to return. Defaults to 100.
    pub limit: Option<u32>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<GetUserListingsResponse>>,
}

impl_params!(GetUserListingsParams => GetUserListingsResponse { skip, limit });

/// Parameters for [`Classifieds::get_listings`](crate::Classifieds::get_listings).
#[derive(Default)]
pub struct GetListingsParams {
    /// The app ID of the item. Defaults to 440 (Team Fortress 2).
    pub appid: Option<AppId>,
    /// The item as it is named on backpack.tf listings. Defaults to "The Team Captain".
    pub sku: Option<Sku>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<GetListingsResponse>>,
}

impl_params!(GetListingsParams => GetListingsResponse { appid, sku });

impl GetListingsParams {
    /// Parameters for a snapshot of `sku` on Team Fortress 2.
    pub fn new(sku: impl Into<Sku>) -> Self {
        Self {
            appid: None,
            sku: Some(sku.into()),
            callback: None,
        }
    }
}

/// Parameters for [`Classifieds::create_listings`](crate::Classifieds::create_listings).
#[derive(Default)]
pub struct CreateListingsParams {
    /// The listings to create. Must not be empty.
    pub listings: Vec<CreatableListing>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<CreateListingsResponse>>,
}

impl_params!(CreateListingsParams => CreateListingsResponse { listings });

impl CreateListingsParams {
    /// Parameters for creating `listings` in one batch.
    pub fn new(listings: Vec<CreatableListing>) -> Self {
        Self {
            listings,
            callback: None,
        }
    }
}

/// Parameters for [`Classifieds::delete_listings`](crate::Classifieds::delete_listings).
#[derive(Default)]
pub struct DeleteListingsParams {
    /// The listing IDs to delete. Must not be empty.
    pub ids: Vec<ListingId>,
    /// Receives the outcome in place of the returned call. See [`Call`](crate::Call).
    pub callback: Option<Callback<DeleteListingsResponse>>,
}

impl_params!(DeleteListingsParams => DeleteListingsResponse { ids });

impl DeleteListingsParams {
    /// Parameters for deleting the listings with `ids` in one batch.
    pub fn new<T>(ids: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<ListingId>,
    {
        Self {
            ids: ids.into_iter().map(|id| id.into()).collect(),
            callback: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_callback() {
        let params = GetListingParams::new("440_123").callback(|_| {});
        let debug = format!("{params:?}");

        assert_eq!(debug, r#"GetListingParams { id: Some("440_123"), callback: true }"#);
    }

    #[test]
    fn collects_listing_ids() {
        let params = DeleteListingsParams::new(["440_1", "440_2"]);

        assert_eq!(params.ids, vec![String::from("440_1"), String::from("440_2")]);
        assert!(params.callback.is_none());
    }
}
