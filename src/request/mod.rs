//! Models for making requests.

mod listing;
mod params;

pub use listing::{CreatableListing, CreatableItem};
pub use params::{
    SearchParams,
    GetMyListingsParams,
    GetListingParams,
    DeleteListingParams,
    GetUserLimitsParams,
    CreateListingParams,
    DeleteAllListingsParams,
    GetUserListingsParams,
    GetListingsParams,
    CreateListingsParams,
    DeleteListingsParams,
};

pub(crate) use params::{
    DEFAULT_SEARCH_ITEM,
    DEFAULT_SEARCH_PAGE_SIZE,
    DEFAULT_SNAPSHOT_SKU,
    DEFAULT_USER_LISTINGS_LIMIT,
};
