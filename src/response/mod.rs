//! Models for responses.

mod listing;
mod listings;
mod payload;
mod search;
mod user_limits;
pub mod deserializers;

pub use payload::Payload;
pub use listing::{
    ListingElement,
    ListingItem,
    ListingAttribute,
    AttributeValue,
    SnapshotListing,
    UserAgent,
    UserListing,
    UserListingItem,
    ListingValue,
    Cursor,
};
pub use search::{SearchResponse, SearchResponseBody, SearchListings};
pub use user_limits::{GetUserLimitsResponse, UserLimits};
pub use listings::{
    MessageResponse,
    DeleteListingResponse,
    CreateListingResponse,
    DeleteAllListingsResponse,
    GetListingResponse,
    GetMyListingsResponse,
    GetUserListingsResponse,
    GetListingsResponse,
    CreateListingsResponse,
    CreateListingResult,
    DeleteListingsResponse,
};
