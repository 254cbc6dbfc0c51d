mod builder;
mod dispatch;
mod helpers;

pub use builder::{ClassifiedsBuilder, DEFAULT_BASE_URL, USER_AGENT_STRING};

use helpers::{build_url, require_credential, require_id, require_non_empty};
use crate::error::{Credential, Error};
use crate::request::{
    CreatableListing,
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
    DEFAULT_SEARCH_ITEM,
    DEFAULT_SEARCH_PAGE_SIZE,
    DEFAULT_SNAPSHOT_SKU,
    DEFAULT_USER_LISTINGS_LIMIT,
};
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
use crate::transport::Transport;
use crate::types::{Call, ListingId, TEAM_FORTRESS_2};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use url::Url;

const REDACTED: &str = "<redacted>";

/// Hides a credential in `Debug` output.
fn redacted(credential: &Option<String>) -> Option<&'static str> {
    credential.as_ref().map(|_| REDACTED)
}

/// Credentials for the classifieds API.
#[derive(Clone, Default)]
pub struct ClassifiedsOptions {
    /// The user token from <https://backpack.tf/connections>. Used by every endpoint except
    /// [`Classifieds::search`].
    pub token: Option<String>,
    /// The API key from <https://backpack.tf/developer/apikey/view>. Used by
    /// [`Classifieds::search`].
    pub api_key: Option<String>,
}

/// Client for the backpack.tf classifieds API.
///
/// Every endpoint validates its inputs before anything is sent. Invalid credentials or
/// arguments are returned as an [`Error`] immediately and no request is made. Otherwise a
/// [`Call`] is returned. Without a callback it performs the request when awaited and resolves
/// to `Some(outcome)`. If a callback was set on the parameters, the request is spawned onto the
/// current Tokio runtime, the outcome is passed to the callback and the call resolves to `None`.
/// Endpoints given a callback must be called from within a Tokio runtime.
///
/// Responses with an empty body resolve to [`Payload::Status`](crate::Payload::Status).
#[derive(Clone)]
pub struct Classifieds {
    token: Option<String>,
    api_key: Option<String>,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ClassifiedsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifiedsOptions")
            .field("token", &redacted(&self.token))
            .field("api_key", &redacted(&self.api_key))
            .finish()
    }
}

impl fmt::Debug for Classifieds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifieds")
            .field("token", &redacted(&self.token))
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .finish()
    }
}

impl Classifieds {
    /// Creates a client with the default transport.
    pub fn new(options: ClassifiedsOptions) -> Self {
        ClassifiedsBuilder::new()
            .options(options)
            .build()
    }

    /// Creates a new [`ClassifiedsBuilder`].
    pub fn builder() -> ClassifiedsBuilder {
        ClassifiedsBuilder::new()
    }

    fn token(&self) -> Result<&str, Error> {
        require_credential(self.token.as_deref(), Credential::Token)
    }

    fn api_key(&self) -> Result<&str, Error> {
        require_credential(self.api_key.as_deref(), Credential::ApiKey)
    }

    fn get_url<Q>(
        &self,
        pathname: &str,
        query: Q,
    ) -> Result<Url, Error>
    where
        Q: IntoIterator<Item = (&'static str, String)>,
    {
        build_url(&self.base_url, pathname, std::iter::empty::<&str>(), query)
    }

    fn get_listing_url<Q>(
        &self,
        id: &str,
        query: Q,
    ) -> Result<Url, Error>
    where
        Q: IntoIterator<Item = (&'static str, String)>,
    {
        build_url(&self.base_url, "/classifieds/listings", [id], query)
    }

    /// Searches classified listings by item name.
    ///
    /// Requires an API key.
    pub fn search(
        &self,
        params: SearchParams,
    ) -> Result<Call<SearchResponse>, Error> {
        let SearchParams {
            intent,
            page_size,
            fold,
            item,
            steamid,
            callback,
        } = params;
        let api_key = self.api_key()?;
        let mut query = vec![
            ("key", api_key.to_string()),
            ("intent", intent.unwrap_or_default().to_string()),
            ("page_size", page_size.unwrap_or(DEFAULT_SEARCH_PAGE_SIZE).to_string()),
            ("fold", u8::from(fold.unwrap_or(true)).to_string()),
            ("item", item.unwrap_or_else(|| DEFAULT_SEARCH_ITEM.into())),
        ];

        if let Some(steamid) = steamid {
            query.push(("steamid", u64::from(steamid).to_string()));
        }

        let url = self.get_url("/classifieds/search/v1", query)?;

        Ok(self.do_get(url, callback))
    }

    /// Gets the listings of the token's account.
    pub fn get_my_listings(
        &self,
        params: GetMyListingsParams,
    ) -> Result<Call<GetMyListingsResponse>, Error> {
        let GetMyListingsParams {
            intent,
            inactive,
            callback,
        } = params;
        let token = self.token()?;
        let mut query = Vec::with_capacity(3);

        if let Some(intent) = intent {
            query.push(("intent", u8::from(intent).to_string()));
        }

        query.push(("inactive", u8::from(inactive.unwrap_or(true)).to_string()));
        query.push(("token", token.to_string()));

        let url = self.get_url("/classifieds/listings/v1", query)?;

        Ok(self.do_get(url, callback))
    }

    /// Gets a single listing by its ID.
    pub fn get_listing(
        &self,
        params: GetListingParams,
    ) -> Result<Call<GetListingResponse>, Error> {
        let GetListingParams {
            id,
            callback,
        } = params;
        let token = self.token()?;
        let id = require_id(id.as_deref())?;
        let url = self.get_listing_url(id, [("token", token.to_string())])?;

        Ok(self.do_get(url, callback))
    }

    /// Deletes a single listing by its ID.
    pub fn delete_listing(
        &self,
        params: DeleteListingParams,
    ) -> Result<Call<DeleteListingResponse>, Error> {
        let DeleteListingParams {
            id,
            callback,
        } = params;
        let token = self.token()?;
        let id = require_id(id.as_deref())?;
        let url = self.get_listing_url(id, [("token", token.to_string())])?;

        self.do_delete::<_, Value>(url, None, callback)
    }

    /// Gets the listing limits of the token's account.
    pub fn get_user_limits(
        &self,
        params: GetUserLimitsParams,
    ) -> Result<Call<GetUserLimitsResponse>, Error> {
        let GetUserLimitsParams {
            callback,
        } = params;
        let token = self.token()?;
        let url = self.get_url("/classifieds/limits", [("token", token.to_string())])?;

        Ok(self.do_get(url, callback))
    }

    /// Creates a single listing.
    pub fn create_listing(
        &self,
        params: CreateListingParams,
    ) -> Result<Call<CreateListingResponse>, Error> {
        let CreateListingParams {
            listing,
            callback,
        } = params;
        let token = self.token()?;
        let listing = listing
            .ok_or(Error::InvalidArgument("The listing is missing."))?;
        let url = self.get_url("/classifieds/listings", [("token", token.to_string())])?;

        self.do_post(url, &listing, callback)
    }

    /// Deletes every listing of the token's account.
    pub fn delete_all_listings(
        &self,
        params: DeleteAllListingsParams,
    ) -> Result<Call<DeleteAllListingsResponse>, Error> {
        let DeleteAllListingsParams {
            callback,
        } = params;
        let token = self.token()?;
        let url = self.get_url("/classifieds/listings", [("token", token.to_string())])?;

        self.do_delete::<_, Value>(url, None, callback)
    }

    /// Gets a page of the token's account listings.
    pub fn get_user_listings(
        &self,
        params: GetUserListingsParams,
    ) -> Result<Call<GetUserListingsResponse>, Error> {
        let GetUserListingsParams {
            skip,
            limit,
            callback,
        } = params;
        let token = self.token()?;
        let url = self.get_url("/classifieds/listings/self", [
            ("skip", skip.unwrap_or(0).to_string()),
            ("limit", limit.unwrap_or(DEFAULT_USER_LISTINGS_LIMIT).to_string()),
            ("token", token.to_string()),
        ])?;

        Ok(self.do_get(url, callback))
    }

    /// Gets a snapshot of the current listings for an item.
    pub fn get_listings(
        &self,
        params: GetListingsParams,
    ) -> Result<Call<GetListingsResponse>, Error> {
        let GetListingsParams {
            appid,
            sku,
            callback,
        } = params;
        let token = self.token()?;
        let url = self.get_url("/classifieds/listings/snapshot", [
            ("sku", sku.unwrap_or_else(|| DEFAULT_SNAPSHOT_SKU.into())),
            ("appid", appid.unwrap_or(TEAM_FORTRESS_2).to_string()),
            ("token", token.to_string()),
        ])?;

        Ok(self.do_get(url, callback))
    }

    /// Creates listings in a single batch.
    pub fn create_listings(
        &self,
        params: CreateListingsParams,
    ) -> Result<Call<CreateListingsResponse>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            listings: &'a [CreatableListing],
        }

        let CreateListingsParams {
            listings,
            callback,
        } = params;
        let token = self.token()?;
        let listings = require_non_empty(&listings, "The listings must not be empty.")?;
        let url = self.get_url("/classifieds/list/v1", [("token", token.to_string())])?;

        self.do_post(url, &Body { listings }, callback)
    }

    /// Deletes listings in a single batch.
    pub fn delete_listings(
        &self,
        params: DeleteListingsParams,
    ) -> Result<Call<DeleteListingsResponse>, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            listing_ids: &'a [ListingId],
        }

        let DeleteListingsParams {
            ids,
            callback,
        } = params;
        let token = self.token()?;
        let listing_ids = require_non_empty(&ids, "The listing ids must not be empty.")?;
        let url = self.get_url("/classifieds/delete/v1", [("token", token.to_string())])?;

        self.do_delete(url, Some(&Body { listing_ids }), callback)
    }
}
