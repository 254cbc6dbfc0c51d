//! Types for common values in classifieds requests and responses.

use crate::error::TransportError;
use crate::response::Payload;
use futures::future::BoxFuture;

/// Uniquely identifies an application on Steam. For example: 440 for Team Fortress 2.
pub type AppId = u32;
/// The ID of a classifieds listing.
pub type ListingId = String;
/// An item name or variant as shown on backpack.tf listings, e.g. "Strange Rocket Launcher".
pub type Sku = String;

/// The outcome of a request, as handed to a callback.
pub type CallResult<T> = Result<Payload<T>, TransportError>;

/// A callback which receives the outcome of a request exactly once.
pub type Callback<T> = Box<dyn FnOnce(CallResult<T>) + Send + 'static>;

/// A pending request returned by every endpoint method.
///
/// Without a callback the request is sent when the future is first polled and it resolves to
/// `Some(result)`. With a callback the request is spawned onto the current Tokio runtime
/// right away, the callback receives the result, and the future is already resolved to `None`.
/// Dropping it does not cancel the request.
pub type Call<T> = BoxFuture<'static, Option<CallResult<T>>>;

pub(crate) const TEAM_FORTRESS_2: AppId = 440;
