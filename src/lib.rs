//! A client for the [backpack.tf](https://backpack.tf) classifieds API.
//!
//! ```no_run
//! use bptf_classifieds::{Classifieds, ClassifiedsOptions, request::GetUserLimitsParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let classifieds = Classifieds::new(ClassifiedsOptions {
//!     token: Some("token".into()),
//!     api_key: None,
//! });
//!
//! if let Some(result) = classifieds.get_user_limits(GetUserLimitsParams::default())?.await {
//!     println!("{:?}", result?);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod currencies;
mod error;
pub mod enums;
pub mod request;
pub mod response;
pub mod serializers;
pub mod transport;
pub mod types;

pub use api::{
    Classifieds,
    ClassifiedsBuilder,
    ClassifiedsOptions,
    DEFAULT_BASE_URL,
    USER_AGENT_STRING,
};
pub use currencies::Currencies;
pub use error::{Credential, Error, TransportError};
pub use response::Payload;
pub use types::{Call, CallResult, Callback};
pub use steamid_ng::SteamID;
