use super::{redacted, Classifieds, ClassifiedsOptions};
use crate::transport::{HttpTransport, Transport};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::sync::Arc;

/// The base URL of the backpack.tf API.
pub const DEFAULT_BASE_URL: &str = "https://backpack.tf/api";
/// The user agent sent with requests by default.
pub const USER_AGENT_STRING: &str = concat!("bptf-classifieds/", env!("CARGO_PKG_VERSION"));

/// Builder for constructing a [`Classifieds`].
///
/// Credentials are not checked here. Each endpoint checks the credential it needs when it is
/// called.
#[derive(Clone)]
pub struct ClassifiedsBuilder {
    /// The user token.
    pub(crate) token: Option<String>,
    /// The API key.
    pub(crate) api_key: Option<String>,
    /// The base URL requests are made against.
    pub(crate) base_url: String,
    /// User agent for requests. Ignored when a client or transport is supplied.
    pub(crate) user_agent: String,
    /// Client to use for requests.
    pub(crate) client: Option<ClientWithMiddleware>,
    /// Transport to use for requests. Takes precedence over `client`.
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for ClassifiedsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifiedsBuilder")
            .field("token", &redacted(&self.token))
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("client", &self.client)
            .field("transport", &self.transport)
            .finish()
    }
}

impl Default for ClassifiedsBuilder {
    fn default() -> Self {
        Self {
            token: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.into(),
            user_agent: USER_AGENT_STRING.into(),
            client: None,
            transport: None,
        }
    }
}

impl ClassifiedsBuilder {
    /// Creates a new [`ClassifiedsBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both credentials from `options`.
    pub fn options(mut self, options: ClassifiedsOptions) -> Self {
        self.token = options.token;
        self.api_key = options.api_key;
        self
    }

    /// The user token, required by every endpoint except search.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The API key, required by search.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The base URL. Defaults to <https://backpack.tf/api>.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The user agent for the default client.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The client to send requests with.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    /// The transport to send requests with.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the [`Classifieds`].
    pub fn build(self) -> Classifieds {
        let transport = match (self.transport, self.client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(HttpTransport::with_client(client)),
            (None, None) => Arc::new(HttpTransport::new(&self.user_agent)),
        };

        Classifieds {
            token: self.token,
            api_key: self.api_key,
            base_url: self.base_url,
            transport,
        }
    }
}
